use std::{fmt::Debug, sync::Arc};

/// Signature of functions producing default node labels from the node id
pub type NodeLabelFn<N> = dyn Fn(&str) -> Option<N> + Send + Sync;

/// Signature of functions producing default edge labels from `(v, w, name)`
pub type EdgeLabelFn<E> = dyn Fn(&str, &str, Option<&str>) -> Option<E> + Send + Sync;

/// Source of labels for nodes/edges that are created without an explicit label.
///
/// Providers are only consulted when an element is created; changing the provider never
/// alters existing labels.
pub enum LabelProvider<L, F: ?Sized> {
    /// New elements have no label
    Absent,
    /// New elements receive a clone of this value
    Constant(L),
    /// New elements receive whatever the function returns for their id
    Generator(Arc<F>),
}

/// Default label source for nodes
pub type NodeLabelProvider<N> = LabelProvider<N, NodeLabelFn<N>>;

/// Default label source for edges
pub type EdgeLabelProvider<E> = LabelProvider<E, EdgeLabelFn<E>>;

impl<L, F: ?Sized> Default for LabelProvider<L, F> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<L: Clone, F: ?Sized> Clone for LabelProvider<L, F> {
    fn clone(&self) -> Self {
        match self {
            Self::Absent => Self::Absent,
            Self::Constant(label) => Self::Constant(label.clone()),
            Self::Generator(f) => Self::Generator(Arc::clone(f)),
        }
    }
}

impl<L: Debug, F: ?Sized> Debug for LabelProvider<L, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Absent => write!(f, "Absent"),
            Self::Constant(label) => f.debug_tuple("Constant").field(label).finish(),
            Self::Generator(_) => write!(f, "Generator(..)"),
        }
    }
}

impl<N: Clone> LabelProvider<N, NodeLabelFn<N>> {
    /// Wraps a function of the node id
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&str) -> Option<N> + Send + Sync + 'static,
    {
        Self::Generator(Arc::new(f))
    }

    /// Produces the label of a freshly created node `v`
    pub fn node_label(&self, v: &str) -> Option<N> {
        match self {
            Self::Absent => None,
            Self::Constant(label) => Some(label.clone()),
            Self::Generator(f) => f(v),
        }
    }
}

impl<E: Clone> LabelProvider<E, EdgeLabelFn<E>> {
    /// Wraps a function of the edge endpoints and name
    pub fn from_edge_fn<F>(f: F) -> Self
    where
        F: Fn(&str, &str, Option<&str>) -> Option<E> + Send + Sync + 'static,
    {
        Self::Generator(Arc::new(f))
    }

    /// Produces the label of a freshly created edge `(v, w, name)`
    pub fn edge_label(&self, v: &str, w: &str, name: Option<&str>) -> Option<E> {
        match self {
            Self::Absent => None,
            Self::Constant(label) => Some(label.clone()),
            Self::Generator(f) => f(v, w, name),
        }
    }
}
