use std::{
    fmt::{Debug, Display},
    sync::Arc,
};

use crate::node::*;

/// An edge is defined by two endpoints and, in multigraphs, an optional name.
///
/// Edge descriptors are created by the graph and never change afterwards. In an undirected
/// graph the endpoints are stored in canonical order (`v <= w` by string comparison), so
/// `(a, b)` and `(b, a)` resolve to the same descriptor.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    v: NodeName,
    w: NodeName,
    name: Option<NodeName>,
}

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.name {
            Some(name) => write!(f, "({},{},{})", self.v, self.w, name),
            None => write!(f, "({},{})", self.v, self.w),
        }
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Creates an unnamed edge descriptor from `v` to `w`.
    ///
    /// The descriptor is used to address edges (e.g. in [`Graph::edge_by`](crate::repr::Graph::edge_by));
    /// it is canonicalized by the graph when needed.
    pub fn new(v: impl NodeId, w: impl NodeId) -> Self {
        Self {
            v: Arc::from(v.node_id()),
            w: Arc::from(w.node_id()),
            name: None,
        }
    }

    /// Creates a named edge descriptor from `v` to `w`
    pub fn named(v: impl NodeId, w: impl NodeId, name: impl NodeId) -> Self {
        Self {
            name: Some(Arc::from(name.node_id())),
            ..Self::new(v, w)
        }
    }

    /// Builds a descriptor from already normalized parts, ordering the endpoints if the edge
    /// is undirected
    pub(crate) fn canonical(
        directed: bool,
        v: NodeName,
        w: NodeName,
        name: Option<NodeName>,
    ) -> Self {
        if !directed && v > w {
            Self { v: w, w: v, name }
        } else {
            Self { v, w, name }
        }
    }

    /// The source endpoint (the smaller endpoint for undirected edges)
    pub fn v(&self) -> &str {
        &self.v
    }

    /// The target endpoint (the larger endpoint for undirected edges)
    pub fn w(&self) -> &str {
        &self.w
    }

    /// The name of the edge, if any
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.v == self.w
    }

    /// Returns the endpoint opposite to `u`. For a self-loop this is `u` itself.
    pub fn opposite(&self, u: &str) -> &str {
        if self.v() != u { self.v() } else { self.w() }
    }
}

/// Composite storage key of an edge: the handles of its (canonical) endpoints and its name.
///
/// The absence of a name is encoded as `None`, so no name can ever collide with the
/// default edge between the same pair.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct EdgeKey {
    pub v: Node,
    pub w: Node,
    pub name: Option<NodeName>,
}

impl EdgeKey {
    pub fn new(v: Node, w: Node, name: Option<NodeName>) -> Self {
        Self { v, w, name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_orders_undirected_endpoints() {
        let e = Edge::canonical(false, Arc::from("b"), Arc::from("a"), None);
        assert_eq!((e.v(), e.w()), ("a", "b"));

        let e = Edge::canonical(true, Arc::from("b"), Arc::from("a"), None);
        assert_eq!((e.v(), e.w()), ("b", "a"));
    }

    #[test]
    fn string_order_not_numeric_order() {
        // "10" < "9" as strings
        let e = Edge::canonical(false, Arc::from("9"), Arc::from("10"), None);
        assert_eq!((e.v(), e.w()), ("10", "9"));
    }

    #[test]
    fn opposite_endpoint() {
        let e = Edge::new("a", "b");
        assert_eq!(e.opposite("a"), "b");
        assert_eq!(e.opposite("b"), "a");
        assert_eq!(Edge::new("c", "c").opposite("c"), "c");
    }

    #[test]
    fn display() {
        assert_eq!(Edge::new(1, 2).to_string(), "(1,2)");
        assert_eq!(Edge::named("a", "b", "x").to_string(), "(a,b,x)");
        assert_eq!(format!("{:?}", Edge::new("a", "b")), "(a,b)");
    }
}
