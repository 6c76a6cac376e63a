use std::{
    collections::hash_map,
    iter::Copied,
    sync::Arc,
};

use fxhash::FxHashMap;
use itertools::Itertools;

use super::*;
use crate::{edge::*, error::*, node::*, ops::*};

/// Storage of a live node
#[derive(Debug, Clone)]
pub(crate) struct NodeSlot<N> {
    pub name: NodeName,
    pub label: Option<N>,
    pub adjacency: Adjacency,
}

/// Storage of a live edge
#[derive(Debug, Clone)]
pub(crate) struct EdgeSlot<E> {
    pub edge: Edge,
    pub label: Option<E>,
}

/// A labelled graph that may be directed or undirected, a multigraph, and compound.
///
/// - `N` is the type of node labels,
/// - `E` is the type of edge labels,
/// - `L` is the type of the label attached to the graph itself.
///
/// All labels are optional: an element may exist without one.
///
/// # Node ids
/// Every method accepting a node id (or an edge name) takes any [`NodeId`] and normalizes it
/// to its canonical string form before use. Numbers use their decimal form, hence `1`, `"1"`
/// and `String::from("1")` address **the same** node.
///
/// # Example
/// ```
/// use lgraphs::prelude::*;
///
/// let mut graph: Graph<(), &str> = Graph::with_options(GraphOptions::default().directed(false));
/// graph.set_edge_label("b", "a", Some("x"));
///
/// assert!(graph.has_edge("a", "b"));
/// assert_eq!(graph.edge("a", "b"), Some(&"x"));
/// assert_eq!(graph.node_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Graph<N = (), E = (), L = ()> {
    pub(super) options: GraphOptions,
    pub(super) slots: Vec<Option<NodeSlot<N>>>,
    pub(super) index: FxHashMap<NodeName, Node>,
    pub(super) free: Vec<Node>,
    pub(super) edges: FxHashMap<EdgeKey, EdgeSlot<E>>,
    pub(super) hierarchy: Option<Hierarchy>,
    pub(super) label: Option<L>,
    pub(super) default_node_label: NodeLabelProvider<N>,
    pub(super) default_edge_label: EdgeLabelProvider<E>,
    pub(super) num_nodes: NumNodes,
    pub(super) num_edges: NumEdges,
}

impl<N, E, L> Default for Graph<N, E, L> {
    fn default() -> Self {
        Self::with_options(GraphOptions::default())
    }
}

impl<N, E, L> Graph<N, E, L> {
    /// Creates an empty directed simple graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with the given structural options
    pub fn with_options(options: GraphOptions) -> Self {
        Self {
            options,
            slots: Vec::new(),
            index: FxHashMap::default(),
            free: Vec::new(),
            edges: FxHashMap::default(),
            hierarchy: options.compound.then(Hierarchy::new),
            label: None,
            default_node_label: LabelProvider::Absent,
            default_edge_label: LabelProvider::Absent,
            num_nodes: 0,
            num_edges: 0,
        }
    }

    /// The options this graph was constructed with
    pub fn options(&self) -> GraphOptions {
        self.options
    }

    pub fn is_directed(&self) -> bool {
        self.options.directed
    }

    pub fn is_multigraph(&self) -> bool {
        self.options.multigraph
    }

    pub fn is_compound(&self) -> bool {
        self.options.compound
    }

    /// Returns the label of the graph itself
    pub fn graph_label(&self) -> Option<&L> {
        self.label.as_ref()
    }

    /// Sets the label of the graph itself
    pub fn set_graph_label(&mut self, label: L) -> &mut Self {
        self.label = Some(label);
        self
    }

    /// Number of nodes currently in the graph
    pub fn node_count(&self) -> usize {
        self.num_nodes as usize
    }

    /// Number of edges currently in the graph
    pub fn edge_count(&self) -> usize {
        self.num_edges as usize
    }

    /// Every node created without an explicit label from now on receives a clone of `label`
    pub fn set_default_node_label(&mut self, label: N) -> &mut Self {
        self.default_node_label = LabelProvider::Constant(label);
        self
    }

    /// Every node created without an explicit label from now on is labelled by `f(id)`
    pub fn set_default_node_label_with<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(&str) -> Option<N> + Send + Sync + 'static,
    {
        self.default_node_label = LabelProvider::Generator(Arc::new(f));
        self
    }

    /// Every edge created without an explicit label from now on receives a clone of `label`
    pub fn set_default_edge_label(&mut self, label: E) -> &mut Self {
        self.default_edge_label = LabelProvider::Constant(label);
        self
    }

    /// Every edge created without an explicit label from now on is labelled by
    /// `f(v, w, name)`. The endpoints are passed in the order given by the caller.
    pub fn set_default_edge_label_with<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(&str, &str, Option<&str>) -> Option<E> + Send + Sync + 'static,
    {
        self.default_edge_label = LabelProvider::Generator(Arc::new(f));
        self
    }

    pub(super) fn slot(&self, u: Node) -> &NodeSlot<N> {
        self.slots[u as usize]
            .as_ref()
            .expect("node handle must be live")
    }

    pub(super) fn slot_mut(&mut self, u: Node) -> &mut NodeSlot<N> {
        self.slots[u as usize]
            .as_mut()
            .expect("node handle must be live")
    }

    /// Stores a new node and returns its handle. The id must not be in use.
    pub(super) fn insert_node(&mut self, name: NodeName, label: Option<N>) -> Node {
        debug_assert!(!self.index.contains_key(&name));

        let u = match self.free.pop() {
            Some(u) => u,
            None => {
                self.slots.push(None);
                (self.slots.len() - 1) as Node
            }
        };

        self.slots[u as usize] = Some(NodeSlot {
            name: name.clone(),
            label,
            adjacency: Adjacency::default(),
        });
        self.index.insert(name, u);
        if let Some(hierarchy) = self.hierarchy.as_mut() {
            hierarchy.attach_root(u);
        }
        self.num_nodes += 1;
        u
    }

    /// Stores an edge between two live nodes, or overwrites the label of the edge if it
    /// already exists. Endpoints are reordered for undirected graphs.
    pub(super) fn insert_edge(&mut self, v: Node, w: Node, name: Option<NodeName>, label: Option<E>) {
        let (v, w) = if !self.is_directed() && self.name_of(v) > self.name_of(w) {
            (w, v)
        } else {
            (v, w)
        };

        let key = EdgeKey::new(v, w, name.clone());
        if let Some(slot) = self.edges.get_mut(&key) {
            slot.label = label;
            return;
        }

        let edge = Edge::canonical(
            self.is_directed(),
            self.slot(v).name.clone(),
            self.slot(w).name.clone(),
            name,
        );

        let adjacency = &mut self.slot_mut(v).adjacency;
        increment_or_init(&mut adjacency.successors, w);
        adjacency.out_edges.insert(key.clone(), edge.clone());

        let adjacency = &mut self.slot_mut(w).adjacency;
        increment_or_init(&mut adjacency.predecessors, v);
        adjacency.in_edges.insert(key.clone(), edge.clone());

        self.edges.insert(key, EdgeSlot { edge, label });
        self.num_edges += 1;
    }

    /// Removes the edge stored under `key`. Returns *true* if it existed.
    pub(super) fn remove_edge_key(&mut self, key: &EdgeKey) -> bool {
        let Some(slot) = self.edges.remove(key) else {
            return false;
        };

        let adjacency = &mut self.slot_mut(key.v).adjacency;
        decrement_or_remove(&mut adjacency.successors, key.w);
        adjacency.out_edges.remove(key);

        let adjacency = &mut self.slot_mut(key.w).adjacency;
        decrement_or_remove(&mut adjacency.predecessors, key.v);
        adjacency.in_edges.remove(key);

        self.num_edges -= 1;
        tracing::trace!(edge = %slot.edge, "removed edge");
        true
    }

    /// Resolves `(v, w, name)` to the storage key of an existing pair of nodes
    pub(super) fn edge_key(&self, v: &str, w: &str, name: Option<&str>) -> Option<EdgeKey> {
        let (v, w) = if !self.is_directed() && v > w {
            (w, v)
        } else {
            (v, w)
        };

        Some(EdgeKey::new(
            self.handle_of(v)?,
            self.handle_of(w)?,
            name.map(Arc::from),
        ))
    }

    fn edge_slot(&self, v: &str, w: &str, name: Option<&str>) -> Option<&EdgeSlot<E>> {
        self.edge_key(v, w, name)
            .and_then(|key| self.edges.get(&key))
    }

    fn validate_edge_name(&self, v: &str, w: &str, name: Option<&str>) -> Result<()> {
        match name {
            Some(name) if !self.is_multigraph() => {
                tracing::debug!(v, w, name, "rejected named edge in simple graph");
                Err(GraphError::MultiEdgeUnsupported {
                    v: v.to_string(),
                    w: w.to_string(),
                    name: name.to_string(),
                })
            }
            _ => Ok(()),
        }
    }

    /// Removes the node `v` together with all incident edges.
    ///
    /// In a compound graph the children of `v` are moved to the parent of `v`.
    /// Does nothing if `v` does not exist.
    pub fn remove_node(&mut self, v: impl NodeId) -> &mut Self {
        let Some(u) = self.handle_of(&v.node_id()) else {
            return self;
        };

        if let Some(hierarchy) = self.hierarchy.as_mut() {
            hierarchy.remove(u);
        }

        let adjacency = &self.slot(u).adjacency;
        let incident = adjacency
            .in_edges
            .keys()
            .chain(adjacency.out_edges.keys())
            .cloned()
            .collect_vec();
        for key in &incident {
            self.remove_edge_key(key);
        }

        if let Some(slot) = self.slots[u as usize].take() {
            self.index.remove(&slot.name);
            tracing::trace!(node = %slot.name, "removed node");
        }
        self.free.push(u);
        self.num_nodes -= 1;
        self
    }

    /// Removes the unnamed edge between `v` and `w`. Does nothing if it does not exist.
    pub fn remove_edge(&mut self, v: impl NodeId, w: impl NodeId) -> &mut Self {
        if let Some(key) = self.edge_key(&v.node_id(), &w.node_id(), None) {
            self.remove_edge_key(&key);
        }
        self
    }

    /// Removes the edge named `name` between `v` and `w`. Does nothing if it does not exist.
    pub fn remove_named_edge(
        &mut self,
        v: impl NodeId,
        w: impl NodeId,
        name: impl NodeId,
    ) -> &mut Self {
        if let Some(key) = self.edge_key(&v.node_id(), &w.node_id(), Some(&*name.node_id())) {
            self.remove_edge_key(&key);
        }
        self
    }

    /// Removes the edge addressed by the descriptor. Does nothing if it does not exist.
    pub fn remove_edge_by(&mut self, edge: &Edge) -> &mut Self {
        if let Some(key) = self.edge_key(edge.v(), edge.w(), edge.name()) {
            self.remove_edge_key(&key);
        }
        self
    }

    /// Returns an iterator over the ids of all nodes
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.vertices().map(|u| self.name_of(u))
    }

    /// Returns an iterator over the descriptors of all edges
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.all_edges()
    }

    pub fn has_node(&self, v: impl NodeId) -> bool {
        self.index.contains_key(&*v.node_id())
    }

    /// Returns the label of `v`, or `None` if `v` does not exist or has no label
    pub fn node(&self, v: impl NodeId) -> Option<&N> {
        let u = self.handle_of(&v.node_id())?;
        self.slot(u).label.as_ref()
    }

    /// Returns *true* if the unnamed edge between `v` and `w` exists.
    /// In undirected graphs the order of `v` and `w` is irrelevant.
    pub fn has_edge(&self, v: impl NodeId, w: impl NodeId) -> bool {
        self.edge_slot(&v.node_id(), &w.node_id(), None).is_some()
    }

    pub fn has_named_edge(&self, v: impl NodeId, w: impl NodeId, name: impl NodeId) -> bool {
        self.edge_slot(&v.node_id(), &w.node_id(), Some(&*name.node_id()))
            .is_some()
    }

    pub fn has_edge_by(&self, edge: &Edge) -> bool {
        self.edge_slot(edge.v(), edge.w(), edge.name()).is_some()
    }

    /// Returns the label of the unnamed edge between `v` and `w`
    pub fn edge(&self, v: impl NodeId, w: impl NodeId) -> Option<&E> {
        self.edge_slot(&v.node_id(), &w.node_id(), None)?
            .label
            .as_ref()
    }

    /// Returns the label of the edge named `name` between `v` and `w`
    pub fn named_edge(&self, v: impl NodeId, w: impl NodeId, name: impl NodeId) -> Option<&E> {
        self.edge_slot(&v.node_id(), &w.node_id(), Some(&*name.node_id()))?
            .label
            .as_ref()
    }

    /// Returns the label of the edge addressed by the descriptor
    pub fn edge_by(&self, edge: &Edge) -> Option<&E> {
        self.edge_slot(edge.v(), edge.w(), edge.name())?
            .label
            .as_ref()
    }

    fn collect_names(&self, nodes: impl Iterator<Item = Node>) -> Vec<&str> {
        nodes.map(|u| self.name_of(u)).collect()
    }

    /// Returns all nodes `u` with an edge `(u, v)`, or `None` if `v` does not exist
    pub fn predecessors(&self, v: impl NodeId) -> Option<Vec<&str>> {
        let u = self.handle_of(&v.node_id())?;
        Some(self.collect_names(self.predecessors_of(u)))
    }

    /// Returns all nodes `w` with an edge `(v, w)`, or `None` if `v` does not exist
    pub fn successors(&self, v: impl NodeId) -> Option<Vec<&str>> {
        let u = self.handle_of(&v.node_id())?;
        Some(self.collect_names(self.successors_of(u)))
    }

    /// Returns the union of predecessors and successors of `v` (each node once), or `None`
    /// if `v` does not exist
    pub fn neighbors(&self, v: impl NodeId) -> Option<Vec<&str>> {
        let u = self.handle_of(&v.node_id())?;
        Some(self.collect_names(self.neighbors_of(u)))
    }

    /// Returns all edges ending in `v`, or `None` if `v` does not exist
    pub fn in_edges(&self, v: impl NodeId) -> Option<Vec<&Edge>> {
        let u = self.handle_of(&v.node_id())?;
        Some(self.in_edges_of(u).collect())
    }

    /// Returns all edges from `u` to `v`, or `None` if `v` does not exist
    pub fn in_edges_from(&self, v: impl NodeId, u: impl NodeId) -> Option<Vec<&Edge>> {
        let v = self.handle_of(&v.node_id())?;
        let u = u.node_id();
        Some(self.in_edges_of(v).filter(|e| e.v() == u).collect())
    }

    /// Returns all edges starting in `v`, or `None` if `v` does not exist
    pub fn out_edges(&self, v: impl NodeId) -> Option<Vec<&Edge>> {
        let u = self.handle_of(&v.node_id())?;
        Some(self.out_edges_of(u).collect())
    }

    /// Returns all edges from `v` to `w`, or `None` if `v` does not exist
    pub fn out_edges_to(&self, v: impl NodeId, w: impl NodeId) -> Option<Vec<&Edge>> {
        let v = self.handle_of(&v.node_id())?;
        let w = w.node_id();
        Some(self.out_edges_of(v).filter(|e| e.w() == w).collect())
    }

    /// Returns all edges incident to `v` (self-loops once), or `None` if `v` does not exist
    pub fn node_edges(&self, v: impl NodeId) -> Option<Vec<&Edge>> {
        let u = self.handle_of(&v.node_id())?;
        Some(
            self.in_edges_of(u)
                .chain(self.out_edges_of(u).filter(|e| !e.is_loop()))
                .collect(),
        )
    }

    /// Returns all edges between `v` and `w` regardless of their direction, or `None` if `v`
    /// does not exist
    pub fn node_edges_with(&self, v: impl NodeId, w: impl NodeId) -> Option<Vec<&Edge>> {
        let v = self.handle_of(&v.node_id())?;
        let w = w.node_id();
        Some(
            self.in_edges_of(v)
                .filter(|e| e.v() == w)
                .chain(self.out_edges_of(v).filter(|e| e.w() == w && !e.is_loop()))
                .collect(),
        )
    }

    /// Returns all nodes without incoming edges
    pub fn sources(&self) -> impl Iterator<Item = &str> + '_ {
        self.source_vertices().map(|u| self.name_of(u))
    }

    /// Returns all nodes without outgoing edges
    pub fn sinks(&self) -> impl Iterator<Item = &str> + '_ {
        self.sink_vertices().map(|u| self.name_of(u))
    }

    /// Returns *true* if `v` exists and has no successors (directed) or no neighbors
    /// (undirected)
    pub fn is_leaf(&self, v: impl NodeId) -> bool {
        self.handle_of(&v.node_id()).is_some_and(|u| {
            if self.is_directed() {
                self.out_degree_of(u) == 0
            } else {
                self.neighbors_of(u).next().is_none()
            }
        })
    }
}

impl<N: Clone, E: Clone, L> Graph<N, E, L> {
    /// Returns the handle of `v`, creating the node with its default label if necessary
    pub(super) fn ensure_node(&mut self, v: &str) -> Node {
        if let Some(u) = self.handle_of(v) {
            return u;
        }
        let label = self.default_node_label.node_label(v);
        self.insert_node(Arc::from(v), label)
    }

    /// Creates or updates an edge. `label` is `None` if the caller did not supply one, in
    /// which case an existing label is kept and a new edge is labelled by the default provider.
    fn upsert_edge(&mut self, v: &str, w: &str, name: Option<&str>, label: Option<Option<E>>) {
        if let Some(slot) = self
            .edge_key(v, w, name)
            .and_then(|key| self.edges.get_mut(&key))
        {
            if let Some(label) = label {
                slot.label = label;
            }
            return;
        }

        let vh = self.ensure_node(v);
        let wh = self.ensure_node(w);
        let label = label.unwrap_or_else(|| self.default_edge_label.edge_label(v, w, name));
        self.insert_edge(vh, wh, name.map(Arc::from), label);
    }

    /// Creates `v` if it does not exist yet; a new node receives the default label
    pub fn set_node(&mut self, v: impl NodeId) -> &mut Self {
        self.ensure_node(&v.node_id());
        self
    }

    /// Creates or updates `v` with the given label. `None` clears an existing label.
    pub fn set_node_label(&mut self, v: impl NodeId, label: Option<N>) -> &mut Self {
        let id = v.node_id();
        match self.handle_of(&id) {
            Some(u) => self.slot_mut(u).label = label,
            None => {
                self.insert_node(Arc::from(id), label);
            }
        }
        self
    }

    /// Calls [`Graph::set_node`] for every id
    pub fn set_nodes<I>(&mut self, nodes: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: NodeId,
    {
        for v in nodes {
            self.set_node(v);
        }
        self
    }

    /// Calls [`Graph::set_node_label`] for every id with a clone of `label`
    pub fn set_nodes_label<I>(&mut self, nodes: I, label: Option<N>) -> &mut Self
    where
        I: IntoIterator,
        I::Item: NodeId,
    {
        for v in nodes {
            self.set_node_label(v, label.clone());
        }
        self
    }

    /// Creates the unnamed edge between `v` and `w` if it does not exist yet, creating
    /// missing endpoints. A new edge receives the default label.
    pub fn set_edge(&mut self, v: impl NodeId, w: impl NodeId) -> &mut Self {
        self.upsert_edge(&v.node_id(), &w.node_id(), None, None);
        self
    }

    /// Creates or updates the unnamed edge between `v` and `w` with the given label.
    /// `None` clears an existing label.
    pub fn set_edge_label(&mut self, v: impl NodeId, w: impl NodeId, label: Option<E>) -> &mut Self {
        self.upsert_edge(&v.node_id(), &w.node_id(), None, Some(label));
        self
    }

    /// Creates the edge named `name` between `v` and `w` if it does not exist yet.
    ///
    /// Fails with [`GraphError::MultiEdgeUnsupported`] if the graph is not a multigraph,
    /// leaving the graph untouched.
    pub fn set_named_edge(
        &mut self,
        v: impl NodeId,
        w: impl NodeId,
        name: impl NodeId,
    ) -> Result<&mut Self> {
        let (v, w, name) = (v.node_id(), w.node_id(), name.node_id());
        self.validate_edge_name(&v, &w, Some(&*name))?;
        self.upsert_edge(&v, &w, Some(&*name), None);
        Ok(self)
    }

    /// Creates or updates the edge named `name` between `v` and `w` with the given label.
    ///
    /// Fails with [`GraphError::MultiEdgeUnsupported`] if the graph is not a multigraph,
    /// leaving the graph untouched.
    pub fn set_named_edge_label(
        &mut self,
        v: impl NodeId,
        w: impl NodeId,
        name: impl NodeId,
        label: Option<E>,
    ) -> Result<&mut Self> {
        let (v, w, name) = (v.node_id(), w.node_id(), name.node_id());
        self.validate_edge_name(&v, &w, Some(&*name))?;
        self.upsert_edge(&v, &w, Some(&*name), Some(label));
        Ok(self)
    }

    /// Creates the edge addressed by the descriptor if it does not exist yet
    pub fn set_edge_by(&mut self, edge: &Edge) -> Result<&mut Self> {
        self.validate_edge_name(edge.v(), edge.w(), edge.name())?;
        self.upsert_edge(edge.v(), edge.w(), edge.name(), None);
        Ok(self)
    }

    /// Creates or updates the edge addressed by the descriptor with the given label
    pub fn set_edge_by_label(&mut self, edge: &Edge, label: Option<E>) -> Result<&mut Self> {
        self.validate_edge_name(edge.v(), edge.w(), edge.name())?;
        self.upsert_edge(edge.v(), edge.w(), edge.name(), Some(label));
        Ok(self)
    }

    /// Creates unnamed edges between consecutive ids of `path`
    pub fn set_path<I>(&mut self, path: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: NodeId,
    {
        let ids = path
            .into_iter()
            .map(|v| v.node_id().into_owned())
            .collect_vec();
        for (v, w) in ids.iter().tuple_windows() {
            self.upsert_edge(v, w, None, None);
        }
        self
    }

    /// Creates or updates unnamed edges between consecutive ids of `path`, labelling each
    /// with a clone of `label`
    pub fn set_path_label<I>(&mut self, path: I, label: Option<E>) -> &mut Self
    where
        I: IntoIterator,
        I::Item: NodeId,
    {
        let ids = path
            .into_iter()
            .map(|v| v.node_id().into_owned())
            .collect_vec();
        for (v, w) in ids.iter().tuple_windows() {
            self.upsert_edge(v, w, None, Some(label.clone()));
        }
        self
    }
}

impl<N, E, L> GraphNodeOrder for Graph<N, E, L> {
    fn number_of_nodes(&self) -> NumNodes {
        self.num_nodes
    }

    fn node_bound(&self) -> usize {
        self.slots.len()
    }

    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(u, slot)| slot.as_ref().map(|_| u as Node))
    }

    fn is_directed(&self) -> bool {
        self.options.directed
    }

    fn handle_of(&self, id: &str) -> Option<Node> {
        self.index.get(id).copied()
    }

    fn name_of(&self, u: Node) -> &str {
        &self.slot(u).name
    }
}

impl<N, E, L> GraphEdgeOrder for Graph<N, E, L> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<N, E, L> AdjacencyList for Graph<N, E, L> {
    type NeighborIter<'a>
        = Copied<hash_map::Keys<'a, Node, NumEdges>>
    where
        Self: 'a;

    fn successors_of(&self, u: Node) -> Self::NeighborIter<'_> {
        self.slot(u).adjacency.successors.keys().copied()
    }

    fn predecessors_of(&self, u: Node) -> Self::NeighborIter<'_> {
        self.slot(u).adjacency.predecessors.keys().copied()
    }

    fn has_successor(&self, u: Node, v: Node) -> bool {
        self.slot(u).adjacency.successors.contains_key(&v)
    }

    fn out_degree_of(&self, u: Node) -> NumNodes {
        self.slot(u).adjacency.successors.len() as NumNodes
    }

    fn in_degree_of(&self, u: Node) -> NumNodes {
        self.slot(u).adjacency.predecessors.len() as NumNodes
    }
}

/// Iterator over edge descriptors incident to a node of a [`Graph`]
pub struct IncidentEdges<'a>(hash_map::Values<'a, EdgeKey, Edge>);

impl<'a> Iterator for IncidentEdges<'a> {
    type Item = &'a Edge;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<N, E, L> EdgeAdjacency for Graph<N, E, L> {
    type EdgeIter<'a>
        = IncidentEdges<'a>
    where
        Self: 'a;

    fn out_edges_of(&self, u: Node) -> Self::EdgeIter<'_> {
        IncidentEdges(self.slot(u).adjacency.out_edges.values())
    }

    fn in_edges_of(&self, u: Node) -> Self::EdgeIter<'_> {
        IncidentEdges(self.slot(u).adjacency.in_edges.values())
    }

    fn all_edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.values().map(|slot| &slot.edge)
    }
}
