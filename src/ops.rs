/*!
# Read Contract

Algorithms never touch the internals of a [`Graph`](crate::repr::Graph); they read it through the
traits of this module, which operate on [`Node`] handles:

- [`GraphNodeOrder`]: node count, handle bound, iteration, and translation between ids and handles,
- [`GraphEdgeOrder`]: edge count,
- [`AdjacencyList`]: successors, predecessors and (de-duplicated) neighbors,
- [`EdgeAdjacency`]: incoming/outgoing edge descriptors.
*/

use itertools::Either;

use crate::{edge::*, node::*};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an exclusive upper bound on all live node handles.
    /// Dense per-node state (e.g. a [`NodeBitSet`](crate::node::NodeBitSet)) can be indexed by handle if sized by this bound.
    fn node_bound(&self) -> usize;

    /// Returns an iterator over the handles of all live nodes
    fn vertices(&self) -> impl Iterator<Item = Node> + '_;

    /// Returns *true* if edges have an orientation
    fn is_directed(&self) -> bool;

    /// Resolves a canonical node id to its handle
    fn handle_of(&self, id: &str) -> Option<Node>;

    /// Returns the canonical id of a live node.
    /// ** Panics if `u` is not a live handle **
    fn name_of(&self, u: Node) -> &str;
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;
}

/// Iterator used for direction-aware navigation: successors in directed graphs,
/// all neighbors in undirected graphs
pub type Navigation<'a, G> = Either<<G as AdjacencyList>::NeighborIter<'a>, Neighbors<'a, G>>;

/// Traits pertaining getters for neighborhoods
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Iterator over adjacent node handles, each yielded once
    type NeighborIter<'a>: Iterator<Item = Node> + 'a
    where
        Self: 'a;

    /// Returns an iterator over nodes `v` with an edge `(u, v)`.
    /// ** Panics if `u` is not a live handle **
    fn successors_of(&self, u: Node) -> Self::NeighborIter<'_>;

    /// Returns an iterator over nodes `v` with an edge `(v, u)`.
    /// ** Panics if `u` is not a live handle **
    fn predecessors_of(&self, u: Node) -> Self::NeighborIter<'_>;

    /// Returns *true* if there is at least one edge `(u, v)`
    fn has_successor(&self, u: Node, v: Node) -> bool;

    /// Returns the number of distinct successors of `u`
    fn out_degree_of(&self, u: Node) -> NumNodes;

    /// Returns the number of distinct predecessors of `u`
    fn in_degree_of(&self, u: Node) -> NumNodes;

    /// Returns the union of predecessors and successors of `u`; nodes that are both are
    /// only reported once
    fn neighbors_of(&self, u: Node) -> Neighbors<'_, Self> {
        Neighbors {
            graph: self,
            node: u,
            predecessors: self.predecessors_of(u),
            successors: self.successors_of(u),
        }
    }

    /// Navigates along edge direction if the graph is directed and ignores direction otherwise
    fn navigate_from(&self, u: Node) -> Navigation<'_, Self> {
        if self.is_directed() {
            Either::Left(self.successors_of(u))
        } else {
            Either::Right(self.neighbors_of(u))
        }
    }

    /// Returns *true* if a self-loop `(u, u)` exists
    fn has_self_loop(&self, u: Node) -> bool {
        self.has_successor(u, u)
    }

    /// Returns an iterator over all nodes without incoming edges
    fn source_vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices().filter(|&u| self.in_degree_of(u) == 0)
    }

    /// Returns an iterator over all nodes without outgoing edges
    fn sink_vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices().filter(|&u| self.out_degree_of(u) == 0)
    }
}

/// Iterator over the de-duplicated union of predecessors and successors of a node.
///
/// Created by [`AdjacencyList::neighbors_of`].
pub struct Neighbors<'a, G>
where
    G: AdjacencyList + 'a,
{
    graph: &'a G,
    node: Node,
    predecessors: G::NeighborIter<'a>,
    successors: G::NeighborIter<'a>,
}

impl<'a, G> Iterator for Neighbors<'a, G>
where
    G: AdjacencyList + 'a,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(v) = self.predecessors.next() {
            return Some(v);
        }

        // successors that are also predecessors were already reported
        let (graph, node) = (self.graph, self.node);
        self.successors.find(|&v| !graph.has_successor(v, node))
    }
}

/// Getters for the edge descriptors incident to a node
pub trait EdgeAdjacency: AdjacencyList + GraphEdgeOrder {
    /// Iterator over edge descriptors
    type EdgeIter<'a>: Iterator<Item = &'a Edge> + 'a
    where
        Self: 'a;

    /// Returns all edges `(u, _)`.
    /// ** Panics if `u` is not a live handle **
    fn out_edges_of(&self, u: Node) -> Self::EdgeIter<'_>;

    /// Returns all edges `(_, u)`.
    /// ** Panics if `u` is not a live handle **
    fn in_edges_of(&self, u: Node) -> Self::EdgeIter<'_>;

    /// Returns all edges of the graph
    fn all_edges(&self) -> impl Iterator<Item = &Edge> + '_;
}
