/*!
Result types and edge cost configuration shared by the shortest path solvers.
*/

use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::*;

/// Maps an edge to its length
pub type WeightFn<'a> = Box<dyn Fn(&Edge) -> f64 + 'a>;

/// Enumerates the edges to relax when leaving a node, given its id
pub type EdgeFn<'a> = Box<dyn Fn(&str) -> Vec<Edge> + 'a>;

/// Shortest path results for every source, keyed by source id
pub type AllShortestPaths = FxHashMap<String, ShortestPaths>;

/// Distance of a node from the source and its predecessor on one shortest path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathEntry {
    /// Length of the shortest path; `f64::INFINITY` if the node is unreachable
    pub distance: f64,
    /// Previous node on the shortest path; `None` for the source and unreachable nodes
    pub predecessor: Option<String>,
}

impl PathEntry {
    pub(crate) fn unreachable() -> Self {
        Self {
            distance: f64::INFINITY,
            predecessor: None,
        }
    }

    /// Returns *true* if a path to this node exists
    pub fn is_reachable(&self) -> bool {
        self.distance < f64::INFINITY
    }
}

/// Shortest paths from one source to every node of the graph
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    source: String,
    entries: FxHashMap<String, PathEntry>,
}

impl ShortestPaths {
    pub(crate) fn new(source: String, entries: FxHashMap<String, PathEntry>) -> Self {
        Self { source, entries }
    }

    /// The id of the source node
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Number of nodes with an entry (all nodes of the graph)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry of `v`, or `None` if `v` was not part of the graph
    pub fn get(&self, v: impl NodeId) -> Option<&PathEntry> {
        self.entries.get(&*v.node_id())
    }

    /// Returns the distance of `v` from the source
    pub fn distance_to(&self, v: impl NodeId) -> Option<f64> {
        self.get(v).map(|entry| entry.distance)
    }

    /// Returns the predecessor of `v` on its shortest path
    pub fn predecessor_of(&self, v: impl NodeId) -> Option<&str> {
        self.get(v)?.predecessor.as_deref()
    }

    /// Reconstructs the shortest path from the source to `v` (both included).
    ///
    /// Returns `None` if `v` is unknown or unreachable, or if the predecessor chain does not
    /// lead back to the source (possible after negative cycles).
    pub fn path_to(&self, v: impl NodeId) -> Option<Vec<String>> {
        let target = v.node_id();
        if !self.get(&*target)?.is_reachable() {
            return None;
        }

        let mut path = vec![target.into_owned()];
        while path.last().map(String::as_str) != Some(self.source.as_str()) {
            if path.len() > self.entries.len() {
                return None;
            }
            let predecessor = self.predecessor_of(path.last()?.as_str())?;
            path.push(predecessor.to_string());
        }

        path.reverse();
        Some(path)
    }

    /// Iterates over all `(node id, entry)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PathEntry)> + '_ {
        self.entries.iter().map(|(v, entry)| (v.as_str(), entry))
    }

    /// Consumes the result, returning the underlying map
    pub fn into_entries(self) -> FxHashMap<String, PathEntry> {
        self.entries
    }
}

/// Edge enumeration and weighting used by the solvers.
///
/// Without an explicit edge function the out-edges of a node are relaxed; without an explicit
/// weight function every edge has length `1`.
#[derive(Default)]
pub(crate) struct EdgeCosts<'a> {
    pub weight: Option<WeightFn<'a>>,
    pub edges: Option<EdgeFn<'a>>,
}

impl<'a> EdgeCosts<'a> {
    pub fn weight(&self, edge: &Edge) -> f64 {
        self.weight.as_ref().map_or(1.0, |f| f(edge))
    }

    /// Calls `visit(edge, other)` for every edge leaving `u`, where `other` is the handle of
    /// the endpoint opposite to `u`
    pub fn for_each_edge<G, F>(&self, graph: &G, u: Node, mut visit: F) -> Result<()>
    where
        G: EdgeAdjacency,
        F: FnMut(&Edge, Node) -> Result<()>,
    {
        let name = graph.name_of(u);
        let resolve = |edge: &Edge| {
            let other = edge.opposite(name);
            graph
                .handle_of(other)
                .ok_or_else(|| GraphError::MissingNode(other.to_string()))
        };

        match &self.edges {
            Some(edges) => {
                for edge in edges(name) {
                    visit(&edge, resolve(&edge)?)?;
                }
            }
            None => {
                for edge in graph.out_edges_of(u) {
                    visit(edge, resolve(edge)?)?;
                }
            }
        }
        Ok(())
    }
}
