//! Errors raised by graph mutations, algorithms and the serialization adapter.
//!
//! Every error is a caller-side precondition violation and is reported at the point of
//! detection; nothing is retried or corrected internally.

use thiserror::Error;

use crate::edge::Edge;

/// Errors that can occur while building or analyzing a graph
#[derive(Error, Debug)]
pub enum GraphError {
    /// A named edge was set on a graph that is not a multigraph
    #[error("cannot set a named edge {v} -> {w} (name {name}) when the graph is not a multigraph")]
    MultiEdgeUnsupported { v: String, w: String, name: String },

    /// `set_parent` was called on a graph constructed without `compound`
    #[error("cannot set parent in a non-compound graph")]
    NotCompound,

    /// `set_parent` would make a node its own ancestor
    #[error("setting {parent} as parent of {child} would create a cycle")]
    CompoundCycle { child: String, parent: String },

    /// A node required by an algorithm is not part of the graph
    #[error("graph does not have node: {0}")]
    MissingNode(String),

    /// Dijkstra encountered an edge with negative weight
    #[error("dijkstra does not allow negative edge weights. Bad edge: {edge} Weight: {weight}")]
    NegativeWeight { edge: Edge, weight: f64 },

    /// The graph contains a directed cycle (including self-loops)
    #[error("graph contains a cycle")]
    Cycle,

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Shorthand for results of fallible graph operations
pub type Result<T> = std::result::Result<T, GraphError>;
