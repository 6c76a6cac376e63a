/*!
# Graph Representation

This module defines the labelled [`Graph`] and its configuration [`GraphOptions`].

## Layout

- Nodes are interned: every canonical node id is mapped to a [`Node`](crate::node::Node) handle which indexes a
  slot holding the id, the optional label and the four adjacency indices of the node.
- Edges are stored in a single map from their composite key `(v, w, name)` to the immutable
  [`Edge`](crate::edge::Edge) descriptor and the optional label.
- Compound graphs additionally keep a parent/child forest (see [`Graph::set_parent`]).

## Configuration

[`GraphOptions`] is fixed at construction. It can be built with the setter pattern or
deserialized from a (partial) record:

```
use lgraphs::prelude::*;

let opts = GraphOptions::default().directed(false).multigraph(true);
let graph: Graph = Graph::with_options(opts);
assert!(!graph.is_directed());
assert!(graph.is_multigraph());
assert!(!graph.is_compound());
```
*/

use serde::{Deserialize, Serialize};

mod adjacency;
mod compound;
mod graph;
mod label;

pub use graph::*;
pub use label::*;

pub(crate) use adjacency::*;
pub(crate) use compound::Hierarchy;

/// Structural configuration of a [`Graph`]; immutable once the graph is constructed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphOptions {
    /// Edges have an orientation (default: `true`)
    pub directed: bool,
    /// Parallel edges distinguished by a name are allowed (default: `false`)
    pub multigraph: bool,
    /// Nodes may nest in a parent/child forest (default: `false`)
    pub compound: bool,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            directed: true,
            multigraph: false,
            compound: false,
        }
    }
}

impl GraphOptions {
    /// Sets whether edges are directed
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Sets whether named parallel edges are allowed
    pub fn multigraph(mut self, multigraph: bool) -> Self {
        self.multigraph = multigraph;
        self
    }

    /// Sets whether nodes can have parents
    pub fn compound(mut self, compound: bool) -> Self {
        self.compound = compound;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_defaults() {
        let opts = GraphOptions::default();
        assert!(opts.directed);
        assert!(!opts.multigraph);
        assert!(!opts.compound);
    }

    #[test]
    fn options_from_partial_record() {
        let opts: GraphOptions = serde_json::from_str(r#"{"compound": true}"#).unwrap();
        assert_eq!(opts, GraphOptions::default().compound(true));

        let opts: GraphOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, GraphOptions::default());
    }
}
