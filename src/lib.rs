/*!
`lgraphs` is a graph data structure & algorithms library for **l**abelled graphs:

- nodes are identified by string ids and may carry an arbitrary label,
- edges may carry a label and, in multigraphs, a name distinguishing parallel edges,
- the graph itself may carry a label.

# Representation

A [`Graph`](crate::repr::Graph) is configured once by [`GraphOptions`](crate::repr::GraphOptions):

- **directed** (default) or **undirected**: in an undirected graph `(a, b)` and `(b, a)` address
  the same edge, whose endpoints are stored in canonical (lexicographic) order,
- **multigraph**: parallel edges between the same endpoints are told apart by their name,
- **compound**: nodes may be nested in a parent/child forest.

Internally every node id is interned to a dense `u32` handle. Algorithms run on handles through
the traits of [`ops`] and only translate back to ids at their boundary.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, errors, basic graph operation traits and the graph itself,
- [`algo`] includes traversals, connected components, topological sorting and shortest paths,
- [`io`] includes (de)serialization of graphs to and from JSON,
- [`utils`] includes the indexed priority queue used by the shortest path solvers.

In most use-cases, `use lgraphs::{prelude::*, algo::*};` suffices for your needs.

```
use lgraphs::{prelude::*, algo::*};

let mut graph: Graph<&str, f64> = Graph::new();
graph
    .set_node_label("a", Some("start"))
    .set_edge_label("a", "b", Some(2.0))
    .set_edge_label("b", "c", Some(1.0))
    .set_edge_label("a", "c", Some(5.0));

assert_eq!(graph.successors("a").unwrap().len(), 2);
assert_eq!(topsort(&graph).unwrap(), ["a", "b", "c"]);

let paths = Dijkstra::new(&graph, "a")
    .with_weight(|e| graph.edge_by(e).copied().unwrap_or(1.0))
    .run()
    .unwrap();
assert_eq!(paths.distance_to("c"), Some(3.0));

graph.set_edge("c", "a");
assert!(matches!(topsort(&graph), Err(GraphError::Cycle)));
assert_eq!(find_cycles(&graph).len(), 1);
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub mod utils;

/// `lgraphs::prelude` includes definitions for nodes, edges and errors, all basic graph operation traits as well as the graph itself.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
