/*!
# Graph Algorithms

All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use lgraphs::algo::*;
```

Algorithms read graphs exclusively through the traits of [`ops`](crate::ops) and work on node
handles internally. Where it is natural, they are provided as **iterators** or as traits
implemented directly on every graph ([`Traversal`], [`Connectivity`]); the free functions
(e.g. [`preorder`], [`tarjan`], [`topsort`]) translate results back to node ids.

Shortest path solvers ([`Dijkstra`], [`DijkstraAll`], [`FloydWarshall`]) are configured with the
builder/setter pattern before being run on a graph.
*/

mod connectivity;
mod dijkstra;
mod floyd_warshall;
mod shortest_paths;
mod topological;
mod traversal;

use itertools::Itertools;

use crate::{error::*, prelude::*, utils::*};

pub use connectivity::*;
pub use dijkstra::*;
pub use floyd_warshall::*;
pub use shortest_paths::*;
pub use topological::*;
pub use traversal::*;
