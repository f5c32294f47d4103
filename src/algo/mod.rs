/*!
# Graph Algorithms

Algorithms that work on any adjacency substrate implementing [`AdjacencyList`].
They are implemented as traits on the graph itself, so you can simply do:
```rust
use fgraphs::{prelude::*, algo::*};

let g = AdjArrayUndir::from_edges(3, [Edge(0, 1), Edge(1, 2)]);
assert!(g.is_bipartite());
```
*/

mod bipartite;
mod traversal;

use crate::prelude::*;

pub use bipartite::*;
pub use traversal::*;
