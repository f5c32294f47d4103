/*!
`fgraphs` is a data structure for **f**actor graphs: bipartite graphs of *variable* and *factor*
nodes as used by probabilistic graphical models, with user data attached to variables, factors and
edges.

# Representation

Every node gets a [`NodeId`] on creation. Identifiers are positive, increase monotonically and are
drawn from a single counter for both kinds of nodes, so a variable and a factor never share one.
Nodes and edges are never removed.

A [`FactorGraph<V, F, E, B>`](factor_graph::FactorGraph) consists of
- an undirected simple graph over the nodes (see [`repr`]) that answers all connectivity queries,
- three payload stores mapping variables to `V`, factors to `F` and (unordered) node pairs to `E`.

The container used for the payload stores is chosen by a [`MapBackend`](utils::MapBackend):
`FxHashMap` by default, alternatively `HashMap`, `BTreeMap`, the [`VecMap`](utils::VecMap) adapter,
or a container selected at runtime by name.

# Bipartiteness

The structure does not enforce that edges only connect variables to factors. Callers are expected
to maintain this themselves. The typed neighbor queries filter by node kind, and
[`FactorGraph::is_bipartite`](factor_graph::FactorGraph::is_bipartite) checks 2-colorability of
the connectivity only.

# Usage

In most use-cases, `use fgraphs::prelude::*;` suffices for your needs.

```
use fgraphs::prelude::*;

let mut graph = FactorGraph::<f64, &str, i32>::new();
let x = graph.add_variable(0.5);
let prior = graph.add_factor("prior");

assert!(graph.add_edge(x, prior, 1));
assert!(!graph.add_edge(prior, x, 2));

assert_eq!(graph.edge_data(prior, x), Ok(&1));
assert_eq!(graph.factor_neighbors(x).unwrap().collect::<Vec<_>>(), vec![prior]);
assert!(graph.factor_neighbors(prior).is_err());
```

# Thread safety

All operations are synchronous. A `FactorGraph` has no interior mutability; share it between
threads behind a single lock such as `Mutex<FactorGraph<..>>`.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod factor_graph;
pub mod node;
pub mod ops;
pub mod payload;
pub mod repr;
pub(crate) mod testing;
pub mod utils;

pub use edge::*;
pub use node::*;

/// `fgraphs::prelude` includes the factor graph, its node/edge types, errors, payloads and backends,
/// as well as the substrate operations and representations.
pub mod prelude {
    pub use super::{
        edge::*,
        error::{FactorGraphError, Missing},
        factor_graph::{Adjacency, FactorGraph, FactorGraphBuilder},
        node::*,
        ops::*,
        payload::*,
        repr::*,
        utils::{Map, VecMap, backend::*},
    };
}
