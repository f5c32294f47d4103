/*!
# Graph Representations

The adjacency substrate of a [`FactorGraph`](crate::factor_graph::FactorGraph) is an
undirected simple graph over the vertices `0..n` that can grow one vertex at a time.
It only knows about connectivity; payloads live in the maps of the factor graph.

The storage of a single neighborhood is abstracted by the [`Neighborhood`] trait:
- [`ArrNeighborhood`] stores neighbors in a `Vec<Node>`,
- [`SparseNeighborhood`] stores up to `N` neighbors inline in a `SmallVec<[Node; N]>`.
*/

use crate::{ops::*, *};

mod neighborhood;
mod undirected;

pub use neighborhood::*;
pub use undirected::*;
