/*!
# Bipartite Graph Algorithms

Testing whether a graph is bipartite (2-colorable) and computing a bipartition if one exists.

A bipartition is represented as a `[bool]` indexed by node: nodes mapped to `false` are on the
**left** side, nodes mapped to `true` on the **right** side.

Note that these checks only look at the adjacency structure. They know nothing about which
nodes a [`FactorGraph`](crate::factor_graph::FactorGraph) considers variables or factors.
*/

use super::*;

/// A trait for testing and computing bipartitions in graphs.
pub trait BipartiteTest {
    /// Tests whether the given candidate partition is a valid bipartition,
    /// i.e. every edge connects the left to the right side.
    /// Nodes beyond the end of `bipartition` are considered to be on the left side.
    ///
    /// # Examples
    /// ```
    /// use fgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(4, [Edge(0, 1), Edge(1, 2), Edge(2, 3)]);
    ///
    /// assert!(g.is_bipartition(&[false, true, false, true]));
    /// assert!(!g.is_bipartition(&[false, false, true, true]));
    /// ```
    fn is_bipartition(&self, bipartition: &[bool]) -> bool;

    /// Computes a valid bipartition of the graph, if one exists.
    /// Returns `None` if the graph is not bipartite.
    ///
    /// # Examples
    /// ```
    /// use fgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(4, [Edge(0, 1), Edge(1, 2), Edge(2, 3)]);
    ///
    /// let bip = g.compute_bipartition().unwrap();
    /// assert_eq!(bip.iter().filter(|&&x| x).count(), 2);
    /// ```
    fn compute_bipartition(&self) -> Option<Vec<bool>>;

    /// Tests whether the graph is bipartite.
    ///
    /// # Examples
    /// ```
    /// use fgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(3, [Edge(0, 1), Edge(1, 2), Edge(2, 0)]);
    ///
    /// assert!(!g.is_bipartite());
    /// ```
    fn is_bipartite(&self) -> bool {
        self.compute_bipartition().is_some()
    }
}

impl<G> BipartiteTest for G
where
    G: AdjacencyList,
{
    fn is_bipartition(&self, bipartition: &[bool]) -> bool {
        let side = |u: Node| bipartition.get(u as usize).copied().unwrap_or(false);
        self.edges(true).all(|Edge(u, v)| side(u) != side(v))
    }

    fn compute_bipartition(&self) -> Option<Vec<bool>> {
        let bipartition = propose_possibly_illegal_bipartition(self);
        self.is_bipartition(&bipartition).then_some(bipartition)
    }
}

/// Computes a candidate bipartition of the graph using BFS traversal over every component:
/// each node is put on the opposite side of its BFS parent.
///
/// - If the graph is bipartite, the returned partition is valid
/// - If the graph is not bipartite, the returned partition is invalid
fn propose_possibly_illegal_bipartition<G>(graph: &G) -> Vec<bool>
where
    G: AdjacencyList,
{
    let mut bipartition = vec![false; graph.len()];
    let mut bfs = graph.bfs(0);

    loop {
        for visit in bfs.by_ref() {
            if let Some(pred) = visit.predecessor {
                bipartition[visit.node as usize] = !bipartition[pred as usize];
            }
        }

        if !bfs.try_restart_at_unvisited() {
            break;
        }
    }

    bipartition
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn path() {
        for n in 1..10 {
            let mut graph = AdjArrayUndir::new(n);
            for u in 0..n - 1 {
                graph.add_edge(u, u + 1);
            }

            assert!(graph.is_bipartite());

            if n > 2 {
                let mut graph = graph.clone();
                graph.add_edge(1 - (n % 2), n - 1);
                assert!(!graph.is_bipartite());
            }
        }
    }

    #[test]
    fn disconnected_components() {
        let mut graph = AdjArrayUndir::from_edges(6, [Edge(0, 1), Edge(2, 3), Edge(3, 4)]);
        let bip = graph.compute_bipartition().unwrap();
        assert_ne!(bip[0], bip[1]);
        assert_ne!(bip[2], bip[3]);
        assert_ne!(bip[3], bip[4]);

        // odd cycle in the second component only
        graph.add_edge(2, 4);
        assert!(!graph.is_bipartite());
    }

    #[test]
    fn self_loop_is_not_bipartite() {
        let graph = AdjArrayUndir::from_edges(2, [Edge(0, 1), Edge(1, 1)]);
        assert!(!graph.is_bipartite());
    }

    #[test]
    fn empty_graph() {
        assert!(AdjArrayUndir::default().is_bipartite());
        assert!(AdjArrayUndir::new(3).is_bipartite());
    }
}
