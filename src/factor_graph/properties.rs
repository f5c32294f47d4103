use crate::algo::BipartiteTest;

use super::*;

/// Edges, degrees and global properties answered by the adjacency substrate
impl<V, F, E, B> FactorGraph<V, F, E, B>
where
    B: MapBackend,
{
    /// Returns *true* if the edge `{a, b}` exists in the substrate; the order of `a` and `b`
    /// is irrelevant. This does not require a stored edge payload.
    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.adjacency.has_edge(a.index(), b.index())
    }

    /// Returns the number of edges in the substrate
    pub fn num_edges(&self) -> NumEdges {
        self.adjacency.number_of_edges()
    }

    /// Returns an iterator over all edges, each reported once
    pub fn edges(&self) -> impl Iterator<Item = EdgeKey> + '_ {
        self.adjacency.edges(true).filter_map(|Edge(u, v)| {
            Some(EdgeKey::new(NodeId::from_index(u)?, NodeId::from_index(v)?))
        })
    }

    /// Returns an iterator over all edges with a stored payload.
    /// The order depends on the backend.
    pub fn edges_with_data(&self) -> impl Iterator<Item = (EdgeKey, &E)> + '_ {
        self.edge_data.iter().map(|(key, data)| (*key, data))
    }

    /// Returns the number of neighbors of `id`, or `0` if `id` is not a node.
    /// A self-loop counts once.
    pub fn degree(&self, id: NodeId) -> NumNodes {
        if self.has_node(id) {
            self.adjacency.degree_of(id.index())
        } else {
            0
        }
    }

    /// Same as [`FactorGraph::degree`] as the graph is undirected
    pub fn in_degree(&self, id: NodeId) -> NumNodes {
        self.degree(id)
    }

    /// Same as [`FactorGraph::degree`] as the graph is undirected
    pub fn out_degree(&self, id: NodeId) -> NumNodes {
        self.degree(id)
    }

    /// Returns the degrees of all nodes; entry `i` belongs to the `i`-th created node
    pub fn degrees(&self) -> Vec<NumNodes> {
        self.adjacency.degrees().collect()
    }

    /// Same as [`FactorGraph::degrees`] as the graph is undirected
    pub fn in_degrees(&self) -> Vec<NumNodes> {
        self.degrees()
    }

    /// Same as [`FactorGraph::degrees`] as the graph is undirected
    pub fn out_degrees(&self) -> Vec<NumNodes> {
        self.degrees()
    }

    /// Returns the maximum degree of any node (`0` for an empty graph)
    pub fn max_degree(&self) -> NumNodes {
        self.adjacency.max_degree()
    }

    /// Returns the pairs `(degree, number of nodes with this degree)` sorted by degree
    pub fn degree_distribution(&self) -> Vec<(NumNodes, NumNodes)> {
        self.adjacency.degree_distribution()
    }

    /// Returns the fraction of variable-factor pairs that are connected, i.e.
    /// `num_edges / (num_variables * num_factors)`.
    /// Returns exactly `0.0` if there are no variables or no factors.
    pub fn density(&self) -> f64 {
        let (nv, nf) = (self.num_variables(), self.num_factors());
        if nv == 0 || nf == 0 {
            return 0.0;
        }

        self.num_edges() as f64 / (nv as f64 * nf as f64)
    }

    /// Returns *true* if the substrate is 2-colorable. Runs in `O(n + m)`.
    ///
    /// # Note
    /// This check ignores which nodes are variables and which are factors. As long as every edge
    /// connects a variable to a factor, the result is *true*. The converse does not hold: an edge
    /// between two variables that are far apart in an otherwise tree-like graph still leaves the
    /// graph 2-colorable, so the result is *true* although the variable/factor split is violated.
    pub fn is_bipartite(&self) -> bool {
        self.adjacency.is_bipartite()
    }

    /// Always *false*: factor graphs are undirected
    pub const fn is_directed(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn density_edge_cases() {
        let mut graph = FactorGraph::<u8, u8, ()>::new();
        assert_eq!(graph.density(), 0.0);

        graph.add_variable(0);
        graph.add_variable(1);
        assert_eq!(graph.density(), 0.0);

        let mut graph = FactorGraph::<u8, u8, ()>::new();
        graph.add_factor(0);
        assert_eq!(graph.density(), 0.0);
    }

    #[test]
    fn complete_bipartite_density() {
        let mut graph = FactorGraph::<(), (), ()>::new();
        let vs = (0..3).map(|_| graph.add_variable(())).collect_vec();
        let fs = (0..4).map(|_| graph.add_factor(())).collect_vec();

        for (&v, &f) in vs.iter().cartesian_product(&fs) {
            assert!(graph.add_edge(v, f, ()));
        }

        assert_eq!(graph.density(), 1.0);
        assert!(graph.is_bipartite());
        assert_eq!(graph.degree_distribution(), vec![(3, 4), (4, 3)]);
        assert_eq!(graph.max_degree(), 4);
    }

    #[test]
    fn bipartite_check_ignores_kinds() {
        let mut graph = FactorGraph::<(), (), ()>::new();
        let v1 = graph.add_variable(());
        let v2 = graph.add_variable(());
        let f1 = graph.add_factor(());

        // v1 - v2 - f1 is a path: 2-colorable although v1 and v2 are both variables
        graph.add_edge(v1, v2, ());
        graph.add_edge(v2, f1, ());
        assert!(graph.is_bipartite());

        // closing the triangle makes it non-bipartite
        graph.add_edge(f1, v1, ());
        assert!(!graph.is_bipartite());
    }

    #[test]
    fn degrees_and_edges() {
        let mut graph = FactorGraph::<(), (), char>::new();
        let v = graph.add_variable(());
        let f1 = graph.add_factor(());
        let f2 = graph.add_factor(());
        let isolated = graph.add_variable(());

        graph.add_edge(f1, v, 'a');
        graph.add_edge(v, f2, 'b');

        assert_eq!(graph.degrees(), vec![2, 1, 1, 0]);
        assert_eq!(graph.in_degrees(), graph.out_degrees());
        assert_eq!(graph.degree(isolated), 0);
        assert_eq!(graph.degree(NodeId::from_count(42).unwrap()), 0);

        assert_eq!(
            graph.edges().sorted().collect_vec(),
            vec![EdgeKey::new(v, f1), EdgeKey::new(v, f2)]
        );
        assert_eq!(
            graph
                .edges_with_data()
                .map(|(key, data)| (key, *data))
                .sorted()
                .collect_vec(),
            vec![(EdgeKey::new(v, f1), 'a'), (EdgeKey::new(v, f2), 'b')]
        );

        assert!(!graph.is_directed());
        assert!(!graph.has_edge(v, NodeId::from_count(42).unwrap()));
    }
}
