use super::*;

/// A growable, undirected simple graph.
///
/// Each edge `{u, v}` with `u != v` is stored in the neighborhoods of both endpoints,
/// a self-loop `{u, u}` is stored once and contributes one to the degree of `u`.
#[derive(Clone, Debug, Default)]
pub struct UndirectedGraph<Nbs: Neighborhood> {
    nbs: Vec<Nbs>,
    num_edges: NumEdges,
}

/// Representation using an Adjacency-Array
pub type AdjArrayUndir = UndirectedGraph<ArrNeighborhood>;

/// Representation using a sparse Adjacency-Array
pub type SparseAdjArrayUndir = UndirectedGraph<SparseNeighborhood>;

impl<Nbs: Neighborhood> UndirectedGraph<Nbs> {
    /// Creates an empty graph with room for `n` vertices before reallocating
    pub fn with_capacity(n: usize) -> Self {
        Self {
            nbs: Vec::with_capacity(n),
            num_edges: 0,
        }
    }
}

impl<Nbs: Neighborhood> GraphNodeOrder for UndirectedGraph<Nbs> {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl<Nbs: Neighborhood> GraphEdgeOrder for UndirectedGraph<Nbs> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<Nbs: Neighborhood> AdjacencyList for UndirectedGraph<Nbs> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].neighbors()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].num_of_neighbors()
    }
}

impl<Nbs: Neighborhood> AdjacencyTest for UndirectedGraph<Nbs> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        if !self.has_vertex(u) || !self.has_vertex(v) {
            return false;
        }

        // Scan the smaller neighborhood
        if self.degree_of(u) <= self.degree_of(v) {
            self.nbs[u as usize].has_neighbor(v)
        } else {
            self.nbs[v as usize].has_neighbor(u)
        }
    }
}

impl<Nbs: Neighborhood> GraphNew for UndirectedGraph<Nbs> {
    fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![Nbs::default(); n as usize],
            num_edges: 0,
        }
    }
}

impl<Nbs: Neighborhood> GraphNodeEditing for UndirectedGraph<Nbs> {
    fn add_vertex(&mut self) -> NumNodes {
        assert!(self.nbs.len() < INVALID_NODE as usize);
        self.nbs.push(Nbs::default());
        self.number_of_nodes()
    }
}

impl<Nbs: Neighborhood> GraphEdgeEditing for UndirectedGraph<Nbs> {
    fn add_edge(&mut self, u: Node, v: Node) -> bool {
        if !self.has_vertex(u) || !self.has_vertex(v) {
            return false;
        }

        if self.nbs[u as usize].try_add_neighbor(v) {
            return false;
        }

        if u != v {
            let was_present = self.nbs[v as usize].try_add_neighbor(u);
            debug_assert!(!was_present);
        }

        self.num_edges += 1;
        true
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<Edge> {
        let mut edges = (0..m_ub)
            .map(|_| Edge(rng.random_range(0..n), rng.random_range(0..n)).normalized())
            .collect_vec();
        edges.sort_unstable();
        edges.dedup();
        edges
    }

    fn check_against_matrix<Nbs: Neighborhood>() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [10 as NumNodes, 20, 50] {
            for m_ub in [n * 2, n * 5, n * 10] {
                for _ in 0..10 {
                    let edges = random_edges(rng, n, m_ub);

                    let mut adj_matrix = vec![vec![false; n as usize]; n as usize];
                    for &Edge(u, v) in &edges {
                        adj_matrix[u as usize][v as usize] = true;
                        adj_matrix[v as usize][u as usize] = true;
                    }

                    let mut graph = UndirectedGraph::<Nbs>::new(0);
                    assert_eq!(graph.add_vertices(n), n);

                    // insert in both orientations, the second insertion must be rejected
                    for &Edge(u, v) in &edges {
                        assert!(graph.add_edge(v, u));
                        assert!(!graph.add_edge(u, v));
                    }

                    assert_eq!(graph.number_of_nodes(), n);
                    assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);
                    assert_eq!(graph.ordered_edges(true).collect_vec(), edges);

                    for u in 0..n {
                        let expected = (0..n).filter(|&v| adj_matrix[u as usize][v as usize]);
                        assert_eq!(
                            graph.neighbors_of(u).sorted().collect_vec(),
                            expected.collect_vec()
                        );
                        assert_eq!(
                            graph.degree_of(u) as usize,
                            adj_matrix[u as usize].iter().filter(|&&x| x).count()
                        );

                        for v in 0..n {
                            assert_eq!(graph.has_edge(u, v), adj_matrix[u as usize][v as usize]);
                            assert_eq!(graph.has_edge(u, v), graph.has_edge(v, u));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn adj_array() {
        check_against_matrix::<ArrNeighborhood>();
    }

    #[test]
    fn sparse_adj_array() {
        check_against_matrix::<SparseNeighborhood>();
    }

    #[test]
    fn growth_and_out_of_range() {
        let mut graph = AdjArrayUndir::default();
        assert!(graph.is_empty());
        assert_eq!(graph.add_vertex(), 1);
        assert_eq!(graph.add_vertex(), 2);

        assert!(!graph.add_edge(0, 2));
        assert!(!graph.has_edge(0, 2));
        assert!(graph.is_singleton());

        assert!(graph.add_edge(0, 1));
        assert_eq!(graph.degrees().collect_vec(), vec![1, 1]);
        assert_eq!(graph.degree_distribution(), vec![(1, 2)]);
        assert_eq!(graph.max_degree(), 1);
    }

    #[test]
    fn self_loop() {
        let mut graph = AdjArrayUndir::from_edges(2, [Edge(1, 1)]);
        assert!(graph.has_self_loop(1));
        assert!(!graph.add_edge(1, 1));
        assert_eq!(graph.degree_of(1), 1);
        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.edges(true).collect_vec(), vec![Edge(1, 1)]);
    }
}
