/// Every backend has to pass the same behavioral tests of `FactorGraph`
macro_rules! test_factor_graph {
    ($env:ident, $backend:expr) => {
        #[cfg(test)]
        mod $env {
            use crate::prelude::*;
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use std::collections::HashSet;

            fn new_graph<V, F, E>() -> FactorGraph<V, F, E, impl MapBackend> {
                FactorGraph::with_backend($backend)
            }

            #[test]
            fn identifiers_partition() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);
                let mut graph = new_graph::<u32, u32, ()>();

                let mut variables = Vec::new();
                let mut factors = Vec::new();
                for i in 0..200 {
                    if rng.random_bool(0.5) {
                        variables.push(graph.add_variable(i));
                    } else {
                        factors.push(graph.add_factor(i));
                    }
                }

                let all: HashSet<_> = variables.iter().chain(&factors).copied().collect();
                assert_eq!(all.len(), 200);

                for &v in &variables {
                    assert!(graph.is_variable(v) && !graph.is_factor(v));
                }
                for &f in &factors {
                    assert!(graph.is_factor(f) && !graph.is_variable(f));
                }

                assert_eq!(graph.num_variables(), variables.len());
                assert_eq!(graph.num_factors(), factors.len());
                assert_eq!(graph.variables().sorted().collect_vec(), variables);
                assert_eq!(graph.factors().sorted().collect_vec(), factors);
            }

            #[test]
            fn example_graph() {
                let mut graph = new_graph::<f64, String, i32>();
                let v1 = graph.add_variable(1.0);
                let v2 = graph.add_variable(2.0);
                let f1 = graph.add_factor("sum".to_string());
                let f2 = graph.add_factor("product".to_string());

                assert!(graph.add_edge(v1, f1, 10));
                assert!(graph.add_edge(v2, f1, 20));
                assert!(graph.add_edge(v2, f2, 30));

                assert_eq!(graph.num_variables(), 2);
                assert_eq!(graph.num_factors(), 2);
                assert_eq!(
                    graph.variable_neighbors(f1).unwrap().sorted().collect_vec(),
                    vec![v1, v2]
                );
                assert_eq!(graph.edge_data(v1, f1), Ok(&10));
                assert_eq!(graph.edge_data(f1, v1), Ok(&10));
                assert_eq!(graph.variable_data(v2), Ok(&2.0));
                assert_eq!(graph.factor_data(f2).map(String::as_str), Ok("product"));
                assert_eq!(graph.density(), 0.75);
                assert!(graph.is_bipartite());
            }

            #[test]
            fn duplicate_edges_keep_first_payload() {
                let mut graph = new_graph::<(), (), &str>();
                let v = graph.add_variable(());
                let f = graph.add_factor(());

                assert!(graph.add_edge(v, f, "first"));
                assert!(!graph.add_edge(v, f, "second"));
                assert!(!graph.add_edge(f, v, "third"));

                assert_eq!(graph.edge_data(v, f), Ok(&"first"));
                assert_eq!(graph.num_edges(), 1);
                assert_eq!(graph.degree(v), 1);
            }

            #[test]
            fn lookups_fail_with_not_found() {
                let mut graph = new_graph::<u8, u8, u8>();
                let v = graph.add_variable(1);
                let f = graph.add_factor(2);
                let unused = NodeId::from_count(99).unwrap();

                assert_eq!(
                    graph.variable_data(unused),
                    Err(FactorGraphError::NotFound(Missing::Variable(unused)))
                );
                assert!(graph.variable_data(f).unwrap_err().is_not_found());
                assert!(graph.factor_data(v).unwrap_err().is_not_found());
                assert_eq!(
                    graph.edge_data(v, f),
                    Err(FactorGraphError::NotFound(Missing::Edge(v, f)))
                );
                assert!(graph.node_data(unused).unwrap_err().is_not_found());
                assert_eq!(graph.node_data(f).map(|d| d.kind()), Ok(NodeKind::Factor));
            }

            #[test]
            fn isolated_nodes_have_empty_neighborhoods() {
                let mut graph = new_graph::<(), (), ()>();
                let v = graph.add_variable(());
                let f = graph.add_factor(());

                assert_eq!(graph.neighbors(v).count(), 0);
                assert_eq!(graph.factor_neighbors(v).unwrap().count(), 0);
                assert_eq!(graph.variable_neighbors(f).unwrap().count(), 0);
                assert_eq!(graph.degree(v), 0);
            }

            #[test]
            fn random_edges() {
                let rng = &mut Pcg64Mcg::seed_from_u64(4);

                for (nv, nf) in [(5, 5), (10, 3), (3, 20)] {
                    let mut graph = new_graph::<(), (), (NodeId, NodeId)>();
                    let vs = (0..nv).map(|_| graph.add_variable(())).collect_vec();
                    let fs = (0..nf).map(|_| graph.add_factor(())).collect_vec();

                    let mut expected = HashSet::new();
                    for _ in 0..(nv * nf) {
                        let v = vs[rng.random_range(0..nv)];
                        let f = fs[rng.random_range(0..nf)];
                        let (a, b) = if rng.random_bool(0.5) { (v, f) } else { (f, v) };

                        assert_eq!(graph.add_edge(a, b, (a, b)), expected.insert(EdgeKey::new(v, f)));
                    }

                    assert_eq!(graph.num_edges() as usize, expected.len());
                    assert_eq!(graph.edges().collect::<HashSet<_>>(), expected);
                    assert_eq!(
                        graph.density(),
                        expected.len() as f64 / (nv * nf) as f64
                    );
                    assert!(graph.is_bipartite());

                    for &v in &vs {
                        let factors = graph.factor_neighbors(v).unwrap().collect::<HashSet<_>>();
                        assert_eq!(factors.len() as NumNodes, graph.degree(v));
                        for &f in &fs {
                            assert_eq!(factors.contains(&f), graph.has_edge(v, f));
                            assert_eq!(graph.has_edge(v, f), graph.has_edge(f, v));
                            if let Ok(&(a, b)) = graph.edge_data(f, v) {
                                assert_eq!(EdgeKey::new(a, b), EdgeKey::new(v, f));
                            }
                        }
                    }

                    for id in graph.nodes() {
                        assert_eq!(graph.degree(id), graph.in_degree(id));
                        assert_eq!(graph.degree(id), graph.out_degree(id));
                    }
                }
            }
        }
    };
}

pub(crate) use test_factor_graph;
