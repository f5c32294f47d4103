//! Property tests for the laws every factor graph has to satisfy, independent of the backend

use std::collections::HashSet;

use fgraphs::prelude::*;
use proptest::prelude::*;

/// Builds a graph from a sequence of node kinds (`true` = variable) and edges given as pairs of
/// positions into the created nodes. Returns the graph and the created identifiers.
fn build<B: MapBackend>(
    backend: B,
    kinds: &[bool],
    edges: &[(usize, usize, u16)],
) -> (FactorGraph<usize, usize, u16, B>, Vec<NodeId>) {
    let mut graph = FactorGraph::with_backend(backend);
    let ids: Vec<_> = kinds
        .iter()
        .enumerate()
        .map(|(i, &is_var)| {
            if is_var {
                graph.add_variable(i)
            } else {
                graph.add_factor(i)
            }
        })
        .collect();

    for &(a, b, data) in edges {
        graph.add_edge(ids[a % ids.len()], ids[b % ids.len()], data);
    }

    (graph, ids)
}

fn node_kinds() -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), 1..40)
}

fn edge_list() -> impl Strategy<Value = Vec<(usize, usize, u16)>> {
    prop::collection::vec((any::<usize>(), any::<usize>(), any::<u16>()), 0..120)
}

proptest! {
    #[test]
    fn identifiers_are_distinct_and_partitioned(kinds in node_kinds()) {
        let (graph, ids) = build(FxBackend, &kinds, &[]);

        let distinct: HashSet<_> = ids.iter().collect();
        prop_assert_eq!(distinct.len(), ids.len());

        for (&id, &is_var) in ids.iter().zip(&kinds) {
            prop_assert_eq!(graph.is_variable(id), is_var);
            prop_assert_eq!(graph.is_factor(id), !is_var);
        }

        prop_assert_eq!(graph.num_variables() + graph.num_factors(), ids.len());
    }

    #[test]
    fn edge_payload_is_order_independent(kinds in node_kinds(), edges in edge_list()) {
        let (graph, ids) = build(BTreeBackend, &kinds, &edges);

        for &a in &ids {
            for &b in &ids {
                prop_assert_eq!(graph.has_edge(a, b), graph.has_edge(b, a));
                prop_assert_eq!(graph.edge_data(a, b).ok(), graph.edge_data(b, a).ok());
                prop_assert_eq!(graph.edge_data(a, b).is_ok(), graph.has_edge(a, b));
            }
        }
    }

    #[test]
    fn first_payload_wins(kinds in node_kinds(), edges in edge_list()) {
        let mut graph = FactorGraph::<usize, usize, u16, _>::with_backend(VecMapBackend);
        let ids: Vec<_> = kinds
            .iter()
            .enumerate()
            .map(|(i, &v)| if v { graph.add_variable(i) } else { graph.add_factor(i) })
            .collect();

        let mut first = std::collections::HashMap::new();
        for &(a, b, data) in &edges {
            let (a, b) = (ids[a % ids.len()], ids[b % ids.len()]);
            let key = EdgeKey::new(a, b);
            let is_new = !first.contains_key(&key);
            prop_assert_eq!(graph.add_edge(a, b, data), is_new);
            first.entry(key).or_insert(data);
        }

        for (key, data) in first {
            let (a, b) = key.into_tuple();
            prop_assert_eq!(graph.edge_data(b, a), Ok(&data));
        }
    }

    #[test]
    fn undirected_degree_laws(kinds in node_kinds(), edges in edge_list()) {
        let (graph, ids) = build(StdBackend, &kinds, &edges);

        for &id in &ids {
            prop_assert_eq!(graph.degree(id), graph.in_degree(id));
            prop_assert_eq!(graph.degree(id), graph.out_degree(id));
            prop_assert_eq!(graph.degree(id) as usize, graph.neighbors(id).count());
        }

        // every non-loop edge contributes two to the degree sum, a loop one
        let loops = graph.edges().filter(|e| e.is_loop()).count();
        let degree_sum: usize = graph.degrees().iter().map(|&d| d as usize).sum();
        prop_assert_eq!(degree_sum, 2 * graph.num_edges() as usize - loops);
        prop_assert!(!graph.is_directed());
    }

    #[test]
    fn typed_neighbors_are_filtered(kinds in node_kinds(), edges in edge_list()) {
        let (graph, ids) = build(DynBackend(BackendKind::Fx), &kinds, &edges);

        for &id in &ids {
            let (typed, expected_kind) = if graph.is_variable(id) {
                prop_assert!(graph.variable_neighbors(id).is_err());
                (graph.factor_neighbors(id).unwrap().collect::<Vec<_>>(), NodeKind::Factor)
            } else {
                prop_assert!(graph.factor_neighbors(id).is_err());
                (graph.variable_neighbors(id).unwrap().collect::<Vec<_>>(), NodeKind::Variable)
            };

            let expected: Vec<_> = graph
                .neighbors(id)
                .filter(|&u| graph.node_kind(u) == Some(expected_kind))
                .collect();
            prop_assert_eq!(typed, expected);
        }
    }

    #[test]
    fn only_alternating_edges_are_bipartite(kinds in node_kinds(), edges in edge_list()) {
        let ids_len = kinds.len();
        let alternating: Vec<_> = edges
            .into_iter()
            .filter(|&(a, b, _)| kinds[a % ids_len] != kinds[b % ids_len])
            .collect();

        let (graph, _) = build(FxBackend, &kinds, &alternating);
        prop_assert!(graph.is_bipartite());

        let expected = if graph.num_variables() == 0 || graph.num_factors() == 0 {
            0.0
        } else {
            graph.num_edges() as f64 / (graph.num_variables() * graph.num_factors()) as f64
        };
        prop_assert_eq!(graph.density(), expected);
        prop_assert!(graph.density() <= 1.0);
    }
}

#[test]
fn density_without_factors_or_variables_is_zero() {
    let (graph, _) = build(FxBackend, &[true, true, true], &[(0, 1, 0)]);
    assert_eq!(graph.num_edges(), 1);
    assert_eq!(graph.density(), 0.0);

    let (graph, _) = build(FxBackend, &[false, false], &[(0, 1, 0)]);
    assert_eq!(graph.density(), 0.0);
}

#[test]
fn runtime_backend_selection() {
    for name in ["fx", "std", "btree", "vecmap"] {
        let mut graph = FactorGraph::<(), (), u8, DynBackend>::with_backend_name(name).unwrap();
        let v = graph.add_variable(());
        let f = graph.add_factor(());
        assert!(graph.add_edge(f, v, 1));
        assert_eq!(graph.edge_data(v, f), Ok(&1));
        assert_eq!(graph.backend().kind().name(), name);
    }

    let err = FactorGraph::<(), (), u8, DynBackend>::with_backend_name("lru").unwrap_err();
    assert!(matches!(err, FactorGraphError::InvalidArgument(_)));
}
