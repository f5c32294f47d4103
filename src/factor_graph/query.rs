use super::*;

/// Classification, enumeration and neighborhoods
impl<V, F, E, B> FactorGraph<V, F, E, B>
where
    B: MapBackend,
{
    /// Returns *true* if `id` was created by [`FactorGraph::add_variable`]. Runs in `O(1)`.
    pub fn is_variable(&self, id: NodeId) -> bool {
        self.variable_data.contains_key(&id)
    }

    /// Returns *true* if `id` was created by [`FactorGraph::add_factor`]. Runs in `O(1)`.
    pub fn is_factor(&self, id: NodeId) -> bool {
        self.factor_data.contains_key(&id)
    }

    /// Returns the kind of node `id` or `None` if it is neither a variable nor a factor
    pub fn node_kind(&self, id: NodeId) -> Option<NodeKind> {
        if self.is_variable(id) {
            Some(NodeKind::Variable)
        } else if self.is_factor(id) {
            Some(NodeKind::Factor)
        } else {
            None
        }
    }

    /// Returns *true* if `id` is a vertex of the adjacency substrate
    pub fn has_node(&self, id: NodeId) -> bool {
        self.adjacency.has_vertex(id.index())
    }

    /// Returns an iterator over all variables.
    /// The order depends on the backend and is not stable under insertions.
    pub fn variables(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.variable_data.keys().copied()
    }

    /// Returns an iterator over all factors.
    /// The order depends on the backend and is not stable under insertions.
    pub fn factors(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.factor_data.keys().copied()
    }

    /// Returns an iterator over all nodes in the order they were created
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.vertices().filter_map(NodeId::from_index)
    }

    /// Returns the number of variables
    pub fn num_variables(&self) -> usize {
        self.variable_data.len()
    }

    /// Returns the number of factors
    pub fn num_factors(&self) -> usize {
        self.factor_data.len()
    }

    /// Returns the number of nodes in the adjacency substrate
    pub fn num_nodes(&self) -> NumNodes {
        self.adjacency.number_of_nodes()
    }

    /// Returns an iterator over all neighbors of `id`, regardless of their kind.
    /// The iterator is empty if `id` is not a node.
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.has_node(id)
            .then(|| self.adjacency.neighbors_of(id.index()))
            .into_iter()
            .flatten()
            .filter_map(NodeId::from_index)
    }

    /// Returns an iterator over the variables adjacent to factor `id`.
    /// Neighbors that are not variables are skipped.
    ///
    /// # Errors
    /// Fails with [`FactorGraphError::InvalidArgument`] if `id` is not a factor.
    pub fn variable_neighbors(&self, id: NodeId) -> Result<impl Iterator<Item = NodeId> + '_> {
        self.typed_neighbors(id, NodeKind::Factor)
    }

    /// Returns an iterator over the factors adjacent to variable `id`.
    /// Neighbors that are not factors are skipped.
    ///
    /// # Errors
    /// Fails with [`FactorGraphError::InvalidArgument`] if `id` is not a variable.
    pub fn factor_neighbors(&self, id: NodeId) -> Result<impl Iterator<Item = NodeId> + '_> {
        self.typed_neighbors(id, NodeKind::Variable)
    }

    fn typed_neighbors(
        &self,
        id: NodeId,
        kind: NodeKind,
    ) -> Result<impl Iterator<Item = NodeId> + '_> {
        if self.node_kind(id) != Some(kind) {
            return Err(FactorGraphError::wrong_kind(id, kind));
        }

        let wanted = Some(kind.opposite());
        Ok(self
            .neighbors(id)
            .filter(move |&u| self.node_kind(u) == wanted))
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use super::*;

    fn example() -> (FactorGraph<f64, String, i32>, [NodeId; 4]) {
        let mut graph = FactorGraph::new();
        let v1 = graph.add_variable(1.0);
        let v2 = graph.add_variable(2.0);
        let f1 = graph.add_factor("sum".to_string());
        let f2 = graph.add_factor("product".to_string());

        graph.add_edge(v1, f1, 10);
        graph.add_edge(v2, f1, 20);
        graph.add_edge(v2, f2, 30);

        (graph, [v1, v2, f1, f2])
    }

    #[test]
    fn typed_neighbors() {
        let (graph, [v1, v2, f1, f2]) = example();

        assert_eq!(graph.variable_neighbors(f1).unwrap().sorted().collect_vec(), vec![v1, v2]);
        assert_eq!(graph.variable_neighbors(f2).unwrap().collect_vec(), vec![v2]);
        assert_eq!(graph.factor_neighbors(v2).unwrap().sorted().collect_vec(), vec![f1, f2]);

        assert!(matches!(
            graph.variable_neighbors(v1),
            Err(FactorGraphError::InvalidArgument(_))
        ));
        assert!(graph.factor_neighbors(f1).is_err());
    }

    #[test]
    fn typed_neighbors_filter_violations() {
        let (mut graph, [v1, v2, f1, f2]) = example();

        // variable-variable and factor-factor edges
        assert!(graph.add_edge(v1, v2, 0));
        assert!(graph.add_edge(f1, f2, 0));

        assert_eq!(graph.neighbors(v1).sorted().collect_vec(), vec![v2, f1]);
        assert_eq!(graph.factor_neighbors(v1).unwrap().collect_vec(), vec![f1]);
        assert_eq!(graph.variable_neighbors(f2).unwrap().collect_vec(), vec![v2]);
    }

    #[test]
    fn unknown_ids() {
        let (graph, _) = example();
        let unknown = NodeId::from_count(100).unwrap();

        assert!(!graph.has_node(unknown));
        assert_eq!(graph.node_kind(unknown), None);
        assert_eq!(graph.neighbors(unknown).count(), 0);
        assert!(matches!(
            graph.variable_neighbors(unknown),
            Err(FactorGraphError::InvalidArgument(_))
        ));
        assert!(matches!(
            graph.factor_neighbors(unknown),
            Err(FactorGraphError::InvalidArgument(_))
        ));
    }

    #[test]
    fn enumeration() {
        let (graph, [v1, v2, f1, f2]) = example();

        assert_eq!(graph.variables().sorted().collect_vec(), vec![v1, v2]);
        assert_eq!(graph.factors().sorted().collect_vec(), vec![f1, f2]);
        assert_eq!(graph.nodes().collect_vec(), vec![v1, v2, f1, f2]);
        assert_eq!(graph.num_nodes(), 4);
        assert_eq!(graph.node_kind(f2), Some(NodeKind::Factor));
    }
}
