/*!
# Factor Graphs

A [`FactorGraph`] is a bipartite graph of **variable** and **factor** nodes with user data
attached to variables (`V`), factors (`F`) and edges (`E`).

It combines
- an undirected adjacency substrate ([`SparseAdjArrayUndir`]) for connectivity,
- three payload stores created by a [`MapBackend`]: variable data, factor data and edge data.

Variables and factors draw their [`NodeId`]s from the vertex count of the substrate, so the two
kinds never share an identifier. Nodes and edges are never removed.

# Bipartiteness

The structure trusts its caller: [`FactorGraph::add_edge`] does not check that it connects a
variable to a factor. Edges between two variables, two factors or a node and itself are stored like
any other edge. The typed neighbor queries ([`FactorGraph::variable_neighbors`],
[`FactorGraph::factor_neighbors`]) always filter by node kind, so they stay correct even if the
caller broke this rule.

# Examples
```
use fgraphs::prelude::*;

let mut graph = FactorGraph::<f64, String, i32>::new();

let v1 = graph.add_variable(1.0);
let v2 = graph.add_variable(2.0);
let f1 = graph.add_factor("sum".to_string());
let f2 = graph.add_factor("product".to_string());

assert!(graph.add_edge(v1, f1, 10));
assert!(graph.add_edge(v2, f1, 20));
assert!(graph.add_edge(v2, f2, 30));

assert_eq!(graph.edge_data(f1, v1), Ok(&10));
assert_eq!(graph.density(), 0.75);
```
*/

use std::fmt::{Debug, Display};

use log::{debug, trace};

use crate::{error::*, prelude::*};

mod properties;
mod query;

/// The adjacency substrate of a [`FactorGraph`]
pub type Adjacency = SparseAdjArrayUndir;

/// A bipartite graph of variables and factors with payloads on nodes and edges.
/// See the [module documentation](self) for details.
pub struct FactorGraph<V = AnyPayload, F = AnyPayload, E = AnyPayload, B = FxBackend>
where
    B: MapBackend,
{
    backend: B,
    adjacency: Adjacency,
    variable_data: B::Store<NodeId, V>,
    factor_data: B::Store<NodeId, F>,
    edge_data: B::Store<EdgeKey, E>,
}

impl<V, F, E> FactorGraph<V, F, E, FxBackend> {
    /// Creates an empty factor graph using the default [`FxBackend`]
    pub fn new() -> Self {
        Self::with_backend(FxBackend)
    }
}

impl<V, F, E> Default for FactorGraph<V, F, E, FxBackend> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, F, E> FactorGraph<V, F, E, DynBackend> {
    /// Creates an empty factor graph whose payload stores use the container named `name`
    /// (see [`BackendKind`] for accepted names).
    ///
    /// # Errors
    /// Fails with [`FactorGraphError::InvalidArgument`] if `name` is not a supported container.
    ///
    /// # Examples
    /// ```
    /// use fgraphs::prelude::*;
    ///
    /// let graph = FactorGraph::<(), (), (), DynBackend>::with_backend_name("btree").unwrap();
    /// assert_eq!(graph.backend().kind(), BackendKind::BTree);
    ///
    /// assert!(FactorGraph::<(), (), (), DynBackend>::with_backend_name("skiplist").is_err());
    /// ```
    pub fn with_backend_name(name: &str) -> Result<Self> {
        let backend: DynBackend = name.parse()?;
        debug!("selected {} container for payload stores", backend.kind());
        Ok(Self::with_backend(backend))
    }
}

impl<V, F, E, B> FactorGraph<V, F, E, B>
where
    B: MapBackend,
{
    /// Creates an empty factor graph whose payload stores are created by `backend`
    pub fn with_backend(backend: B) -> Self {
        FactorGraphBuilder::new().backend(backend).build()
    }

    /// Returns the backend that created the payload stores
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Adds a new variable node carrying `payload` and returns its identifier.
    /// Every call creates a new node, even for equal payloads.
    ///
    /// # Panics
    /// Panics if the graph already holds `u32::MAX` nodes, the largest number of
    /// identifiers the substrate can address.
    pub fn add_variable(&mut self, payload: V) -> NodeId {
        let id = self.add_node();
        self.variable_data.insert(id, payload);
        trace!("added variable {id}");
        id
    }

    /// Adds a new factor node carrying `payload` and returns its identifier.
    /// Every call creates a new node, even for equal payloads.
    ///
    /// # Panics
    /// Panics if the graph already holds `u32::MAX` nodes, the largest number of
    /// identifiers the substrate can address.
    pub fn add_factor(&mut self, payload: F) -> NodeId {
        let id = self.add_node();
        self.factor_data.insert(id, payload);
        trace!("added factor {id}");
        id
    }

    fn add_node(&mut self) -> NodeId {
        let n = self.adjacency.add_vertex();
        NodeId::from_count(n).expect("vertex count is positive after adding a vertex")
    }

    /// Adds the undirected edge `{a, b}` carrying `payload`.
    ///
    /// Returns *true* if the edge was inserted. Returns *false* and drops `payload` if the edge
    /// already exists (the first payload is kept) or if `a` or `b` is not a node of the graph.
    ///
    /// It is the caller's responsibility to only connect variables to factors.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, payload: E) -> bool {
        if !self.adjacency.add_edge(a.index(), b.index()) {
            debug!("dropped edge {{{a},{b}}}: already present or unknown endpoint");
            return false;
        }

        self.edge_data.insert(EdgeKey::new(a, b), payload);
        trace!("added edge {{{a},{b}}}");
        true
    }

    /// Like [`FactorGraph::add_edge`], but calls `hook` for each endpoint once the edge was
    /// inserted: first with `a`, then with `b`, each time with the payload of that endpoint
    /// (`None` if it has none) and the payload of the new edge.
    /// The hook is not called if the edge was not inserted.
    ///
    /// # Errors
    /// Returns the first error of `hook` unchanged. The edge stays inserted in this case.
    ///
    /// # Examples
    /// ```
    /// use fgraphs::prelude::*;
    ///
    /// let mut graph = FactorGraph::<&str, &str, u32>::new();
    /// let v = graph.add_variable("x");
    /// let f = graph.add_factor("prior");
    ///
    /// let mut seen = Vec::new();
    /// let inserted = graph.add_edge_with(v, f, 7, |id, data, edge| {
    ///     seen.push((id, data.map(|d| d.kind()), *edge));
    ///     Ok::<_, ()>(())
    /// });
    ///
    /// assert_eq!(inserted, Ok(true));
    /// assert_eq!(seen, vec![(v, Some(NodeKind::Variable), 7), (f, Some(NodeKind::Factor), 7)]);
    /// ```
    pub fn add_edge_with<H, X>(
        &mut self,
        a: NodeId,
        b: NodeId,
        payload: E,
        mut hook: H,
    ) -> std::result::Result<bool, X>
    where
        H: FnMut(NodeId, Option<NodeData<'_, V, F>>, &E) -> std::result::Result<(), X>,
    {
        if !self.add_edge(a, b, payload) {
            return Ok(false);
        }

        if let Some(edge) = self.edge_data.get(&EdgeKey::new(a, b)) {
            hook(a, self.node_data(a).ok(), edge)?;
            hook(b, self.node_data(b).ok(), edge)?;
        }

        Ok(true)
    }

    /// Returns the payload of variable `id`.
    ///
    /// # Errors
    /// Fails with [`FactorGraphError::NotFound`] if `id` is not a variable.
    pub fn variable_data(&self, id: NodeId) -> Result<&V> {
        self.variable_data
            .get(&id)
            .ok_or(FactorGraphError::NotFound(Missing::Variable(id)))
    }

    /// Returns the payload of factor `id`.
    ///
    /// # Errors
    /// Fails with [`FactorGraphError::NotFound`] if `id` is not a factor.
    pub fn factor_data(&self, id: NodeId) -> Result<&F> {
        self.factor_data
            .get(&id)
            .ok_or(FactorGraphError::NotFound(Missing::Factor(id)))
    }

    /// Returns the payload of node `id`, whichever kind it is.
    ///
    /// # Errors
    /// Fails with [`FactorGraphError::NotFound`] if `id` is neither a variable nor a factor.
    pub fn node_data(&self, id: NodeId) -> Result<NodeData<'_, V, F>> {
        if let Some(data) = self.variable_data.get(&id) {
            Ok(NodeData::Variable(data))
        } else if let Some(data) = self.factor_data.get(&id) {
            Ok(NodeData::Factor(data))
        } else {
            Err(FactorGraphError::NotFound(Missing::Node(id)))
        }
    }

    /// Returns the payload of the edge `{a, b}`; the order of `a` and `b` is irrelevant.
    ///
    /// # Errors
    /// Fails with [`FactorGraphError::NotFound`] if no payload was stored for `{a, b}`. This includes
    /// edges that were added to the substrate directly via [`FactorGraph::adjacency_mut`].
    pub fn edge_data(&self, a: NodeId, b: NodeId) -> Result<&E> {
        self.edge_data
            .get(&EdgeKey::new(a, b))
            .ok_or(FactorGraphError::NotFound(Missing::Edge(a, b)))
    }

    /// Returns the adjacency substrate
    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    /// Returns the adjacency substrate mutably.
    ///
    /// # Warning
    /// Vertices and edges added through this reference bypass the payload stores: new vertices are
    /// neither variables nor factors and new edges carry no payload. They still take part in
    /// [`FactorGraph::neighbors`], [`FactorGraph::degree`], [`FactorGraph::density`] and all other
    /// queries answered by the substrate.
    pub fn adjacency_mut(&mut self) -> &mut Adjacency {
        &mut self.adjacency
    }
}

/// Builder for [`FactorGraph`] with capacity hints and a backend.
///
/// # Examples
/// ```
/// use fgraphs::prelude::*;
///
/// let graph: FactorGraph<f64, String, (), BTreeBackend> = FactorGraphBuilder::new()
///     .variables(100)
///     .factors(20)
///     .edges(300)
///     .backend(BTreeBackend)
///     .build();
///
/// assert_eq!(graph.num_nodes(), 0);
/// assert_eq!(graph.backend().kind(), BackendKind::BTree);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FactorGraphBuilder<B = FxBackend> {
    backend: B,
    variables: usize,
    factors: usize,
    edges: usize,
}

impl FactorGraphBuilder<FxBackend> {
    /// Creates a builder without capacity hints using the default [`FxBackend`]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<B: MapBackend> FactorGraphBuilder<B> {
    /// Sets the expected number of variables
    pub fn variables(mut self, n: usize) -> Self {
        self.variables = n;
        self
    }

    /// Sets the expected number of factors
    pub fn factors(mut self, n: usize) -> Self {
        self.factors = n;
        self
    }

    /// Sets the expected number of edges
    pub fn edges(mut self, m: usize) -> Self {
        self.edges = m;
        self
    }

    /// Replaces the backend creating the payload stores
    pub fn backend<B2: MapBackend>(self, backend: B2) -> FactorGraphBuilder<B2> {
        FactorGraphBuilder {
            backend,
            variables: self.variables,
            factors: self.factors,
            edges: self.edges,
        }
    }

    /// Replaces the backend by the runtime-selected container named `name`.
    ///
    /// # Errors
    /// Fails with [`FactorGraphError::InvalidArgument`] if `name` is not a supported container.
    pub fn backend_name(self, name: &str) -> Result<FactorGraphBuilder<DynBackend>> {
        let backend: DynBackend = name.parse()?;
        Ok(self.backend(backend))
    }

    /// Creates the empty factor graph
    pub fn build<V, F, E>(self) -> FactorGraph<V, F, E, B> {
        FactorGraph {
            adjacency: Adjacency::with_capacity(self.variables + self.factors),
            variable_data: self.backend.new_map(self.variables),
            factor_data: self.backend.new_map(self.factors),
            edge_data: self.backend.new_map(self.edges),
            backend: self.backend,
        }
    }
}

impl<V, F, E, B> Clone for FactorGraph<V, F, E, B>
where
    B: MapBackend + Clone,
    B::Store<NodeId, V>: Clone,
    B::Store<NodeId, F>: Clone,
    B::Store<EdgeKey, E>: Clone,
{
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone(),
            adjacency: self.adjacency.clone(),
            variable_data: self.variable_data.clone(),
            factor_data: self.factor_data.clone(),
            edge_data: self.edge_data.clone(),
        }
    }
}

impl<V, F, E, B> Debug for FactorGraph<V, F, E, B>
where
    B: MapBackend + Debug,
    B::Store<NodeId, V>: Debug,
    B::Store<NodeId, F>: Debug,
    B::Store<EdgeKey, E>: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FactorGraph")
            .field("backend", &self.backend)
            .field("adjacency", &self.adjacency)
            .field("variable_data", &self.variable_data)
            .field("factor_data", &self.factor_data)
            .field("edge_data", &self.edge_data)
            .finish()
    }
}

impl<V, F, E, B> Display for FactorGraph<V, F, E, B>
where
    B: MapBackend,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "FactorGraph(variables: {}, factors: {}, edges: {}, container: {})",
            self.num_variables(),
            self.num_factors(),
            self.num_edges(),
            self.backend.kind()
        )
    }
}

crate::testing::test_factor_graph!(fx_backend, FxBackend);
crate::testing::test_factor_graph!(std_backend, StdBackend);
crate::testing::test_factor_graph!(btree_backend, BTreeBackend);
crate::testing::test_factor_graph!(vec_map_backend, VecMapBackend);
crate::testing::test_factor_graph!(dyn_backend, DynBackend(BackendKind::Std));
