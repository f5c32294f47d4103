use std::fmt::{Debug, Display};

use crate::{Node, NodeId};

/// An edge of the adjacency substrate is defined by two nodes/endpoints.
/// As the substrate is undirected, `Edge(u, v)` and `Edge(v, u)` describe the same edge.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

/// A pair of endpoints whose order is irrelevant: `UnorderedPair::new(a, b) == UnorderedPair::new(b, a)`.
///
/// The pair is normalized on construction (smaller endpoint first), so the derived
/// `Eq`, `Hash` and `Ord` are symmetric. It is used as the key for edge payloads.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnorderedPair<T>(T, T);

impl<T: Ord> UnorderedPair<T> {
    /// Creates the pair `{a, b}`
    pub fn new(a: T, b: T) -> Self {
        if a <= b {
            UnorderedPair(a, b)
        } else {
            UnorderedPair(b, a)
        }
    }

    /// Returns the smaller endpoint
    pub fn first(&self) -> &T {
        &self.0
    }

    /// Returns the larger endpoint
    pub fn second(&self) -> &T {
        &self.1
    }

    /// Returns *true* if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Returns both endpoints, smaller first
    pub fn into_tuple(self) -> (T, T) {
        (self.0, self.1)
    }
}

impl<T: Ord> From<(T, T)> for UnorderedPair<T> {
    fn from(value: (T, T)) -> Self {
        UnorderedPair::new(value.0, value.1)
    }
}

impl<T: Display> Display for UnorderedPair<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{},{}}}", self.0, self.1)
    }
}

impl<T: Debug> Debug for UnorderedPair<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{:?},{:?}}}", self.0, self.1)
    }
}

/// Key of an edge payload
pub type EdgeKey = UnorderedPair<NodeId>;
