/*!
# Node Representation

Two integer types describe a node:
- [`Node`] is the raw, 0-based vertex index used by the adjacency substrate in [`crate::repr`].
- [`NodeId`] is the opaque, positive identifier handed out by [`FactorGraph`](crate::factor_graph::FactorGraph).

We choose `Node = u32` as almost all use-cases involve less than `2^32` nodes.
A `NodeId` is the vertex count of the substrate right after its vertex was added,
so the first node is `1`, the second `2` and so on. As it is backed by `NonZero`,
`Option<NodeId>` has the same size as `NodeId`.
*/

use std::{
    fmt::{Debug, Display},
    num::NonZero,
};

/// Nodes of the substrate can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// Identifier of a variable or factor node.
///
/// Identifiers are drawn from a single counter shared by both kinds of nodes,
/// hence a variable and a factor never share an identifier.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct NodeId(NonZero<Node>);

impl NodeId {
    /// Returns the identifier whose substrate vertex is `index`.
    /// Returns `None` if `index == INVALID_NODE`.
    pub const fn from_index(index: Node) -> Option<Self> {
        match NonZero::new(index.wrapping_add(1)) {
            Some(inner) => Some(NodeId(inner)),
            None => None,
        }
    }

    /// Returns the identifier given by the vertex count `n` of the substrate directly
    /// after its vertex was added. Returns `None` if `n == 0`.
    pub const fn from_count(n: NumNodes) -> Option<Self> {
        match NonZero::new(n) {
            Some(inner) => Some(NodeId(inner)),
            None => None,
        }
    }

    /// Gets the underlying (positive) identifier value
    pub const fn get(&self) -> Node {
        self.0.get()
    }

    /// Gets the vertex of the adjacency substrate this identifier refers to
    pub const fn index(&self) -> Node {
        self.0.get() - 1
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get())
    }
}

impl Debug for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.get())
    }
}

impl From<NodeId> for Node {
    fn from(value: NodeId) -> Self {
        value.get()
    }
}

/// The two sides of a factor graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A variable node, typically a random variable
    Variable,
    /// A factor node, typically a relationship among variables
    Factor,
}

impl NodeKind {
    /// Returns the kind on the other side of the bipartition
    pub const fn opposite(&self) -> Self {
        match self {
            NodeKind::Variable => NodeKind::Factor,
            NodeKind::Factor => NodeKind::Variable,
        }
    }
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeKind::Variable => write!(f, "variable"),
            NodeKind::Factor => write!(f, "factor"),
        }
    }
}
