//! Error types of factor-graph queries.

use std::fmt::Display;

use thiserror::Error;

use crate::{NodeId, NodeKind};

/// What a failed lookup was looking for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Missing {
    /// Payload of a variable node
    Variable(NodeId),
    /// Payload of a factor node
    Factor(NodeId),
    /// Payload of a node of either kind
    Node(NodeId),
    /// Payload of the edge between two nodes
    Edge(NodeId, NodeId),
}

impl Display for Missing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Missing::Variable(id) => write!(f, "variable {id}"),
            Missing::Factor(id) => write!(f, "factor {id}"),
            Missing::Node(id) => write!(f, "node {id}"),
            Missing::Edge(a, b) => write!(f, "edge {{{a},{b}}}"),
        }
    }
}

/// Errors raised by [`FactorGraph`](crate::factor_graph::FactorGraph) operations.
///
/// Every error is raised at the offending call; no operation leaves a partial mutation behind.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FactorGraphError {
    /// No payload is stored for the requested node or node pair
    #[error("not found: {0}")]
    NotFound(Missing),

    /// An argument was rejected, e.g. a node of the wrong kind or an unknown container backend
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl FactorGraphError {
    /// Error for a typed neighbor query on a node that is not of the `expected` kind
    pub fn wrong_kind(id: NodeId, expected: NodeKind) -> Self {
        FactorGraphError::InvalidArgument(format!("{id} is not a {expected} node"))
    }

    /// Error for a backend name that does not denote a supported container
    pub fn unsupported_container(name: &str) -> Self {
        FactorGraphError::InvalidArgument(format!("unsupported container type: {name}"))
    }

    /// Returns *true* if this is a [`FactorGraphError::NotFound`]
    pub fn is_not_found(&self) -> bool {
        matches!(self, FactorGraphError::NotFound(_))
    }

    /// Returns *true* if this is a [`FactorGraphError::InvalidArgument`]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, FactorGraphError::InvalidArgument(_))
    }
}

/// Result type of fallible factor-graph operations
pub type Result<T> = std::result::Result<T, FactorGraphError>;
