/*!
# Payloads

User data is attached to variables, factors and edges through the type parameters of
[`FactorGraph`](crate::factor_graph::FactorGraph). If no types are given, all three default to
[`AnyPayload`], a small tagged union that can hold the most common kinds of values. This is a
convenience for quick experiments; in production code prefer concrete payload types.
*/

use std::fmt::Display;

use itertools::Itertools;

use crate::NodeKind;

/// A dynamically typed payload
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AnyPayload {
    /// No data
    #[default]
    Unit,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<AnyPayload>),
}

impl AnyPayload {
    /// Returns the boolean if this is a `Bool`
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AnyPayload::Bool(x) => Some(*x),
            _ => None,
        }
    }

    /// Returns the integer if this is an `Int`
    pub fn as_int(&self) -> Option<i64> {
        match self {
            AnyPayload::Int(x) => Some(*x),
            _ => None,
        }
    }

    /// Returns the value as float if this is a `Float` or an `Int`
    pub fn as_float(&self) -> Option<f64> {
        match self {
            AnyPayload::Float(x) => Some(*x),
            AnyPayload::Int(x) => Some(*x as f64),
            _ => None,
        }
    }

    /// Returns the string slice if this is a `Str`
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AnyPayload::Str(x) => Some(x),
            _ => None,
        }
    }

    /// Returns the elements if this is a `List`
    pub fn as_list(&self) -> Option<&[AnyPayload]> {
        match self {
            AnyPayload::List(x) => Some(x),
            _ => None,
        }
    }

    /// Returns *true* if this is `Unit`
    pub fn is_unit(&self) -> bool {
        matches!(self, AnyPayload::Unit)
    }
}

impl Display for AnyPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnyPayload::Unit => write!(f, "()"),
            AnyPayload::Bool(x) => write!(f, "{x}"),
            AnyPayload::Int(x) => write!(f, "{x}"),
            AnyPayload::Float(x) => write!(f, "{x}"),
            AnyPayload::Str(x) => write!(f, "{x:?}"),
            AnyPayload::List(xs) => write!(f, "[{}]", xs.iter().join(", ")),
        }
    }
}

macro_rules! impl_from_payload {
    ($($t:ty => $variant:ident $(as $conv:ty)?),* $(,)?) => {
        $(
            impl From<$t> for AnyPayload {
                fn from(value: $t) -> Self {
                    AnyPayload::$variant(value $(as $conv)?)
                }
            }
        )*
    };
}

impl_from_payload!(
    bool => Bool,
    i64 => Int,
    i32 => Int as i64,
    u32 => Int as i64,
    f64 => Float,
    f32 => Float as f64,
    String => Str,
    Vec<AnyPayload> => List,
);

impl From<()> for AnyPayload {
    fn from(_: ()) -> Self {
        AnyPayload::Unit
    }
}

impl From<&str> for AnyPayload {
    fn from(value: &str) -> Self {
        AnyPayload::Str(value.to_string())
    }
}

/// Borrowed payload of a node of either kind
#[derive(Debug, PartialEq)]
pub enum NodeData<'a, V, F> {
    Variable(&'a V),
    Factor(&'a F),
}

impl<V, F> Clone for NodeData<'_, V, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V, F> Copy for NodeData<'_, V, F> {}

impl<'a, V, F> NodeData<'a, V, F> {
    /// Returns the kind of the node the payload belongs to
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeData::Variable(_) => NodeKind::Variable,
            NodeData::Factor(_) => NodeKind::Factor,
        }
    }

    /// Returns the payload if it belongs to a variable
    pub fn as_variable(&self) -> Option<&'a V> {
        match *self {
            NodeData::Variable(x) => Some(x),
            NodeData::Factor(_) => None,
        }
    }

    /// Returns the payload if it belongs to a factor
    pub fn as_factor(&self) -> Option<&'a F> {
        match *self {
            NodeData::Factor(x) => Some(x),
            NodeData::Variable(_) => None,
        }
    }
}
