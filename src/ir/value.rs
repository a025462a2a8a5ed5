// Builder Inputs
//
// Anything the construction API accepts where "a literal or a node" is
// allowed: numbers, nested sequences of them, or existing node handles.

use crate::ir::node::NodeId;
use crate::ir::types::Scalar;

/// Literal-or-node argument, resolved by `IrBuilder::convert`
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Seq(Vec<Value>),
    Node(NodeId),
}

impl Value {
    pub fn is_seq(&self) -> bool {
        matches!(self, Value::Seq(_))
    }

    /// Short description for diagnostics
    pub fn describe(&self) -> String {
        match self {
            Value::Int(v) => format!("int literal {}", v),
            Value::Float(v) => format!("float literal {:?}", v),
            Value::Seq(items) => format!("sequence of {} elements", items.len()),
            Value::Node(id) => format!("node {}", id),
        }
    }
}

impl From<Scalar> for Value {
    fn from(value: Scalar) -> Self {
        match value {
            Scalar::Int(v) => Value::Int(v),
            Scalar::Float(v) => Value::Float(v),
        }
    }
}

macro_rules! value_from_scalar {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(value: $t) -> Self {
                Value::from(Scalar::from(value))
            }
        })*
    };
}

value_from_scalar!(i8, i16, i32, i64, u8, u16, u32, isize, f32, f64);

impl From<NodeId> for Value {
    fn from(id: NodeId) -> Self {
        Value::Node(id)
    }
}

impl From<&NodeId> for Value {
    fn from(id: &NodeId) -> Self {
        Value::Node(*id)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Value::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value> + Clone> From<&[T]> for Value {
    fn from(items: &[T]) -> Self {
        Value::Seq(items.iter().cloned().map(Into::into).collect())
    }
}

impl<A: Into<Value>, B: Into<Value>> From<(A, B)> for Value {
    fn from((a, b): (A, B)) -> Self {
        Value::Seq(vec![a.into(), b.into()])
    }
}

impl<A: Into<Value>, B: Into<Value>, C: Into<Value>> From<(A, B, C)> for Value {
    fn from((a, b, c): (A, B, C)) -> Self {
        Value::Seq(vec![a.into(), b.into(), c.into()])
    }
}
