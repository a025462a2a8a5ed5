// IR Node Types
//
// Defines every node kind the construction layer can ask a factory for

use crate::ir::types::{DType, Scalar};
use std::fmt;

/// Opaque handle to a node owned by a factory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Handle for the node a factory stored at `index`
    pub fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Position of the node in its factory's allocation order
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "%{}", self.0)
    }
}

/// Reduction operator of a Reduce node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReduceOp {
    Add,
    Min,
    Max,
}

/// Binary operator of a Binary expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOpKind {
    Add,
    Sub,
    Mul,
    Div,
    Min,
    Max,
}

/// Axes and body of a computed tensor; present together or not at all
#[derive(Debug, Clone, PartialEq)]
pub struct TensorCompute {
    pub axes: Vec<NodeId>,
    pub body: NodeId,
}

/// Node payload
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    // ===== Expressions =====
    /// Symbolic scalar variable; identity is the node id, never the name
    Var { name: String },

    /// Numeric literal
    Const { value: Scalar },

    /// Arithmetic over two expressions
    Binary {
        op: BinaryOpKind,
        lhs: NodeId,
        rhs: NodeId,
    },

    /// Element read `tensor(indices...)`
    Access { tensor: NodeId, indices: Vec<NodeId> },

    /// Fold of `source` over every point of `domain`
    Reduce {
        op: ReduceOp,
        source: NodeId,
        domain: NodeId,
    },

    // ===== Aggregates =====
    /// Ordered sequence of coerced nodes
    Array { elements: Vec<NodeId> },

    /// Iteration interval `[min, max)`, bounds unchecked
    Range { min: NodeId, max: NodeId },

    /// Non-empty ordered set of ranges, held as an `Array` of Range nodes
    RDomain { ranges: NodeId },

    /// Placeholder (no compute) or computed tensor
    Tensor {
        name: String,
        shape: Vec<NodeId>,
        compute: Option<TensorCompute>,
    },
}

impl NodeKind {
    /// Kind tag used in diagnostics and the text printer
    pub fn tag(&self) -> &'static str {
        match self {
            NodeKind::Var { .. } => "var",
            NodeKind::Const { .. } => "const",
            NodeKind::Binary { .. } => "binary",
            NodeKind::Access { .. } => "access",
            NodeKind::Reduce { .. } => "reduce",
            NodeKind::Array { .. } => "array",
            NodeKind::Range { .. } => "range",
            NodeKind::RDomain { .. } => "rdomain",
            NodeKind::Tensor { .. } => "tensor",
        }
    }

    /// Whether nodes of this kind satisfy the scalar expression contract
    pub fn is_expr(&self) -> bool {
        matches!(
            self,
            NodeKind::Var { .. }
                | NodeKind::Const { .. }
                | NodeKind::Binary { .. }
                | NodeKind::Access { .. }
                | NodeKind::Reduce { .. }
        )
    }

    /// Child nodes in operand order
    pub fn inputs(&self) -> Vec<NodeId> {
        match self {
            NodeKind::Var { .. } | NodeKind::Const { .. } => vec![],
            NodeKind::Binary { lhs, rhs, .. } => vec![*lhs, *rhs],
            NodeKind::Access { tensor, indices } => {
                let mut inputs = vec![*tensor];
                inputs.extend(indices.iter().copied());
                inputs
            }
            NodeKind::Reduce { source, domain, .. } => vec![*source, *domain],
            NodeKind::Array { elements } => elements.clone(),
            NodeKind::Range { min, max } => vec![*min, *max],
            NodeKind::RDomain { ranges } => vec![*ranges],
            NodeKind::Tensor { shape, compute, .. } => {
                let mut inputs = shape.clone();
                if let Some(compute) = compute {
                    inputs.extend(compute.axes.iter().copied());
                    inputs.push(compute.body);
                }
                inputs
            }
        }
    }
}

/// Node as stored by a factory
#[derive(Debug, Clone, PartialEq)]
pub struct IRNode {
    /// Unique identifier
    pub id: NodeId,
    /// Payload
    pub kind: NodeKind,
    /// Element type, for expressions and tensors
    pub dtype: Option<DType>,
}

impl IRNode {
    pub fn is_expr(&self) -> bool {
        self.kind.is_expr()
    }

    /// Dtype if this node is an expression
    pub fn expr_dtype(&self) -> Option<DType> {
        if self.is_expr() {
            self.dtype
        } else {
            None
        }
    }

    pub fn inputs(&self) -> Vec<NodeId> {
        self.kind.inputs()
    }

    /// Tensor rank, `None` for non-tensor nodes
    pub fn rank(&self) -> Option<usize> {
        match &self.kind {
            NodeKind::Tensor { shape, .. } => Some(shape.len()),
            _ => None,
        }
    }
}

impl fmt::Display for ReduceOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReduceOp::Add => write!(f, "add"),
            ReduceOp::Min => write!(f, "min"),
            ReduceOp::Max => write!(f, "max"),
        }
    }
}

impl fmt::Display for BinaryOpKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BinaryOpKind::Add => write!(f, "add"),
            BinaryOpKind::Sub => write!(f, "sub"),
            BinaryOpKind::Mul => write!(f, "mul"),
            BinaryOpKind::Div => write!(f, "div"),
            BinaryOpKind::Min => write!(f, "min"),
            BinaryOpKind::Max => write!(f, "max"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expr_kinds() {
        assert!(NodeKind::Var { name: "i".into() }.is_expr());
        assert!(NodeKind::Const { value: Scalar::Int(1) }.is_expr());
        assert!(!NodeKind::Range { min: NodeId(0), max: NodeId(1) }.is_expr());
        assert!(!NodeKind::Tensor {
            name: "A".into(),
            shape: vec![],
            compute: None,
        }
        .is_expr());
    }

    #[test]
    fn test_tensor_expr_dtype_hidden() {
        let node = IRNode {
            id: NodeId(3),
            kind: NodeKind::Tensor {
                name: "A".into(),
                shape: vec![NodeId(0)],
                compute: None,
            },
            dtype: Some(DType::Float32),
        };
        assert_eq!(node.expr_dtype(), None);
        assert_eq!(node.rank(), Some(1));
    }

    #[test]
    fn test_inputs_order() {
        let kind = NodeKind::Tensor {
            name: "C".into(),
            shape: vec![NodeId(0), NodeId(1)],
            compute: Some(TensorCompute {
                axes: vec![NodeId(2), NodeId(3)],
                body: NodeId(4),
            }),
        };
        assert_eq!(
            kind.inputs(),
            vec![NodeId(0), NodeId(1), NodeId(2), NodeId(3), NodeId(4)]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ReduceOp::Max.to_string(), "max");
        assert_eq!(BinaryOpKind::Div.to_string(), "div");
        assert_eq!(NodeId(7).to_string(), "%7");
    }
}
