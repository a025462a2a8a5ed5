// Scalar Expressions
//
// Arithmetic and tensor element reads, the operands compute rules and
// reductions are written in.

use crate::error::{IrError, Result};
use crate::ir::builder::IrBuilder;
use crate::ir::factory::NodeFactory;
use crate::ir::node::{BinaryOpKind, NodeId, NodeKind};
use crate::ir::types::DType;
use crate::ir::value::Value;

impl<F: NodeFactory> IrBuilder<F> {
    /// Apply a binary operator; the result dtype is the promotion of both operands
    pub fn binary(
        &mut self,
        op: BinaryOpKind,
        lhs: impl Into<Value>,
        rhs: impl Into<Value>,
    ) -> Result<NodeId> {
        let (lhs, rhs) = (lhs.into(), rhs.into());
        self.atomic(|b| {
            let (lhs, lhs_dtype) = b.convert_expr(lhs, "binary operand")?;
            let (rhs, rhs_dtype) = b.convert_expr(rhs, "binary operand")?;
            let dtype = DType::promote(lhs_dtype, rhs_dtype);
            let id = b
                .factory
                .allocate(NodeKind::Binary { op, lhs, rhs }, Some(dtype))?;
            log::trace!("{} {} {} : {} -> {}", op, lhs, rhs, dtype, id);
            Ok(id)
        })
    }

    pub fn add(&mut self, lhs: impl Into<Value>, rhs: impl Into<Value>) -> Result<NodeId> {
        self.binary(BinaryOpKind::Add, lhs, rhs)
    }

    pub fn sub(&mut self, lhs: impl Into<Value>, rhs: impl Into<Value>) -> Result<NodeId> {
        self.binary(BinaryOpKind::Sub, lhs, rhs)
    }

    pub fn mul(&mut self, lhs: impl Into<Value>, rhs: impl Into<Value>) -> Result<NodeId> {
        self.binary(BinaryOpKind::Mul, lhs, rhs)
    }

    pub fn div(&mut self, lhs: impl Into<Value>, rhs: impl Into<Value>) -> Result<NodeId> {
        self.binary(BinaryOpKind::Div, lhs, rhs)
    }

    /// Read one element of `tensor`. A single non-sequence index is accepted
    /// for rank-1 tensors.
    pub fn access(&mut self, tensor: NodeId, indices: impl Into<Value>) -> Result<NodeId> {
        let indices = match indices.into() {
            Value::Seq(items) => items,
            single => vec![single],
        };
        self.atomic(|b| {
            if !b.factory.is_tensor(tensor) {
                let found = b.factory.kind_tag(tensor).unwrap_or("unknown node");
                return Err(IrError::type_mismatch("access", "Tensor", found));
            }
            let node = b.factory.get(tensor)?;
            let (rank, dtype) = match (node.rank(), node.dtype) {
                (Some(rank), Some(dtype)) => (rank, dtype),
                _ => return Err(IrError::type_mismatch("access", "Tensor", "untyped tensor")),
            };
            if indices.len() != rank {
                return Err(IrError::DimensionMismatch {
                    expected: rank,
                    found: indices.len(),
                });
            }

            let indices = indices
                .into_iter()
                .map(|index| b.convert_expr(index, "access index").map(|(id, _)| id))
                .collect::<Result<Vec<_>>>()?;
            let id = b
                .factory
                .allocate(NodeKind::Access { tensor, indices }, Some(dtype))?;
            log::trace!("access {} -> {}", tensor, id);
            Ok(id)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_promotes() {
        let mut b = IrBuilder::new();
        let i = b.var(Some("i"), None).unwrap();
        let sum = b.add(i, 0.5).unwrap();
        assert_eq!(b.dtype_of(sum), Some(DType::Float32));

        let prod = b.mul(i, 2).unwrap();
        assert_eq!(b.dtype_of(prod), Some(DType::Int32));
    }

    #[test]
    fn test_binary_rejects_array_operand() {
        let mut b = IrBuilder::new();
        let err = b.sub(1, [1, 2]).unwrap_err();
        assert!(matches!(err, IrError::TypeMismatch { .. }));
        assert!(b.factory().is_empty());
    }

    #[test]
    fn test_access() {
        let mut b = IrBuilder::new();
        let a = b.placeholder((4, 4), Some("float64"), Some("A")).unwrap();
        let i = b.var(Some("i"), None).unwrap();

        let read = b.access(a, (i, 0)).unwrap();
        assert_eq!(b.dtype_of(read), Some(DType::Float64));
        assert!(b.node(read).unwrap().is_expr());

        let err = b.access(a, i).unwrap_err();
        assert_eq!(err, IrError::DimensionMismatch { expected: 2, found: 1 });

        let err = b.access(i, i).unwrap_err();
        assert!(matches!(err, IrError::TypeMismatch { expected: "Tensor", .. }));

        let err = b.access(NodeId::new(99), 0).unwrap_err();
        assert_eq!(err.to_string(), "access: expected Tensor, found unknown node");
        assert!(b.factory().is_tensor(a));
    }
}
