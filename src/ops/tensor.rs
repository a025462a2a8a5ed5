// Tensor Construction
//
// A tensor is either a placeholder for data supplied from outside, or a
// computed tensor whose element at each index is given by a compute rule
// evaluated once over fresh axis variables.

use crate::error::{IrError, Result};
use crate::ir::builder::IrBuilder;
use crate::ir::factory::NodeFactory;
use crate::ir::node::{NodeId, NodeKind, TensorCompute};
use crate::ir::value::Value;

/// Unpack the axis variables handed to a compute rule.
///
/// Fails with `IrError::RuleArity` when the rule expects a different number
/// of indices than the tensor has dimensions.
pub fn axes<const N: usize>(indices: &[NodeId]) -> Result<[NodeId; N]> {
    <[NodeId; N]>::try_from(indices).map_err(|_| IrError::RuleArity {
        expected: N,
        found: indices.len(),
    })
}

impl<F: NodeFactory> IrBuilder<F> {
    /// Declare an input tensor with no computation.
    ///
    /// `dtype` defaults to `float32`.
    pub fn placeholder(
        &mut self,
        shape: impl Into<Value>,
        dtype: Option<&str>,
        name: Option<&str>,
    ) -> Result<NodeId> {
        let shape = shape.into();
        let name = name.unwrap_or(&self.config.tensor_name).to_string();
        self.atomic(|b| {
            let dtype = match dtype {
                Some(dtype) => b.factory.resolve_dtype(dtype)?,
                None => b.config.placeholder_dtype,
            };
            let shape = b.convert_shape(shape)?;
            let rank = shape.len();
            let id = b.factory.allocate(
                NodeKind::Tensor {
                    name,
                    shape,
                    compute: None,
                },
                Some(dtype),
            )?;
            log::debug!("placeholder tensor rank {} : {} -> {}", rank, dtype, id);
            Ok(id)
        })
    }

    /// Declare a computed tensor.
    ///
    /// One fresh index variable is created per dimension and passed to
    /// `fcompute` in order; the expression it returns becomes the tensor body
    /// and fixes the tensor dtype. Errors raised by the rule, or a result that
    /// is not an expression, are reported as `IrError::ComputeRule`.
    pub fn compute<R>(
        &mut self,
        shape: impl Into<Value>,
        name: Option<&str>,
        fcompute: R,
    ) -> Result<NodeId>
    where
        R: FnOnce(&mut Self, &[NodeId]) -> Result<NodeId>,
    {
        let shape = shape.into();
        let name = name.unwrap_or(&self.config.tensor_name).to_string();
        self.atomic(|b| {
            let shape = b.convert_shape(shape)?;
            let axes = (0..shape.len())
                .map(|dim| {
                    let axis = b.config.axis_name(dim);
                    let dtype = b.config.var_dtype;
                    b.make_var(axis, dtype)
                })
                .collect::<Result<Vec<_>>>()?;

            let rule_error = |source: IrError| IrError::ComputeRule {
                tensor: name.clone(),
                source: Box::new(source),
            };
            let body = fcompute(&mut *b, &axes).map_err(rule_error)?;
            let dtype = b
                .expect_expr(body, "compute rule result")
                .map_err(rule_error)?;

            let rank = axes.len();
            let id = b.factory.allocate(
                NodeKind::Tensor {
                    name,
                    shape,
                    compute: Some(TensorCompute { axes, body }),
                },
                Some(dtype),
            )?;
            log::debug!("computed tensor rank {} : {} -> {}", rank, dtype, id);
            Ok(id)
        })
    }

    /// Convert every shape element, each of which must be an expression
    fn convert_shape(&mut self, shape: Value) -> Result<Vec<NodeId>> {
        match shape {
            Value::Seq(dims) => dims
                .into_iter()
                .map(|dim| self.convert_expr(dim, "tensor shape").map(|(id, _)| id))
                .collect(),
            other => Err(IrError::type_mismatch(
                "tensor shape",
                "sequence",
                other.describe(),
            )),
        }
    }
}
