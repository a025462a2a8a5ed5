// Reductions
//
// sum/min/max share one builder; they differ only in the operator tag.

use crate::error::{IrError, Result};
use crate::ir::builder::IrBuilder;
use crate::ir::factory::NodeFactory;
use crate::ir::node::{NodeId, NodeKind, ReduceOp};
use crate::ir::value::Value;

fn entry_point(op: ReduceOp) -> &'static str {
    match op {
        ReduceOp::Add => "sum",
        ReduceOp::Min => "min",
        ReduceOp::Max => "max",
    }
}

impl<F: NodeFactory> IrBuilder<F> {
    /// Fold `expr` over every point of `rdom` with `op`.
    ///
    /// Arguments are not converted: `expr` must already be an expression node
    /// and `rdom` an RDomain node. Both are checked before anything is
    /// allocated.
    pub fn reduce(
        &mut self,
        op: ReduceOp,
        expr: impl Into<Value>,
        rdom: impl Into<Value>,
    ) -> Result<NodeId> {
        let context = entry_point(op);

        let source = self.reduce_operand(expr.into(), context, "Expr", F::is_expr)?;
        let domain = self.reduce_operand(rdom.into(), context, "RDomain", F::is_rdomain)?;
        let dtype = self
            .factory
            .dtype_of(source)
            .ok_or_else(|| IrError::type_mismatch(context, "Expr", "untyped expression"))?;

        let id = self
            .factory
            .allocate(NodeKind::Reduce { op, source, domain }, Some(dtype))?;
        log::debug!("reduce.{} {} over {} : {} -> {}", op, source, domain, dtype, id);
        Ok(id)
    }

    /// Accept `value` only when it is a node owned by the factory that passes `check`
    fn reduce_operand(
        &self,
        value: Value,
        context: &'static str,
        expected: &'static str,
        check: fn(&F, NodeId) -> bool,
    ) -> Result<NodeId> {
        match value {
            Value::Node(id) if check(&self.factory, id) => Ok(id),
            Value::Node(id) => {
                let found = self.factory.kind_tag(id).unwrap_or("unknown node");
                Err(IrError::type_mismatch(context, expected, found))
            }
            other => Err(IrError::type_mismatch(context, expected, other.describe())),
        }
    }

    /// Sum of `expr` over `rdom`
    pub fn sum(&mut self, expr: impl Into<Value>, rdom: impl Into<Value>) -> Result<NodeId> {
        self.reduce(ReduceOp::Add, expr, rdom)
    }

    /// Minimum of `expr` over `rdom`
    pub fn min(&mut self, expr: impl Into<Value>, rdom: impl Into<Value>) -> Result<NodeId> {
        self.reduce(ReduceOp::Min, expr, rdom)
    }

    /// Maximum of `expr` over `rdom`
    pub fn max(&mut self, expr: impl Into<Value>, rdom: impl Into<Value>) -> Result<NodeId> {
        self.reduce(ReduceOp::Max, expr, rdom)
    }
}
