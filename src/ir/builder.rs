// IR Builder: Public API for constructing IR nodes
//
// Holds the node factory explicitly; every call validates and normalizes its
// arguments, then hands the computed fields to the factory. Tensor, domain,
// reduction and expression constructors live in `crate::ops`.

use crate::config::BuilderConfig;
use crate::error::{IrError, Result};
use crate::ir::factory::NodeFactory;
use crate::ir::graph::IRGraph;
use crate::ir::node::{IRNode, NodeId, NodeKind};
use crate::ir::types::{DType, Scalar};
use crate::ir::value::Value;

/// Construction context over a node factory
pub struct IrBuilder<F: NodeFactory = IRGraph> {
    pub(crate) factory: F,
    pub(crate) config: BuilderConfig,
}

impl IrBuilder<IRGraph> {
    /// Create a builder over a fresh, empty graph
    pub fn new() -> Self {
        Self::with_factory(IRGraph::new())
    }
}

impl Default for IrBuilder<IRGraph> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: NodeFactory> IrBuilder<F> {
    /// Create a builder over an existing factory with default settings
    pub fn with_factory(factory: F) -> Self {
        Self::with_config(factory, BuilderConfig::default())
    }

    pub fn with_config(factory: F, config: BuilderConfig) -> Self {
        Self { factory, config }
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Get the underlying factory
    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Consume the builder and return the factory with every node built so far
    pub fn build(self) -> F {
        self.factory
    }

    /// Look up a node built through this builder
    pub fn node(&self, id: NodeId) -> Result<&IRNode> {
        self.factory.get(id)
    }

    /// Dtype of an expression node
    pub fn dtype_of(&self, id: NodeId) -> Option<DType> {
        self.factory.dtype_of(id)
    }

    /// Construct a constant.
    ///
    /// Without an explicit dtype, integral values become `int32` and
    /// everything else `float32`.
    pub fn constant(&mut self, value: impl Into<Scalar>, dtype: Option<&str>) -> Result<NodeId> {
        let value = value.into();
        let dtype = match dtype {
            Some(name) => self.factory.resolve_dtype(name)?,
            None => DType::of_literal(&value),
        };
        let id = self.factory.allocate(NodeKind::Const { value }, Some(dtype))?;
        log::debug!("const {} : {} -> {}", value, dtype, id);
        Ok(id)
    }

    /// Declare a fresh variable.
    ///
    /// Every call yields a new identity, even when the name repeats.
    pub fn var(&mut self, name: Option<&str>, dtype: Option<&str>) -> Result<NodeId> {
        let dtype = match dtype {
            Some(name) => self.factory.resolve_dtype(name)?,
            None => self.config.var_dtype,
        };
        let name = name.unwrap_or(&self.config.var_name).to_string();
        self.make_var(name, dtype)
    }

    pub(crate) fn make_var(&mut self, name: String, dtype: DType) -> Result<NodeId> {
        let id = self.factory.allocate(NodeKind::Var { name }, Some(dtype))?;
        log::debug!("var {} : {}", id, dtype);
        Ok(id)
    }

    /// Normalize a literal, sequence or node into a node.
    ///
    /// Numbers become constants, sequences become arrays of their converted
    /// elements, and nodes are returned unchanged.
    pub fn convert(&mut self, value: impl Into<Value>) -> Result<NodeId> {
        let value = value.into();
        self.atomic(|b| b.convert_value(value))
    }

    pub(crate) fn convert_value(&mut self, value: Value) -> Result<NodeId> {
        match value {
            Value::Int(v) => self.constant(v, None),
            Value::Float(v) => self.constant(v, None),
            Value::Seq(items) => {
                let elements = items
                    .into_iter()
                    .map(|item| self.convert_value(item))
                    .collect::<Result<Vec<_>>>()?;
                let len = elements.len();
                let id = self.factory.allocate(NodeKind::Array { elements }, None)?;
                log::trace!("array of {} -> {}", len, id);
                Ok(id)
            }
            Value::Node(id) => {
                self.factory.get(id)?;
                Ok(id)
            }
        }
    }

    /// Convert `value` and require the result to be an expression
    pub(crate) fn convert_expr(
        &mut self,
        value: Value,
        context: &'static str,
    ) -> Result<(NodeId, DType)> {
        let id = self.convert_value(value)?;
        let dtype = self.expect_expr(id, context)?;
        Ok((id, dtype))
    }

    /// Dtype of `id`, or a type error naming `context` when it is not an expression
    pub(crate) fn expect_expr(&self, id: NodeId, context: &'static str) -> Result<DType> {
        let node = self.factory.get(id)?;
        node.expr_dtype()
            .ok_or_else(|| IrError::type_mismatch(context, "Expr", node.kind.tag()))
    }

    /// Run `f` so that either all of its allocations survive or none do
    pub(crate) fn atomic<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let mark = self.factory.checkpoint();
        let result = f(self);
        if let Err(err) = &result {
            log::debug!("construction failed, discarding partial nodes: {}", err);
            self.factory.rollback(mark);
        }
        result
    }
}
