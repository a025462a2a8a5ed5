// Node Factory
//
// The construction layer validates and normalizes; the factory owns the nodes.
// Any engine that can store nodes and answer kind/dtype queries about them can
// stand behind an `IrBuilder`.

use crate::error::{IrError, Result};
use crate::ir::node::{IRNode, NodeId, NodeKind};
use crate::ir::types::DType;

/// Allocator and owner of IR nodes
pub trait NodeFactory {
    /// Store a new node and return its handle. Children referenced by `kind`
    /// must already belong to this factory.
    fn allocate(&mut self, kind: NodeKind, dtype: Option<DType>) -> Result<NodeId>;

    /// Look up a node by handle
    fn node(&self, id: NodeId) -> Option<&IRNode>;

    /// Resolve a dtype name; fails with `IrError::UnknownDType` when unrecognized
    fn resolve_dtype(&self, name: &str) -> Result<DType> {
        DType::parse(name)
    }

    /// Marker for the current allocation state
    fn checkpoint(&self) -> usize;

    /// Discard every node allocated after `mark`
    fn rollback(&mut self, mark: usize);

    /// Look up a node, failing for foreign handles
    fn get(&self, id: NodeId) -> Result<&IRNode> {
        self.node(id).ok_or(IrError::UnknownNode(id))
    }

    fn kind_tag(&self, id: NodeId) -> Option<&'static str> {
        self.node(id).map(|node| node.kind.tag())
    }

    /// Dtype of an expression node
    fn dtype_of(&self, id: NodeId) -> Option<DType> {
        self.node(id).and_then(|node| node.expr_dtype())
    }

    fn is_expr(&self, id: NodeId) -> bool {
        self.node(id).map_or(false, |node| node.is_expr())
    }

    fn is_range(&self, id: NodeId) -> bool {
        matches!(self.node(id).map(|n| &n.kind), Some(NodeKind::Range { .. }))
    }

    fn is_rdomain(&self, id: NodeId) -> bool {
        matches!(self.node(id).map(|n| &n.kind), Some(NodeKind::RDomain { .. }))
    }

    fn is_tensor(&self, id: NodeId) -> bool {
        matches!(self.node(id).map(|n| &n.kind), Some(NodeKind::Tensor { .. }))
    }
}

impl<F: NodeFactory + ?Sized> NodeFactory for &mut F {
    fn allocate(&mut self, kind: NodeKind, dtype: Option<DType>) -> Result<NodeId> {
        (**self).allocate(kind, dtype)
    }

    fn node(&self, id: NodeId) -> Option<&IRNode> {
        (**self).node(id)
    }

    fn resolve_dtype(&self, name: &str) -> Result<DType> {
        (**self).resolve_dtype(name)
    }

    fn checkpoint(&self) -> usize {
        (**self).checkpoint()
    }

    fn rollback(&mut self, mark: usize) {
        (**self).rollback(mark)
    }
}
