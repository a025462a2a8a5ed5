// IR Node Graph
//
// Arena-backed factory: node ids are allocation indices, children always
// precede their parents.

use crate::error::{IrError, Result};
use crate::ir::factory::NodeFactory;
use crate::ir::node::{IRNode, NodeId, NodeKind};
use crate::ir::types::DType;
use std::collections::HashMap;

/// Arena of immutable IR nodes
#[derive(Debug, Clone, Default)]
pub struct IRGraph {
    nodes: Vec<IRNode>,
}

impl IRGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// All nodes in allocation order
    pub fn nodes(&self) -> &[IRNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes reachable from `roots`, children before parents
    pub fn topological_order_from(&self, roots: &[NodeId]) -> Result<Vec<NodeId>> {
        let mut visited = HashMap::new();
        let mut order = Vec::new();
        for &root in roots {
            self.dfs_topo(root, &mut visited, &mut order)?;
        }
        Ok(order)
    }

    /// Get topologically sorted node IDs
    pub fn topological_order(&self) -> Result<Vec<NodeId>> {
        let roots: Vec<_> = self.nodes.iter().map(|n| n.id).collect();
        self.topological_order_from(&roots)
    }

    fn dfs_topo(
        &self,
        node_id: NodeId,
        visited: &mut HashMap<NodeId, bool>,
        order: &mut Vec<NodeId>,
    ) -> Result<()> {
        if let Some(&in_progress) = visited.get(&node_id) {
            if in_progress {
                return Err(IrError::Cycle(node_id));
            }
            return Ok(());
        }

        visited.insert(node_id, true);

        let node = self.get(node_id)?;
        for input_id in node.inputs() {
            self.dfs_topo(input_id, visited, order)?;
        }

        visited.insert(node_id, false);
        order.push(node_id);
        Ok(())
    }
}

impl NodeFactory for IRGraph {
    fn allocate(&mut self, kind: NodeKind, dtype: Option<DType>) -> Result<NodeId> {
        for input_id in kind.inputs() {
            if input_id.index() >= self.nodes.len() {
                return Err(IrError::UnknownNode(input_id));
            }
        }

        let id = NodeId::new(self.nodes.len());
        log::trace!("allocate {} {}", id, kind.tag());
        self.nodes.push(IRNode { id, kind, dtype });
        Ok(id)
    }

    fn node(&self, id: NodeId) -> Option<&IRNode> {
        self.nodes.get(id.index())
    }

    fn checkpoint(&self) -> usize {
        self.nodes.len()
    }

    fn rollback(&mut self, mark: usize) {
        if mark < self.nodes.len() {
            log::trace!("rollback {} nodes", self.nodes.len() - mark);
            self.nodes.truncate(mark);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::node::ReduceOp;
    use crate::ir::types::Scalar;

    fn constant(graph: &mut IRGraph, value: i64) -> NodeId {
        graph
            .allocate(NodeKind::Const { value: Scalar::Int(value) }, Some(DType::Int32))
            .unwrap()
    }

    #[test]
    fn test_empty_graph() {
        let graph = IRGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.checkpoint(), 0);
    }

    #[test]
    fn test_allocate_rejects_foreign_children() {
        let mut graph = IRGraph::new();
        let result = graph.allocate(
            NodeKind::Range {
                min: NodeId::new(0),
                max: NodeId::new(1),
            },
            None,
        );
        assert_eq!(result, Err(IrError::UnknownNode(NodeId::new(0))));
        assert!(graph.is_empty());
    }

    #[test]
    fn test_rollback() {
        let mut graph = IRGraph::new();
        let a = constant(&mut graph, 1);
        let mark = graph.checkpoint();
        constant(&mut graph, 2);
        constant(&mut graph, 3);
        graph.rollback(mark);

        assert_eq!(graph.len(), 1);
        assert!(graph.node(a).is_some());
        assert!(graph.node(NodeId::new(1)).is_none());
    }

    #[test]
    fn test_topological_order() {
        let mut graph = IRGraph::new();
        let lo = constant(&mut graph, 0);
        let hi = constant(&mut graph, 10);
        let range = graph.allocate(NodeKind::Range { min: lo, max: hi }, None).unwrap();
        let list = graph
            .allocate(NodeKind::Array { elements: vec![range] }, None)
            .unwrap();
        let dom = graph.allocate(NodeKind::RDomain { ranges: list }, None).unwrap();
        let var = graph
            .allocate(NodeKind::Var { name: "i".into() }, Some(DType::Int32))
            .unwrap();
        let sum = graph
            .allocate(
                NodeKind::Reduce {
                    op: ReduceOp::Add,
                    source: var,
                    domain: dom,
                },
                Some(DType::Int32),
            )
            .unwrap();

        let order = graph.topological_order_from(&[sum]).unwrap();
        assert_eq!(order, vec![var, lo, hi, range, list, dom, sum]);
        assert_eq!(graph.topological_order().unwrap().len(), 7);
    }

    #[test]
    fn test_capability_checks() {
        let mut graph = IRGraph::new();
        let c = constant(&mut graph, 4);
        assert!(graph.is_expr(c));
        assert!(!graph.is_rdomain(c));
        assert_eq!(graph.dtype_of(c), Some(DType::Int32));
        assert_eq!(graph.kind_tag(c), Some("const"));
        assert_eq!(graph.dtype_of(NodeId::new(9)), None);
    }
}
