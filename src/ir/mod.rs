// IR Module: node model, node factory and the builder core

pub mod builder;
pub mod factory;
pub mod graph;
pub mod node;
pub mod printer;
pub mod types;
pub mod value;

// Re-exports
pub use builder::IrBuilder;
pub use factory::NodeFactory;
pub use graph::IRGraph;
pub use node::{BinaryOpKind, IRNode, NodeId, NodeKind, ReduceOp, TensorCompute};
pub use types::{DType, Scalar, FLOAT32, INT32};
pub use value::Value;
