// tensor-ir: construction layer for a tensor-expression IR
//
// Turns declarations (variables, constants, tensors, reductions over a
// domain) into immutable IR nodes owned by a node factory.
//
// Architecture:
// - ir: node model, `NodeFactory` seam, arena graph, builder core
// - ops: tensor, domain, reduction and expression constructors
// - config: builder defaults
// - error: `IrError` and the crate `Result`

pub mod config;
pub mod error;
pub mod ir;
pub mod ops;

// Re-export commonly used items for convenience
pub use config::BuilderConfig;
pub use error::{IrError, Result};
pub use ir::{
    BinaryOpKind, DType, IRGraph, IRNode, IrBuilder, NodeFactory, NodeId, NodeKind, ReduceOp,
    Scalar, TensorCompute, Value, FLOAT32, INT32,
};
pub use ops::axes;
