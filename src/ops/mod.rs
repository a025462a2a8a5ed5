// Construction Operations
//
// Tensor, domain, reduction and expression constructors on `IrBuilder`.

pub mod domain;
pub mod expr;
pub mod reduce;
pub mod tensor;

// Re-exports
pub use tensor::axes;
