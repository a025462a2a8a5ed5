// Error Types
//
// Every construction call either returns a node handle or one of these.

use crate::ir::node::NodeId;
use thiserror::Error;

/// Errors raised while constructing IR nodes
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IrError {
    /// A range-like element was not a `(min, max)` pair or a Range node
    #[error("need a list of ranges: {found}")]
    MalformedRange { found: String },

    /// An argument did not satisfy the node contract of the call
    #[error("{context}: expected {expected}, found {found}")]
    TypeMismatch {
        context: &'static str,
        expected: &'static str,
        found: String,
    },

    /// A caller-supplied compute rule failed while building a tensor
    #[error("compute rule of tensor '{tensor}' failed: {source}")]
    ComputeRule {
        tensor: String,
        #[source]
        source: Box<IrError>,
    },

    /// A compute rule asked for a different number of indices than the tensor has
    #[error("compute rule takes {expected} indices but the tensor has {found} dimensions")]
    RuleArity { expected: usize, found: usize },

    /// An unsigned literal does not fit the signed 64-bit constant payload
    #[error("integer literal {0} does not fit in a 64-bit constant")]
    LiteralOutOfRange(String),

    /// The factory does not know this dtype name
    #[error("unknown dtype '{0}'")]
    UnknownDType(String),

    /// Index count does not match tensor rank
    #[error("dimension mismatch: expected {expected} indices, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// Handle does not belong to the factory
    #[error("unknown node {0}")]
    UnknownNode(NodeId),

    /// Graph walk revisited a node that is still being expanded
    #[error("cycle detected at node {0}")]
    Cycle(NodeId),
}

impl IrError {
    pub(crate) fn type_mismatch(
        context: &'static str,
        expected: &'static str,
        found: impl Into<String>,
    ) -> Self {
        IrError::TypeMismatch {
            context,
            expected,
            found: found.into(),
        }
    }

    /// True when the failure is attributed to a caller's compute rule
    pub fn is_compute_rule(&self) -> bool {
        matches!(self, IrError::ComputeRule { .. })
    }
}

/// Result type for IR construction
pub type Result<T> = std::result::Result<T, IrError>;
