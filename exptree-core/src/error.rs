use thiserror::Error;

/// Custom error type for the exptree engine.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ExpTreeError {
    #[error("Operation {operation} requires at least one operand, got none")]
    EmptyOperands { operation: String },

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Cycle detected in the computation graph during traversal.")]
    CycleDetected,

    #[error("Invalid initialization: {0}")]
    InvalidInitialization(String),

    #[error("Failed to render graph: {0}")]
    RenderError(String),
}
