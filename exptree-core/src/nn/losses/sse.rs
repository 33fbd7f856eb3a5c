// src/nn/losses/sse.rs

use crate::error::ExpTreeError;
use crate::node::Node;
use crate::ops::{add_op, mul_op, squared_difference_op};
use crate::types::Operation;

/// Adds `(pᵢ - tᵢ)²` over paired predictions and targets into one Add node.
///
/// # Errors
/// * [`ExpTreeError::DimensionMismatch`] when the slices differ in length.
/// * [`ExpTreeError::EmptyOperands`] when both are empty.
pub fn sum_squared_error(predictions: &[Node], targets: &[Node]) -> Result<Node, ExpTreeError> {
    if predictions.len() != targets.len() {
        return Err(ExpTreeError::DimensionMismatch {
            expected: predictions.len(),
            actual: targets.len(),
        });
    }
    if predictions.is_empty() {
        return Err(ExpTreeError::EmptyOperands {
            operation: Operation::Add.name().to_string(),
        });
    }
    let terms: Vec<Node> = predictions
        .iter()
        .zip(targets.iter())
        .map(|(p, t)| squared_difference_op(p, t))
        .collect();
    Ok(add_op(&terms)?.with_label("loss"))
}

/// How per-sample squared errors are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    Mean,
    #[default]
    Sum,
}

/// Squared-error loss with a configurable reduction.
#[derive(Debug, Clone, Default)]
pub struct SquaredErrorLoss {
    reduction: Reduction,
}

impl SquaredErrorLoss {
    pub fn new(reduction: Reduction) -> Self {
        SquaredErrorLoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// `Mean` scales the summed error by a constant `1/n` leaf.
    pub fn calculate(&self, predictions: &[Node], targets: &[Node]) -> Result<Node, ExpTreeError> {
        let total = sum_squared_error(predictions, targets)?;
        match self.reduction {
            Reduction::Sum => Ok(total),
            Reduction::Mean => {
                let scale = Node::new(1.0 / predictions.len() as f64, "loss_scale");
                Ok(mul_op(&[total, scale])?.with_label("mean_loss"))
            }
        }
    }
}

#[cfg(test)]
#[path = "sse_test.rs"]
mod tests;
