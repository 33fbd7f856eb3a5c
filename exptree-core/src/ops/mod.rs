//! Forward operators.
//!
//! Every operator computes its value from the operand values at call time,
//! builds a fresh node and attaches the operation tag and operand handles.
//! Operands are never modified; gradients are written later by
//! [`crate::autograd::backpropagate`].

pub mod activation;
pub mod arithmetic;
pub mod loss;
pub mod traits;

pub use activation::tanh_op;
pub use arithmetic::{add_op, mul_op, pow_op, powf_op, sub_op};
pub use loss::squared_difference_op;

use crate::error::ExpTreeError;
use crate::node::Node;
use crate::types::Operation;

/// Builds the result node of an operator and records its provenance.
pub(crate) fn build_node(value: f64, operation: Operation, operands: &[Node]) -> Node {
    let result = Node::leaf(value);
    result.attach(operation, operands.iter().cloned());
    result
}

/// N-ary operators need at least one operand.
pub(crate) fn ensure_operands(operation: Operation, operands: &[Node]) -> Result<(), ExpTreeError> {
    if operands.is_empty() {
        return Err(ExpTreeError::EmptyOperands {
            operation: operation.name().to_string(),
        });
    }
    Ok(())
}
