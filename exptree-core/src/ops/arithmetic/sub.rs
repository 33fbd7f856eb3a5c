use crate::error::ExpTreeError;
use crate::node::Node;
use crate::ops::{build_node, ensure_operands};
use crate::types::Operation;

/// Subtracts every later operand from the first: `n1 - n2 - … - nk`.
///
/// A single operand yields `0.0`. The first operand receives the upstream
/// gradient, every later one its negation.
///
/// # Errors
/// [`ExpTreeError::EmptyOperands`] when `operands` is empty.
pub fn sub_op(operands: &[Node]) -> Result<Node, ExpTreeError> {
    ensure_operands(Operation::Subtract, operands)?;
    Ok(sub_nodes(operands))
}

pub(crate) fn sub_nodes(operands: &[Node]) -> Node {
    let difference = match operands.split_first() {
        Some((first, rest)) if !rest.is_empty() => rest
            .iter()
            .fold(first.value(), |acc, operand| acc - operand.value()),
        _ => 0.0,
    };
    build_node(difference, Operation::Subtract, operands)
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
