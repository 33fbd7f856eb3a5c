use crate::error::ExpTreeError;
use crate::node::Node;
use crate::ops::{build_node, ensure_operands};
use crate::types::Operation;

/// Sums the operand values: `n1 + n2 + … + nk`.
///
/// Every operand receives the upstream gradient unchanged. An operand listed
/// several times receives it once per occurrence.
///
/// # Errors
/// [`ExpTreeError::EmptyOperands`] when `operands` is empty.
pub fn add_op(operands: &[Node]) -> Result<Node, ExpTreeError> {
    ensure_operands(Operation::Add, operands)?;
    Ok(add_nodes(operands))
}

pub(crate) fn add_nodes(operands: &[Node]) -> Node {
    let sum: f64 = operands.iter().map(Node::value).sum();
    build_node(sum, Operation::Add, operands)
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
