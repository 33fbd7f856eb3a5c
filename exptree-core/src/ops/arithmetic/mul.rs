use crate::error::ExpTreeError;
use crate::node::Node;
use crate::ops::{build_node, ensure_operands};
use crate::types::Operation;

/// Multiplies the operand values: `n1 * n2 * … * nk`.
///
/// Operand `i` receives the upstream gradient times the product of the values
/// at every *other* position, so `x * x` gives `x` a total of `2x`.
///
/// # Errors
/// [`ExpTreeError::EmptyOperands`] when `operands` is empty.
pub fn mul_op(operands: &[Node]) -> Result<Node, ExpTreeError> {
    ensure_operands(Operation::Multiply, operands)?;
    Ok(mul_nodes(operands))
}

pub(crate) fn mul_nodes(operands: &[Node]) -> Node {
    let product: f64 = operands.iter().map(Node::value).product();
    build_node(product, Operation::Multiply, operands)
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
