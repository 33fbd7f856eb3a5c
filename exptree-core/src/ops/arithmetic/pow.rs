use crate::node::Node;
use crate::ops::build_node;
use crate::types::Operation;

/// Raises `base` to the value `exponent` holds right now.
///
/// The exponent is read once and stored on the result as a constant; it is
/// not recorded as an operand and never receives a gradient. The base
/// receives `exponent · base^(exponent − 1)` times the upstream gradient.
pub fn pow_op(base: &Node, exponent: &Node) -> Node {
    powf_op(base, exponent.value())
}

/// [`pow_op`] with a plain `f64` exponent.
pub fn powf_op(base: &Node, exponent: f64) -> Node {
    let value = base.value().powf(exponent);
    build_node(
        value,
        Operation::Power { exponent },
        std::slice::from_ref(base),
    )
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
