use crate::node::Node;
use crate::ops::build_node;
use crate::types::Operation;

/// Hyperbolic tangent of `input`.
///
/// The local derivative is `1 − tanh(v)²`, with `v` the input's value when the
/// backward rule runs.
pub fn tanh_op(input: &Node) -> Node {
    let value = input.value().tanh();
    build_node(value, Operation::Tanh, std::slice::from_ref(input))
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
