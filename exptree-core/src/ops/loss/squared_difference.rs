use crate::node::Node;
use crate::ops::arithmetic::pow::powf_op;
use crate::ops::arithmetic::sub::sub_nodes;

/// `(a − b)²`, built as a Subtract node squared by a Power node.
///
/// The intermediate difference is a real node of the graph, so gradients flow
/// through the Subtract and Power rules: `2(a − b)` to `a`, `−2(a − b)` to `b`.
pub fn squared_difference_op(a: &Node, b: &Node) -> Node {
    let difference = sub_nodes(&[a.clone(), b.clone()]);
    powf_op(&difference, 2.0)
}

#[cfg(test)]
#[path = "squared_difference_test.rs"]
mod tests;
