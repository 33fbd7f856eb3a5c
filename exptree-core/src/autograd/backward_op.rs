//! Central dispatch of the local-gradient rules.
//!
//! Each node stores its [`Operation`] tag and operand handles; this module
//! turns them into per-operand partial derivatives and deposits
//! `local · upstream` into every operand with `+=`. The same operand listed
//! twice therefore receives both contributions.

use smallvec::SmallVec;

use crate::node::Node;
use crate::types::Operation;

/// Partial derivatives of an operation with respect to each operand,
/// evaluated at `operand_values`.
///
/// The result has one entry per operand, except for leaves, which have no
/// rule and yield none.
pub fn local_gradients(operation: Operation, operand_values: &[f64]) -> SmallVec<[f64; 2]> {
    match operation {
        Operation::None => SmallVec::new(),
        Operation::Add => operand_values.iter().map(|_| 1.0).collect(),
        Operation::Subtract => operand_values
            .iter()
            .enumerate()
            .map(|(i, _)| if i == 0 { 1.0 } else { -1.0 })
            .collect(),
        // positions, not identities: `x * x` gives each slot the other's value
        Operation::Multiply => (0..operand_values.len())
            .map(|i| {
                operand_values
                    .iter()
                    .enumerate()
                    .filter(|(j, _)| *j != i)
                    .map(|(_, v)| *v)
                    .product::<f64>()
            })
            .collect(),
        Operation::Power { exponent } => operand_values
            .first()
            .map(|base| exponent * base.powf(exponent - 1.0))
            .into_iter()
            .collect(),
        Operation::Tanh => operand_values
            .first()
            .map(|v| {
                let t = v.tanh();
                1.0 - t * t
            })
            .into_iter()
            .collect(),
    }
}

/// Runs the backward rule of `node`: reads its (complete) gradient and adds
/// each operand's share to that operand's gradient.
pub fn propagate(node: &Node) {
    let (upstream, operation, operands) = {
        let guard = node.read_data();
        (guard.gradient, guard.operation, guard.operands.clone())
    };
    if operands.is_empty() {
        return;
    }

    let operand_values: SmallVec<[f64; 2]> = operands.iter().map(Node::value).collect();
    let locals = local_gradients(operation, &operand_values);
    log::trace!(
        "{} node `{}`: upstream {} over {} operands",
        operation.name(),
        node.label(),
        upstream,
        operands.len()
    );

    for (operand, local) in operands.iter().zip(locals) {
        operand.accumulate_gradient(local * upstream);
    }
}
