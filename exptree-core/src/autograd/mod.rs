//! Reverse traversal of the computation graph.
//!
//! [`backpropagate`] seeds the root with `1.0` and visits nodes root-first so
//! that a node's gradient has received every consumer's contribution before
//! its own rule pushes it further down.

pub mod backward_op;
pub mod grad_check;

use crate::error::ExpTreeError;
use crate::graph::topological_order;
use crate::node::Node;

/// Computes ∂root/∂n for every node `n` reachable from `root`.
///
/// Nothing is zeroed: contributions are added to whatever gradient the nodes
/// already hold. Call [`zero_gradient`] first when reusing part of a graph.
pub fn backpropagate(root: &Node) -> Result<(), ExpTreeError> {
    let sorted_nodes = topological_order(root, true)?;
    log::debug!(
        "Backpropagating from `{}` through {} nodes",
        root.label(),
        sorted_nodes.len()
    );

    root.set_gradient(1.0);
    for node in sorted_nodes.iter() {
        backward_op::propagate(node);
    }
    Ok(())
}

/// Resets the gradient of every node reachable from `root` to zero.
pub fn zero_gradient(root: &Node) -> Result<(), ExpTreeError> {
    for node in topological_order(root, false)? {
        node.set_gradient(0.0);
    }
    Ok(())
}

#[cfg(test)]
#[path = "autograd_test.rs"]
mod tests;
