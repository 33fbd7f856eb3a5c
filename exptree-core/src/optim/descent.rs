use crate::autograd::{backpropagate, zero_gradient};
use crate::error::ExpTreeError;
use crate::graph::topological_order;
use crate::node::Node;
use crate::optim::config::DescentConfig;

/// Runs `passes` rounds of gradient descent on every node reachable from `root`.
///
/// Each pass clears the reachable gradients, backpropagates from `root` and
/// then applies `value -= |learning_rate| · gradient` to every reachable node,
/// leaves and intermediate nodes alike. Intermediate values are not
/// recomputed from their operands afterwards.
///
/// To update only weights and biases, use [`crate::optim::Sgd`] with an
/// explicit parameter list instead.
pub fn optimize(learning_rate: f64, root: &Node, passes: usize) -> Result<(), ExpTreeError> {
    let config = DescentConfig::new(learning_rate).with_passes(passes);
    optimize_with(&config, root)
}

/// [`optimize`] driven by a [`DescentConfig`].
pub fn optimize_with(config: &DescentConfig, root: &Node) -> Result<(), ExpTreeError> {
    let step_size = config.step_size();
    for pass in 0..config.passes {
        zero_gradient(root)?;
        backpropagate(root)?;
        let nodes = topological_order(root, true)?;
        log::debug!(
            "Descent pass {}/{}: updating {} nodes with step {}",
            pass + 1,
            config.passes,
            nodes.len(),
            step_size
        );
        for node in nodes.iter() {
            let gradient = node.gradient();
            node.set_value(node.value() - step_size * gradient);
        }
    }
    Ok(())
}
