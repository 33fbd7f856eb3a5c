use crate::error::ExpTreeError;
use crate::node::Node;
use crate::optim::config::DescentConfig;
use crate::optim::optimizer_trait::Optimizer;

/// Plain gradient descent over an explicit list of parameter nodes.
///
/// Unlike [`crate::optim::optimize`], nodes outside the list (inputs,
/// intermediate results, targets) are never modified.
#[derive(Debug)]
pub struct Sgd {
    params: Vec<Node>,
    lr: f64,
}

impl Sgd {
    /// Creates a new `Sgd` over `params`. The sign of `lr` is ignored.
    pub fn new(params: impl IntoIterator<Item = Node>, lr: f64) -> Self {
        Sgd {
            params: params.into_iter().collect(),
            lr,
        }
    }

    /// Uses the learning rate of `config`; `passes` does not apply to a
    /// single `step`.
    pub fn from_config(params: impl IntoIterator<Item = Node>, config: &DescentConfig) -> Self {
        Sgd::new(params, config.learning_rate)
    }

    /// Adds more parameters to the managed set.
    pub fn add_params(&mut self, params: impl IntoIterator<Item = Node>) {
        self.params.extend(params);
    }
}

impl Optimizer for Sgd {
    fn step(&mut self) -> Result<(), ExpTreeError> {
        if self.params.is_empty() {
            log::warn!("Sgd::step called with no parameters");
            return Ok(());
        }
        let step_size = self.lr.abs();
        for param in self.params.iter() {
            let gradient = param.gradient();
            param.set_value(param.value() - step_size * gradient);
        }
        log::debug!(
            "Sgd step over {} parameters (lr {})",
            self.params.len(),
            step_size
        );
        Ok(())
    }

    fn zero_grad(&mut self) {
        for param in self.params.iter() {
            param.zero_grad();
        }
    }

    fn parameters(&self) -> &[Node] {
        &self.params
    }

    fn learning_rate(&self) -> f64 {
        self.lr
    }

    fn set_learning_rate(&mut self, learning_rate: f64) {
        self.lr = learning_rate;
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
