use crate::error::ExpTreeError;
use crate::node::Node;

/// Common interface of optimizers over an explicit parameter set.
pub trait Optimizer {
    /// Applies one update to every managed parameter from its current gradient.
    fn step(&mut self) -> Result<(), ExpTreeError>;

    /// Clears the gradients of the managed parameters.
    ///
    /// Call before each backward pass: backpropagation accumulates.
    fn zero_grad(&mut self);

    /// The managed parameters, in registration order.
    fn parameters(&self) -> &[Node];

    fn learning_rate(&self) -> f64;

    fn set_learning_rate(&mut self, learning_rate: f64);
}
