use crate::autograd;
use crate::error::ExpTreeError;
use crate::node::Node;

impl Node {
    /// Runs backpropagation rooted at this node.
    ///
    /// See [`autograd::backpropagate`]: gradients already present on the
    /// reachable nodes are not cleared first.
    pub fn backward(&self) -> Result<(), ExpTreeError> {
        autograd::backpropagate(self)
    }

    /// Clears the gradient of this node only.
    pub fn zero_grad(&self) {
        self.set_gradient(0.0);
    }

    /// Clears the gradient of every node reachable from this one.
    pub fn zero_grad_graph(&self) -> Result<(), ExpTreeError> {
        autograd::zero_gradient(self)
    }
}
