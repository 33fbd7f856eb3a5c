use crate::error::ExpTreeError;
use crate::node::Node;

/// The base trait for neurons, layers and perceptrons.
///
/// A forward pass builds a fresh graph above the module's parameter nodes on
/// every call; the parameters themselves are long-lived leaves shared by all
/// those graphs.
pub trait Module: std::fmt::Debug {
    /// Builds the forward graph for `inputs` and returns the output nodes.
    fn forward(&self, inputs: &[Node]) -> Result<Vec<Node>, ExpTreeError>;

    /// Handles to every learnable node, children's parameters flattened in order.
    fn parameters(&self) -> Vec<Node>;

    /// Parameters paired with their labels.
    fn named_parameters(&self) -> Vec<(String, Node)> {
        self.parameters()
            .into_iter()
            .map(|param| (param.label(), param))
            .collect()
    }

    /// Clears the gradient of every parameter.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }
}
