use rand::Rng;

use crate::error::ExpTreeError;
use crate::nn::module::Module;
use crate::node::Node;
use crate::ops::{add_op, mul_op, tanh_op};

/// A single `tanh(Σ xᵢ·wᵢ + b)` unit.
#[derive(Debug, Clone)]
pub struct Neuron {
    label: String,
    weights: Vec<Node>,
    bias: Node,
}

impl Neuron {
    /// Weights start at `1 / inputs`; the bias is drawn from `[0, 1)`.
    pub fn new(label: impl Into<String>, inputs: usize) -> Self {
        Neuron::with_rng(label, inputs, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(label: impl Into<String>, inputs: usize, rng: &mut R) -> Self {
        let label = label.into();
        let weights = (0..inputs)
            .map(|i| Node::new(1.0 / inputs as f64, format!("{}_w{}", label, i)))
            .collect();
        let bias = Node::new(rng.gen::<f64>(), format!("{}_bias", label));
        Neuron {
            label,
            weights,
            bias,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn num_inputs(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[Node] {
        &self.weights
    }

    pub fn bias(&self) -> &Node {
        &self.bias
    }

    /// Builds the graph of this neuron's activation for `inputs`.
    ///
    /// # Errors
    /// [`ExpTreeError::DimensionMismatch`] if `inputs` is not exactly as wide
    /// as the weight vector.
    pub fn output(&self, inputs: &[Node]) -> Result<Node, ExpTreeError> {
        if inputs.len() != self.weights.len() {
            return Err(ExpTreeError::DimensionMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
            });
        }

        let mut products = Vec::with_capacity(inputs.len());
        for (i, (input, weight)) in inputs.iter().zip(self.weights.iter()).enumerate() {
            let product = mul_op(&[input.clone(), weight.clone()])?
                .with_label(format!("{}_in{}w{}", self.label, i, i));
            products.push(product);
        }

        // an empty weighted sum is 0, so a zero-width neuron yields tanh(bias)
        let product_sum = if products.is_empty() {
            Node::new(0.0, format!("{}_product_sum", self.label))
        } else {
            add_op(&products)?
                .with_label(format!("{}_product_sum", self.label))
        };
        let biased = add_op(&[product_sum, self.bias.clone()])?
            .with_label(format!("{}_biased", self.label));
        let output = tanh_op(&biased);
        Ok(output.with_label(format!("{}_output", self.label)))
    }
}

impl Module for Neuron {
    fn forward(&self, inputs: &[Node]) -> Result<Vec<Node>, ExpTreeError> {
        Ok(vec![self.output(inputs)?])
    }

    /// Weights in input order, then the bias.
    fn parameters(&self) -> Vec<Node> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
