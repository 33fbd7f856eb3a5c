use rand::Rng;

use crate::error::ExpTreeError;
use crate::nn::module::Module;
use crate::nn::neuron::Neuron;
use crate::node::Node;

/// A row of neurons that all read the same inputs.
#[derive(Debug, Clone)]
pub struct Layer {
    label: String,
    neurons: Vec<Neuron>,
}

impl Layer {
    /// Creates `outputs` neurons of width `inputs`, labelled `<label>_n<i>`.
    pub fn new(label: impl Into<String>, inputs: usize, outputs: usize) -> Self {
        Layer::with_rng(label, inputs, outputs, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(
        label: impl Into<String>,
        inputs: usize,
        outputs: usize,
        rng: &mut R,
    ) -> Self {
        let label = label.into();
        let neurons = (0..outputs)
            .map(|i| Neuron::with_rng(format!("{}_n{}", label, i), inputs, rng))
            .collect();
        Layer { label, neurons }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn num_outputs(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    fn forward(&self, inputs: &[Node]) -> Result<Vec<Node>, ExpTreeError> {
        self.neurons
            .iter()
            .map(|neuron| neuron.output(inputs))
            .collect()
    }

    fn parameters(&self) -> Vec<Node> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
