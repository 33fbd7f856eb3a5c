use rand::Rng;

use crate::error::ExpTreeError;
use crate::nn::layer::Layer;
use crate::nn::module::Module;
use crate::node::Node;

/// A multi-layer perceptron: layers chained so each one's outputs feed the next.
#[derive(Debug, Clone)]
pub struct Mlp {
    label: String,
    inputs: usize,
    layers: Vec<Layer>,
}

impl Mlp {
    /// `sizes` lists the output width of every layer in order; the first layer
    /// reads `inputs` values. Layers are labelled `mlp_<label>_layer_<i>`.
    pub fn new(label: impl Into<String>, inputs: usize, sizes: &[usize]) -> Self {
        Mlp::with_rng(label, inputs, sizes, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(
        label: impl Into<String>,
        inputs: usize,
        sizes: &[usize],
        rng: &mut R,
    ) -> Self {
        let label = label.into();
        let mut layers = Vec::with_capacity(sizes.len());
        let mut width = inputs;
        for (i, &size) in sizes.iter().enumerate() {
            layers.push(Layer::with_rng(
                format!("mlp_{}_layer_{}", label, i),
                width,
                size,
                rng,
            ));
            width = size;
        }
        Mlp {
            label,
            inputs,
            layers,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn num_inputs(&self) -> usize {
        self.inputs
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }
}

impl Module for Mlp {
    /// With no layers the inputs are returned unchanged.
    fn forward(&self, inputs: &[Node]) -> Result<Vec<Node>, ExpTreeError> {
        if inputs.len() != self.inputs {
            return Err(ExpTreeError::DimensionMismatch {
                expected: self.inputs,
                actual: inputs.len(),
            });
        }
        let mut activations = inputs.to_vec();
        for layer in &self.layers {
            activations = layer.forward(&activations)?;
        }
        Ok(activations)
    }

    fn parameters(&self) -> Vec<Node> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
