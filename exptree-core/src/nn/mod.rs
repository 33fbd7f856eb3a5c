// src/nn/mod.rs
// Neuron / layer / perceptron composition built on the engine's operators.

pub mod init;
pub mod layer;
pub mod losses;
pub mod mlp;
pub mod module;
pub mod neuron;

// Re-export common items
pub use layer::Layer;
pub use losses::{sum_squared_error, Reduction, SquaredErrorLoss};
pub use mlp::Mlp;
pub use module::Module;
pub use neuron::Neuron;
