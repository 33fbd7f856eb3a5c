//! # exptree-core
//!
//! A reverse-mode scalar differentiation engine. Client code builds a graph of
//! [`Node`]s bottom-up through the operators in [`ops`], runs a single reverse
//! traversal with [`autograd::backpropagate`] and then updates values with
//! [`optim::optimize`] or an [`optim::Optimizer`].

// Core modules of the crate
pub mod autograd;
pub mod node;
pub mod node_data;
pub mod ops;
pub mod types;

pub mod error;
pub mod graph;
pub mod nn;
pub mod optim;
pub mod utils;
pub mod viz;

// Re-export the handle type so it is reachable as `exptree_core::Node`
pub use error::ExpTreeError;
pub use node::Node;
pub use types::Operation;

pub use autograd::{backpropagate, zero_gradient};
pub use graph::topological_order;
pub use ops::{add_op, mul_op, pow_op, squared_difference_op, sub_op, tanh_op};
pub use optim::optimize;
