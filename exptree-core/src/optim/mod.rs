// exptree-core/src/optim/mod.rs

//! Gradient-descent updates.
//!
//! [`optimize`] descends on every node reachable from a root, intermediate
//! nodes included. [`Sgd`] restricts the update to an explicit parameter list
//! behind the [`Optimizer`] trait.

pub mod config;
pub mod descent;
pub mod optimizer_trait;
pub mod sgd;

// Re-export key items for easier access
pub use config::DescentConfig;
pub use descent::{optimize, optimize_with};
pub use optimizer_trait::Optimizer;
pub use sgd::Sgd;
