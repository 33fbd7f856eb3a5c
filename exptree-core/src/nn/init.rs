//! In-place initialisers for parameter nodes.
//!
//! Each function overwrites node values only; labels, gradients and any
//! provenance the nodes carry are left alone.

use rand::Rng;
use rand_distr::{Distribution, Normal, Uniform};

use crate::error::ExpTreeError;
use crate::node::Node;

/// Sets every node to `value`.
pub fn constant_(nodes: &[Node], value: f64) {
    for node in nodes {
        node.set_value(value);
    }
}

pub fn zeros_(nodes: &[Node]) {
    constant_(nodes, 0.0)
}

/// Samples every node from `U[low, high)`.
///
/// # Errors
/// [`ExpTreeError::InvalidInitialization`] unless `low < high` and the range is finite.
pub fn uniform_<R: Rng + ?Sized>(
    nodes: &[Node],
    low: f64,
    high: f64,
    rng: &mut R,
) -> Result<(), ExpTreeError> {
    if !(low < high && (high - low).is_finite()) {
        return Err(ExpTreeError::InvalidInitialization(format!(
            "uniform_ requires finite low < high, got [{}, {})",
            low, high
        )));
    }
    let dist = Uniform::new(low, high);
    for node in nodes {
        node.set_value(dist.sample(rng));
    }
    Ok(())
}

/// Samples every node from `N(mean, std²)`.
///
/// # Errors
/// [`ExpTreeError::InvalidInitialization`] for a negative or non-finite `std`
/// or a non-finite `mean`.
pub fn normal_<R: Rng + ?Sized>(
    nodes: &[Node],
    mean: f64,
    std: f64,
    rng: &mut R,
) -> Result<(), ExpTreeError> {
    if !mean.is_finite() {
        return Err(ExpTreeError::InvalidInitialization(format!(
            "normal_ requires a finite mean, got {}",
            mean
        )));
    }
    if !(std >= 0.0 && std.is_finite()) {
        return Err(ExpTreeError::InvalidInitialization(format!(
            "normal_ requires a finite, non-negative std, got {}",
            std
        )));
    }
    let dist = Normal::new(mean, std).map_err(|e| {
        ExpTreeError::InvalidInitialization(format!("normal_ with std {}: {}", std, e))
    })?;
    for node in nodes {
        node.set_value(dist.sample(rng));
    }
    Ok(())
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
