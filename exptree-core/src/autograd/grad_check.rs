use thiserror::Error;

use crate::autograd::backpropagate;
use crate::error::ExpTreeError;
use crate::node::Node;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },

    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ExpTreeError),

    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(ExpTreeError),

    #[error("Graph error during gradient check: {0}")]
    GraphError(ExpTreeError),
}

impl From<ExpTreeError> for GradCheckError {
    fn from(err: ExpTreeError) -> Self {
        GradCheckError::GraphError(err)
    }
}

/// Checks analytical gradients against central finite differences.
///
/// `func` is called on fresh leaves holding `inputs`; its result is
/// backpropagated once to read the analytical gradient of every input. Then,
/// for each input `i`, `func` is re-evaluated on fresh leaves with input `i`
/// shifted by `±epsilon`, giving `(f(x+ε) − f(x−ε)) / 2ε`.
///
/// Two gradients agree when their absolute difference is within `tolerance`
/// or their relative difference is.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Node]) -> Result<Node, ExpTreeError>,
{
    let make_leaves = |values: &[f64]| -> Vec<Node> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| Node::new(v, format!("x{}", i)))
            .collect()
    };

    // --- Analytical pass ---
    let leaves = make_leaves(inputs);
    let output = func(&leaves).map_err(GradCheckError::ForwardPassError)?;
    backpropagate(&output)
        .map_err(GradCheckError::BackwardPassError)?;
    let analytical: Vec<f64> = leaves.iter().map(Node::gradient).collect();

    // --- Numerical pass, one input at a time ---
    for (input_index, &analytical_grad) in analytical.iter().enumerate() {
        let evaluate = |shift: f64| -> Result<f64, GradCheckError> {
            let mut shifted = inputs.to_vec();
            shifted[input_index] += shift;
            let out = func(&make_leaves(&shifted))
                .map_err(GradCheckError::ForwardPassError)?;
            Ok(out.value())
        };
        let loss_plus = evaluate(epsilon)?;
        let loss_minus = evaluate(-epsilon)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }

        let agrees = approx::relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        );
        if !agrees {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
        log::trace!(
            "grad check input {}: analytical {} numerical {}",
            input_index,
            analytical_grad,
            numerical_grad
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Operation;

    #[test]
    fn test_check_grad_accepts_correct_rule() {
        let func = |inputs: &[Node]| Ok(&(&inputs[0] * &inputs[1]) + &inputs[0]);
        assert_eq!(check_grad(func, &[1.5, -2.0], 1e-6, 1e-6), Ok(()));
    }

    #[test]
    fn test_check_grad_rejects_wrong_rule() {
        // A node that claims to be `x * x` but only records `x` once: its
        // analytical gradient is `x` instead of `2x`.
        let func = |inputs: &[Node]| {
            let x = &inputs[0];
            let wrong = Node::leaf(x.value() * x.value());
            wrong.attach(Operation::Multiply, vec![x.clone(), Node::leaf(x.value())]);
            Ok(wrong)
        };
        match check_grad(func, &[3.0], 1e-6, 1e-6) {
            Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                ..
            }) => {
                assert_eq!(input_index, 0);
                assert_eq!(analytical_grad, 3.0);
            }
            other => panic!("Expected GradientMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_check_grad_forward_error() {
        let func = |_inputs: &[Node]| crate::ops::add_op(&[]);
        assert!(matches!(
            check_grad(func, &[1.0], 1e-6, 1e-6),
            Err(GradCheckError::ForwardPassError(ExpTreeError::EmptyOperands { .. }))
        ));
    }

    #[test]
    fn test_check_grad_non_finite_numerical() {
        // sqrt(-ε) is NaN
        let func = |inputs: &[Node]| Ok(inputs[0].powf(0.5));
        assert!(matches!(
            check_grad(func, &[0.0], 1e-6, 1e-6),
            Err(GradCheckError::NumericalGradNaNOrInfinite { .. })
        ));
    }

    #[test]
    fn test_check_grad_non_finite_analytical() {
        // d/dx x^-1 at 0 is -inf while the central difference stays finite
        let func = |inputs: &[Node]| Ok(inputs[0].powf(-1.0));
        assert!(matches!(
            check_grad(func, &[0.0], 1e-6, 1e-6),
            Err(GradCheckError::AnalyticalGradNaNOrInfinite { input_index: 0, .. })
        ));
    }
}
