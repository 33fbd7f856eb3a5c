use super::*;
use crate::autograd::backpropagate;
use crate::autograd::grad_check::check_grad;
use crate::error::ExpTreeError;
use approx::assert_relative_eq;

#[test]
fn test_pow_forward() {
    let base = Node::new(2.0, "base");
    let exponent = Node::new(3.0, "exp");
    let p = pow_op(&base, &exponent);
    assert_eq!(p.value(), 8.0);
    assert_eq!(p.operation(), Operation::Power { exponent: 3.0 });
    // exponent is a constant, not an operand
    let operands = p.operands();
    assert_eq!(operands.len(), 1);
    assert!(operands[0].ptr_eq(&base));
}

#[test]
fn test_pow_backward() -> Result<(), ExpTreeError> {
    let base = Node::new(2.0, "base");
    let exponent = Node::new(3.0, "exp");
    let p = pow_op(&base, &exponent);
    backpropagate(&p)?;
    assert_relative_eq!(base.gradient(), 12.0);
    assert_eq!(exponent.gradient(), 0.0);
    Ok(())
}

#[test]
fn test_pow_exponent_is_captured() -> Result<(), ExpTreeError> {
    let base = Node::new(3.0, "base");
    let exponent = Node::new(2.0, "exp");
    let p = pow_op(&base, &exponent);
    exponent.set_value(10.0);
    assert_eq!(p.value(), 9.0);
    backpropagate(&p)?;
    assert_relative_eq!(base.gradient(), 6.0);
    Ok(())
}

#[test]
fn test_powf_fractional_and_negative() -> Result<(), ExpTreeError> {
    let x = Node::new(4.0, "x");
    let root = powf_op(&x, 0.5);
    assert_relative_eq!(root.value(), 2.0);
    backpropagate(&root)?;
    assert_relative_eq!(x.gradient(), 0.25);

    let y = Node::new(2.0, "y");
    let inv = powf_op(&y, -1.0);
    assert_relative_eq!(inv.value(), 0.5);
    backpropagate(&inv)?;
    assert_relative_eq!(y.gradient(), -0.25);
    Ok(())
}

#[test]
fn test_pow_negative_base_fractional_exponent_is_nan() {
    let x = Node::new(-4.0, "x");
    let p = powf_op(&x, 0.5);
    assert!(p.value().is_nan());
}

#[test]
fn test_pow_grad_check() {
    let func = |inputs: &[Node]| Ok(powf_op(&inputs[0], 3.0));
    let result = check_grad(func, &[1.7], 1e-6, 1e-5);
    assert!(result.is_ok(), "grad check failed: {:?}", result.err());

    let func = |inputs: &[Node]| Ok(powf_op(&inputs[0], 0.5));
    let result = check_grad(func, &[2.3], 1e-6, 1e-5);
    assert!(result.is_ok(), "grad check failed: {:?}", result.err());
}
