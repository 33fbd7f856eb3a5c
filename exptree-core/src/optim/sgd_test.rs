use super::*;
use crate::autograd::backpropagate;
use crate::ops::squared_difference_op;
use approx::assert_relative_eq;

#[test]
fn test_sgd_basic_step() -> Result<(), ExpTreeError> {
    let w = Node::new(1.0, "w");
    let b = Node::new(2.0, "b");
    w.set_gradient(0.5);
    b.set_gradient(-1.0);

    let mut optimizer = Sgd::new(vec![w.clone(), b.clone()], 0.1);
    optimizer.step()?;

    assert_relative_eq!(w.value(), 1.0 - 0.05);
    assert_relative_eq!(b.value(), 2.0 + 0.1);
    Ok(())
}

#[test]
fn test_sgd_leaves_non_parameters_alone() -> Result<(), ExpTreeError> {
    let w = Node::new(3.0, "w");
    let x = Node::new(2.0, "x");
    let target = Node::new(4.0, "target");
    let prediction = &w * &x;
    let loss = squared_difference_op(&prediction, &target);

    let mut optimizer = Sgd::new(vec![w.clone()], 0.01);
    optimizer.zero_grad();
    backpropagate(&loss)?;
    // dL/dw = 2 (wx - t) x = 2 * 2 * 2
    assert_relative_eq!(w.gradient(), 8.0);
    optimizer.step()?;

    assert_relative_eq!(w.value(), 3.0 - 0.08);
    assert_eq!(x.value(), 2.0);
    assert_eq!(target.value(), 4.0);
    assert_eq!(prediction.value(), 6.0);
    Ok(())
}

#[test]
fn test_sgd_zero_grad() {
    let w = Node::new(1.0, "w");
    w.set_gradient(3.0);
    let mut optimizer = Sgd::new(vec![w.clone()], 0.1);
    optimizer.zero_grad();
    assert_eq!(w.gradient(), 0.0);
}

#[test]
fn test_sgd_learning_rate_accessors() -> Result<(), ExpTreeError> {
    let w = Node::new(1.0, "w");
    w.set_gradient(1.0);
    let mut optimizer = Sgd::from_config(vec![w.clone()], &DescentConfig::new(0.1));
    assert_eq!(optimizer.learning_rate(), 0.1);
    optimizer.set_learning_rate(-0.5);
    optimizer.step()?;
    assert_relative_eq!(w.value(), 0.5);
    Ok(())
}

#[test]
fn test_sgd_empty_is_noop() -> Result<(), ExpTreeError> {
    let mut optimizer = Sgd::new(Vec::new(), 0.1);
    optimizer.step()?;
    assert!(optimizer.parameters().is_empty());
    optimizer.add_params(vec![Node::leaf(1.0)]);
    assert_eq!(optimizer.parameters().len(), 1);
    Ok(())
}

#[test]
fn test_sgd_converges_on_linear_fit() -> Result<(), ExpTreeError> {
    // fit y = 3x with a single weight
    let w = Node::new(0.0, "w");
    let mut optimizer = Sgd::new(vec![w.clone()], 0.05);
    let data = [(1.0, 3.0), (2.0, 6.0), (-1.0, -3.0)];
    for _ in 0..200 {
        optimizer.zero_grad();
        for &(x, y) in data.iter() {
            let prediction = &w * &Node::leaf(x);
            let loss = squared_difference_op(&prediction, &Node::leaf(y));
            backpropagate(&loss)?;
        }
        optimizer.step()?;
    }
    assert_relative_eq!(w.value(), 3.0, epsilon = 1e-6);
    Ok(())
}
