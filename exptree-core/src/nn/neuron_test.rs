use super::*;
use crate::autograd::backpropagate;
use crate::types::Operation;
use crate::utils::testing::check_gradients_near;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn inputs(values: &[f64]) -> Vec<Node> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| Node::new(v, format!("x{}", i)))
        .collect()
}

#[test]
fn test_neuron_initialisation() {
    let mut rng = StdRng::seed_from_u64(7);
    let neuron = Neuron::with_rng("n", 4, &mut rng);
    assert_eq!(neuron.num_inputs(), 4);
    for weight in neuron.weights() {
        assert_eq!(weight.value(), 0.25);
    }
    let bias = neuron.bias().value();
    assert!((0.0..1.0).contains(&bias));
    assert_eq!(neuron.weights()[2].label(), "n_w2");
    assert_eq!(neuron.bias().label(), "n_bias");
}

#[test]
fn test_neuron_output_value() -> Result<(), ExpTreeError> {
    let neuron = Neuron::new("n", 2);
    neuron.bias().set_value(0.1);
    let x = inputs(&[1.0, -3.0]);
    let out = neuron.output(&x)?;
    let expected = (1.0 * 0.5 + -3.0 * 0.5 + 0.1f64).tanh();
    assert_relative_eq!(out.value(), expected);
    assert_eq!(out.label(), "n_output");
    assert_eq!(out.operation(), Operation::Tanh);
    Ok(())
}

#[test]
fn test_neuron_graph_labels() -> Result<(), ExpTreeError> {
    let neuron = Neuron::new("n", 2);
    let out = neuron.output(&inputs(&[1.0, 2.0]))?;
    let biased = &out.operands()[0];
    assert_eq!(biased.label(), "n_biased");
    let product_sum = &biased.operands()[0];
    assert_eq!(product_sum.label(), "n_product_sum");
    let products = product_sum.operands();
    assert_eq!(products[0].label(), "n_in0w0");
    assert_eq!(products[1].label(), "n_in1w1");
    Ok(())
}

#[test]
fn test_neuron_gradients() -> Result<(), ExpTreeError> {
    let neuron = Neuron::new("n", 2);
    neuron.bias().set_value(0.0);
    let x = inputs(&[0.4, -0.2]);
    let out = neuron.output(&x)?;
    backpropagate(&out)?;

    let pre = 0.4 * 0.5 + -0.2 * 0.5;
    let dtanh = 1.0 - f64::tanh(pre).powi(2);
    check_gradients_near(
        &neuron.parameters(),
        &[0.4 * dtanh, -0.2 * dtanh, dtanh],
        1e-12,
    );
    assert_relative_eq!(x[0].gradient(), 0.5 * dtanh);
    Ok(())
}

#[test]
fn test_neuron_dimension_mismatch() {
    let neuron = Neuron::new("n", 3);
    let err = neuron.output(&inputs(&[1.0, 2.0])).err();
    assert_eq!(
        err,
        Some(ExpTreeError::DimensionMismatch {
            expected: 3,
            actual: 2,
        })
    );
}

#[test]
fn test_neuron_parameters_order() {
    let neuron = Neuron::new("n", 2);
    let params = neuron.parameters();
    assert_eq!(params.len(), 3);
    assert!(params[0].ptr_eq(&neuron.weights()[0]));
    assert!(params[2].ptr_eq(neuron.bias()));
    let names: Vec<String> = neuron
        .named_parameters()
        .into_iter()
        .map(|(n, _)| n)
        .collect();
    assert_eq!(names, vec!["n_w0", "n_w1", "n_bias"]);
}

#[test]
fn test_zero_width_neuron_outputs_tanh_of_bias() -> Result<(), ExpTreeError> {
    let neuron = Neuron::new("n", 0);
    neuron.bias().set_value(0.3);
    let out = neuron.output(&[])?;
    assert_relative_eq!(out.value(), 0.3f64.tanh());
    assert_eq!(out.operands()[0].operands()[0].label(), "n_product_sum");

    backpropagate(&out)?;
    assert_relative_eq!(neuron.bias().gradient(), 1.0 - 0.3f64.tanh().powi(2));
    assert_eq!(neuron.parameters().len(), 1);
    Ok(())
}
