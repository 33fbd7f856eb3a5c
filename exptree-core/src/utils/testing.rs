use crate::node::Node;

/// Checks that each node's value is within `tolerance` of the expected value.
/// Panics on a length mismatch or the first value out of tolerance.
pub fn check_near(actual: &[Node], expected: &[f64], tolerance: f64) {
    assert_eq!(actual.len(), expected.len(), "Node count mismatch");

    for (i, (node, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let a = node.value();
        let diff = (a - e).abs();
        if !(diff <= tolerance) {
            panic!(
                "Value mismatch at index {} ({}): actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i,
                node.label(),
                a,
                e,
                diff,
                tolerance
            );
        }
    }
}

/// Same check against the nodes' gradients.
pub fn check_gradients_near(actual: &[Node], expected: &[f64], tolerance: f64) {
    assert_eq!(actual.len(), expected.len(), "Node count mismatch");

    for (i, (node, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let g = node.gradient();
        let diff = (g - e).abs();
        if !(diff <= tolerance) {
            panic!(
                "Gradient mismatch at index {} ({}): actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i,
                node.label(),
                g,
                e,
                diff,
                tolerance
            );
        }
    }
}

/// Labelled leaves `x0, x1, ...` holding `values`.
pub fn leaves(values: &[f64]) -> Vec<Node> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| Node::new(v, format!("x{}", i)))
        .collect()
}
