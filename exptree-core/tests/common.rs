use exptree_core::Node;

// Each integration test crate pulls in only the helpers it needs.
#[allow(dead_code)]
pub(crate) fn named(value: f64, label: &str) -> Node {
    Node::new(value, label)
}

/// Four three-feature samples with ±1 targets.
#[allow(dead_code)]
pub(crate) fn toy_dataset() -> (Vec<Vec<f64>>, Vec<f64>) {
    let xs = vec![
        vec![2.0, 3.0, -1.0],
        vec![3.0, -1.0, 0.5],
        vec![0.5, 1.0, 1.0],
        vec![1.0, 1.0, -1.0],
    ];
    let ys = vec![1.0, -1.0, -1.0, 1.0];
    (xs, ys)
}

#[allow(dead_code)]
pub(crate) fn labels(nodes: &[Node]) -> Vec<String> {
    nodes.iter().map(|n| n.label()).collect()
}
