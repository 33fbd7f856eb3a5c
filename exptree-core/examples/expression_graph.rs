// Builds a small neuron-shaped expression by hand, backpropagates through it
// and prints the graph in DOT.
//
// cargo run --example expression_graph | dot -Tsvg > graph.svg

use exptree_core::viz::to_dot;
use exptree_core::{add_op, backpropagate, mul_op, tanh_op, ExpTreeError, Node};

fn main() -> Result<(), ExpTreeError> {
    let x1 = Node::new(2.0, "x1");
    let x2 = Node::new(0.0, "x2");
    let w1 = Node::new(-3.0, "w1");
    let w2 = Node::new(1.0, "w2");
    let b = Node::new(6.881_373_587_019_543, "b");

    let x1w1 = mul_op(&[x1.clone(), w1.clone()])?.with_label("x1w1");
    let x2w2 = mul_op(&[x2.clone(), w2.clone()])?.with_label("x2w2");
    let sum = add_op(&[x1w1, x2w2])?.with_label("x1w1 + x2w2");
    let n = add_op(&[sum, b.clone()])?.with_label("n");
    let o = tanh_op(&n).with_label("o");

    backpropagate(&o)?;

    for node in [&x1, &x2, &w1, &w2, &b, &o] {
        eprintln!("{}", node);
    }
    println!("{}", to_dot(&o)?);
    Ok(())
}
