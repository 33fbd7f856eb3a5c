// Fits a 3-4-4-1 perceptron to four labelled samples with plain SGD.

use exptree_core::nn::{sum_squared_error, Mlp, Module};
use exptree_core::optim::{DescentConfig, Optimizer, Sgd};
use exptree_core::{backpropagate, ExpTreeError, Node};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), ExpTreeError> {
    let xs = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];

    let mut rng = StdRng::seed_from_u64(7);
    let mlp = Mlp::with_rng("demo", 3, &[4, 4, 1], &mut rng);
    let config = DescentConfig::default()
        .with_learning_rate(0.05)
        .with_passes(200);
    let mut optimizer = Sgd::from_config(mlp.parameters(), &config);

    for epoch in 0..config.passes {
        optimizer.zero_grad();

        let mut predictions = Vec::with_capacity(xs.len());
        for x in xs.iter() {
            let inputs: Vec<Node> = x.iter().map(|&v| Node::leaf(v)).collect();
            predictions.extend(mlp.forward(&inputs)?);
        }
        let targets: Vec<Node> = ys.iter().map(|&y| Node::leaf(y)).collect();
        let loss = sum_squared_error(&predictions, &targets)?;

        backpropagate(&loss)?;
        optimizer.step()?;

        if epoch % 20 == 0 || epoch + 1 == config.passes {
            let outputs: Vec<String> = predictions
                .iter()
                .map(|p| format!("{:+.3}", p.value()))
                .collect();
            println!(
                "epoch {:>3}  loss {:.6}  predictions [{}]",
                epoch,
                loss.value(),
                outputs.join(", ")
            );
        }
    }
    Ok(())
}
