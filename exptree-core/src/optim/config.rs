/// Hyperparameters of a gradient-descent run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescentConfig {
    /// Step size. Only its magnitude is used: steps always move against the gradient.
    pub learning_rate: f64,
    /// Number of backpropagate-then-update passes per call.
    pub passes: usize,
}

impl Default for DescentConfig {
    fn default() -> Self {
        DescentConfig {
            learning_rate: 0.01,
            passes: 1,
        }
    }
}

impl DescentConfig {
    pub fn new(learning_rate: f64) -> Self {
        DescentConfig {
            learning_rate,
            ..Default::default()
        }
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_passes(mut self, passes: usize) -> Self {
        self.passes = passes;
        self
    }

    /// The learning rate with its sign normalised away.
    pub fn step_size(&self) -> f64 {
        self.learning_rate.abs()
    }
}
