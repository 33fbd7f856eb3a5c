use crate::node::Node;
use crate::types::Operation;

impl Node {
    pub fn value(&self) -> f64 {
        self.read_data().value
    }

    /// Overwrites the value. Dependents built earlier keep their own values.
    pub fn set_value(&self, value: f64) {
        self.write_data().value = value;
    }

    pub fn gradient(&self) -> f64 {
        self.read_data().gradient
    }

    pub fn set_gradient(&self, gradient: f64) {
        self.write_data().gradient = gradient;
    }

    /// Adds `delta` into the gradient. Contributions from every path to the
    /// root are summed this way.
    pub fn accumulate_gradient(&self, delta: f64) {
        self.write_data().gradient += delta;
    }

    pub fn label(&self) -> String {
        self.read_data().label.clone()
    }

    pub fn set_label(&self, label: impl Into<String>) {
        self.write_data().label = label.into();
    }

    /// Sets the label and hands the node back, for use in expression chains.
    pub fn with_label(self, label: impl Into<String>) -> Self {
        self.set_label(label);
        self
    }

    pub fn operation(&self) -> Operation {
        self.read_data().operation
    }

    /// Clones of the operand handles, in operator order.
    pub fn operands(&self) -> Vec<Node> {
        self.read_data().operands.to_vec()
    }

    pub fn is_leaf(&self) -> bool {
        self.read_data().operands.is_empty()
    }
}
