use std::fmt;

use crate::node::Node;

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        write!(
            f,
            "[Node `{}` | Data `{:.4}` | Gradient `{:.4}`]",
            guard.label, guard.value, guard.gradient
        )
    }
}

// Operands are summarised by label so that Debug output stays bounded on deep graphs.
impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        let operands: Vec<String> = guard
            .operands
            .iter()
            .map(|operand| operand.read_data().label.clone())
            .collect();
        f.debug_struct("Node")
            .field("label", &guard.label)
            .field("value", &guard.value)
            .field("gradient", &guard.gradient)
            .field("operation", &guard.operation)
            .field("operands", &operands)
            .finish()
    }
}
