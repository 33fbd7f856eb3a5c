use std::fmt;

/// The rule that produced a node.
///
/// Together with the operand handles stored on the node this is everything the
/// backward dispatch in [`crate::autograd::backward_op`] needs; no per-node
/// closure is kept.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Operation {
    /// Leaves: inputs, parameters and constants.
    #[default]
    None,
    Add,
    Subtract,
    Multiply,
    /// `base ^ exponent`, the exponent being a constant captured at construction.
    Power { exponent: f64 },
    Tanh,
}

impl Operation {
    /// Short name used in error messages and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::None => "none",
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Power { .. } => "power",
            Operation::Tanh => "tanh",
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Operation::None)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::None => Ok(()),
            Operation::Add => write!(f, "+"),
            Operation::Subtract => write!(f, "-"),
            Operation::Multiply => write!(f, "*"),
            Operation::Power { exponent } => write!(f, "**{}", exponent),
            Operation::Tanh => write!(f, "tanh"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_symbols() {
        assert_eq!(Operation::None.to_string(), "");
        assert_eq!(Operation::Add.to_string(), "+");
        assert_eq!(Operation::Subtract.to_string(), "-");
        assert_eq!(Operation::Multiply.to_string(), "*");
        assert_eq!(Operation::Power { exponent: 2.0 }.to_string(), "**2");
        assert_eq!(Operation::Power { exponent: 0.5 }.to_string(), "**0.5");
        assert_eq!(Operation::Tanh.to_string(), "tanh");
    }

    #[test]
    fn test_default_is_leaf() {
        assert!(Operation::default().is_leaf());
        assert!(!Operation::Tanh.is_leaf());
        assert_eq!(Operation::Power { exponent: 3.0 }.name(), "power");
    }
}
