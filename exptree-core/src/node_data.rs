// src/node_data.rs
use std::rc::Rc;

use smallvec::SmallVec;

use crate::node::Node;
use crate::types::Operation;

/// Operand storage; almost every operator is unary or binary.
pub type Operands = SmallVec<[Node; 2]>;

/// Internal state of a graph node.
///
/// Wrapped in `Rc<RefCell<NodeData>>` by [`Node`] so that several consumers can
/// share one operand and backpropagation can write gradients through any handle.
#[derive(Debug)]
pub struct NodeData {
    /// Display label, not required to be unique.
    pub(crate) label: String,
    /// Current scalar value, fixed at construction until an optimizer step.
    pub(crate) value: f64,
    /// Partial derivative of the last traversal root with respect to this node.
    pub(crate) gradient: f64,
    /// Rule that produced this node (`Operation::None` for leaves).
    pub(crate) operation: Operation,
    /// Operands in the order the operator received them. Empty for leaves.
    pub(crate) operands: Operands,
}

impl NodeData {
    /// Creates leaf data: zero gradient, no operation, no operands.
    pub fn new(value: f64, label: impl Into<String>) -> Self {
        NodeData {
            label: label.into(),
            value,
            gradient: 0.0,
            operation: Operation::None,
            operands: SmallVec::new(),
        }
    }
}

// Dropping a long chain through the default recursive drop would overflow the
// stack; operands whose last handle is held here are unwound iteratively.
impl Drop for NodeData {
    fn drop(&mut self) {
        let mut pending: Vec<Node> = self.operands.drain(..).collect();
        while let Some(node) = pending.pop() {
            if let Ok(cell) = Rc::try_unwrap(node.data) {
                let mut inner = cell.into_inner();
                pending.extend(inner.operands.drain(..));
            }
        }
    }
}
