use crate::node::Node;
use crate::node_data::NodeData;
use crate::types::Operation;

impl Node {
    /// Builds a labelled leaf: zero gradient, no operation, no operands.
    pub fn new(value: f64, label: impl Into<String>) -> Self {
        Node::from_data(NodeData::new(value, label))
    }

    /// Builds an unlabelled leaf.
    pub fn leaf(value: f64) -> Self {
        Node::new(value, "")
    }

    /// Records the operation and operands that produced this node.
    ///
    /// Overwrites any previous record. Every operator calls this right after
    /// computing the result value; it may also be used to give a synthesized
    /// node real children later on.
    pub fn attach<I>(&self, operation: Operation, operands: I) -> &Self
    where
        I: IntoIterator<Item = Node>,
    {
        let mut guard = self.write_data();
        if !guard.operation.is_leaf() {
            log::warn!(
                "Replacing provenance of node `{}` ({} -> {})",
                guard.label,
                guard.operation.name(),
                operation.name()
            );
        }
        guard.operation = operation;
        guard.operands = operands.into_iter().collect();
        self
    }
}
