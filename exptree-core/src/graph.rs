// src/graph.rs
//! Read-only traversals of the computation graph.

use std::collections::{HashMap, HashSet};

use crate::error::ExpTreeError;
use crate::node::{Node, NodeId};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Mark {
    InProgress,
    Done,
}

/// Orders every node reachable from `root`, operands before consumers.
///
/// Depth-first post-order; a node reached through several consumers appears
/// once, at its first completion, and its subtree is not walked again. With
/// `reverse` set the order is root-first, which is what backpropagation
/// consumes.
///
/// The walk uses an explicit stack, so long chains do not exhaust the call
/// stack. A node that is reached again while its own operands are still being
/// walked can only come from a provenance cycle (see [`Node::attach`]) and is
/// reported as [`ExpTreeError::CycleDetected`].
pub fn topological_order(root: &Node, reverse: bool) -> Result<Vec<Node>, ExpTreeError> {
    let mut marks: HashMap<NodeId, Mark> = HashMap::new();
    let mut sorted_list: Vec<Node> = Vec::new();
    // (node, operands already pushed)
    let mut stack: Vec<(Node, bool)> = vec![(root.clone(), false)];

    while let Some((node, operands_pushed)) = stack.pop() {
        if operands_pushed {
            marks.insert(node.id(), Mark::Done);
            sorted_list.push(node);
            continue;
        }

        match marks.get(&node.id()) {
            Some(Mark::Done) => continue,
            Some(Mark::InProgress) => return Err(ExpTreeError::CycleDetected),
            None => {}
        }
        marks.insert(node.id(), Mark::InProgress);

        let operands = node.read_data().operands.clone();
        stack.push((node, true));
        // first operand on top so it is walked first
        for operand in operands.iter().rev() {
            match marks.get(&operand.id()) {
                Some(Mark::Done) => {}
                Some(Mark::InProgress) => return Err(ExpTreeError::CycleDetected),
                None => stack.push((operand.clone(), false)),
            }
        }
    }

    if reverse {
        sorted_list.reverse();
    }
    Ok(sorted_list)
}

/// Nodes and edges of the graph below a root, for rendering.
#[derive(Debug, Clone, Default)]
pub struct Trace {
    /// Every reachable node once, in preorder (root first).
    pub nodes: Vec<Node>,
    /// `(consumer, operand)` pairs; an operand used twice by the same
    /// consumer yields two edges.
    pub edges: Vec<(Node, Node)>,
}

/// Collects the DAG shape below `root` in preorder.
pub fn trace(root: &Node) -> Trace {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut result = Trace::default();
    let mut stack = vec![root.clone()];

    while let Some(node) = stack.pop() {
        if !visited.insert(node.id()) {
            continue;
        }
        let operands = node.read_data().operands.clone();
        for operand in operands.iter() {
            result.edges.push((node.clone(), operand.clone()));
        }
        for operand in operands.iter().rev() {
            if !visited.contains(&operand.id()) {
                stack.push(operand.clone());
            }
        }
        result.nodes.push(node);
    }

    result
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
