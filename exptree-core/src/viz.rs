//! Graphviz rendering of an expression graph.

use std::collections::HashMap;
use std::fmt::{self, Write};

use crate::error::ExpTreeError;
use crate::graph::{trace, Trace};
use crate::node::{Node, NodeId};

/// Renders the graph below `root` in DOT.
///
/// Every node becomes a record box holding its `Display` text. A non-leaf
/// also gets an ellipse for its operation; the node's operands point into
/// that ellipse and the ellipse points at the node. Operands of a node with
/// no operation point straight at its box. Identifiers come from
/// the node's position in the trace, not its label.
pub fn to_dot(root: &Node) -> Result<String, ExpTreeError> {
    let Trace { nodes, edges } = trace(root);
    let ids: HashMap<NodeId, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, node)| (node.id(), i))
        .collect();
    let index_of = |node: &Node| -> Result<usize, ExpTreeError> {
        ids.get(&node.id()).copied().ok_or_else(|| {
            ExpTreeError::RenderError(format!("node `{}` missing from trace", node.label()))
        })
    };

    let mut out = String::new();
    writeln!(out, "digraph {{").map_err(render_error)?;
    writeln!(out, "  rankdir=LR;").map_err(render_error)?;

    for (i, node) in nodes.iter().enumerate() {
        writeln!(
            out,
            "  n{} [shape=record, label=\"{{ {} }}\"];",
            i,
            escape_record(&node.to_string())
        )
        .map_err(render_error)?;
        let operation = node.operation();
        if !operation.is_leaf() {
            writeln!(
                out,
                "  n{}_op [shape=ellipse, label=\"{}\"];",
                i,
                escape_quoted(&operation.to_string())
            )
            .map_err(render_error)?;
            let edge = format!("n{}_op -> n{}", i, i);
            writeln!(out, "  {};", edge).map_err(render_error)?;
        }
    }

    for (consumer, operand) in &edges {
        let (c, o) = (index_of(consumer)?, index_of(operand)?);
        // operands attached under `Operation::None` have no ellipse to feed
        let edge = if consumer.operation().is_leaf() {
            format!("n{} -> n{}", o, c)
        } else {
            format!("n{} -> n{}_op", o, c)
        };
        writeln!(out, "  {};", edge).map_err(render_error)?;
    }

    writeln!(out, "}}").map_err(render_error)?;
    log::debug!(
        "Rendered {} nodes and {} edges to DOT",
        nodes.len(),
        edges.len()
    );
    Ok(out)
}

fn render_error(e: fmt::Error) -> ExpTreeError {
    ExpTreeError::RenderError(e.to_string())
}

fn escape_quoted(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

// Record labels also treat braces, bars and angle brackets as structure.
fn escape_record(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '"' | '{' | '}' | '|' | '<' | '>') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
#[path = "viz_test.rs"]
mod tests;
