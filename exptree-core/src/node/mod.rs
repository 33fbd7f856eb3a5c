// src/node/mod.rs

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use crate::node_data::NodeData;

// Declare the submodules holding the `impl Node` blocks
pub mod accessors;
pub mod autograd_methods;
pub mod create;
pub mod debug;

/// A handle to a scalar node of the computation graph.
///
/// Cloning a `Node` is cheap and yields another handle to the *same* node
/// (shallow clone via `Rc`). Identity, not value, distinguishes nodes: two
/// separately constructed leaves holding `1.0` are different nodes.
#[derive(Clone)]
pub struct Node {
    pub(crate) data: Rc<RefCell<NodeData>>,
}

/// Stable identifier of a node, valid while any handle to it is alive.
pub type NodeId = *const RefCell<NodeData>;

impl Node {
    pub(crate) fn from_data(data: NodeData) -> Self {
        Node {
            data: Rc::new(RefCell::new(data)),
        }
    }

    /// Immutable access to the inner data. Panics if a mutable borrow is live.
    pub(crate) fn read_data(&self) -> Ref<'_, NodeData> {
        self.data.borrow()
    }

    /// Mutable access to the inner data. Panics if any other borrow is live.
    pub(crate) fn write_data(&self) -> RefMut<'_, NodeData> {
        self.data.borrow_mut()
    }

    /// Identity of the node behind this handle.
    pub fn id(&self) -> NodeId {
        Rc::as_ptr(&self.data)
    }

    /// Returns `true` if both handles point at the same node.
    pub fn ptr_eq(&self, other: &Node) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod tests;
