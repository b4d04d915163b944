//! # Computation Graph Module (graph)
//!
//! Arena-backed storage for the expression graph. A [`Graph`] owns every
//! node created through it; client code manipulates nodes through the
//! lightweight [`Value`] handle, which pairs a [`NodeId`] with a reference
//! to its owning graph. Operand edges are stored as indices, so a node can
//! be shared by any number of downstream expressions without reference
//! counting, and cycles cannot be formed (an id only ever points at an
//! earlier entry).

pub mod node;
pub mod value;

mod debug;
mod traits;

pub use node::{NodeId, Op};
pub use value::Value;

pub(crate) use node::NodeData;

use std::cell::RefCell;

use crate::error::ScalarGradError;

/// Growable arena owning all nodes of one expression graph.
///
/// The arena is append-only: operations push new nodes and never remove or
/// rewire existing ones. Iterative training over the same graph therefore
/// keeps appending intermediate nodes each forward pass while leaf
/// parameters stay put.
///
/// Interior mutability uses `RefCell`: the engine is single-threaded by
/// contract, and a plain `RefCell` keeps [`Value`] handles `Copy`.
#[derive(Debug, Default)]
pub struct Graph {
    pub(crate) nodes: RefCell<Vec<NodeData>>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Graph {
            nodes: RefCell::new(Vec::new()),
        }
    }

    /// Creates an unlabeled leaf node holding `data` and returns its handle.
    pub fn leaf(&self, data: f64) -> Value<'_> {
        let id = self.push(NodeData::leaf(data, None));
        Value { id, graph: self }
    }

    /// Creates a labeled leaf node. The label is cosmetic and only shows up
    /// in debug output.
    pub fn leaf_labeled(&self, data: f64, label: impl Into<String>) -> Value<'_> {
        let id = self.push(NodeData::leaf(data, Some(label.into())));
        Value { id, graph: self }
    }

    /// Rebuilds a [`Value`] handle from a previously obtained id.
    ///
    /// # Errors
    ///
    /// Returns `ScalarGradError::NodeOutOfBounds` if `id` does not refer to
    /// a node of this graph.
    pub fn value(&self, id: NodeId) -> Result<Value<'_>, ScalarGradError> {
        let len = self.nodes.borrow().len();
        if id.0 >= len {
            return Err(ScalarGradError::NodeOutOfBounds { index: id.0, len });
        }
        Ok(Value { id, graph: self })
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.borrow().len()
    }

    /// Returns `true` if no node has been created yet.
    pub fn is_empty(&self) -> bool {
        self.nodes.borrow().is_empty()
    }

    /// Resets the gradient accumulator of every node to zero.
    ///
    /// The backward pass never resets gradients on its own; callers invoke
    /// this (or a per-parameter reset) between training iterations.
    pub fn zero_grad(&self) {
        for node in self.nodes.borrow_mut().iter_mut() {
            node.grad = 0.0;
        }
    }

    pub(crate) fn push(&self, node: NodeData) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        let id = NodeId(nodes.len());
        nodes.push(node);
        id
    }
}
