// scalargrad-core/src/graph/value.rs

use crate::autograd::backward::run_backward;
use crate::graph::{Graph, NodeId};
use crate::ops::activation::{exp_op, relu_op, tanh_op};
use crate::ops::arithmetic::pow_op;

/// Handle to one scalar node of a [`Graph`].
///
/// A `Value` is a `Copy` pair of node id and graph reference; copying a
/// handle never copies the node. Arithmetic on handles (via `std::ops` or
/// the named `*_op` functions) eagerly computes the forward result and
/// appends a new node recording the operation, so building an expression is
/// the same thing as building its graph.
#[derive(Clone, Copy)]
pub struct Value<'g> {
    pub(crate) id: NodeId,
    pub(crate) graph: &'g Graph,
}

impl<'g> Value<'g> {
    /// Id of the underlying node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The graph owning the underlying node.
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Forward value of this node.
    pub fn data(&self) -> f64 {
        self.graph.nodes.borrow()[self.id.0].data
    }

    /// Accumulated gradient of this node (zero until a backward pass
    /// reaches it).
    pub fn grad(&self) -> f64 {
        self.graph.nodes.borrow()[self.id.0].grad
    }

    /// Overwrites the forward value of this node.
    ///
    /// Meant for leaf parameters between training iterations; downstream
    /// nodes are not recomputed, the next forward pass rebuilds them.
    pub fn set_data(&self, value: f64) {
        self.graph.nodes.borrow_mut()[self.id.0].data = value;
    }

    /// Resets this node's gradient accumulator to zero.
    pub fn zero_grad(&self) {
        self.graph.nodes.borrow_mut()[self.id.0].grad = 0.0;
    }

    /// Cosmetic label of this node, if one was set.
    pub fn label(&self) -> Option<String> {
        self.graph.nodes.borrow()[self.id.0].label.clone()
    }

    /// Attaches a cosmetic label to this node.
    pub fn set_label(&self, label: impl Into<String>) {
        self.graph.nodes.borrow_mut()[self.id.0].label = Some(label.into());
    }

    /// Diagnostic symbol of the operation that produced this node
    /// (empty for a leaf).
    pub fn op_symbol(&self) -> &'static str {
        self.graph.nodes.borrow()[self.id.0].op.symbol()
    }

    /// Raises this node to a constant power.
    ///
    /// The exponent is a constant `f64`, never a graph node; the backward
    /// rule uses the closed form `exponent * base^(exponent - 1)`.
    pub fn pow(&self, exponent: f64) -> Value<'g> {
        pow_op(*self, exponent).unwrap_or_else(|e| panic!("Value::pow failed: {:?}", e))
    }

    /// e raised to this node's value.
    pub fn exp(&self) -> Value<'g> {
        exp_op(*self).unwrap_or_else(|e| panic!("Value::exp failed: {:?}", e))
    }

    /// Hyperbolic tangent of this node.
    pub fn tanh(&self) -> Value<'g> {
        tanh_op(*self).unwrap_or_else(|e| panic!("Value::tanh failed: {:?}", e))
    }

    /// Rectified linear unit: the value itself if positive, else zero.
    pub fn relu(&self) -> Value<'g> {
        relu_op(*self).unwrap_or_else(|e| panic!("Value::relu failed: {:?}", e))
    }

    /// Runs the backward pass with this node as the designated output.
    ///
    /// Seeds this node's gradient to `1.0`, then walks the subgraph that
    /// produced it in reverse topological order, *accumulating* gradient
    /// contributions into every ancestor. Gradients are never implicitly
    /// reset; calling `backward` again without a reset adds a second set of
    /// contributions on top of the first.
    pub fn backward(&self) {
        run_backward(self.graph, self.id);
    }
}
