// scalargrad-core/src/graph/debug.rs

use std::fmt;

use crate::graph::{Op, Value};

/// Compact single-line debug form, e.g.
/// `Value(data=4.0, grad=1.0, op="+", label="d")`.
impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nodes = self.graph.nodes.borrow();
        let node = &nodes[self.id.0];
        write!(f, "Value(data={:?}, grad={:?}", node.data, node.grad)?;
        if !matches!(node.op, Op::Leaf) {
            write!(f, ", op=\"{}\"", node.op.symbol())?;
        }
        if let Some(label) = &node.label {
            write!(f, ", label=\"{}\"", label)?;
        }
        write!(f, ")")
    }
}
