// scalargrad-core/src/graph/node.rs

/// Identifier of a node inside a [`Graph`](crate::graph::Graph) arena.
///
/// Ids are plain indices into the arena's node store. A node is created
/// strictly after its operands, so an id can only refer to earlier entries,
/// which is what makes cycles unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Returns the raw arena index of this id.
    pub fn index(self) -> usize {
        self.0
    }
}

/// The operation that produced a node, tagged with its operand ids and any
/// constant parameter of the rule.
///
/// The backward pass matches on the variant to apply the local derivative
/// rule; no per-node closures are stored. `Pow` carries its exponent as a
/// plain `f64`, so a node-valued exponent cannot be expressed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    /// An input node with no operands.
    Leaf,
    Add(NodeId, NodeId),
    Mul(NodeId, NodeId),
    Pow { base: NodeId, exponent: f64 },
    Exp(NodeId),
    Tanh(NodeId),
    Relu(NodeId),
}

impl Op {
    /// Diagnostic symbol of the operation, for labeling and debug output.
    pub fn symbol(&self) -> &'static str {
        match self {
            Op::Leaf => "",
            Op::Add(..) => "+",
            Op::Mul(..) => "*",
            Op::Pow { .. } => "**",
            Op::Exp(_) => "exp",
            Op::Tanh(_) => "tanh",
            Op::Relu(_) => "relu",
        }
    }

    /// Iterates over the operand ids of this operation (none for a leaf).
    pub(crate) fn operands(self) -> impl Iterator<Item = NodeId> {
        let (first, second) = match self {
            Op::Leaf => (None, None),
            Op::Add(a, b) | Op::Mul(a, b) => (Some(a), Some(b)),
            Op::Pow { base, .. } => (Some(base), None),
            Op::Exp(a) | Op::Tanh(a) | Op::Relu(a) => (Some(a), None),
        };
        first.into_iter().chain(second)
    }
}

/// Per-node record stored in the arena.
///
/// `data` is written once at construction (and by explicit parameter updates
/// between iterations); `grad` starts at zero and is mutated only by the
/// backward pass or an explicit reset.
#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    pub(crate) data: f64,
    pub(crate) grad: f64,
    pub(crate) op: Op,
    pub(crate) label: Option<String>,
}

impl NodeData {
    pub(crate) fn leaf(data: f64, label: Option<String>) -> Self {
        NodeData {
            data,
            grad: 0.0,
            op: Op::Leaf,
            label,
        }
    }

    pub(crate) fn interior(data: f64, op: Op) -> Self {
        NodeData {
            data,
            grad: 0.0,
            op,
            label: None,
        }
    }
}
