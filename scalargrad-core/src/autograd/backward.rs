// scalargrad-core/src/autograd/backward.rs

use crate::graph::{Graph, NodeData, NodeId, Op};

/// Runs the backward pass with `output` as the designated output node.
///
/// 1. Builds a topological order of the subgraph reachable from `output`
///    through operand edges (depth-first post-order; a visited bitset over
///    arena indices guarantees each node is emitted once even when shared).
/// 2. Seeds `output`'s gradient to `1.0` by assignment.
/// 3. Walks the order in reverse, so every node propagates only after all
///    of its consumers have contributed, and *adds* each local-derivative
///    contribution into the operands' accumulators.
///
/// Gradients of nodes outside the reachable subgraph are untouched, and no
/// gradient is ever implicitly reset.
pub(crate) fn run_backward(graph: &Graph, output: NodeId) {
    let mut nodes = graph.nodes.borrow_mut();
    let order = topological_order(&nodes, output);
    log::debug!(
        "backward from node {}: {} nodes in topological order",
        output.index(),
        order.len()
    );

    nodes[output.0].grad = 1.0;

    for &id in order.iter().rev() {
        let (out_data, g, op) = {
            let node = &nodes[id.0];
            (node.data, node.grad, node.op)
        };
        match op {
            Op::Leaf => {}
            Op::Add(a, b) => {
                nodes[a.0].grad += g;
                nodes[b.0].grad += g;
            }
            Op::Mul(a, b) => {
                let a_data = nodes[a.0].data;
                let b_data = nodes[b.0].data;
                nodes[a.0].grad += b_data * g;
                nodes[b.0].grad += a_data * g;
            }
            Op::Pow { base, exponent } => {
                let base_data = nodes[base.0].data;
                nodes[base.0].grad += exponent * base_data.powf(exponent - 1.0) * g;
            }
            Op::Exp(a) => {
                nodes[a.0].grad += out_data * g;
            }
            Op::Tanh(a) => {
                nodes[a.0].grad += (1.0 - out_data * out_data) * g;
            }
            Op::Relu(a) => {
                if nodes[a.0].data > 0.0 {
                    nodes[a.0].grad += g;
                }
            }
        }
    }
}

/// Depth-first post-order over the operand relation: every node appears
/// after all nodes it transitively depends on, so reversing the order
/// visits consumers before their operands.
pub(crate) fn topological_order(nodes: &[NodeData], output: NodeId) -> Vec<NodeId> {
    fn dfs(nodes: &[NodeData], id: NodeId, visited: &mut [bool], order: &mut Vec<NodeId>) {
        if visited[id.0] {
            return;
        }
        visited[id.0] = true;
        for operand in nodes[id.0].op.operands() {
            dfs(nodes, operand, visited, order);
        }
        order.push(id);
    }

    let mut visited = vec![false; nodes.len()];
    let mut order = Vec::new();
    dfs(nodes, output, &mut visited, &mut order);
    order
}
