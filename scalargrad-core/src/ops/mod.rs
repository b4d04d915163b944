//! # Scalar Operations Module (ops)
//!
//! This module groups the operation constructors of the engine:
//! - `arithmetic`: add, multiply, constant power and the derived
//!   negate / subtract / divide compositions.
//! - `activation`: exp, tanh, relu.
//!
//! Every operation eagerly computes its forward result and appends one node
//! to the owning graph, tagged with the [`Op`](crate::graph::Op) variant the
//! backward pass will match on. The named `*_op` functions are the fallible
//! surface; operator and method sugar wraps them.

pub mod activation;
pub mod arithmetic;

use crate::error::ScalarGradError;
use crate::graph::{NodeData, Op, Value};

/// Verifies that two handles belong to the same graph arena.
pub(crate) fn check_same_graph(
    a: Value<'_>,
    b: Value<'_>,
    operation: &str,
) -> Result<(), ScalarGradError> {
    if !std::ptr::eq(a.graph(), b.graph()) {
        return Err(ScalarGradError::GraphMismatch {
            operation: operation.to_string(),
        });
    }
    Ok(())
}

/// Appends a binary interior node after checking its operands share a graph.
pub(crate) fn binary_node<'g>(
    a: Value<'g>,
    b: Value<'g>,
    operation: &str,
    data: f64,
    op: Op,
) -> Result<Value<'g>, ScalarGradError> {
    check_same_graph(a, b, operation)?;
    let graph = a.graph();
    let id = graph.push(NodeData::interior(data, op));
    Ok(Value { id, graph })
}

/// Appends a unary interior node. Cannot fail: a single operand trivially
/// agrees with its own graph.
pub(crate) fn unary_node<'g>(a: Value<'g>, data: f64, op: Op) -> Value<'g> {
    let graph = a.graph();
    let id = graph.push(NodeData::interior(data, op));
    Value { id, graph }
}
