// scalargrad-core/src/ops/activation.rs

use crate::error::ScalarGradError;
use crate::graph::{Op, Value};
use crate::ops::unary_node;

// --- Forward Operations ---

/// Applies the exponential function to a scalar node.
///
/// The backward rule reuses the forward result: `d/da e^a = e^a`, so the
/// operand receives `out.data * g`. Large inputs overflow to infinity,
/// which propagates untrapped.
///
/// # Arguments
/// * `a`: The input node.
pub fn exp_op(a: Value<'_>) -> Result<Value<'_>, ScalarGradError> {
    let data = a.data().exp();
    Ok(unary_node(a, data, Op::Exp(a.id())))
}

/// Applies the hyperbolic tangent to a scalar node.
///
/// Forward result is `(e^(2a) - 1) / (e^(2a) + 1)`; the backward rule is
/// `1 - out^2` scaled by the output's gradient.
///
/// # Arguments
/// * `a`: The input node.
pub fn tanh_op(a: Value<'_>) -> Result<Value<'_>, ScalarGradError> {
    let data = a.data().tanh();
    Ok(unary_node(a, data, Op::Tanh(a.id())))
}

/// Applies the rectified linear unit to a scalar node.
///
/// Forward result is the input when positive, zero otherwise. Gradient
/// passes through unchanged when the input is positive and is blocked
/// otherwise (including at exactly zero).
///
/// # Arguments
/// * `a`: The input node.
pub fn relu_op(a: Value<'_>) -> Result<Value<'_>, ScalarGradError> {
    let input = a.data();
    let data = if input > 0.0 { input } else { 0.0 };
    Ok(unary_node(a, data, Op::Relu(a.id())))
}
