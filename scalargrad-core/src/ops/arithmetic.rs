// scalargrad-core/src/ops/arithmetic.rs

use crate::error::ScalarGradError;
use crate::graph::{Op, Value};
use crate::ops::{binary_node, check_same_graph, unary_node};

// --- Forward Operations ---
//
// Backward rules live in `autograd::backward`, keyed by the `Op` variant
// each constructor records here.

/// Adds two scalar nodes.
///
/// During the backward pass the output's gradient flows unchanged into both
/// operands.
///
/// # Arguments
/// * `a`: The first operand.
/// * `b`: The second operand.
///
/// # Returns
/// A `Result` containing the new node, or a `ScalarGradError` if the
/// operands belong to different graphs.
pub fn add_op<'g>(a: Value<'g>, b: Value<'g>) -> Result<Value<'g>, ScalarGradError> {
    let data = a.data() + b.data();
    binary_node(a, b, "add_op", data, Op::Add(a.id(), b.id()))
}

/// Multiplies two scalar nodes.
///
/// During the backward pass each operand receives the output's gradient
/// scaled by the *other* operand's forward value.
///
/// # Arguments
/// * `a`: The first operand.
/// * `b`: The second operand.
///
/// # Returns
/// A `Result` containing the new node, or a `ScalarGradError` if the
/// operands belong to different graphs.
pub fn mul_op<'g>(a: Value<'g>, b: Value<'g>) -> Result<Value<'g>, ScalarGradError> {
    let data = a.data() * b.data();
    binary_node(a, b, "mul_op", data, Op::Mul(a.id(), b.id()))
}

/// Raises a scalar node to a constant power.
///
/// The exponent is a plain `f64`, never a node; the backward rule applies
/// the closed form `p * a^(p-1)`. Negative and fractional exponents are
/// accepted, and a fractional power of a negative base produces NaN, which
/// propagates untrapped like every other numeric degeneracy.
///
/// # Arguments
/// * `a`: The base node.
/// * `exponent`: The constant exponent.
pub fn pow_op<'g>(a: Value<'g>, exponent: f64) -> Result<Value<'g>, ScalarGradError> {
    let data = a.data().powf(exponent);
    Ok(unary_node(a, data, Op::Pow { base: a.id(), exponent }))
}

/// Negates a scalar node, defined as `a * (-1)`.
///
/// The constant is promoted to an unlabeled leaf, so negation appends two
/// nodes to the graph and inherits the multiply gradient rule.
pub fn neg_op(a: Value<'_>) -> Result<Value<'_>, ScalarGradError> {
    let minus_one = a.graph().leaf(-1.0);
    mul_op(a, minus_one)
}

/// Subtracts `b` from `a`, defined as `a + (-b)`.
pub fn sub_op<'g>(a: Value<'g>, b: Value<'g>) -> Result<Value<'g>, ScalarGradError> {
    check_same_graph(a, b, "sub_op")?;
    let neg_b = neg_op(b)?;
    add_op(a, neg_b)
}

/// Divides `a` by `b`, defined as `a * b^(-1)`.
///
/// A zero-valued divisor yields an infinite (or NaN) result rather than an
/// error.
pub fn div_op<'g>(a: Value<'g>, b: Value<'g>) -> Result<Value<'g>, ScalarGradError> {
    check_same_graph(a, b, "div_op")?;
    let inv_b = pow_op(b, -1.0)?;
    mul_op(a, inv_b)
}
