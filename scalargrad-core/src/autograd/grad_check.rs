// scalargrad-core/src/autograd/grad_check.rs

use thiserror::Error;

use crate::error::ScalarGradError;
use crate::graph::{Graph, Value};

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },

    #[error("Expression builder failed during gradient check: {0}")]
    BuildError(ScalarGradError),
}

impl From<ScalarGradError> for GradCheckError {
    fn from(err: ScalarGradError) -> Self {
        GradCheckError::BuildError(err)
    }
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// `func` rebuilds the expression under test from scratch on the graph it
/// is handed, with one leaf per entry of `inputs`, and returns the scalar
/// output node. The check runs one analytical pass (forward + backward on a
/// fresh graph), then, for every input, re-evaluates the expression at
/// `x ± epsilon` and compares the analytical gradient against
/// `(f(x+eps) - f(x-eps)) / (2 * eps)`.
///
/// A mismatch is reported when the difference exceeds `tolerance` both
/// absolutely and relative to the analytical magnitude. NaN or infinite
/// gradients on either side fail the check immediately.
pub fn check_gradients<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: for<'g> Fn(&'g Graph, &[Value<'g>]) -> Result<Value<'g>, ScalarGradError>,
{
    // --- Analytical pass ---
    let graph = Graph::new();
    let leaves: Vec<Value<'_>> = inputs.iter().map(|&x| graph.leaf(x)).collect();
    let output = func(&graph, &leaves).map_err(GradCheckError::BuildError)?;
    output.backward();
    let analytical_grads: Vec<f64> = leaves.iter().map(|leaf| leaf.grad()).collect();

    // --- Numerical pass, one input at a time ---
    for (i, &analytical_grad) in analytical_grads.iter().enumerate() {
        let mut point = inputs.to_vec();

        point[i] = inputs[i] + epsilon;
        let loss_plus = evaluate(&func, &point)?;

        point[i] = inputs[i] - epsilon;
        let loss_minus = evaluate(&func, &point)?;

        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);

        if numerical_grad.is_nan() || numerical_grad.is_infinite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }
        if analytical_grad.is_nan() || analytical_grad.is_infinite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        if difference > tolerance && (difference / (analytical_grad.abs() + epsilon)) > tolerance {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }

    Ok(())
}

/// Evaluates the expression at `point` on a throwaway graph and returns the
/// forward value of its output.
fn evaluate<F>(func: &F, point: &[f64]) -> Result<f64, GradCheckError>
where
    F: for<'g> Fn(&'g Graph, &[Value<'g>]) -> Result<Value<'g>, ScalarGradError>,
{
    let graph = Graph::new();
    let leaves: Vec<Value<'_>> = point.iter().map(|&x| graph.leaf(x)).collect();
    let output = func(&graph, &leaves).map_err(GradCheckError::BuildError)?;
    Ok(output.data())
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::activation::relu_op;
    use crate::ops::arithmetic::{mul_op, pow_op};

    fn build_product<'g>(
        _graph: &'g Graph,
        v: &[Value<'g>],
    ) -> Result<Value<'g>, ScalarGradError> {
        mul_op(v[0], v[1])
    }

    fn build_relu<'g>(_graph: &'g Graph, v: &[Value<'g>]) -> Result<Value<'g>, ScalarGradError> {
        relu_op(v[0])
    }

    fn build_sqrt<'g>(_graph: &'g Graph, v: &[Value<'g>]) -> Result<Value<'g>, ScalarGradError> {
        pow_op(v[0], 0.5)
    }

    fn build_failing<'g>(
        _graph: &'g Graph,
        _v: &[Value<'g>],
    ) -> Result<Value<'g>, ScalarGradError> {
        Err(ScalarGradError::GraphMismatch {
            operation: "build_failing".to_string(),
        })
    }

    #[test]
    fn test_check_passes_for_product() {
        check_gradients(build_product, &[2.0, -3.0], 1e-5, 1e-4).unwrap();
    }

    #[test]
    fn test_check_detects_kink_at_zero() {
        // relu is not differentiable at 0; the analytical rule reports 0
        // while central differences report 0.5.
        let err = check_gradients(build_relu, &[0.0], 1e-5, 1e-4).unwrap_err();
        assert!(matches!(err, GradCheckError::GradientMismatch { input_index: 0, .. }));
    }

    #[test]
    fn test_check_rejects_nan_numerical_grad() {
        // sqrt(x - eps) with x < eps wanders into NaN territory.
        let err = check_gradients(build_sqrt, &[1e-8], 1e-5, 1e-4).unwrap_err();
        assert!(matches!(
            err,
            GradCheckError::NumericalGradNaNOrInfinite { input_index: 0, .. }
        ));
    }

    #[test]
    fn test_builder_error_is_propagated() {
        let err = check_gradients(build_failing, &[1.0], 1e-5, 1e-4).unwrap_err();
        assert_eq!(
            err,
            GradCheckError::BuildError(ScalarGradError::GraphMismatch {
                operation: "build_failing".to_string()
            })
        );
    }
}
