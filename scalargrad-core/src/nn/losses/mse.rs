// scalargrad-core/src/nn/losses/mse.rs

use crate::error::ScalarGradError;
use crate::graph::Value;
use crate::ops::arithmetic::{add_op, mul_op, sub_op};

/// Specifies the reduction applied over the per-element squared errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reduction {
    Mean,
    Sum,
}

/// Computes the Mean Squared Error (MSE) loss between prediction and
/// target node slices.
///
/// Each pair contributes `(prediction - target)^2`; the reduction collapses
/// the contributions into a single scalar loss node, which is the node a
/// training loop calls `backward()` on.
#[derive(Debug, Clone)]
pub struct MseLoss {
    reduction: Reduction,
}

impl MseLoss {
    /// Creates a new `MseLoss` with the given reduction.
    pub fn new(reduction: Reduction) -> Self {
        MseLoss { reduction }
    }

    /// Builds the loss subgraph over `predictions` and `targets` and
    /// returns the scalar loss node.
    ///
    /// # Errors
    ///
    /// Returns `ScalarGradError::InputSizeMismatch` when the slices differ
    /// in length or are empty.
    pub fn calculate<'g>(
        &self,
        predictions: &[Value<'g>],
        targets: &[Value<'g>],
    ) -> Result<Value<'g>, ScalarGradError> {
        if predictions.len() != targets.len() {
            return Err(ScalarGradError::InputSizeMismatch {
                expected: targets.len(),
                actual: predictions.len(),
                operation: "MseLoss calculate".to_string(),
            });
        }

        let mut total: Option<Value<'g>> = None;
        for (prediction, target) in predictions.iter().zip(targets) {
            let diff = sub_op(*prediction, *target)?;
            let squared = mul_op(diff, diff)?;
            total = Some(match total {
                Some(acc) => add_op(acc, squared)?,
                None => squared,
            });
        }

        let total = total.ok_or_else(|| ScalarGradError::InputSizeMismatch {
            expected: 1,
            actual: 0,
            operation: "MseLoss calculate".to_string(),
        })?;

        match self.reduction {
            Reduction::Sum => Ok(total),
            Reduction::Mean => {
                let scale = total.graph().leaf(1.0 / predictions.len() as f64);
                mul_op(total, scale)
            }
        }
    }
}
