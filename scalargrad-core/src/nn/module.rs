// scalargrad-core/src/nn/module.rs

use crate::error::ScalarGradError;
use crate::graph::Value;

/// Trait for network components that own parameters and compose engine
/// operations into a forward pass.
///
/// The lifetime ties a module to the [`Graph`](crate::graph::Graph) its
/// parameter leaves live in; inputs handed to `forward` must come from the
/// same graph.
pub trait Module<'g> {
    /// Builds this component's slice of the computation graph over `inputs`
    /// and returns its outputs, one node per output unit.
    ///
    /// # Errors
    ///
    /// Returns `ScalarGradError::InputSizeMismatch` when `inputs` has the
    /// wrong arity for this component.
    fn forward(&self, inputs: &[Value<'g>]) -> Result<Vec<Value<'g>>, ScalarGradError>;

    /// All parameter leaves of this component. Defaults to none.
    fn parameters(&self) -> Vec<Value<'g>> {
        Vec::new()
    }

    /// Resets the gradient accumulator of every parameter to zero.
    ///
    /// Called by the training loop before each backward pass; the engine
    /// never resets gradients on its own.
    fn zero_grad(&self) {
        for parameter in self.parameters() {
            parameter.zero_grad();
        }
    }
}
