// scalargrad-core/src/optim/optimizer_trait.rs

use crate::error::ScalarGradError;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers are responsible for updating parameter values based on their
/// accumulated gradients.
pub trait Optimizer {
    /// Performs a single optimization step.
    ///
    /// Applies the optimization algorithm to every managed parameter using
    /// the gradients accumulated by the last backward pass.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the step was successful, or a `ScalarGradError`
    /// otherwise.
    fn step(&mut self) -> Result<(), ScalarGradError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// Typically called before the backward pass of a new training
    /// iteration to prevent gradients from accumulating across iterations.
    fn zero_grad(&mut self);
}
