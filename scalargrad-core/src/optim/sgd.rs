// scalargrad-core/src/optim/sgd.rs

use std::collections::HashMap;

use crate::error::ScalarGradError;
use crate::graph::{NodeId, Value};
use crate::optim::optimizer_trait::Optimizer;

/// Implements the Stochastic Gradient Descent (SGD) optimizer.
///
/// Supports classical momentum: with factor `mu > 0`, each parameter keeps
/// a velocity buffer updated as `v = mu * v + g`, and the parameter moves
/// by `-lr * v`. With `mu = 0` the update is plain `-lr * g` and no buffer
/// is allocated.
pub struct Sgd<'g> {
    params: Vec<Value<'g>>,
    lr: f64,
    momentum: f64,
    velocity: HashMap<NodeId, f64>,
}

impl<'g> Sgd<'g> {
    /// Creates a new `Sgd` over the given parameter handles.
    ///
    /// # Arguments
    ///
    /// * `params`: The parameter leaves to optimize, e.g. from
    ///   [`Module::parameters`](crate::nn::Module::parameters).
    /// * `lr`: The learning rate.
    /// * `momentum`: Momentum factor (0.0 disables momentum).
    pub fn new(params: Vec<Value<'g>>, lr: f64, momentum: f64) -> Self {
        if params.is_empty() {
            log::warn!("Sgd created with an empty parameter list; step() will be a no-op");
        }
        Sgd {
            params,
            lr,
            momentum,
            velocity: HashMap::new(),
        }
    }

    /// The learning rate currently in effect.
    pub fn lr(&self) -> f64 {
        self.lr
    }

    /// Overrides the learning rate (e.g. for a decay schedule).
    pub fn set_lr(&mut self, lr: f64) {
        self.lr = lr;
    }
}

impl Optimizer for Sgd<'_> {
    fn step(&mut self) -> Result<(), ScalarGradError> {
        for param in &self.params {
            let grad = param.grad();
            let update = if self.momentum != 0.0 {
                let velocity = self.velocity.entry(param.id()).or_insert(0.0);
                *velocity = self.momentum * *velocity + grad;
                *velocity
            } else {
                grad
            };
            param.set_data(param.data() - self.lr * update);
        }
        log::debug!(
            "Sgd step over {} parameters (lr={}, momentum={})",
            self.params.len(),
            self.lr,
            self.momentum
        );
        Ok(())
    }

    fn zero_grad(&mut self) {
        for param in &self.params {
            param.zero_grad();
        }
    }
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use approx::assert_relative_eq;

    #[test]
    fn test_plain_step_moves_against_gradient() {
        let graph = Graph::new();
        let w = graph.leaf(1.0);
        let loss = w * w;
        loss.backward();
        assert_eq!(w.grad(), 2.0);

        let mut sgd = Sgd::new(vec![w], 0.1, 0.0);
        sgd.step().unwrap();
        assert_relative_eq!(w.data(), 0.8, epsilon = 1e-12);
        assert!(sgd.velocity.is_empty());
    }

    #[test]
    fn test_momentum_accumulates_velocity() {
        let graph = Graph::new();
        let w = graph.leaf(0.0);
        let mut sgd = Sgd::new(vec![w], 1.0, 0.9);

        // Constant gradient of 1.0 across two steps.
        graph.nodes.borrow_mut()[w.id().index()].grad = 1.0;
        sgd.step().unwrap();
        assert_relative_eq!(w.data(), -1.0, epsilon = 1e-12);

        graph.nodes.borrow_mut()[w.id().index()].grad = 1.0;
        sgd.step().unwrap();
        // v2 = 0.9 * 1.0 + 1.0 = 1.9
        assert_relative_eq!(w.data(), -2.9, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_grad_clears_parameters() {
        let graph = Graph::new();
        let w = graph.leaf(2.0);
        let loss = w.tanh();
        loss.backward();
        assert_ne!(w.grad(), 0.0);

        let mut sgd = Sgd::new(vec![w], 0.1, 0.0);
        sgd.zero_grad();
        assert_eq!(w.grad(), 0.0);
        // The output node is not managed by the optimizer.
        assert_eq!(loss.grad(), 1.0);
    }

    #[test]
    fn test_set_lr() {
        let graph = Graph::new();
        let w = graph.leaf(0.0);
        let mut sgd = Sgd::new(vec![w], 0.1, 0.0);
        assert_eq!(sgd.lr(), 0.1);
        sgd.set_lr(0.01);
        assert_eq!(sgd.lr(), 0.01);
    }
}
