// scalargrad-core/src/nn/layers/neuron.rs

use crate::error::ScalarGradError;
use crate::graph::{Graph, Value};
use crate::nn::init::Init;
use crate::nn::module::Module;
use crate::ops::activation::{relu_op, tanh_op};
use crate::ops::arithmetic::{add_op, mul_op};

/// Nonlinearity applied by a [`Neuron`] after its weighted sum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Activation {
    #[default]
    Tanh,
    Relu,
}

impl Activation {
    pub(crate) fn apply<'g>(&self, x: Value<'g>) -> Result<Value<'g>, ScalarGradError> {
        match self {
            Activation::Tanh => tanh_op(x),
            Activation::Relu => relu_op(x),
        }
    }
}

/// A single neuron: `nin` weight leaves plus a bias leaf.
///
/// Forward pass computes `activation(bias + Σ wᵢ·xᵢ)`, folding the weighted
/// sum starting from the bias. Parameters are leaf nodes of the owning
/// graph and survive across forward/backward cycles; each forward pass
/// appends fresh interior nodes on top of them.
pub struct Neuron<'g> {
    weights: Vec<Value<'g>>,
    bias: Value<'g>,
    activation: Activation,
}

impl<'g> Neuron<'g> {
    /// Creates a neuron with `nin` inputs, drawing every parameter from
    /// `init`.
    pub fn new(graph: &'g Graph, nin: usize, activation: Activation, init: &Init) -> Self {
        let mut rng = rand::thread_rng();
        let weights = (0..nin).map(|_| graph.leaf(init.sample(&mut rng))).collect();
        let bias = graph.leaf(init.sample(&mut rng));
        Neuron {
            weights,
            bias,
            activation,
        }
    }

    /// Number of inputs this neuron accepts.
    pub fn nin(&self) -> usize {
        self.weights.len()
    }

    /// Forward pass producing the neuron's single output node.
    ///
    /// # Errors
    ///
    /// Returns `ScalarGradError::InputSizeMismatch` if `inputs` does not
    /// hold exactly `nin` values.
    pub fn activate(&self, inputs: &[Value<'g>]) -> Result<Value<'g>, ScalarGradError> {
        if inputs.len() != self.weights.len() {
            return Err(ScalarGradError::InputSizeMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
                operation: "Neuron forward".to_string(),
            });
        }
        let mut acc = self.bias;
        for (weight, input) in self.weights.iter().zip(inputs) {
            let term = mul_op(*weight, *input)?;
            acc = add_op(acc, term)?;
        }
        self.activation.apply(acc)
    }
}

impl<'g> Module<'g> for Neuron<'g> {
    fn forward(&self, inputs: &[Value<'g>]) -> Result<Vec<Value<'g>>, ScalarGradError> {
        Ok(vec![self.activate(inputs)?])
    }

    fn parameters(&self) -> Vec<Value<'g>> {
        let mut params = self.weights.clone();
        params.push(self.bias);
        params
    }
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn fixed_neuron<'g>(graph: &'g Graph, activation: Activation) -> Neuron<'g> {
        let neuron = Neuron::new(graph, 2, activation, &Init::default());
        let params = neuron.parameters();
        params[0].set_data(0.5);
        params[1].set_data(-0.25);
        params[2].set_data(0.1); // bias
        neuron
    }

    #[test]
    fn test_parameter_count_is_nin_plus_bias() {
        let graph = Graph::new();
        let neuron = Neuron::new(&graph, 3, Activation::default(), &Init::default());
        assert_eq!(neuron.parameters().len(), 4);
        assert_eq!(neuron.nin(), 3);
    }

    #[test]
    fn test_tanh_forward_value() {
        let graph = Graph::new();
        let neuron = fixed_neuron(&graph, Activation::Tanh);
        let x = [graph.leaf(1.0), graph.leaf(2.0)];
        let out = neuron.activate(&x).unwrap();
        // 0.5*1 + (-0.25)*2 + 0.1 = 0.1
        assert_relative_eq!(out.data(), 0.1f64.tanh(), epsilon = 1e-12);
    }

    #[test]
    fn test_relu_forward_clamps() {
        let graph = Graph::new();
        let neuron = fixed_neuron(&graph, Activation::Relu);
        let x = [graph.leaf(-1.0), graph.leaf(2.0)];
        // 0.5*(-1) + (-0.25)*2 + 0.1 = -0.9 -> clamped to 0
        let out = neuron.activate(&x).unwrap();
        assert_eq!(out.data(), 0.0);
    }

    #[test]
    fn test_arity_mismatch_is_rejected() {
        let graph = Graph::new();
        let neuron = Neuron::new(&graph, 2, Activation::Tanh, &Init::default());
        let x = [graph.leaf(1.0)];
        let err = neuron.activate(&x).unwrap_err();
        assert_eq!(
            err,
            ScalarGradError::InputSizeMismatch {
                expected: 2,
                actual: 1,
                operation: "Neuron forward".to_string()
            }
        );
    }

    #[test]
    fn test_gradients_reach_every_parameter() {
        let graph = Graph::new();
        let neuron = fixed_neuron(&graph, Activation::Tanh);
        let x = [graph.leaf(1.0), graph.leaf(2.0)];
        let out = neuron.activate(&x).unwrap();
        out.backward();
        let t = 0.1f64.tanh();
        let dt = 1.0 - t * t;
        let params = neuron.parameters();
        assert_relative_eq!(params[0].grad(), 1.0 * dt, epsilon = 1e-12);
        assert_relative_eq!(params[1].grad(), 2.0 * dt, epsilon = 1e-12);
        assert_relative_eq!(params[2].grad(), dt, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_grad_resets_parameters() {
        let graph = Graph::new();
        let neuron = fixed_neuron(&graph, Activation::Tanh);
        let x = [graph.leaf(1.0), graph.leaf(2.0)];
        neuron.activate(&x).unwrap().backward();
        neuron.zero_grad();
        for p in neuron.parameters() {
            assert_eq!(p.grad(), 0.0);
        }
    }
}
