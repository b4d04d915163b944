// scalargrad-core/src/nn/layers/mlp.rs

use crate::error::ScalarGradError;
use crate::graph::{Graph, Value};
use crate::nn::init::Init;
use crate::nn::layers::layer::Layer;
use crate::nn::layers::neuron::Activation;
use crate::nn::module::Module;

/// A multi-layer perceptron: a chain of dense layers with sizes
/// `[nin] ++ nouts`, every layer using the same activation and init scheme.
pub struct Mlp<'g> {
    layers: Vec<Layer<'g>>,
}

impl<'g> Mlp<'g> {
    /// Creates an MLP taking `nin` inputs and producing `nouts.last()`
    /// outputs, with one hidden layer per intermediate entry of `nouts`.
    pub fn new(
        graph: &'g Graph,
        nin: usize,
        nouts: &[usize],
        activation: Activation,
        init: &Init,
    ) -> Self {
        let mut sizes = Vec::with_capacity(nouts.len() + 1);
        sizes.push(nin);
        sizes.extend_from_slice(nouts);
        let layers = (0..nouts.len())
            .map(|i| Layer::new(graph, sizes[i], sizes[i + 1], activation, init))
            .collect();
        Mlp { layers }
    }

    /// Number of layers of the network.
    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    /// Convenience for networks whose last layer has a single neuron
    /// (a scalar head): returns that sole output node.
    ///
    /// # Errors
    ///
    /// Returns `ScalarGradError::InputSizeMismatch` when the final layer
    /// is wider than one output (besides any arity error from `forward`).
    pub fn forward_scalar(&self, inputs: &[Value<'g>]) -> Result<Value<'g>, ScalarGradError> {
        let outputs = self.forward(inputs)?;
        if outputs.len() != 1 {
            return Err(ScalarGradError::InputSizeMismatch {
                expected: 1,
                actual: outputs.len(),
                operation: "Mlp forward_scalar".to_string(),
            });
        }
        Ok(outputs[0])
    }
}

impl<'g> Module<'g> for Mlp<'g> {
    fn forward(&self, inputs: &[Value<'g>]) -> Result<Vec<Value<'g>>, ScalarGradError> {
        let mut current = inputs.to_vec();
        for layer in &self.layers {
            current = layer.forward(&current)?;
        }
        Ok(current)
    }

    fn parameters(&self) -> Vec<Value<'g>> {
        self.layers
            .iter()
            .flat_map(|layer| layer.parameters())
            .collect()
    }
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mlp_layer_and_parameter_counts() {
        let graph = Graph::new();
        let mlp = Mlp::new(&graph, 3, &[4, 4, 1], Activation::Tanh, &Init::default());
        assert_eq!(mlp.num_layers(), 3);
        // 4*(3+1) + 4*(4+1) + 1*(4+1)
        assert_eq!(mlp.parameters().len(), 41);
    }

    #[test]
    fn test_forward_scalar_on_single_output_head() {
        let graph = Graph::new();
        let mlp = Mlp::new(&graph, 2, &[3, 1], Activation::Tanh, &Init::default());
        let x = [graph.leaf(1.0), graph.leaf(-2.0)];
        let out = mlp.forward_scalar(&x).unwrap();
        assert!(out.data().is_finite());
        // tanh keeps the head output in (-1, 1).
        assert!(out.data().abs() < 1.0);
    }

    #[test]
    fn test_forward_scalar_rejects_wide_head() {
        let graph = Graph::new();
        let mlp = Mlp::new(&graph, 2, &[3, 2], Activation::Tanh, &Init::default());
        let x = [graph.leaf(1.0), graph.leaf(-2.0)];
        let err = mlp.forward_scalar(&x).unwrap_err();
        assert_eq!(
            err,
            ScalarGradError::InputSizeMismatch {
                expected: 1,
                actual: 2,
                operation: "Mlp forward_scalar".to_string()
            }
        );
    }

    #[test]
    fn test_backward_reaches_all_parameters() {
        let graph = Graph::new();
        let mlp = Mlp::new(&graph, 2, &[2, 1], Activation::Tanh, &Init::default());
        // Deterministic, asymmetric parameters.
        for (i, p) in mlp.parameters().iter().enumerate() {
            p.set_data(0.1 * (i as f64 + 1.0) - 0.4);
        }
        let x = [graph.leaf(0.5), graph.leaf(-1.0)];
        let out = mlp.forward_scalar(&x).unwrap();
        out.backward();
        let nonzero = mlp
            .parameters()
            .iter()
            .filter(|p| p.grad() != 0.0)
            .count();
        // tanh derivatives never vanish, so every parameter gets a signal.
        assert_eq!(nonzero, mlp.parameters().len());
    }
}
