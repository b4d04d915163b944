// scalargrad-core/src/nn/layers/layer.rs

use crate::error::ScalarGradError;
use crate::graph::{Graph, Value};
use crate::nn::init::Init;
use crate::nn::layers::neuron::{Activation, Neuron};
use crate::nn::module::Module;

/// A dense layer: `nout` independent neurons over the same `nin` inputs.
pub struct Layer<'g> {
    neurons: Vec<Neuron<'g>>,
}

impl<'g> Layer<'g> {
    /// Creates a layer of `nout` neurons, each with `nin` inputs.
    pub fn new(
        graph: &'g Graph,
        nin: usize,
        nout: usize,
        activation: Activation,
        init: &Init,
    ) -> Self {
        let neurons = (0..nout)
            .map(|_| Neuron::new(graph, nin, activation, init))
            .collect();
        Layer { neurons }
    }

    /// Number of outputs (neurons) of this layer.
    pub fn nout(&self) -> usize {
        self.neurons.len()
    }
}

impl<'g> Module<'g> for Layer<'g> {
    fn forward(&self, inputs: &[Value<'g>]) -> Result<Vec<Value<'g>>, ScalarGradError> {
        self.neurons
            .iter()
            .map(|neuron| neuron.activate(inputs))
            .collect()
    }

    fn parameters(&self) -> Vec<Value<'g>> {
        self.neurons
            .iter()
            .flat_map(|neuron| neuron.parameters())
            .collect()
    }
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_shapes() {
        let graph = Graph::new();
        let layer = Layer::new(&graph, 3, 4, Activation::Tanh, &Init::default());
        assert_eq!(layer.nout(), 4);
        // 4 neurons * (3 weights + bias)
        assert_eq!(layer.parameters().len(), 16);
    }

    #[test]
    fn test_forward_produces_one_output_per_neuron() {
        let graph = Graph::new();
        let layer = Layer::new(&graph, 2, 3, Activation::Tanh, &Init::default());
        let x = [graph.leaf(0.5), graph.leaf(-0.5)];
        let out = layer.forward(&x).unwrap();
        assert_eq!(out.len(), 3);
        for o in out {
            assert!(o.data().is_finite());
            assert_eq!(o.op_symbol(), "tanh");
        }
    }

    #[test]
    fn test_arity_error_bubbles_from_neurons() {
        let graph = Graph::new();
        let layer = Layer::new(&graph, 2, 3, Activation::Tanh, &Init::default());
        let x = [graph.leaf(0.5)];
        assert!(matches!(
            layer.forward(&x),
            Err(ScalarGradError::InputSizeMismatch {
                expected: 2,
                actual: 1,
                ..
            })
        ));
    }
}
