use rand::RngCore;

use crate::NetworkError;
use crate::neuron::Neuron;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Layer {
    pub(crate) neurons: Vec<Neuron>,
}

impl Layer {
    pub(crate) fn random(rng: &mut dyn RngCore, input: usize, output: usize) -> Self {
        let neurons = (0..output).map(|_| Neuron::random(rng, input)).collect();
        Self { neurons }
    }

    pub(crate) fn from_weights(
        input: usize,
        output: usize,
        weights: &mut dyn Iterator<Item = f32>,
    ) -> Result<Self, NetworkError> {
        let neurons = (0..output)
            .map(|_| Neuron::from_weights(input, weights))
            .collect::<Result<_, _>>()?;
        Ok(Self { neurons })
    }

    pub(crate) fn propagate(&self, inputs: &[f32]) -> Vec<f32> {
        self.neurons
            .iter()
            .map(|neuron| neuron.propagate(inputs))
            .collect()
    }
}
