use rand::{Rng, RngCore};

use crate::NetworkError;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Neuron {
    pub(crate) bias: f32,
    pub(crate) weights: Vec<f32>,
}

impl Neuron {
    pub(crate) fn random(rng: &mut dyn RngCore, input: usize) -> Self {
        let bias = rng.random_range(-1.0..=1.0);
        let weights = (0..input).map(|_| rng.random_range(-1.0..=1.0)).collect();
        Self { bias, weights }
    }

    pub(crate) fn from_weights(
        input: usize,
        weights: &mut dyn Iterator<Item = f32>,
    ) -> Result<Self, NetworkError> {
        let bias = weights.next().ok_or(NetworkError::NotEnoughWeights)?;
        let weights = (0..input)
            .map(|_| weights.next().ok_or(NetworkError::NotEnoughWeights))
            .collect::<Result<_, _>>()?;
        Ok(Self { bias, weights })
    }

    /// ReLU over the weighted sum. Input length is checked by the network.
    pub(crate) fn propagate(&self, inputs: &[f32]) -> f32 {
        inputs
            .iter()
            .zip(&self.weights)
            .fold(self.bias, |acc, (input, weight)| acc + input * weight)
            .max(0.0)
    }
}
