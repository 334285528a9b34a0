//! Feed-forward neural network used as the birds' brains.
//!
//! Every layer is fully connected and uses a ReLU activation. The network is
//! deliberately plain: it has no training of its own and is improved only by
//! the genetic algorithm, which reads and writes its weights as a flat list
//! through [`Network::weights`] and [`Network::from_weights`].

mod layer;
mod neuron;

use rand::RngCore;

use layer::Layer;

/// Error returned when building or running a [`Network`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// A network needs at least an input and an output layer.
    #[error("network needs at least 2 layers, got {0}")]
    TooFewLayers(usize),
    /// `propagate` was called with the wrong number of inputs.
    #[error("expected {expected} inputs, got {actual}")]
    InputSize { expected: usize, actual: usize },
    /// The flat weight list ran out before every neuron was filled.
    #[error("not enough weights for the given topology")]
    NotEnoughWeights,
    /// The flat weight list had entries left over after every neuron was filled.
    #[error("got more weights than the topology can hold")]
    TooManyWeights,
}

/// Number of neurons in one layer of the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerTopology {
    pub neurons: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    layers: Vec<Layer>,
}

impl Network {
    /// Build a network with random biases and weights in `[-1, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::TooFewLayers`] for fewer than two layers.
    pub fn random(rng: &mut dyn RngCore, layers: &[LayerTopology]) -> Result<Self, NetworkError> {
        check_topology(layers)?;

        let layers = layers
            .windows(2)
            .map(|pair| Layer::random(rng, pair[0].neurons, pair[1].neurons))
            .collect();

        Ok(Self { layers })
    }

    /// Rebuild a network from the flat list produced by [`Network::weights`].
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::TooFewLayers`] for a degenerate topology and
    /// [`NetworkError::NotEnoughWeights`] / [`NetworkError::TooManyWeights`]
    /// when the list does not match the topology exactly.
    pub fn from_weights(
        layers: &[LayerTopology],
        weights: impl IntoIterator<Item = f32>,
    ) -> Result<Self, NetworkError> {
        check_topology(layers)?;

        let mut weights = weights.into_iter();
        let layers = layers
            .windows(2)
            .map(|pair| Layer::from_weights(pair[0].neurons, pair[1].neurons, &mut weights))
            .collect::<Result<Vec<_>, _>>()?;

        if weights.next().is_some() {
            return Err(NetworkError::TooManyWeights);
        }

        Ok(Self { layers })
    }

    /// Run `inputs` through every layer and return the output layer's values.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::InputSize`] when `inputs` does not match the
    /// input layer.
    pub fn propagate(&self, inputs: Vec<f32>) -> Result<Vec<f32>, NetworkError> {
        let expected = self.input_size();
        if inputs.len() != expected {
            return Err(NetworkError::InputSize { expected, actual: inputs.len() });
        }

        Ok(self
            .layers
            .iter()
            .fold(inputs, |inputs, layer| layer.propagate(&inputs)))
    }

    /// Flattened parameters: for each layer, for each neuron, the bias followed
    /// by its weights.
    pub fn weights(&self) -> impl Iterator<Item = f32> + '_ {
        self.layers
            .iter()
            .flat_map(|layer| layer.neurons.iter())
            .flat_map(|neuron| std::iter::once(neuron.bias).chain(neuron.weights.iter().copied()))
    }

    /// Number of inputs accepted by [`Network::propagate`].
    #[must_use]
    pub fn input_size(&self) -> usize {
        self.layers
            .first()
            .and_then(|layer| layer.neurons.first())
            .map_or(0, |neuron| neuron.weights.len())
    }

    /// Number of values returned by [`Network::propagate`].
    #[must_use]
    pub fn output_size(&self) -> usize {
        self.layers.last().map_or(0, |layer| layer.neurons.len())
    }
}

fn check_topology(layers: &[LayerTopology]) -> Result<(), NetworkError> {
    if layers.len() < 2 {
        return Err(NetworkError::TooFewLayers(layers.len()));
    }
    Ok(())
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
