use genetics::Chromosome;
use network::{LayerTopology, Network};
use rand::RngCore;

use crate::{Eye, SimulationError};

/// Neural network mapping eye cells to `[speed delta, rotation delta]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Brain {
    nn: Network,
}

impl Brain {
    /// # Errors
    ///
    /// Propagates [`network::NetworkError`] from network construction.
    pub fn random(rng: &mut dyn RngCore, eye: &Eye) -> Result<Self, SimulationError> {
        let nn = Network::random(rng, &Self::topology(eye))?;
        Ok(Self { nn })
    }

    /// # Errors
    ///
    /// Fails when the chromosome length does not fit the eye's topology.
    pub fn from_chromosome(chromosome: Chromosome, eye: &Eye) -> Result<Self, SimulationError> {
        let nn = Network::from_weights(&Self::topology(eye), chromosome)?;
        Ok(Self { nn })
    }

    #[must_use]
    pub fn as_chromosome(&self) -> Chromosome {
        self.nn.weights().collect()
    }

    /// Run one vision frame through the network.
    ///
    /// # Errors
    ///
    /// Fails when `vision` does not match the input layer or the output layer
    /// is not two wide.
    pub fn decide(&self, vision: Vec<f32>) -> Result<(f32, f32), SimulationError> {
        match self.nn.propagate(vision)?.as_slice() {
            &[speed, rotation] => Ok((speed, rotation)),
            other => Err(SimulationError::BrainOutput(other.len())),
        }
    }

    /// Input layer per eye cell, a hidden layer twice as wide, and two outputs.
    fn topology(eye: &Eye) -> [LayerTopology; 3] {
        [
            LayerTopology { neurons: eye.cells() },
            LayerTopology { neurons: 2 * eye.cells() },
            LayerTopology { neurons: 2 },
        ]
    }
}

#[cfg(test)]
#[path = "brain_test.rs"]
mod tests;
