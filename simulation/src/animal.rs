use std::f32::consts::PI;

use genetics::Chromosome;
use glam::Vec2;
use rand::{Rng, RngCore};

use crate::food::random_position;
use crate::{Brain, Config, Eye, SimulationError};

#[derive(Debug, Clone, PartialEq)]
pub struct Animal {
    pub(crate) position: Vec2,
    /// Heading in radians; 0 faces +Y.
    pub(crate) rotation: f32,
    pub(crate) speed: f32,
    pub(crate) eye: Eye,
    pub(crate) brain: Brain,
    /// Foods eaten this generation.
    pub(crate) satiation: usize,
}

impl Animal {
    /// # Errors
    ///
    /// Propagates brain construction errors.
    pub fn random(config: &Config, rng: &mut dyn RngCore) -> Result<Self, SimulationError> {
        let eye = Eye::from_config(config);
        let brain = Brain::random(rng, &eye)?;
        Ok(Self::new(config, eye, brain, rng))
    }

    pub(crate) fn from_chromosome(
        config: &Config,
        chromosome: Chromosome,
        rng: &mut dyn RngCore,
    ) -> Result<Self, SimulationError> {
        let eye = Eye::from_config(config);
        let brain = Brain::from_chromosome(chromosome, &eye)?;
        Ok(Self::new(config, eye, brain, rng))
    }

    /// Only the brain evolves; position and heading are rolled fresh each generation.
    pub(crate) fn as_chromosome(&self) -> Chromosome {
        self.brain.as_chromosome()
    }

    fn new(config: &Config, eye: Eye, brain: Brain, rng: &mut dyn RngCore) -> Self {
        Self {
            position: random_position(rng),
            rotation: rng.random_range(-PI..PI),
            speed: config.speed_max,
            eye,
            brain,
            satiation: 0,
        }
    }

    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[must_use]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    #[must_use]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[must_use]
    pub fn satiation(&self) -> usize {
        self.satiation
    }

    #[must_use]
    pub fn eye(&self) -> &Eye {
        &self.eye
    }

    #[must_use]
    pub fn brain(&self) -> &Brain {
        &self.brain
    }
}
