use genetics::{Chromosome, Individual};
use rand::RngCore;

use crate::{Animal, Config, SimulationError};

/// An [`Animal`] as the genetic algorithm sees it: a chromosome and a score.
pub(crate) struct AnimalIndividual {
    fitness: f32,
    chromosome: Chromosome,
}

impl AnimalIndividual {
    pub(crate) fn from_animal(animal: &Animal) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let fitness = animal.satiation as f32;
        Self { fitness, chromosome: animal.as_chromosome() }
    }

    pub(crate) fn into_animal(self, config: &Config, rng: &mut dyn RngCore) -> Result<Animal, SimulationError> {
        Animal::from_chromosome(config, self.chromosome, rng)
    }
}

impl Individual for AnimalIndividual {
    fn create(chromosome: Chromosome) -> Self {
        Self { fitness: 0.0, chromosome }
    }

    fn chromosome(&self) -> &Chromosome {
        &self.chromosome
    }

    fn fitness(&self) -> f32 {
        self.fitness
    }
}
