use rand::RngCore;

use crate::{Animal, Config, Food, SimulationError};

/// Animals and food sharing the unit square. They may overlap.
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    pub(crate) animals: Vec<Animal>,
    pub(crate) foods: Vec<Food>,
}

impl World {
    /// # Errors
    ///
    /// Propagates animal construction errors.
    pub fn random(config: &Config, rng: &mut dyn RngCore) -> Result<Self, SimulationError> {
        let animals = (0..config.world_animals)
            .map(|_| Animal::random(config, rng))
            .collect::<Result<_, _>>()?;
        let foods = (0..config.world_foods).map(|_| Food::random(rng)).collect();

        Ok(Self { animals, foods })
    }

    #[must_use]
    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    #[must_use]
    pub fn foods(&self) -> &[Food] {
        &self.foods
    }
}
