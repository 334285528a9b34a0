use genetics::{GaussianMutation, GeneticAlgorithm, RouletteWheelSelection, Statistics, UniformCrossover};
use glam::Vec2;
use rand::RngCore;

use crate::animal_individual::AnimalIndividual;
use crate::food::random_position;
use crate::math::{direction, normalize_angle, wrap};
use crate::{Config, SimulationError, World};

type Evolver = GeneticAlgorithm<RouletteWheelSelection, UniformCrossover, GaussianMutation>;

#[derive(Debug, Clone)]
pub struct Simulation {
    config: Config,
    world: World,
    ga: Evolver,
    /// Steps taken in the current generation.
    age: usize,
    /// Completed generations.
    generation: usize,
}

impl Simulation {
    /// Validate `config` and populate a random world.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidConfig`] for an out-of-range config.
    pub fn random(config: Config, rng: &mut dyn RngCore) -> Result<Self, SimulationError> {
        config.validate()?;

        let world = World::random(&config, rng)?;
        let ga = GeneticAlgorithm::new(
            RouletteWheelSelection,
            UniformCrossover,
            GaussianMutation::new(config.mutation_chance, config.mutation_coeff)?,
        );

        Ok(Self { config, world, ga, age: 0, generation: 0 })
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    #[must_use]
    pub fn age(&self) -> usize {
        self.age
    }

    #[must_use]
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Advance one tick. Returns the finished generation's statistics when
    /// this tick triggered evolution.
    ///
    /// # Errors
    ///
    /// Propagates brain and evolution errors.
    pub fn step(&mut self, rng: &mut dyn RngCore) -> Result<Option<Statistics>, SimulationError> {
        self.process_collisions(rng);
        self.process_brains()?;
        self.process_movements();

        self.age += 1;
        if self.age > self.config.generation_length {
            Ok(Some(self.evolve(rng)?))
        } else {
            Ok(None)
        }
    }

    /// Step until the current generation ends.
    ///
    /// # Errors
    ///
    /// Propagates [`Simulation::step`] errors.
    pub fn train(&mut self, rng: &mut dyn RngCore) -> Result<Statistics, SimulationError> {
        loop {
            if let Some(stats) = self.step(rng)? {
                return Ok(stats);
            }
        }
    }

    fn process_collisions(&mut self, rng: &mut dyn RngCore) {
        for animal in &mut self.world.animals {
            for food in &mut self.world.foods {
                if animal.position.distance(food.position) <= self.config.food_size {
                    animal.satiation += 1;
                    food.position = random_position(rng);
                }
            }
        }
    }

    fn process_brains(&mut self) -> Result<(), SimulationError> {
        let cfg = &self.config;

        for animal in &mut self.world.animals {
            let vision = animal
                .eye
                .process_vision(animal.position, animal.rotation, &self.world.foods);
            let (speed, rotation) = animal.brain.decide(vision)?;

            // Both outputs are deltas: zero means keep flying as before.
            let speed = speed.clamp(-cfg.speed_accel, cfg.speed_accel);
            let rotation = rotation.clamp(-cfg.rotation_accel, cfg.rotation_accel);

            animal.speed = (animal.speed + speed).clamp(cfg.speed_min, cfg.speed_max);
            animal.rotation = normalize_angle(animal.rotation + rotation);
        }

        Ok(())
    }

    fn process_movements(&mut self) {
        for animal in &mut self.world.animals {
            let moved: Vec2 = animal.position + direction(animal.rotation) * animal.speed;
            animal.position = Vec2::new(wrap(moved.x, 0.0, 1.0), wrap(moved.y, 0.0, 1.0));
        }
    }

    fn evolve(&mut self, rng: &mut dyn RngCore) -> Result<Statistics, SimulationError> {
        self.age = 0;
        self.generation += 1;

        let current: Vec<AnimalIndividual> = self
            .world
            .animals
            .iter()
            .map(AnimalIndividual::from_animal)
            .collect();

        let (evolved, stats) = self.ga.evolve(rng, &current)?;

        self.world.animals = evolved
            .into_iter()
            .map(|individual| individual.into_animal(&self.config, rng))
            .collect::<Result<_, _>>()?;

        for food in &mut self.world.foods {
            food.position = random_position(rng);
        }

        log::debug!("generation {} evolved: {stats}", self.generation);
        Ok(stats)
    }
}

#[cfg(test)]
#[path = "simulation_test.rs"]
mod tests;
