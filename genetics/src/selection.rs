use rand::RngCore;
use rand::seq::IndexedRandom;

use crate::{GeneticsError, Individual, SelectionMethod};

/// Fitness-proportional selection: an individual with twice the fitness is
/// twice as likely to be picked.
///
/// A population where nobody scored falls back to a uniform pick so that a
/// generation of starving birds still breeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouletteWheelSelection;

impl SelectionMethod for RouletteWheelSelection {
    fn select<'a, I>(&self, rng: &mut dyn RngCore, population: &'a [I]) -> Result<&'a I, GeneticsError>
    where
        I: Individual,
    {
        if population.is_empty() {
            return Err(GeneticsError::EmptyPopulation);
        }

        match population.choose_weighted(rng, |individual| individual.fitness().max(0.0)) {
            Ok(individual) => Ok(individual),
            Err(_) => population.choose(rng).ok_or(GeneticsError::EmptyPopulation),
        }
    }
}

#[cfg(test)]
#[path = "selection_test.rs"]
mod tests;
