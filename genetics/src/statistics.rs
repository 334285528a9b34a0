use std::fmt;

use crate::Individual;

/// Fitness summary of one generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    pub min_fitness: f32,
    pub max_fitness: f32,
    pub avg_fitness: f32,
}

impl Statistics {
    /// Summarize `population`. An empty population yields all zeros.
    #[must_use]
    pub fn new<I>(population: &[I]) -> Self
    where
        I: Individual,
    {
        if population.is_empty() {
            return Self { min_fitness: 0.0, max_fitness: 0.0, avg_fitness: 0.0 };
        }

        let mut min_fitness = f32::MAX;
        let mut max_fitness = f32::MIN;
        let mut sum_fitness = 0.0;

        for individual in population {
            let fitness = individual.fitness();
            min_fitness = min_fitness.min(fitness);
            max_fitness = max_fitness.max(fitness);
            sum_fitness += fitness;
        }

        #[allow(clippy::cast_precision_loss)]
        let avg_fitness = sum_fitness / population.len() as f32;

        Self { min_fitness, max_fitness, avg_fitness }
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "min={:.2}, max={:.2}, avg={:.2}",
            self.min_fitness, self.max_fitness, self.avg_fitness
        )
    }
}
