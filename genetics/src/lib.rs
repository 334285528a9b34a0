//! Genetic algorithm over flat `f32` chromosomes.
//!
//! One [`GeneticAlgorithm::evolve`] call produces the next generation:
//! two parents are picked by a [`SelectionMethod`], their chromosomes are
//! combined by a [`CrossoverMethod`], the child is perturbed by a
//! [`MutationMethod`], and [`Individual::create`] turns the result back into
//! a population member.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`chromosome`] | Gene storage |
//! | [`selection`] | Fitness-proportional parent selection |
//! | [`crossover`] | Gene-wise parent mixing |
//! | [`mutation`] | Random gene perturbation |
//! | [`statistics`] | Fitness summary of a population |

pub mod chromosome;
pub mod crossover;
pub mod mutation;
pub mod selection;
pub mod statistics;

use rand::RngCore;

pub use chromosome::Chromosome;
pub use crossover::UniformCrossover;
pub use mutation::GaussianMutation;
pub use selection::RouletteWheelSelection;
pub use statistics::Statistics;

/// Error returned by the genetic operators.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeneticsError {
    /// Selection or evolution was asked to work on zero individuals.
    #[error("population is empty")]
    EmptyPopulation,
    /// Crossover parents carry chromosomes of different lengths.
    #[error("parent chromosomes differ in length: {left} vs {right}")]
    ChromosomeLength { left: usize, right: usize },
    /// Mutation chance must be a probability.
    #[error("mutation chance must be within [0, 1], got {0}")]
    InvalidChance(f32),
}

/// A member of the population the algorithm evolves.
pub trait Individual {
    /// Build an individual from a freshly bred chromosome.
    fn create(chromosome: Chromosome) -> Self;

    fn chromosome(&self) -> &Chromosome;

    /// Non-negative score; higher is better.
    fn fitness(&self) -> f32;
}

pub trait SelectionMethod {
    /// Pick one parent from `population`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticsError::EmptyPopulation`] when there is nothing to pick.
    fn select<'a, I>(&self, rng: &mut dyn RngCore, population: &'a [I]) -> Result<&'a I, GeneticsError>
    where
        I: Individual;
}

pub trait CrossoverMethod {
    /// Combine two parent chromosomes into a child.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticsError::ChromosomeLength`] when the parents differ in length.
    fn crossover(
        &self,
        rng: &mut dyn RngCore,
        parent_a: &Chromosome,
        parent_b: &Chromosome,
    ) -> Result<Chromosome, GeneticsError>;
}

pub trait MutationMethod {
    fn mutate(&self, rng: &mut dyn RngCore, child: &mut Chromosome);
}

#[derive(Debug, Clone)]
pub struct GeneticAlgorithm<S, C, M> {
    selection_method: S,
    crossover_method: C,
    mutation_method: M,
}

impl<S, C, M> GeneticAlgorithm<S, C, M>
where
    S: SelectionMethod,
    C: CrossoverMethod,
    M: MutationMethod,
{
    #[must_use]
    pub fn new(selection_method: S, crossover_method: C, mutation_method: M) -> Self {
        Self { selection_method, crossover_method, mutation_method }
    }

    /// Breed a new population of the same size as `population`.
    ///
    /// The returned [`Statistics`] describe the input population, i.e. the
    /// generation that just finished.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticsError::EmptyPopulation`] for an empty population and
    /// propagates crossover errors.
    pub fn evolve<I>(&self, rng: &mut dyn RngCore, population: &[I]) -> Result<(Vec<I>, Statistics), GeneticsError>
    where
        I: Individual,
    {
        if population.is_empty() {
            return Err(GeneticsError::EmptyPopulation);
        }

        let next = (0..population.len())
            .map(|_| {
                let parent_a = self.selection_method.select(rng, population)?;
                let parent_b = self.selection_method.select(rng, population)?;
                let mut child = self
                    .crossover_method
                    .crossover(rng, parent_a.chromosome(), parent_b.chromosome())?;
                self.mutation_method.mutate(rng, &mut child);
                Ok(I::create(child))
            })
            .collect::<Result<Vec<_>, GeneticsError>>()?;

        Ok((next, Statistics::new(population)))
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
