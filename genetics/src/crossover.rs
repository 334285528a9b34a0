use rand::{Rng, RngCore};

use crate::{Chromosome, CrossoverMethod, GeneticsError};

/// Takes every gene from either parent with equal probability.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformCrossover;

impl CrossoverMethod for UniformCrossover {
    fn crossover(
        &self,
        rng: &mut dyn RngCore,
        parent_a: &Chromosome,
        parent_b: &Chromosome,
    ) -> Result<Chromosome, GeneticsError> {
        if parent_a.len() != parent_b.len() {
            return Err(GeneticsError::ChromosomeLength { left: parent_a.len(), right: parent_b.len() });
        }

        Ok(parent_a
            .iter()
            .zip(parent_b.iter())
            .map(|(&a, &b)| if rng.random_bool(0.5) { a } else { b })
            .collect())
    }
}

#[cfg(test)]
#[path = "crossover_test.rs"]
mod tests;
