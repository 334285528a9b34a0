use rand::{Rng, RngCore};

use crate::{Chromosome, GeneticsError, MutationMethod};

/// Nudges random genes up or down.
#[derive(Debug, Clone, Copy)]
pub struct GaussianMutation {
    /// Probability of touching a gene: 0.0 leaves every gene alone, 1.0
    /// touches all of them.
    chance: f32,

    /// Largest shift applied to a touched gene, in either direction.
    coeff: f32,
}

impl GaussianMutation {
    /// # Errors
    ///
    /// Returns [`GeneticsError::InvalidChance`] when `chance` is not in `[0, 1]`.
    pub fn new(chance: f32, coeff: f32) -> Result<Self, GeneticsError> {
        if !(0.0..=1.0).contains(&chance) {
            return Err(GeneticsError::InvalidChance(chance));
        }
        Ok(Self { chance, coeff })
    }

    #[must_use]
    pub fn chance(&self) -> f32 {
        self.chance
    }

    #[must_use]
    pub fn coeff(&self) -> f32 {
        self.coeff
    }
}

impl MutationMethod for GaussianMutation {
    fn mutate(&self, rng: &mut dyn RngCore, child: &mut Chromosome) {
        for gene in child.iter_mut() {
            let sign = if rng.random_bool(0.5) { -1.0 } else { 1.0 };

            if rng.random_bool(f64::from(self.chance)) {
                *gene += sign * self.coeff * rng.random::<f32>();
            }
        }
    }
}

#[cfg(test)]
#[path = "mutation_test.rs"]
mod tests;
