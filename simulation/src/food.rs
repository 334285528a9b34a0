use glam::Vec2;
use rand::{Rng, RngCore};

#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    pub(crate) position: Vec2,
}

impl Food {
    #[must_use]
    pub fn at(position: Vec2) -> Self {
        Self { position }
    }

    pub fn random(rng: &mut dyn RngCore) -> Self {
        Self::at(random_position(rng))
    }

    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }
}

/// Uniform point in the unit square.
pub(crate) fn random_position(rng: &mut dyn RngCore) -> Vec2 {
    Vec2::new(rng.random(), rng.random())
}
