//! Simulation constants.
//!
//! Every field has a default, so a config file only needs to name the values
//! it overrides.

use std::f32::consts::FRAC_PI_4;

use serde::{Deserialize, Serialize};

use crate::SimulationError;

pub const DEFAULT_EYE_FOV_RANGE: f32 = 0.25;
pub const DEFAULT_EYE_FOV_ANGLE: f32 = FRAC_PI_4;
pub const DEFAULT_EYE_CELLS: usize = 9;
pub const DEFAULT_WORLD_ANIMALS: usize = 10;
pub const DEFAULT_WORLD_FOODS: usize = 60;
pub const DEFAULT_FOOD_SIZE: f32 = 0.01;
pub const DEFAULT_SPEED_MIN: f32 = 0.0001;
pub const DEFAULT_SPEED_MAX: f32 = 0.002;
pub const DEFAULT_SPEED_ACCEL: f32 = 0.02;
pub const DEFAULT_ROTATION_ACCEL: f32 = FRAC_PI_4;
pub const DEFAULT_GENERATION_LENGTH: usize = 2500;
pub const DEFAULT_MUTATION_CHANCE: f32 = 0.01;
pub const DEFAULT_MUTATION_COEFF: f32 = 0.2;

/// Upper bound for `speed_max`: one world width per step.
pub const MAX_SPEED: f32 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How far an eye sees, in world units (the world is 1.0 wide).
    pub eye_fov_range: f32,
    /// Width of the field of view, in radians, centered on the heading.
    pub eye_fov_angle: f32,
    /// Photoreceptors per eye; also the brain's input size.
    pub eye_cells: usize,

    pub world_animals: usize,
    pub world_foods: usize,
    /// Eating distance; also the drawn food diameter.
    pub food_size: f32,

    pub speed_min: f32,
    pub speed_max: f32,
    /// Largest speed change per step.
    pub speed_accel: f32,
    /// Largest heading change per step, in radians.
    pub rotation_accel: f32,

    /// Steps each generation lives before evolution.
    pub generation_length: usize,
    pub mutation_chance: f32,
    pub mutation_coeff: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            eye_fov_range: DEFAULT_EYE_FOV_RANGE,
            eye_fov_angle: DEFAULT_EYE_FOV_ANGLE,
            eye_cells: DEFAULT_EYE_CELLS,
            world_animals: DEFAULT_WORLD_ANIMALS,
            world_foods: DEFAULT_WORLD_FOODS,
            food_size: DEFAULT_FOOD_SIZE,
            speed_min: DEFAULT_SPEED_MIN,
            speed_max: DEFAULT_SPEED_MAX,
            speed_accel: DEFAULT_SPEED_ACCEL,
            rotation_accel: DEFAULT_ROTATION_ACCEL,
            generation_length: DEFAULT_GENERATION_LENGTH,
            mutation_chance: DEFAULT_MUTATION_CHANCE,
            mutation_coeff: DEFAULT_MUTATION_COEFF,
        }
    }
}

impl Config {
    /// Check every field against its allowed range.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.eye_fov_range.is_nan() || self.eye_fov_range <= 0.0 {
            return Err(invalid("eye_fov_range", "must be positive"));
        }
        if self.eye_fov_angle.is_nan() || self.eye_fov_angle <= 0.0 {
            return Err(invalid("eye_fov_angle", "must be positive"));
        }
        if self.eye_cells == 0 {
            return Err(invalid("eye_cells", "must be at least 1"));
        }
        if self.world_animals == 0 {
            return Err(invalid("world_animals", "must be at least 1"));
        }
        if self.food_size.is_nan() || self.food_size < 0.0 {
            return Err(invalid("food_size", "must not be negative"));
        }
        if self.speed_min.is_nan() || self.speed_min < 0.0 {
            return Err(invalid("speed_min", "must not be negative"));
        }
        if self.speed_max.is_nan() || self.speed_max < self.speed_min {
            return Err(invalid("speed_max", "must not be below speed_min"));
        }
        if self.speed_max > MAX_SPEED {
            return Err(invalid("speed_max", "must not exceed 1.0 (one world width per step)"));
        }
        if self.speed_accel.is_nan() || self.speed_accel < 0.0 {
            return Err(invalid("speed_accel", "must not be negative"));
        }
        if self.rotation_accel.is_nan() || self.rotation_accel < 0.0 {
            return Err(invalid("rotation_accel", "must not be negative"));
        }
        if self.generation_length == 0 {
            return Err(invalid("generation_length", "must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.mutation_chance) {
            return Err(invalid("mutation_chance", "must be within [0, 1]"));
        }
        if !self.mutation_coeff.is_finite() {
            return Err(invalid("mutation_coeff", "must be finite"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &'static str) -> SimulationError {
    SimulationError::InvalidConfig { field, reason }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
