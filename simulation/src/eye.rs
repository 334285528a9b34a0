use std::f32::consts::PI;

use glam::Vec2;

use crate::math::{heading_of, normalize_angle, wrap};
use crate::{Config, Food};

/// A fan of photoreceptors centered on the animal's heading.
///
/// The field of view spans `fov_angle` radians and reaches `fov_range` world
/// units. Each food inside it lights up the cell covering its bearing, more
/// brightly the closer it is.
#[derive(Debug, Clone, PartialEq)]
pub struct Eye {
    fov_range: f32,
    fov_angle: f32,
    cells: usize,
}

impl Eye {
    /// Ranges are checked by [`Config::validate`].
    pub(crate) fn new(fov_range: f32, fov_angle: f32, cells: usize) -> Self {
        Self { fov_range, fov_angle, cells }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.eye_fov_range, config.eye_fov_angle, config.eye_cells)
    }

    #[must_use]
    pub fn cells(&self) -> usize {
        self.cells
    }

    #[must_use]
    pub fn fov_range(&self) -> f32 {
        self.fov_range
    }

    #[must_use]
    pub fn fov_angle(&self) -> f32 {
        self.fov_angle
    }

    /// Per-cell energy seen from `position` facing `rotation`.
    #[must_use]
    pub fn process_vision(&self, position: Vec2, rotation: f32, foods: &[Food]) -> Vec<f32> {
        let mut cells = vec![0.0; self.cells];
        if cells.is_empty() {
            return cells;
        }
        let half_fov = self.fov_angle / 2.0;

        for food in foods {
            let vec = food.position - position;
            let dist = vec.length();
            if dist >= self.fov_range {
                continue;
            }

            let angle = wrap(heading_of(vec) - normalize_angle(rotation), -PI, PI);
            if angle < -half_fov || angle > half_fov {
                continue;
            }

            // Bearing relative to the left edge of the fan, as a fraction of its width.
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let cell = ((angle + half_fov) / self.fov_angle * self.cells as f32) as usize;
            let cell = cell.min(cells.len() - 1);

            cells[cell] += (self.fov_range - dist) / self.fov_range;
        }

        cells
    }
}

impl Default for Eye {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[cfg(test)]
#[path = "eye_test.rs"]
mod tests;
