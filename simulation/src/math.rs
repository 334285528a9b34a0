//! Small numeric helpers shared by the eye and the simulation.

use glam::Vec2;

/// Shift `val` by a multiple of `max - min` so it lies in `[min, max]`.
///
/// Values already in range, including both bounds, are returned unchanged.
#[must_use]
pub fn wrap(val: f32, min: f32, max: f32) -> f32 {
    if (min..=max).contains(&val) {
        return val;
    }

    let width = max - min;
    if width.is_nan() || width <= 0.0 {
        return min;
    }

    ((val - min).rem_euclid(width) + min).clamp(min, max)
}

/// Map any angle onto `(-PI, PI]`.
#[must_use]
pub fn normalize_angle(angle: f32) -> f32 {
    let (sin, cos) = angle.sin_cos();
    sin.atan2(cos)
}

/// Signed angle from the +Y axis to `vec`, counter-clockwise positive.
///
/// Heading 0 faces +Y. A zero vector has heading 0.
#[must_use]
pub fn heading_of(vec: Vec2) -> f32 {
    let len = vec.length();
    if len <= 0.0 {
        return 0.0;
    }
    let dir = vec / len;
    normalize_angle(Vec2::Y.perp_dot(dir).atan2(Vec2::Y.dot(dir)))
}

/// Unit vector for `heading`, where 0 faces +Y.
#[must_use]
pub fn direction(heading: f32) -> Vec2 {
    Vec2::from_angle(heading).rotate(Vec2::Y)
}

#[cfg(test)]
#[path = "math_test.rs"]
mod tests;
