//! Shared constants for the canvas crate.

// ── Colors ──────────────────────────────────────────────────────

/// Bird fill.
pub const ANIMAL_FILL: &str = "rgb(255, 255, 255)";

/// Food fill.
pub const FOOD_FILL: &str = "rgb(0, 255, 128)";

// ── Sizes ───────────────────────────────────────────────────────

/// Bird triangle size as a fraction of the viewport width.
pub const ANIMAL_SIZE: f64 = 0.01;

/// Apex distance relative to the other two vertices, so the nose points the way the bird flies.
pub const TRIANGLE_APEX_SCALE: f64 = 1.5;

/// Angular step between the triangle's base vertices and its apex (120°).
pub const FRAC_2PI_3: f64 = 2.0 * std::f64::consts::PI / 3.0;
