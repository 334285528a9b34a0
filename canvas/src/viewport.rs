#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// A point in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Displayed canvas size and the device pixel ratio it is drawn at.
///
/// `width` / `height` are in CSS pixels. The backing buffer holds
/// `width * dpr` by `height * dpr` physical pixels, and every frame is drawn
/// under a `dpr` scale so drawing code can stay in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub dpr: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 0.0, height: 0.0, dpr: 1.0 }
    }
}

impl Viewport {
    /// Negative sizes clamp to zero; a missing or non-positive `dpr` falls back to 1.
    #[must_use]
    pub fn new(width: f64, height: f64, dpr: f64) -> Self {
        let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        Self { width: width.max(0.0), height: height.max(0.0), dpr }
    }

    /// Backing-store size in physical pixels.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn buffer_size(&self) -> (u32, u32) {
        (
            (self.width * self.dpr).round() as u32,
            (self.height * self.dpr).round() as u32,
        )
    }

    /// Map a unit-square world coordinate to CSS pixels.
    #[must_use]
    pub fn to_screen(&self, x: f64, y: f64) -> Point {
        Point { x: x * self.width, y: y * self.height }
    }
}
