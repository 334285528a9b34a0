//! Geometry for the two shapes the scene is made of.
//!
//! Both are plain data in CSS pixels; [`crate::render`] turns them into canvas paths.

use crate::consts::{FRAC_2PI_3, TRIANGLE_APEX_SCALE};
use crate::viewport::Point;

#[cfg(test)]
#[path = "shapes_test.rs"]
mod shapes_test;

/// A bird: three vertices, apex first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Point; 3],
}

/// A piece of food.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Triangle(Triangle),
    Circle(Circle),
}

/// Triangle centered on `center` and pointing along `rotation`.
///
/// Rotation 0 points toward +y (down on screen). The apex sits
/// `TRIANGLE_APEX_SCALE * size` from the center; the other two vertices sit
/// `size` away, a third of a turn either side of the apex.
#[must_use]
pub fn triangle(center: Point, size: f64, rotation: f64) -> Triangle {
    Triangle {
        vertices: [
            vertex(center, size * TRIANGLE_APEX_SCALE, rotation),
            vertex(center, size, rotation + FRAC_2PI_3),
            vertex(center, size, rotation + 2.0 * FRAC_2PI_3),
        ],
    }
}

#[must_use]
pub fn circle(center: Point, radius: f64) -> Circle {
    Circle { center, radius: radius.max(0.0) }
}

fn vertex(center: Point, distance: f64, angle: f64) -> Point {
    Point::new(center.x - angle.sin() * distance, center.y + angle.cos() * distance)
}
