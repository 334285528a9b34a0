//! Rendering: draws one frame of shapes to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives finished shapes in CSS pixels and the viewport, and produces
//! pixels; it does not mutate any application state.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{ANIMAL_FILL, FOOD_FILL};
use crate::shapes::{Circle, Shape, Triangle};
use crate::viewport::Viewport;

/// Clear the canvas and fill every shape in order.
///
/// The transform is reset to a plain `dpr` scale each frame so that shape
/// coordinates stay in CSS pixels regardless of the backing-store size.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw(ctx: &CanvasRenderingContext2d, viewport: &Viewport, shapes: &[Shape]) -> Result<(), JsValue> {
    ctx.set_transform(viewport.dpr, 0.0, 0.0, viewport.dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);

    for shape in shapes {
        match shape {
            Shape::Triangle(triangle) => draw_triangle(ctx, triangle),
            Shape::Circle(circle) => draw_circle(ctx, circle)?,
        }
    }

    Ok(())
}

fn draw_triangle(ctx: &CanvasRenderingContext2d, triangle: &Triangle) {
    let [apex, left, right] = triangle.vertices;

    ctx.begin_path();
    ctx.move_to(apex.x, apex.y);
    ctx.line_to(left.x, left.y);
    ctx.line_to(right.x, right.y);
    ctx.line_to(apex.x, apex.y);

    ctx.set_fill_style_str(ANIMAL_FILL);
    ctx.fill();
}

fn draw_circle(ctx: &CanvasRenderingContext2d, circle: &Circle) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(circle.center.x, circle.center.y, circle.radius, 0.0, TAU)?;

    ctx.set_fill_style_str(FOOD_FILL);
    ctx.fill();
    Ok(())
}
