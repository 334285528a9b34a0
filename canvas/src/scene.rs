//! Per-frame world snapshot and its translation into shapes.
//!
//! The snapshot is the JS-facing view of the world: only what drawing needs,
//! in unit-square coordinates. [`compose`] scales it to the viewport.

use serde::{Deserialize, Serialize};

use crate::consts::ANIMAL_SIZE;
use crate::shapes::{Shape, circle, triangle};
use crate::viewport::Viewport;

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FoodSnapshot {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimalSnapshot {
    pub x: f32,
    pub y: f32,
    pub rotation: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub foods: Vec<FoodSnapshot>,
    pub animals: Vec<AnimalSnapshot>,
}

impl From<&simulation::Food> for FoodSnapshot {
    fn from(food: &simulation::Food) -> Self {
        let position = food.position();
        Self { x: position.x, y: position.y }
    }
}

impl From<&simulation::Animal> for AnimalSnapshot {
    fn from(animal: &simulation::Animal) -> Self {
        let position = animal.position();
        Self { x: position.x, y: position.y, rotation: animal.rotation() }
    }
}

impl From<&simulation::World> for WorldSnapshot {
    fn from(world: &simulation::World) -> Self {
        Self {
            foods: world.foods().iter().map(FoodSnapshot::from).collect(),
            animals: world.animals().iter().map(AnimalSnapshot::from).collect(),
        }
    }
}

/// Shapes for one frame, food first so birds draw on top.
///
/// `food_size` is the eating distance in unit-square terms; food is drawn
/// with that diameter. Sizes scale with the viewport width.
#[must_use]
pub fn compose(world: &WorldSnapshot, viewport: &Viewport, food_size: f64) -> Vec<Shape> {
    let food_radius = food_size / 2.0 * viewport.width;
    let animal_size = ANIMAL_SIZE * viewport.width;

    let foods = world.foods.iter().map(|food| {
        let center = viewport.to_screen(f64::from(food.x), f64::from(food.y));
        Shape::Circle(circle(center, food_radius))
    });

    let animals = world.animals.iter().map(|animal| {
        let center = viewport.to_screen(f64::from(animal.x), f64::from(animal.y));
        Shape::Triangle(triangle(center, animal_size, f64::from(animal.rotation)))
    });

    foods.chain(animals).collect()
}
