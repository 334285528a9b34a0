use super::*;
use crate::shapes::{Circle, Triangle};
use crate::viewport::Point;

const EPSILON: f64 = 1e-6;

fn snapshot() -> WorldSnapshot {
    WorldSnapshot {
        foods: vec![FoodSnapshot { x: 0.5, y: 0.25 }, FoodSnapshot { x: 0.0, y: 1.0 }],
        animals: vec![AnimalSnapshot { x: 0.25, y: 0.75, rotation: 0.0 }],
    }
}

fn circles(shapes: &[Shape]) -> Vec<Circle> {
    shapes
        .iter()
        .filter_map(|s| match s {
            Shape::Circle(c) => Some(*c),
            Shape::Triangle(_) => None,
        })
        .collect()
}

fn triangles(shapes: &[Shape]) -> Vec<Triangle> {
    shapes
        .iter()
        .filter_map(|s| match s {
            Shape::Triangle(t) => Some(*t),
            Shape::Circle(_) => None,
        })
        .collect()
}

#[test]
fn compose_emits_one_shape_per_entity() {
    let shapes = compose(&snapshot(), &Viewport::new(800.0, 400.0, 2.0), 0.01);
    assert_eq!(shapes.len(), 3);
    assert_eq!(circles(&shapes).len(), 2);
    assert_eq!(triangles(&shapes).len(), 1);
}

#[test]
fn compose_draws_food_before_animals() {
    let shapes = compose(&snapshot(), &Viewport::new(800.0, 400.0, 1.0), 0.01);
    assert!(matches!(shapes[0], Shape::Circle(_)));
    assert!(matches!(shapes[1], Shape::Circle(_)));
    assert!(matches!(shapes[2], Shape::Triangle(_)));
}

#[test]
fn compose_scales_food_to_viewport() {
    let shapes = compose(&snapshot(), &Viewport::new(800.0, 400.0, 1.0), 0.01);
    let food = circles(&shapes)[0];
    assert!((food.center.x - 400.0).abs() < EPSILON);
    assert!((food.center.y - 100.0).abs() < EPSILON);
    // Half of 1% of 800 px.
    assert!((food.radius - 4.0).abs() < EPSILON);
}

#[test]
fn compose_places_animal_apex_from_center() {
    let shapes = compose(&snapshot(), &Viewport::new(800.0, 400.0, 1.0), 0.01);
    let bird = triangles(&shapes)[0];
    // Center (200, 300), size 8 px, apex 1.5 * 8 px toward +y.
    assert!((bird.vertices[0].x - 200.0).abs() < EPSILON);
    assert!((bird.vertices[0].y - 312.0).abs() < EPSILON);
}

#[test]
fn compose_ignores_device_pixel_ratio() {
    let a = compose(&snapshot(), &Viewport::new(800.0, 400.0, 1.0), 0.01);
    let b = compose(&snapshot(), &Viewport::new(800.0, 400.0, 3.0), 0.01);
    assert_eq!(a, b);
}

#[test]
fn compose_empty_world_is_empty() {
    let shapes = compose(&WorldSnapshot::default(), &Viewport::new(800.0, 400.0, 1.0), 0.01);
    assert!(shapes.is_empty());
}

#[test]
fn snapshot_serializes_to_js_shape() {
    let json = serde_json::to_value(snapshot()).expect("serialize");
    assert_eq!(json["foods"][0]["x"], serde_json::json!(0.5));
    assert_eq!(json["animals"][0]["rotation"], serde_json::json!(0.0));
    assert_eq!(json["animals"].as_array().map(Vec::len), Some(1));
}

#[test]
fn snapshot_from_world_copies_every_entity() {
    use rand::SeedableRng;

    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(1);
    let config = simulation::Config { world_animals: 3, world_foods: 7, ..simulation::Config::default() };
    let sim = simulation::Simulation::random(config, &mut rng).expect("simulation");

    let snap = WorldSnapshot::from(sim.world());
    assert_eq!(snap.foods.len(), 7);
    assert_eq!(snap.animals.len(), 3);

    let first = &sim.world().animals()[0];
    assert_eq!(snap.animals[0].x.to_bits(), first.position().x.to_bits());
    assert_eq!(snap.animals[0].rotation.to_bits(), first.rotation().to_bits());
}

#[test]
fn point_type_is_css_pixels() {
    let vp = Viewport::new(10.0, 20.0, 2.0);
    assert_eq!(vp.to_screen(0.5, 0.5), Point::new(5.0, 10.0));
}
