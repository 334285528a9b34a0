//! `wasm_bindgen` surface.
//!
//! [`start`] is the page entry point: it mounts the engine on a canvas, wires
//! the train button, and starts the render loop. [`SimulationHandle`] is
//! exported to JS as `Simulation` for pages that drive the loop themselves.

use std::cell::RefCell;
use std::rc::Rc;

use simulation::Config;
use wasm_bindgen::prelude::*;

use crate::engine::{self, Engine, EngineCore};
use crate::error::EngineError;

/// Install the panic hook and console logger when the module loads.
#[wasm_bindgen(start)]
pub fn install_hooks() {
    console_error_panic_hook::set_once();
    match console_log::init_with_level(log::Level::Info) {
        Ok(()) => log::debug!("console logger installed"),
        Err(err) => log::warn!("console logger not installed: {err}"),
    }
}

/// Mount on `canvas_id`, bind `train_button_id`, and run until the page closes.
///
/// # Errors
///
/// Returns the [`EngineError`] message when the page is missing either element.
#[wasm_bindgen]
pub fn start(canvas_id: &str, train_button_id: &str) -> Result<(), JsValue> {
    let core = EngineCore::new(Config::default(), seed_from_clock())?;
    let engine = Rc::new(RefCell::new(Engine::mount(canvas_id, core)?));

    engine::bind_train_button(train_button_id, Rc::clone(&engine))?;
    engine::run_loop(engine)?;

    log::info!("render loop started on #{canvas_id}");
    Ok(())
}

/// The simulation as a JS class: `new Simulation(seed?)`, `world()`, `step()`, `train()`.
#[wasm_bindgen(js_name = Simulation)]
pub struct SimulationHandle {
    core: EngineCore,
}

#[wasm_bindgen(js_class = Simulation)]
impl SimulationHandle {
    /// Seeded from the clock when `seed` is omitted.
    ///
    /// # Errors
    ///
    /// Never fails with the default config; errors are reported as strings.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<f64>) -> Result<SimulationHandle, JsValue> {
        let seed = seed.map_or_else(seed_from_clock, seed_from_f64);
        let core = EngineCore::new(Config::default(), seed)?;
        Ok(Self { core })
    }

    /// `{ foods: [{x, y}], animals: [{x, y, rotation}] }` in unit-square coordinates.
    ///
    /// # Errors
    ///
    /// Fails if the snapshot cannot be serialized or parsed.
    pub fn world(&self) -> Result<JsValue, JsValue> {
        let json = serde_json::to_string(&self.core.snapshot()).map_err(EngineError::from)?;
        js_sys::JSON::parse(&json)
    }

    /// # Errors
    ///
    /// Propagates simulation errors.
    pub fn step(&mut self) -> Result<(), JsValue> {
        self.core.step()?;
        Ok(())
    }

    /// Finish the current generation and summarize it as `min=…, max=…, avg=…`.
    ///
    /// # Errors
    ///
    /// Propagates simulation errors.
    pub fn train(&mut self) -> Result<String, JsValue> {
        Ok(self.core.train()?.to_string())
    }

    /// Completed generations.
    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn generation(&self) -> usize {
        self.core.sim.generation()
    }
}

fn seed_from_clock() -> u64 {
    seed_from_f64(js_sys::Date::now())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn seed_from_f64(value: f64) -> u64 {
    value.abs() as u64
}
