use std::cell::RefCell;
use std::rc::Rc;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use simulation::{Config, Simulation, Statistics};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, Window};

use crate::error::EngineError;
use crate::render;
use crate::scene::{self, WorldSnapshot};
use crate::shapes::Shape;
use crate::viewport::Viewport;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Core engine state: the simulation, its RNG, and the viewport.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub sim: Simulation,
    pub viewport: Viewport,
    rng: ChaCha8Rng,
}

impl EngineCore {
    /// # Errors
    ///
    /// Returns [`EngineError::Simulation`] when `config` is invalid.
    pub fn new(config: Config, seed: u64) -> Result<Self, EngineError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let sim = Simulation::random(config, &mut rng)?;
        Ok(Self { sim, viewport: Viewport::default(), rng })
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Advance the simulation one tick, logging when a generation ends.
    ///
    /// # Errors
    ///
    /// Propagates simulation errors.
    pub fn step(&mut self) -> Result<Option<Statistics>, EngineError> {
        let stats = self.sim.step(&mut self.rng)?;
        if let Some(stats) = &stats {
            log::info!("generation {} finished: {stats}", self.sim.generation());
        }
        Ok(stats)
    }

    /// Fast-forward to the end of the current generation.
    ///
    /// # Errors
    ///
    /// Propagates simulation errors.
    pub fn train(&mut self) -> Result<Statistics, EngineError> {
        let stats = self.sim.train(&mut self.rng)?;
        log::info!("generation {} trained: {stats}", self.sim.generation());
        Ok(stats)
    }

    #[must_use]
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot::from(self.sim.world())
    }

    /// Shapes for the current world state.
    #[must_use]
    pub fn shapes(&self) -> Vec<Shape> {
        let food_size = f64::from(self.sim.config().food_size);
        scene::compose(&self.snapshot(), &self.viewport, food_size)
    }

    /// One animation frame: step, then compose.
    ///
    /// # Errors
    ///
    /// Propagates simulation errors.
    pub fn frame(&mut self) -> Result<Vec<Shape>, EngineError> {
        self.step()?;
        Ok(self.shapes())
    }
}

/// The full engine. Wraps `EngineCore` and owns the browser canvas and its context.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: EngineCore,
}

impl Engine {
    /// Bind to the canvas with id `canvas_id` and size it for the device pixel ratio.
    ///
    /// The canvas' current `width` / `height` attributes are taken as its
    /// displayed size in CSS pixels.
    ///
    /// # Errors
    ///
    /// Fails when the element is missing, is not a canvas, or has no 2D context.
    pub fn mount(canvas_id: &str, core: EngineCore) -> Result<Self, EngineError> {
        let window = window()?;
        let canvas = document(&window)?
            .get_element_by_id(canvas_id)
            .ok_or_else(|| EngineError::MissingElement(canvas_id.to_owned()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| EngineError::WrongElement { id: canvas_id.to_owned(), expected: "canvas" })?;

        let ctx = canvas
            .get_context("2d")?
            .ok_or(EngineError::MissingContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| EngineError::MissingContext)?;

        let viewport = Viewport::new(
            f64::from(canvas.width()),
            f64::from(canvas.height()),
            window.device_pixel_ratio(),
        );

        let mut engine = Self { canvas, ctx, core };
        engine.set_viewport(viewport)?;
        Ok(engine)
    }

    /// Resize the backing store to `viewport` and pin the CSS size.
    ///
    /// # Errors
    ///
    /// Fails when the style property cannot be set.
    pub fn set_viewport(&mut self, viewport: Viewport) -> Result<(), EngineError> {
        let (buffer_w, buffer_h) = viewport.buffer_size();
        self.canvas.set_width(buffer_w);
        self.canvas.set_height(buffer_h);

        let style = self.canvas.style();
        style.set_property("width", &format!("{}px", viewport.width))?;
        style.set_property("height", &format!("{}px", viewport.height))?;

        self.core.set_viewport(viewport);
        Ok(())
    }

    /// Step the simulation and draw the result.
    ///
    /// # Errors
    ///
    /// Propagates simulation and `Canvas2D` errors.
    pub fn render_frame(&mut self) -> Result<(), EngineError> {
        let shapes = self.core.frame()?;
        render::draw(&self.ctx, &self.core.viewport, &shapes)?;
        Ok(())
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Start the perpetual render loop: every animation frame steps and redraws.
///
/// The frame closure holds a handle to itself so it can reschedule; that
/// cycle keeps it alive for the page's lifetime. A failing frame logs the
/// error and stops the loop.
///
/// # Errors
///
/// Fails when the first frame cannot be requested.
pub fn run_loop(engine: Rc<RefCell<Engine>>) -> Result<(), EngineError> {
    let holder: FrameCallback = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);

    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        if let Err(err) = engine.borrow_mut().render_frame() {
            log::error!("render loop stopped: {err}");
            return;
        }
        if let Err(err) = request_frame(&holder_for_cb) {
            log::error!("render loop stopped: {err}");
        }
    }) as Box<dyn FnMut(f64)>);

    *holder.borrow_mut() = Some(cb);
    request_frame(&holder)
}

fn request_frame(holder: &FrameCallback) -> Result<(), EngineError> {
    let window = window()?;
    let holder = holder.borrow();
    if let Some(cb) = holder.as_ref() {
        window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }
    Ok(())
}

/// Run one training generation whenever the element `button_id` is clicked.
///
/// # Errors
///
/// Fails when the element is missing or is not an HTML element.
pub fn bind_train_button(button_id: &str, engine: Rc<RefCell<Engine>>) -> Result<(), EngineError> {
    let button = document(&window()?)?
        .get_element_by_id(button_id)
        .ok_or_else(|| EngineError::MissingElement(button_id.to_owned()))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| EngineError::WrongElement { id: button_id.to_owned(), expected: "HTML element" })?;

    let on_click = Closure::wrap(Box::new(move || {
        if let Err(err) = engine.borrow_mut().core.train() {
            log::error!("training failed: {err}");
        }
    }) as Box<dyn FnMut()>);

    button.set_onclick(Some(on_click.as_ref().unchecked_ref()));
    // The button outlives this call; the handler lives as long as the page.
    on_click.forget();
    Ok(())
}

fn window() -> Result<Window, EngineError> {
    web_sys::window().ok_or(EngineError::MissingWindow)
}

fn document(window: &Window) -> Result<Document, EngineError> {
    window.document().ok_or(EngineError::MissingDocument)
}
