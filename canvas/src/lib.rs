//! Browser driver for the bird simulation.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It sizes the
//! canvas for the device pixel ratio, steps the simulation once per animation
//! frame, and draws food as circles and birds as triangles. The host page only
//! loads the module and calls [`bindings::start`] with the canvas and button
//! element ids.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Render loop and the browser-free [`engine::EngineCore`] |
//! | [`bindings`] | `wasm_bindgen` entry points and the JS `Simulation` class |
//! | [`viewport`] | CSS size, device pixel ratio, unit-to-pixel mapping |
//! | [`shapes`] | Triangle and circle geometry |
//! | [`scene`] | World snapshot and shape composition |
//! | [`render`] | Canvas 2D drawing |
//! | [`error`] | [`error::EngineError`] |
//! | [`consts`] | Colors and sizes |

pub mod bindings;
pub mod consts;
pub mod engine;
pub mod error;
pub mod render;
pub mod scene;
pub mod shapes;
pub mod viewport;
