use simulation::SimulationError;
use wasm_bindgen::JsValue;

/// Everything that can go wrong between the page and the simulation.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("no global window")]
    MissingWindow,
    #[error("window has no document")]
    MissingDocument,
    #[error("no element with id `{0}`")]
    MissingElement(String),
    #[error("element `{id}` is not a {expected}")]
    WrongElement { id: String, expected: &'static str },
    #[error("canvas has no 2d context")]
    MissingContext,
    #[error(transparent)]
    Simulation(#[from] SimulationError),
    #[error("failed to serialize world snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
    /// A browser API call threw.
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for EngineError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<EngineError> for JsValue {
    fn from(err: EngineError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
