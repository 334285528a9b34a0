//! Birds learning to find food.
//!
//! A [`World`] holds animals and food in the unit square. Each animal sees
//! nearby food through its [`Eye`], feeds the vision into its [`Brain`] (a
//! small neural network) and adjusts speed and heading from the output. After
//! `generation_length` steps the genetic algorithm breeds a new population,
//! scoring each bird by how much it ate.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Tunable constants, serde-loadable |
//! | [`simulation`] | Stepping, collisions, evolution |
//! | [`world`] | Animals and food |
//! | [`animal`] | A single bird |
//! | [`eye`] | Vision cells |
//! | [`brain`] | Network wrapper and chromosome conversion |
//! | [`math`] | Angle and coordinate wrapping |

pub mod animal;
pub mod brain;
pub mod config;
pub mod eye;
pub mod food;
pub mod math;
pub mod simulation;
pub mod world;

mod animal_individual;

pub use animal::Animal;
pub use brain::Brain;
pub use config::Config;
pub use eye::Eye;
pub use food::Food;
pub use genetics::Statistics;
pub use simulation::Simulation;
pub use world::World;

/// Error returned by [`Simulation`] and its parts.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
    /// A [`Config`] field is out of its allowed range.
    #[error("invalid config: `{field}` {reason}")]
    InvalidConfig { field: &'static str, reason: &'static str },
    /// The brain produced an unexpected number of outputs.
    #[error("brain returned {0} outputs, expected 2")]
    BrainOutput(usize),
    #[error(transparent)]
    Network(#[from] network::NetworkError),
    #[error(transparent)]
    Genetics(#[from] genetics::GeneticsError),
}
