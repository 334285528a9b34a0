//! Headless training loop.

use std::fmt;

use rand::RngCore;
use serde_json::{Value, json};
use simulation::{Simulation, SimulationError, Statistics};

/// Outcome of one finished generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationReport {
    /// 1-based index of the generation that just ended.
    pub generation: usize,
    pub stats: Statistics,
}

impl GenerationReport {
    pub fn to_json(&self) -> Value {
        json!({
            "generation": self.generation,
            "min_fitness": self.stats.min_fitness,
            "max_fitness": self.stats.max_fitness,
            "avg_fitness": self.stats.avg_fitness,
        })
    }
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "generation {:>4}: {}", self.generation, self.stats)
    }
}

/// Train `generations` full generations, calling `on_generation` after each.
///
/// # Errors
///
/// Stops at the first simulation error.
pub fn run(
    sim: &mut Simulation,
    rng: &mut dyn RngCore,
    generations: usize,
    mut on_generation: impl FnMut(&GenerationReport),
) -> Result<Vec<GenerationReport>, SimulationError> {
    let mut reports = Vec::with_capacity(generations);

    for _ in 0..generations {
        let stats = sim.train(rng)?;
        let report = GenerationReport { generation: sim.generation(), stats };
        tracing::debug!(generation = report.generation, %stats, "generation finished");
        on_generation(&report);
        reports.push(report);
    }

    Ok(reports)
}

#[cfg(test)]
#[path = "train_test.rs"]
mod tests;
