mod train;

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use simulation::{Config, Simulation};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read config {path}: {source}")]
    ReadConfig { path: PathBuf, source: std::io::Error },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Simulation(#[from] simulation::SimulationError),
}

#[derive(Parser, Debug)]
#[command(name = "aviary", about = "Evolve bird brains without a browser")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run whole generations and print each one's fitness.
    Train(TrainCommand),
    /// Print the default simulation config as JSON.
    Config,
}

#[derive(Args, Debug)]
struct TrainCommand {
    #[arg(long, short = 'g', default_value_t = 10)]
    generations: usize,

    /// RNG seed; defaults to the current time.
    #[arg(long, env = "AVIARY_SEED")]
    seed: Option<u64>,

    /// JSON file overriding any subset of the default config.
    #[arg(long, env = "AVIARY_CONFIG")]
    config: Option<PathBuf>,

    /// Print one JSON object per generation instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Train(cmd) => run_train(cmd),
        Command::Config => run_config(),
    }
}

fn run_train(cmd: TrainCommand) -> Result<(), CliError> {
    let config = match &cmd.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    let seed = cmd.seed.unwrap_or_else(seed_from_clock);

    tracing::info!(
        seed,
        generations = cmd.generations,
        animals = config.world_animals,
        foods = config.world_foods,
        "training"
    );

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut sim = Simulation::random(config, &mut rng)?;

    train::run(&mut sim, &mut rng, cmd.generations, |report| {
        if cmd.json {
            println!("{}", report.to_json());
        } else {
            println!("{report}");
        }
    })?;

    tracing::info!(generation = sim.generation(), "training finished");
    Ok(())
}

fn run_config() -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(&Config::default())?);
    Ok(())
}

fn load_config(path: &Path) -> Result<Config, CliError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|source| CliError::ReadConfig { path: path.to_owned(), source })?;
    let config = parse_config(&raw)?;
    tracing::debug!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Parse a JSON config; omitted fields keep their defaults.
fn parse_config(raw: &str) -> Result<Config, CliError> {
    let config: Config = serde_json::from_str(raw)?;
    config.validate()?;
    Ok(config)
}

#[allow(clippy::cast_possible_truncation)]
fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos() as u64)
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
