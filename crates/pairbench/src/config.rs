//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};

use pairbench_core::constants::{defaults, MAX_RUNS, MAX_SIZE, MIN_RUNS};
use pairbench_core::AlgorithmRegistry;
use pairbench_harness::{GeneratorRange, HarnessError, RunConfig, SweepConfig};

/// Benchmark closest-pair algorithms over a sweep of input sizes and write
/// timing statistics as CSV.
#[derive(Parser, Debug, Clone)]
#[command(name = "pairbench", version, about)]
pub struct AppConfig {
    /// Timed repetitions per input size.
    #[arg(
        short,
        long,
        default_value_t = defaults::RUNS,
        value_parser = clap::value_parser!(u64).range(MIN_RUNS..=MAX_RUNS)
    )]
    pub runs: u64,

    /// Smallest input size.
    #[arg(
        short,
        long,
        default_value_t = defaults::LOWER,
        value_parser = clap::value_parser!(u64).range(1..=MAX_SIZE)
    )]
    pub lower: u64,

    /// Largest input size (inclusive).
    #[arg(
        short,
        long,
        default_value_t = defaults::UPPER,
        value_parser = clap::value_parser!(u64).range(1..=MAX_SIZE)
    )]
    pub upper: u64,

    /// Distance between consecutive input sizes.
    #[arg(
        short,
        long,
        default_value_t = defaults::STEP,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub step: u64,

    /// Smallest generated coordinate.
    #[arg(long, default_value_t = defaults::GENERATOR_MIN, allow_negative_numbers = true)]
    pub gmin: i64,

    /// Largest generated coordinate.
    #[arg(long, default_value_t = defaults::GENERATOR_MAX, allow_negative_numbers = true)]
    pub gmax: i64,

    /// Directory the CSV files and manifest are written to.
    #[arg(
        short,
        long,
        global = true,
        default_value = defaults::DATA_DIR,
        env = "PAIRBENCH_DATA_DIR"
    )]
    pub data_dir: PathBuf,

    /// Algorithms to run: `all` or a comma-separated list of names.
    #[arg(short, long, default_value = "all", value_delimiter = ',')]
    pub algo: Vec<String>,

    /// Seed the input generator for reproducible runs.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pin the benchmark thread to a single CPU core.
    #[arg(long)]
    pub pin_core: bool,

    /// No progress bar, banners or results table.
    #[arg(short, long)]
    pub quiet: bool,

    /// List the available algorithms and exit.
    #[arg(long)]
    pub list: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands; without one the benchmark runs.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Fit growth models to the summary files in the data directory.
    Analyze,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments and check the constraints between them, exiting
    /// with a usage error when they do not hold.
    #[must_use]
    pub fn parse_validated() -> Self {
        let config = Self::parse();
        if let Err(msg) = config.validate() {
            Self::command()
                .error(clap::error::ErrorKind::ValueValidation, msg)
                .exit();
        }
        config
    }

    /// Cross-field checks clap cannot express on single arguments.
    pub fn validate(&self) -> Result<(), String> {
        if self.completion.is_some() || self.list || self.command.is_some() {
            return Ok(());
        }
        if self.upper < self.lower {
            return Err(format!(
                "--upper ({}) must be greater than or equal to --lower ({})",
                self.upper, self.lower
            ));
        }
        if self.gmin >= self.gmax {
            return Err(format!(
                "--gmin ({}) must be less than --gmax ({})",
                self.gmin, self.gmax
            ));
        }
        AlgorithmRegistry::new()
            .select(&self.algo)
            .map_err(|e| format!("--algo: {e}"))?;
        Ok(())
    }

    /// The harness configuration for this invocation.
    pub fn to_run_config(&self) -> Result<RunConfig, HarnessError> {
        let sweep = SweepConfig::new(self.runs, self.lower, self.upper, self.step)?;
        let range = GeneratorRange::new(self.gmin, self.gmax)?;
        Ok(RunConfig::new(sweep, range).with_seed(self.seed))
    }
}
