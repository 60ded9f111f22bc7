//! Constants for the closest-pair benchmark and its driver.

/// Distance reported when fewer than two points are given.
pub const NO_PAIR_DISTANCE: f64 = f64::MAX;

/// Sub-problems of at most this many points are solved by brute force.
pub const BRUTE_FORCE_CUTOFF: usize = 3;

/// Largest input size the quadratic `brute_force` is benchmarked at.
pub const BRUTE_FORCE_MAX_SIZE: u64 = 768;

/// Name of the algorithm every other algorithm is checked against.
pub const CONTROL_ALGORITHM: &str = "brute_force_improved";

/// Defaults for the benchmark sweep.
pub mod defaults {
    /// Timed repetitions per input size.
    pub const RUNS: u64 = 32;
    /// Smallest input size.
    pub const LOWER: u64 = 8;
    /// Largest input size.
    pub const UPPER: u64 = 512;
    /// Distance between consecutive input sizes.
    pub const STEP: u64 = 1;
    /// Smallest generated coordinate.
    pub const GENERATOR_MIN: i64 = 0;
    /// Largest generated coordinate.
    pub const GENERATOR_MAX: i64 = 99;
    /// Directory the CSV files are written to.
    pub const DATA_DIR: &str = "data";
}

/// Minimum number of repetitions accepted by the driver.
pub const MIN_RUNS: u64 = 32;

/// Maximum number of repetitions accepted by the driver.
pub const MAX_RUNS: u64 = 1_000_000;

/// Largest input size accepted by the driver.
pub const MAX_SIZE: u64 = 10_000_000;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid command-line usage (matches clap's usage error code).
    pub const ERROR_USAGE: i32 = 2;
    /// Invalid benchmark configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// Output directory or file could not be written.
    pub const ERROR_IO: i32 = 5;
}
