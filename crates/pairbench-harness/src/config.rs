//! Sweep and generator configuration.
//!
//! Both types validate on construction and are immutable afterwards, so a
//! [`RunConfig`] that exists is always runnable.

use serde::{Deserialize, Serialize};

use crate::error::HarnessError;

/// Fewest repetitions per size for which a sample standard deviation exists.
pub const MIN_SAMPLES: u64 = 2;

/// The sizes to benchmark and how often to repeat each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepConfig {
    runs: u64,
    lower: u64,
    upper: u64,
    step: u64,
}

impl SweepConfig {
    /// Create a sweep over `lower, lower + step, ... <= upper`, timing each
    /// size `runs` times.
    pub fn new(runs: u64, lower: u64, upper: u64, step: u64) -> Result<Self, HarnessError> {
        if runs < MIN_SAMPLES {
            return Err(HarnessError::InvalidSweep(format!(
                "runs must be >= {MIN_SAMPLES}, got {runs}"
            )));
        }
        if lower == 0 {
            return Err(HarnessError::InvalidSweep("lower must be >= 1".into()));
        }
        if upper < lower {
            return Err(HarnessError::InvalidSweep(format!(
                "upper ({upper}) must be >= lower ({lower})"
            )));
        }
        if step == 0 {
            return Err(HarnessError::InvalidSweep("step must be >= 1".into()));
        }
        Ok(Self {
            runs,
            lower,
            upper,
            step,
        })
    }

    #[must_use]
    pub fn runs(&self) -> u64 {
        self.runs
    }

    #[must_use]
    pub fn lower(&self) -> u64 {
        self.lower
    }

    #[must_use]
    pub fn upper(&self) -> u64 {
        self.upper
    }

    #[must_use]
    pub fn step(&self) -> u64 {
        self.step
    }

    /// Same sweep with a different upper bound.
    pub fn with_upper(&self, upper: u64) -> Result<Self, HarnessError> {
        Self::new(self.runs, self.lower, upper, self.step)
    }

    /// Number of sizes in the sweep.
    #[must_use]
    pub fn size_count(&self) -> u64 {
        (self.upper - self.lower) / self.step + 1
    }

    /// Largest size actually tested. Equals `upper` only when the step
    /// divides `upper - lower`; the sweep never rounds up past `upper`.
    #[must_use]
    pub fn last_size(&self) -> u64 {
        self.lower + self.step * ((self.upper - self.lower) / self.step)
    }

    /// Total timed repetitions across the whole sweep.
    #[must_use]
    pub fn total_runs(&self) -> u64 {
        self.runs.saturating_mul(self.size_count())
    }

    /// Iterate over the sizes in increasing order.
    #[must_use]
    pub fn sizes(&self) -> Sizes {
        Sizes {
            next: Some(self.lower),
            upper: self.upper,
            step: self.step,
        }
    }
}

/// Iterator over the sizes of a [`SweepConfig`].
#[derive(Debug, Clone)]
pub struct Sizes {
    next: Option<u64>,
    upper: u64,
    step: u64,
}

impl Iterator for Sizes {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let n = self.next.filter(|&n| n <= self.upper)?;
        self.next = n.checked_add(self.step);
        Some(n)
    }
}

/// Inclusive range of generated coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorRange {
    min: i64,
    max: i64,
}

impl GeneratorRange {
    /// Create the range `[min, max]`; requires `min < max`.
    pub fn new(min: i64, max: i64) -> Result<Self, HarnessError> {
        if min >= max {
            return Err(HarnessError::InvalidRange(format!(
                "min ({min}) must be < max ({max})"
            )));
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn min(&self) -> i64 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> i64 {
        self.max
    }
}

/// Everything the runner needs, fixed before the sweep starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    sweep: SweepConfig,
    range: GeneratorRange,
    seed: Option<u64>,
}

impl RunConfig {
    #[must_use]
    pub fn new(sweep: SweepConfig, range: GeneratorRange) -> Self {
        Self {
            sweep,
            range,
            seed: None,
        }
    }

    /// Seed the generator for a reproducible run.
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Same configuration with the sweep's upper bound replaced.
    pub fn with_upper(&self, upper: u64) -> Result<Self, HarnessError> {
        Ok(Self {
            sweep: self.sweep.with_upper(upper)?,
            ..*self
        })
    }

    #[must_use]
    pub fn sweep(&self) -> &SweepConfig {
        &self.sweep
    }

    #[must_use]
    pub fn range(&self) -> &GeneratorRange {
        &self.range
    }

    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}
