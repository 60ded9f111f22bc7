//! Uniform random integers for building benchmark inputs.

use std::fmt::{self, Debug};

use rand::distr::uniform::SampleUniform;
use rand::distr::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::GeneratorRange;
use crate::error::HarnessError;

/// Draws values uniformly from the inclusive range `[min, max]`.
///
/// Seeded from OS entropy unless an explicit seed is given.
pub struct IntGenerator<T>
where
    T: SampleUniform,
{
    rng: StdRng,
    distribution: Uniform<T>,
    min: T,
    max: T,
}

impl<T> IntGenerator<T>
where
    T: SampleUniform + Copy + PartialOrd + Debug,
{
    /// Generator over `[min, max]` seeded from OS entropy.
    pub fn new(min: T, max: T) -> Result<Self, HarnessError> {
        Self::build(min, max, StdRng::from_os_rng())
    }

    /// Generator over `[min, max]` with a fixed seed.
    pub fn with_seed(min: T, max: T, seed: u64) -> Result<Self, HarnessError> {
        Self::build(min, max, StdRng::seed_from_u64(seed))
    }

    /// Generator over a validated [`GeneratorRange`], converting its bounds
    /// into `T`.
    pub fn from_range(range: &GeneratorRange, seed: Option<u64>) -> Result<Self, HarnessError>
    where
        T: TryFrom<i64>,
    {
        let convert = |bound: i64| {
            T::try_from(bound).map_err(|_| {
                HarnessError::InvalidRange(format!(
                    "bound {bound} is not representable by the coordinate type"
                ))
            })
        };
        let (min, max) = (convert(range.min())?, convert(range.max())?);
        match seed {
            Some(seed) => Self::with_seed(min, max, seed),
            None => Self::new(min, max),
        }
    }

    fn build(min: T, max: T, rng: StdRng) -> Result<Self, HarnessError> {
        if min >= max {
            return Err(HarnessError::InvalidRange(format!(
                "min ({min:?}) must be < max ({max:?})"
            )));
        }
        let distribution = Uniform::new_inclusive(min, max)
            .map_err(|e| HarnessError::InvalidRange(e.to_string()))?;
        Ok(Self {
            rng,
            distribution,
            min,
            max,
        })
    }

    /// Next value in `[min, max]`.
    pub fn generate(&mut self) -> T {
        self.distribution.sample(&mut self.rng)
    }

    #[must_use]
    pub fn min(&self) -> T {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> T {
        self.max
    }
}

impl<T> fmt::Debug for IntGenerator<T>
where
    T: SampleUniform + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntGenerator")
            .field("min", &self.min)
            .field("max", &self.max)
            .finish_non_exhaustive()
    }
}
