//! Descriptive statistics over one batch of timing samples.
//!
//! Quartiles use linear interpolation between order statistics
//! (Hyndman and Fan type 7).

use serde::{Deserialize, Serialize};

/// Probabilities of the five-number summary.
const QUARTILE_PROBABILITIES: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// Arithmetic mean, or `None` for an empty slice.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    Some(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Sample standard deviation with Bessel's correction.
///
/// Needs at least two samples.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn sample_std_dev(samples: &[f64], mean: f64) -> Option<f64> {
    if samples.len() < 2 {
        return None;
    }
    let sum_sq: f64 = samples
        .iter()
        .map(|x| {
            let d = x - mean;
            d * d
        })
        .sum();
    Some((sum_sq / (samples.len() - 1) as f64).sqrt())
}

/// Value at probability `p` of an already sorted, non-empty slice.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    let h = (sorted.len() - 1) as f64 * p.clamp(0.0, 1.0);
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(sorted.len() - 1);
    sorted[lo] + (h - h.floor()) * (sorted[hi] - sorted[lo])
}

/// Minimum, Q1, median, Q3 and maximum. The input is left untouched.
#[must_use]
pub fn quartiles(samples: &[f64]) -> Option<[f64; 5]> {
    if samples.is_empty() {
        return None;
    }
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    Some(QUARTILE_PROBABILITIES.map(|p| percentile(&sorted, p)))
}

/// Mean, standard deviation and five-number summary of one batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub mean: f64,
    pub stdev: f64,
    pub quartiles: [f64; 5],
}

impl Summary {
    /// Summarise a batch. `None` with fewer than two samples.
    #[must_use]
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        let mean = mean(samples)?;
        let stdev = sample_std_dev(samples, mean)?;
        let quartiles = quartiles(samples)?;
        Some(Self {
            mean,
            stdev,
            quartiles,
        })
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.quartiles[0]
    }

    #[must_use]
    pub fn median(&self) -> f64 {
        self.quartiles[2]
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.quartiles[4]
    }
}
