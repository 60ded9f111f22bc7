//! Growth-model fits over the summary files of a finished run.
//!
//! Each algorithm's mean time per size is fitted by linear least squares
//! against the model its complexity suggests, and the fit is reported with
//! its coefficient of determination.

use std::fmt;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::HarnessError;
use crate::sink::{read_rows, SummaryRow};

/// Pivots smaller than this, relative to the largest entry of the normal
/// matrix, mark the system as singular.
const SINGULAR_TOLERANCE: f64 = 1e-10;

/// Growth model fitted to mean time against input size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Model {
    /// `a·n² + b·n + c`
    Quadratic,
    /// `a·n·log₂(n) + b`
    NLogN,
    /// `a·n·log₂²(n) + b`
    NLogSquaredN,
}

impl Model {
    /// Model for the algorithm that wrote `name.csv`.
    #[must_use]
    pub fn for_algorithm(name: &str) -> Self {
        match name {
            "divide_and_conquer" => Self::NLogSquaredN,
            "divide_and_conquer_improved" => Self::NLogN,
            _ => Self::Quadratic,
        }
    }

    /// Number of fitted coefficients.
    #[must_use]
    pub fn parameter_count(self) -> usize {
        match self {
            Self::Quadratic => 3,
            Self::NLogN | Self::NLogSquaredN => 2,
        }
    }

    /// Basis terms at `n`, highest order first.
    fn basis(self, n: f64) -> Vec<f64> {
        match self {
            Self::Quadratic => vec![n * n, n, 1.0],
            Self::NLogN => vec![n * n.log2(), 1.0],
            Self::NLogSquaredN => {
                let log = n.log2();
                vec![n * log * log, 1.0]
            }
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Quadratic => "n²",
            Self::NLogN => "n·log₂(n)",
            Self::NLogSquaredN => "n·log₂²(n)",
        })
    }
}

/// Least-squares fit of one model.
#[derive(Debug, Clone, PartialEq)]
pub struct Fit {
    pub model: Model,
    /// Coefficients in the order of the model's terms, highest order first.
    pub coefficients: Vec<f64>,
    pub r_squared: f64,
}

impl Fit {
    /// Fitted value at `n`.
    #[must_use]
    pub fn predict(&self, n: f64) -> f64 {
        self.model
            .basis(n)
            .iter()
            .zip(&self.coefficients)
            .map(|(term, coefficient)| term * coefficient)
            .sum()
    }

    /// Fitted equation, e.g. `3.0000n² + 2.00n + 1.00`.
    #[must_use]
    pub fn equation(&self) -> String {
        match (self.model, self.coefficients.as_slice()) {
            (Model::Quadratic, [a, b, c]) => format!("{a:.4}n² + {b:.2}n + {c:.2}"),
            (model, [a, b]) => format!("{a:.4} · {model} + {b:.2}"),
            (model, _) => format!("{model} (no coefficients)"),
        }
    }
}

/// Fit `model` to `(n, time)` points.
///
/// `None` when there are fewer points than coefficients or the sizes do not
/// determine the coefficients (for example a quadratic over two sizes).
#[must_use]
pub fn fit_model(model: Model, points: &[(f64, f64)]) -> Option<Fit> {
    let k = model.parameter_count();
    if points.len() < k {
        return None;
    }

    let design: Vec<Vec<f64>> = points.iter().map(|&(n, _)| model.basis(n)).collect();

    // Columns are scaled to a maximum of one so that n² and 1 stay comparable.
    let mut scale = vec![0.0_f64; k];
    for row in &design {
        for (s, term) in scale.iter_mut().zip(row) {
            *s = s.max(term.abs());
        }
    }
    if scale.iter().any(|s| !s.is_normal()) {
        return None;
    }

    let mut normal = vec![vec![0.0_f64; k + 1]; k];
    for (row, &(_, y)) in design.iter().zip(points) {
        let scaled: Vec<f64> = row.iter().zip(&scale).map(|(t, s)| t / s).collect();
        for (normal_row, &ti) in normal.iter_mut().zip(&scaled) {
            for (cell, &tj) in normal_row.iter_mut().zip(&scaled) {
                *cell += ti * tj;
            }
            normal_row[k] += ti * y;
        }
    }

    let solution = solve(normal)?;
    let coefficients: Vec<f64> = solution.iter().zip(&scale).map(|(c, s)| c / s).collect();
    if coefficients.iter().any(|c| !c.is_finite()) {
        return None;
    }

    let mut fit = Fit {
        model,
        coefficients,
        r_squared: 0.0,
    };
    fit.r_squared = r_squared(&fit, points);
    Some(fit)
}

/// Fit the model chosen for `name`, falling back to a quadratic when that
/// model cannot be fitted.
#[must_use]
pub fn fit_for(name: &str, points: &[(f64, f64)]) -> Option<Fit> {
    let model = Model::for_algorithm(name);
    fit_model(model, points).or_else(|| {
        if model == Model::Quadratic {
            return None;
        }
        debug!(name, %model, "fit failed, falling back to a quadratic");
        fit_model(Model::Quadratic, points)
    })
}

/// Solve an augmented `k × (k + 1)` system by Gaussian elimination with
/// partial pivoting.
fn solve(mut m: Vec<Vec<f64>>) -> Option<Vec<f64>> {
    let k = m.len();
    let magnitude = m
        .iter()
        .flat_map(|row| row[..k].iter())
        .fold(0.0_f64, |acc, v| acc.max(v.abs()));
    if magnitude <= 0.0 {
        return None;
    }

    for col in 0..k {
        let pivot = (col..k).max_by(|&a, &b| m[a][col].abs().total_cmp(&m[b][col].abs()))?;
        if m[pivot][col].abs() <= SINGULAR_TOLERANCE * magnitude {
            return None;
        }
        m.swap(col, pivot);
        let (upper, lower) = m.split_at_mut(col + 1);
        let pivot_row = &upper[col];
        for row in lower {
            let factor = row[col] / pivot_row[col];
            for (cell, p) in row[col..].iter_mut().zip(&pivot_row[col..]) {
                *cell -= factor * p;
            }
        }
    }

    let mut x = vec![0.0_f64; k];
    for row in (0..k).rev() {
        let tail: f64 = ((row + 1)..k).map(|j| m[row][j] * x[j]).sum();
        x[row] = (m[row][k] - tail) / m[row][row];
    }
    Some(x)
}

#[allow(clippy::cast_precision_loss)]
fn r_squared(fit: &Fit, points: &[(f64, f64)]) -> f64 {
    let mean = points.iter().map(|&(_, y)| y).sum::<f64>() / points.len() as f64;
    let ss_tot: f64 = points.iter().map(|&(_, y)| (y - mean).powi(2)).sum();
    let ss_res: f64 = points
        .iter()
        .map(|&(n, y)| (y - fit.predict(n)).powi(2))
        .sum();
    if ss_tot > 0.0 {
        1.0 - ss_res / ss_tot
    } else {
        1.0
    }
}

/// `(n, mean time)` points of a summary file.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean_points(rows: &[SummaryRow]) -> Vec<(f64, f64)> {
    rows.iter()
        .map(|row| (row.n as f64, row.summary.mean))
        .collect()
}

/// Fit for one algorithm's summary file.
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmFit {
    pub name: String,
    pub sizes: usize,
    pub largest: u64,
    pub fit: Fit,
}

/// A summary file that could not be fitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    pub name: String,
    pub reason: String,
}

/// Fits for every summary file in a data directory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Analysis {
    pub fits: Vec<AlgorithmFit>,
    pub skipped: Vec<Skipped>,
}

impl Analysis {
    /// Whether the directory held no summary files at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fits.is_empty() && self.skipped.is_empty()
    }

    /// Largest size measured by any fitted algorithm.
    #[must_use]
    pub fn comparison_size(&self) -> Option<u64> {
        self.fits.iter().map(|f| f.largest).max()
    }

    /// Every fit evaluated at `n`, fastest first.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn predictions_at(&self, n: u64) -> Vec<(&str, f64)> {
        let mut predictions: Vec<(&str, f64)> = self
            .fits
            .iter()
            .map(|f| (f.name.as_str(), f.fit.predict(n as f64)))
            .collect();
        predictions.sort_by(|a, b| a.1.total_cmp(&b.1));
        predictions
    }
}

/// Fit every `*.csv` summary file in `dir`, in file name order.
///
/// Files that cannot be read as summaries or fitted are reported in
/// [`Analysis::skipped`]; only a missing or unreadable directory is an error.
pub fn analyze_dir(dir: &Path) -> Result<Analysis, HarnessError> {
    let entries = std::fs::read_dir(dir).map_err(|e| HarnessError::io(dir, e))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| HarnessError::io(dir, e))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "csv") {
            files.push(path);
        }
    }
    files.sort();
    info!(count = files.len(), dir = %dir.display(), "found summary files");

    let mut analysis = Analysis::default();
    for path in files {
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        debug!(name = %name, "processing summary file");

        let rows = match read_rows(&path) {
            Ok(rows) => rows,
            Err(err) => {
                warn!(name = %name, error = %err, "skipping unreadable summary file");
                analysis.skipped.push(Skipped {
                    name,
                    reason: err.to_string(),
                });
                continue;
            }
        };

        match fit_for(&name, &mean_points(&rows)) {
            Some(fit) => analysis.fits.push(AlgorithmFit {
                sizes: rows.len(),
                largest: rows.iter().map(|r| r.n).max().unwrap_or(0),
                name,
                fit,
            }),
            None => analysis.skipped.push(Skipped {
                reason: format!("{} sizes are too few to fit a model", rows.len()),
                name,
            }),
        }
    }
    Ok(analysis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{CsvSink, SummarySink};
    use crate::stats::Summary;

    fn sample(f: impl Fn(f64) -> f64, sizes: impl Iterator<Item = u64>) -> Vec<(f64, f64)> {
        sizes
            .map(|n| {
                #[allow(clippy::cast_precision_loss)]
                let x = n as f64;
                (x, f(x))
            })
            .collect()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= 1e-6 * expected.abs().max(1.0),
            "{actual} != {expected}"
        );
    }

    #[test]
    fn quadratic_coefficients_recovered() {
        let points = sample(|n| 3.0 * n * n + 2.0 * n + 1.0, 1..=40);
        let fit = fit_model(Model::Quadratic, &points).unwrap();
        assert_eq!(fit.coefficients.len(), 3);
        assert_close(fit.coefficients[0], 3.0);
        assert_close(fit.coefficients[1], 2.0);
        assert_close(fit.coefficients[2], 1.0);
        assert_close(fit.r_squared, 1.0);
        assert_eq!(fit.equation(), "3.0000n² + 2.00n + 1.00");
    }

    #[test]
    fn quadratic_over_benchmark_sizes() {
        let points = sample(|n| 3.0 * n * n + 2.0 * n + 1.0, 8..=512);
        let fit = fit_model(Model::Quadratic, &points).unwrap();
        assert_close(fit.coefficients[0], 3.0);
        assert!((fit.coefficients[1] - 2.0).abs() < 1e-4);
        assert!((fit.coefficients[2] - 1.0).abs() < 1e-2);
    }

    #[test]
    fn n_log_n_coefficients_recovered() {
        let points = sample(|n| 5.0 * n * n.log2() + 7.0, 2..=64);
        let fit = fit_model(Model::NLogN, &points).unwrap();
        assert_close(fit.coefficients[0], 5.0);
        assert_close(fit.coefficients[1], 7.0);
        assert_close(fit.r_squared, 1.0);
        assert_eq!(fit.equation(), "5.0000 · n·log₂(n) + 7.00");
    }

    #[test]
    fn n_log_squared_n_coefficients_recovered() {
        let points = sample(|n| 0.5 * n * n.log2().powi(2) + 12.0, 8..=256);
        let fit = fit_model(Model::NLogSquaredN, &points).unwrap();
        assert_close(fit.coefficients[0], 0.5);
        assert_close(fit.coefficients[1], 12.0);
        assert_eq!(fit.equation(), "0.5000 · n·log₂²(n) + 12.00");
    }

    #[test]
    fn noisy_data_has_r_squared_below_one() {
        let points: Vec<(f64, f64)> = sample(|n| 2.0 * n * n, 1..=20)
            .into_iter()
            .enumerate()
            .map(|(i, (n, y))| (n, if i % 2 == 0 { y + 40.0 } else { y - 40.0 }))
            .collect();
        let fit = fit_model(Model::Quadratic, &points).unwrap();
        assert!(fit.r_squared < 1.0);
        assert!(fit.r_squared > 0.9);
    }

    #[test]
    fn model_by_algorithm_name() {
        assert_eq!(Model::for_algorithm("divide_and_conquer"), Model::NLogSquaredN);
        assert_eq!(
            Model::for_algorithm("divide_and_conquer_improved"),
            Model::NLogN
        );
        assert_eq!(Model::for_algorithm("brute_force"), Model::Quadratic);
        assert_eq!(Model::for_algorithm("brute_force_improved"), Model::Quadratic);
    }

    #[test]
    fn too_few_points() {
        assert!(fit_model(Model::Quadratic, &[(1.0, 1.0), (2.0, 4.0)]).is_none());
        assert!(fit_model(Model::NLogN, &[(4.0, 1.0)]).is_none());
    }

    #[test]
    fn repeated_size_is_singular() {
        let points = [(8.0, 1.0), (8.0, 2.0), (8.0, 3.0)];
        assert!(fit_model(Model::Quadratic, &points).is_none());
        assert!(fit_model(Model::NLogN, &points).is_none());
    }

    #[test]
    fn falls_back_to_quadratic() {
        // n·log₂(n) is undefined at n = 0, a quadratic is not.
        let points = sample(|n| 3.0 * n * n + 2.0 * n + 1.0, 0..=6);
        assert!(fit_model(Model::NLogN, &points).is_none());
        let fit = fit_for("divide_and_conquer_improved", &points).unwrap();
        assert_eq!(fit.model, Model::Quadratic);
        assert_close(fit.coefficients[0], 3.0);
        assert_close(fit.coefficients[1], 2.0);
        assert_close(fit.coefficients[2], 1.0);
    }

    #[test]
    fn no_fit_when_every_model_fails() {
        let single = [(1.0, 3.0), (1.0, 3.0), (1.0, 3.0)];
        assert!(fit_for("divide_and_conquer_improved", &single).is_none());

        // Two sizes determine a line but not a quadratic.
        let two = [(1.0, 3.0), (2.0, 5.0)];
        let line = fit_for("divide_and_conquer_improved", &two).unwrap();
        assert_eq!(line.model, Model::NLogN);
        assert_close(line.coefficients[0], 1.0);
        assert_close(line.coefficients[1], 3.0);
        assert!(fit_for("brute_force", &two).is_none());
    }

    #[test]
    fn predict_matches_model() {
        let fit = Fit {
            model: Model::Quadratic,
            coefficients: vec![1.0, 0.0, 2.0],
            r_squared: 1.0,
        };
        assert_close(fit.predict(3.0), 11.0);
    }

    fn write_summary(dir: &Path, name: &str, f: impl Fn(f64) -> f64, sizes: &[u64]) {
        let mut sink = CsvSink::create(&dir.join(format!("{name}.csv"))).unwrap();
        for &n in sizes {
            #[allow(clippy::cast_precision_loss)]
            let mean = f(n as f64);
            let summary = Summary {
                mean,
                stdev: 0.0,
                quartiles: [mean; 5],
            };
            sink.write_row(&SummaryRow::new(n, summary)).unwrap();
        }
        sink.finish().unwrap();
    }

    #[test]
    fn analyze_dir_fits_each_file() {
        let dir = tempfile::tempdir().unwrap();
        let sizes: Vec<u64> = (8..=64).step_by(4).collect();
        write_summary(dir.path(), "brute_force", |n| 3.0 * n * n + 2.0 * n + 1.0, &sizes);
        write_summary(
            dir.path(),
            "divide_and_conquer_improved",
            |n| 5.0 * n * n.log2() + 7.0,
            &sizes,
        );
        std::fs::write(dir.path().join("manifest.json"), "{}").unwrap();

        let analysis = analyze_dir(dir.path()).unwrap();
        assert!(analysis.skipped.is_empty());
        let names: Vec<&str> = analysis.fits.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["brute_force", "divide_and_conquer_improved"]);

        let brute = &analysis.fits[0];
        assert_eq!(brute.fit.model, Model::Quadratic);
        assert_eq!(brute.sizes, sizes.len());
        assert_eq!(brute.largest, 64);
        assert_close(brute.fit.coefficients[0], 3.0);

        let improved = &analysis.fits[1];
        assert_eq!(improved.fit.model, Model::NLogN);
        assert_close(improved.fit.coefficients[0], 5.0);
        assert_close(improved.fit.coefficients[1], 7.0);

        assert_eq!(analysis.comparison_size(), Some(64));
        let ranking = analysis.predictions_at(64);
        assert_eq!(ranking[0].0, "divide_and_conquer_improved");
    }

    #[test]
    fn analyze_dir_reports_unusable_files() {
        let dir = tempfile::tempdir().unwrap();
        write_summary(dir.path(), "brute_force", |n| n, &[8]);
        std::fs::write(dir.path().join("notes.csv"), "hello\n").unwrap();

        let analysis = analyze_dir(dir.path()).unwrap();
        assert!(analysis.fits.is_empty());
        assert!(!analysis.is_empty());
        let skipped: Vec<&str> = analysis.skipped.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(skipped, ["brute_force", "notes"]);
        assert!(analysis.skipped[1].reason.contains("header"));
    }

    #[test]
    fn analyze_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        let analysis = analyze_dir(dir.path()).unwrap();
        assert!(analysis.is_empty());
        assert_eq!(analysis.comparison_size(), None);
    }

    #[test]
    fn analyze_missing_dir_is_io() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            analyze_dir(&dir.path().join("absent")),
            Err(HarnessError::Io { .. })
        ));
    }
}
