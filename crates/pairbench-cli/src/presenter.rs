//! Final results table.

use std::path::Path;
use std::time::Duration;

use pairbench_core::AlgorithmRegistry;
use pairbench_harness::{Analysis, RunManifest};
use tracing::debug;

use crate::output::{format_duration, format_nanos, format_number};
use crate::ui;

/// Prints run results and algorithm listings.
pub struct ResultPresenter {
    quiet: bool,
}

impl ResultPresenter {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// One line per algorithm run, from the manifest written for this
    /// invocation.
    pub fn present_summary(&self, manifest: &RunManifest, data_dir: &Path) {
        if self.quiet {
            return;
        }
        println!();
        ui::print_header("Results");
        println!(
            "  {:<30} {:>8} {:>10} {:>10}  file",
            "algorithm", "sizes", "mismatches", "time"
        );
        println!("{:-<80}", "");
        for entry in &manifest.algorithms {
            println!(
                "  {:<30} {:>8} {:>10} {:>10}  {}",
                entry.name,
                format_number(entry.sizes as u64),
                entry.mismatches,
                format_duration(Duration::from_millis(entry.elapsed_ms)),
                data_dir.join(&entry.file).display(),
            );
        }
        let failures = manifest.total_mismatches();
        if failures > 0 {
            ui::print_warning(&format!(
                "{failures} control check(s) failed, see the log for details"
            ));
        }
    }

    /// Print the registered algorithms for `--list`.
    pub fn present_algorithms(&self, registry: &AlgorithmRegistry) {
        let control = registry.control().name;
        for spec in registry.all() {
            let cap = spec
                .max_size
                .map(|m| format!(" (max n = {})", format_number(m)))
                .unwrap_or_default();
            let marker = if spec.name == control { " [control]" } else { "" };
            println!("{:<30} {}{cap}{marker}", spec.name, spec.description);
        }
    }

    /// Growth-model fits of a data directory, followed by every fit
    /// evaluated at the largest measured size.
    ///
    /// Printed in quiet mode too, since the table is the command's output.
    pub fn present_fits(&self, analysis: &Analysis, manifest: Option<&RunManifest>, data_dir: &Path) {
        for skipped in &analysis.skipped {
            ui::print_warning(&format!("not fitting {}: {}", skipped.name, skipped.reason));
        }
        if analysis.is_empty() {
            ui::print_warning(&format!("No CSV files found in {}", data_dir.display()));
            return;
        }

        ui::print_header("Complexity fits");
        if let Some(manifest) = manifest {
            let seed = manifest
                .config
                .seed()
                .map(|s| format!(", seed {s}"))
                .unwrap_or_default();
            println!(
                "  recorded {} by pairbench {} on {} ({} cores){seed}",
                manifest.timestamp, manifest.tool_version, manifest.cpu_model, manifest.num_cores
            );
        }
        println!(
            "  {:<30} {:>6} {:>10}  {:<12} equation",
            "algorithm", "sizes", "R²", "model"
        );
        println!("{:-<100}", "");
        for entry in &analysis.fits {
            debug!(name = %entry.name, coefficients = ?entry.fit.coefficients, "fit");
            println!(
                "  {:<30} {:>6} {:>10.6}  {:<12} {}",
                entry.name,
                format_number(entry.sizes as u64),
                entry.fit.r_squared,
                entry.fit.model.to_string(),
                entry.fit.equation(),
            );
        }

        if let Some(n) = analysis.comparison_size() {
            println!();
            ui::print_header(&format!("Predicted mean time at n = {}", format_number(n)));
            for (name, nanos) in analysis.predictions_at(n) {
                println!("  {name:<30} {:>12}", format_nanos(nanos));
            }
        }
    }

    /// Report an algorithm that was not run because its size cap falls
    /// below the sweep's lower bound.
    pub fn present_skipped(&self, name: &str, cap: u64, lower: u64) {
        ui::print_warning(&format!(
            "skipping {name}: its size limit {cap} is below the lower bound {lower}"
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pairbench_harness::fit::Skipped;
    use pairbench_harness::{AlgorithmFit, Fit, GeneratorRange, Model, RunConfig, RunReport, SweepConfig};

    fn manifest() -> RunManifest {
        let config = RunConfig::new(
            SweepConfig::new(32, 8, 16, 1).unwrap(),
            GeneratorRange::new(0, 99).unwrap(),
        );
        let mut manifest = RunManifest::new("0.1.0", config);
        manifest.record(
            &RunReport {
                name: "brute_force".into(),
                sizes: (8..=16).collect(),
                mismatches: Vec::new(),
                elapsed: Duration::from_millis(12),
            },
            "brute_force.csv",
            16,
        );
        manifest
    }

    #[test]
    fn present_summary_normal_and_quiet() {
        ResultPresenter::new(false).present_summary(&manifest(), Path::new("data"));
        ResultPresenter::new(true).present_summary(&manifest(), Path::new("data"));
    }

    #[test]
    fn present_algorithms_lists_registry() {
        ResultPresenter::new(false).present_algorithms(&AlgorithmRegistry::new());
    }

    fn analysis() -> Analysis {
        Analysis {
            fits: vec![AlgorithmFit {
                name: "brute_force".into(),
                sizes: 9,
                largest: 16,
                fit: Fit {
                    model: Model::Quadratic,
                    coefficients: vec![3.0, 2.0, 1.0],
                    r_squared: 0.99,
                },
            }],
            skipped: vec![Skipped {
                name: "notes".into(),
                reason: "unexpected header".into(),
            }],
        }
    }

    #[test]
    fn present_fits_with_and_without_manifest() {
        let presenter = ResultPresenter::new(true);
        presenter.present_fits(&analysis(), Some(&manifest()), Path::new("data"));
        presenter.present_fits(&analysis(), None, Path::new("data"));
    }

    #[test]
    fn present_fits_empty_analysis() {
        ResultPresenter::new(false).present_fits(&Analysis::default(), None, Path::new("data"));
    }

    #[test]
    fn present_skipped_does_not_panic() {
        ResultPresenter::new(false).present_skipped("brute_force", 768, 1000);
    }
}
