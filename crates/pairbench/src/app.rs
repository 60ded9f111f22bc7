//! Application entry point and dispatch.

use anyhow::{Context, Result};
use tracing::{info, warn};

use pairbench_cli::{BarObserver, ResultPresenter};
use pairbench_core::{AlgorithmRegistry, Point};
use pairbench_harness::manifest::{load_from_path, save_to_path};
use pairbench_harness::{
    affinity, analyze_dir, run_to_file, LoggingObserver, ProgressObserver, RunManifest,
    MANIFEST_FILENAME,
};

use crate::config::{AppConfig, Command};
use crate::setup::random_points;
use crate::version;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        pairbench_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let registry = AlgorithmRegistry::new();
    let presenter = ResultPresenter::new(config.quiet);

    if config.list {
        presenter.present_algorithms(&registry);
        return Ok(());
    }

    match config.command {
        Some(Command::Analyze) => run_analysis(config, &presenter),
        None => run_benchmarks(config, &registry, &presenter),
    }
}

/// Fit growth models to the summary files of an earlier run.
fn run_analysis(config: &AppConfig, presenter: &ResultPresenter) -> Result<()> {
    let dir = &config.data_dir;
    let analysis = analyze_dir(dir)
        .with_context(|| format!("cannot analyze data directory {}", dir.display()))?;

    let manifest_path = dir.join(MANIFEST_FILENAME);
    let manifest = if manifest_path.is_file() {
        match load_from_path(&manifest_path) {
            Ok(manifest) if manifest.is_compatible() => Some(manifest),
            Ok(manifest) => {
                warn!(
                    version = manifest.version,
                    "manifest written by an incompatible version, ignoring it"
                );
                None
            }
            Err(err) => {
                warn!(error = %err, "unreadable manifest, ignoring it");
                None
            }
        }
    } else {
        None
    };

    info!(
        fits = analysis.fits.len(),
        skipped = analysis.skipped.len(),
        "analysis complete"
    );
    presenter.present_fits(&analysis, manifest.as_ref(), dir);
    Ok(())
}

fn run_benchmarks(
    config: &AppConfig,
    registry: &AlgorithmRegistry,
    presenter: &ResultPresenter,
) -> Result<()> {
    let run_config = config.to_run_config()?;
    let selected = registry.select(&config.algo)?;
    let control = registry.control();

    std::fs::create_dir_all(&config.data_dir).with_context(|| {
        format!(
            "cannot create data directory {}",
            config.data_dir.display()
        )
    })?;

    if config.pin_core {
        if let Some(core) = affinity::pin_current_thread(None) {
            info!(core, "benchmark thread pinned");
        }
    }

    let observer: Box<dyn ProgressObserver> = if config.quiet {
        Box::new(LoggingObserver::default())
    } else {
        Box::new(BarObserver::new())
    };

    let lower = run_config.sweep().lower();
    let mut manifest = RunManifest::new(version::full_version(), run_config);

    for spec in selected {
        let upper = spec.effective_upper(run_config.sweep().upper());
        if upper < lower {
            warn!(
                algorithm = spec.name,
                upper, lower, "size cap below lower bound, skipping"
            );
            presenter.present_skipped(spec.name, upper, lower);
            continue;
        }

        let algo_config = run_config.with_upper(upper)?;
        let file = format!("{}.csv", spec.name);
        let path = config.data_dir.join(&file);

        let report = run_to_file(
            &path,
            &algo_config,
            random_points,
            |points: &Vec<Point>| spec.run(points),
            |points: &Vec<Point>| control.run(points),
            observer.as_ref(),
        )?;
        manifest.record(&report, file, upper);
    }

    save_to_path(&manifest, &config.data_dir.join(MANIFEST_FILENAME))?;
    presenter.present_summary(&manifest, &config.data_dir);
    Ok(())
}
