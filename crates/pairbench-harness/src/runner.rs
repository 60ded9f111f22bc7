//! The benchmark runner.
//!
//! For every size of the sweep the runner builds one input, times the
//! function under test `runs` times, checks the first result against the
//! control function, and writes one summary row.

use std::fmt::Debug;
use std::hint::black_box;
use std::path::Path;
use std::time::{Duration, Instant};

use rand::distr::uniform::SampleUniform;
use tracing::{debug, error, info};

use crate::config::RunConfig;
use crate::error::HarnessError;
use crate::generator::IntGenerator;
use crate::observer::ProgressObserver;
use crate::sink::{CsvSink, SummaryRow, SummarySink};
use crate::stats::Summary;

/// Upper bound on the sample buffer reserved up front; larger run counts
/// grow it on demand.
const PREALLOCATED_SAMPLES: u64 = 1 << 16;

/// A size at which the function under test disagreed with the control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub n: u64,
    pub expected: String,
    pub actual: String,
}

/// Outcome of one completed run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub name: String,
    pub sizes: Vec<u64>,
    pub mismatches: Vec<Mismatch>,
    pub elapsed: Duration,
}

impl RunReport {
    /// Whether every control check agreed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }

    #[must_use]
    pub fn size_count(&self) -> usize {
        self.sizes.len()
    }

    #[must_use]
    pub fn mismatch_count(&self) -> usize {
        self.mismatches.len()
    }
}

/// Run a sweep, writing one row per size into `sink`.
///
/// The generator is built from `config` before anything is written, so an
/// unrepresentable range leaves the sink untouched.
#[allow(clippy::too_many_arguments)]
pub fn run<T, A, R, S, Setup, Test, Control, O>(
    name: &str,
    sink: &mut S,
    config: &RunConfig,
    setup: Setup,
    test: Test,
    control: Control,
    observer: &O,
) -> Result<RunReport, HarnessError>
where
    T: SampleUniform + Copy + PartialOrd + Debug + TryFrom<i64>,
    R: PartialEq + Debug,
    S: SummarySink + ?Sized,
    Setup: FnMut(u64, &mut IntGenerator<T>) -> A,
    Test: Fn(&A) -> R,
    Control: Fn(&A) -> R,
    O: ProgressObserver + ?Sized,
{
    let generator = IntGenerator::from_range(config.range(), config.seed())?;
    sweep(name, sink, config, generator, setup, test, control, observer)
}

/// Run a sweep into a CSV file at `path`. The run is named after the file
/// stem.
///
/// Missing parent directories are created and an existing file is
/// truncated.
pub fn run_to_file<T, A, R, Setup, Test, Control, O>(
    path: &Path,
    config: &RunConfig,
    setup: Setup,
    test: Test,
    control: Control,
    observer: &O,
) -> Result<RunReport, HarnessError>
where
    T: SampleUniform + Copy + PartialOrd + Debug + TryFrom<i64>,
    R: PartialEq + Debug,
    Setup: FnMut(u64, &mut IntGenerator<T>) -> A,
    Test: Fn(&A) -> R,
    Control: Fn(&A) -> R,
    O: ProgressObserver + ?Sized,
{
    let name = path
        .file_stem()
        .map_or_else(|| path.display().to_string(), |s| s.to_string_lossy().into_owned());
    let generator = IntGenerator::from_range(config.range(), config.seed())?;
    let mut sink = CsvSink::create(path)?;
    sweep(&name, &mut sink, config, generator, setup, test, control, observer)
}

#[allow(clippy::too_many_arguments, clippy::cast_precision_loss)]
fn sweep<T, A, R, S, Setup, Test, Control, O>(
    name: &str,
    sink: &mut S,
    config: &RunConfig,
    mut generator: IntGenerator<T>,
    mut setup: Setup,
    test: Test,
    control: Control,
    observer: &O,
) -> Result<RunReport, HarnessError>
where
    T: SampleUniform + Copy + PartialOrd + Debug,
    R: PartialEq + Debug,
    S: SummarySink + ?Sized,
    Setup: FnMut(u64, &mut IntGenerator<T>) -> A,
    Test: Fn(&A) -> R,
    Control: Fn(&A) -> R,
    O: ProgressObserver + ?Sized,
{
    let plan = config.sweep();
    let runs = plan.runs();
    let total = plan.total_runs();
    let started = Instant::now();

    info!(
        name,
        lower = plan.lower(),
        upper = plan.upper(),
        step = plan.step(),
        runs,
        "starting run"
    );
    observer.on_start(name, total);

    let mut times: Vec<f64> =
        Vec::with_capacity(usize::try_from(runs.min(PREALLOCATED_SAMPLES)).unwrap_or(0));
    let mut sizes = Vec::new();
    let mut mismatches = Vec::new();
    let mut executed = 0u64;

    for n in plan.sizes() {
        let input = setup(n, &mut generator);
        times.clear();

        for i in 0..runs {
            executed += 1;
            observer.on_progress(executed, total);

            let begin = Instant::now();
            let result = black_box(test(black_box(&input)));
            let elapsed = begin.elapsed();

            if i == 0 {
                let expected = control(&input);
                if result != expected {
                    error!(n, "Test failed! Expected {expected:?} but got {result:?}");
                    mismatches.push(Mismatch {
                        n,
                        expected: format!("{expected:?}"),
                        actual: format!("{result:?}"),
                    });
                }
            }

            times.push(elapsed.as_nanos() as f64);
        }

        let summary = Summary::from_samples(&times).ok_or_else(|| {
            HarnessError::InvalidSweep(format!("size {n} produced fewer than two samples"))
        })?;
        let row = SummaryRow::new(n, summary);
        sink.write_row(&row)?;
        debug!(n, mean = summary.mean, stdev = summary.stdev, "size complete");
        observer.on_size_complete(&row);
        sizes.push(n);
    }

    sink.finish()?;
    observer.on_finish(name);

    let report = RunReport {
        name: name.to_owned(),
        sizes,
        mismatches,
        elapsed: started.elapsed(),
    };
    info!(
        name,
        sizes = report.size_count(),
        mismatches = report.mismatch_count(),
        elapsed_ms = report.elapsed.as_millis(),
        "run complete"
    );
    Ok(report)
}
