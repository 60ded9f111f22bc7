//! # pairbench-harness
//!
//! Measurement harness: for every size of a sweep it builds a random input,
//! times the function under test, checks it once against a control function,
//! and streams mean, standard deviation and quartiles to a sink. The summary
//! files of a finished run can be read back and fitted against growth models.

pub mod affinity;
pub mod config;
pub mod error;
pub mod fit;
pub mod generator;
pub mod manifest;
pub mod observer;
pub mod runner;
pub mod sink;
pub mod stats;

pub use config::{GeneratorRange, RunConfig, SweepConfig};
pub use error::HarnessError;
pub use fit::{analyze_dir, AlgorithmFit, Analysis, Fit, Model};
pub use generator::IntGenerator;
pub use manifest::{AlgorithmEntry, RunManifest, MANIFEST_FILENAME};
pub use observer::{LoggingObserver, NoOpObserver, ProgressObserver};
pub use runner::{run, run_to_file, Mismatch, RunReport};
pub use sink::{read_rows, CsvSink, SummaryRow, SummarySink, CSV_HEADER};
pub use stats::Summary;
