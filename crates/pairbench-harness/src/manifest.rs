//! Run manifest written next to the CSV files.
//!
//! Records what was run, where, and with which parameters, so a directory
//! of results can be interpreted later.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::RunConfig;
use crate::error::HarnessError;
use crate::runner::RunReport;

/// File name of the manifest inside the data directory.
pub const MANIFEST_FILENAME: &str = "manifest.json";

/// Current manifest format version.
pub const MANIFEST_VERSION: u32 = 1;

/// One algorithm's entry in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmEntry {
    pub name: String,
    /// CSV file name relative to the data directory.
    pub file: String,
    /// Upper bound after applying the algorithm's size cap.
    pub upper: u64,
    pub sizes: usize,
    pub mismatches: usize,
    pub elapsed_ms: u64,
}

/// Metadata for one invocation of the benchmark.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunManifest {
    pub version: u32,
    pub tool_version: String,
    pub config: RunConfig,
    pub cpu_model: String,
    pub num_cores: usize,
    /// Creation time as `unix:<seconds>`.
    pub timestamp: String,
    pub algorithms: Vec<AlgorithmEntry>,
}

impl RunManifest {
    #[must_use]
    pub fn new(tool_version: impl Into<String>, config: RunConfig) -> Self {
        Self {
            version: MANIFEST_VERSION,
            tool_version: tool_version.into(),
            config,
            cpu_model: cpu_model(),
            num_cores: num_cores(),
            timestamp: current_timestamp(),
            algorithms: Vec::new(),
        }
    }

    /// Append the outcome of one algorithm's run.
    pub fn record(&mut self, report: &RunReport, file: impl Into<String>, upper: u64) {
        self.algorithms.push(AlgorithmEntry {
            name: report.name.clone(),
            file: file.into(),
            upper,
            sizes: report.size_count(),
            mismatches: report.mismatch_count(),
            elapsed_ms: u64::try_from(report.elapsed.as_millis()).unwrap_or(u64::MAX),
        });
    }

    #[must_use]
    pub fn is_compatible(&self) -> bool {
        self.version == MANIFEST_VERSION
    }

    /// Total mismatches across all algorithms.
    #[must_use]
    pub fn total_mismatches(&self) -> usize {
        self.algorithms.iter().map(|a| a.mismatches).sum()
    }
}

/// Write the manifest as pretty-printed JSON.
pub fn save_to_path(manifest: &RunManifest, path: &Path) -> Result<(), HarnessError> {
    let content = serde_json::to_string_pretty(manifest)?;
    std::fs::write(path, content).map_err(|e| HarnessError::io(path, e))
}

/// Read a manifest back.
pub fn load_from_path(path: &Path) -> Result<RunManifest, HarnessError> {
    let content = std::fs::read_to_string(path).map_err(|e| HarnessError::io(path, e))?;
    Ok(serde_json::from_str(&content)?)
}

/// CPU brand string, empty when unavailable.
#[must_use]
pub fn cpu_model() -> String {
    use sysinfo::System;
    let sys = System::new_all();
    sys.cpus()
        .first()
        .map(|cpu| cpu.brand().to_string())
        .unwrap_or_default()
}

fn num_cores() -> usize {
    std::thread::available_parallelism()
        .map(std::num::NonZero::get)
        .unwrap_or(1)
}

fn current_timestamp() -> String {
    let dur = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    format!("unix:{}", dur.as_secs())
}
