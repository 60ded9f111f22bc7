//! Error handling and exit codes.

use pairbench_core::constants::exit_codes;
use pairbench_core::CoreError;
use pairbench_harness::HarnessError;

/// Exit code for an error that ended the run.
pub fn handle_error(err: &HarnessError) -> i32 {
    match err {
        HarnessError::InvalidSweep(_) | HarnessError::InvalidRange(_) => exit_codes::ERROR_CONFIG,
        HarnessError::Io { .. } | HarnessError::InvalidCsv { .. } => exit_codes::ERROR_IO,
        HarnessError::Manifest(_) => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for any error reaching `main`, as a process status byte.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    let code = if let Some(harness) = err.downcast_ref::<HarnessError>() {
        handle_error(harness)
    } else if err.downcast_ref::<CoreError>().is_some() {
        exit_codes::ERROR_CONFIG
    } else if err.downcast_ref::<std::io::Error>().is_some() {
        exit_codes::ERROR_IO
    } else {
        exit_codes::ERROR_GENERIC
    };
    u8::try_from(code).unwrap_or(1)
}
