//! PairBench: closest-pair algorithm benchmark.

use std::process::ExitCode;

use pairbench_lib::{app, config, errors};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing::Level::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = config::AppConfig::parse_validated();
    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            pairbench_cli::ui::print_error(&format!("{err:#}"));
            ExitCode::from(errors::exit_code(&err))
        }
    }
}
