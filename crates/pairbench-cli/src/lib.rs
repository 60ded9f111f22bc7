//! # pairbench-cli
//!
//! Console output for the benchmark driver: progress bar, banners, the
//! final results table, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod progress;
pub mod ui;

pub use presenter::ResultPresenter;
pub use progress::BarObserver;
