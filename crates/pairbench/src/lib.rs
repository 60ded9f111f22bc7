//! PairBench library: application logic for the closest-pair benchmark
//! driver.

pub mod app;
pub mod config;
pub mod errors;
pub mod setup;
pub mod version;
