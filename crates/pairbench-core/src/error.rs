//! Error type for algorithm lookup.

/// Errors raised by the core crate.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No algorithm is registered under the requested name.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// The selection did not name any algorithm.
    #[error("no algorithm selected")]
    EmptySelection,
}
