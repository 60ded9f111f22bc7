//! Version information.

/// Get the version string.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Version string recorded in the run manifest.
#[must_use]
pub fn full_version() -> String {
    format!("pairbench {}", version())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_not_empty() {
        assert!(!version().is_empty());
        assert!(full_version().starts_with("pairbench "));
    }
}
