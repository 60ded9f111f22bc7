//! Algorithm registry.
//!
//! Each algorithm is described by an [`AlgorithmSpec`] record carrying its
//! name, an optional size cap, and the function itself. The driver selects
//! from the registry by name; nothing compares function pointers.

use crate::algorithms::{
    brute_force, brute_force_improved, divide_and_conquer, divide_and_conquer_improved,
};
use crate::constants::{BRUTE_FORCE_MAX_SIZE, CONTROL_ALGORITHM};
use crate::error::CoreError;
use crate::point::Point;

/// Signature shared by every closest-pair algorithm.
pub type ClosestPairFn = fn(&[Point]) -> f64;

/// Per-algorithm configuration record.
#[derive(Debug, Clone, Copy)]
pub struct AlgorithmSpec {
    /// Name used on the command line and as the CSV file stem.
    pub name: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Largest input size this algorithm is benchmarked at, if capped.
    pub max_size: Option<u64>,
    /// The implementation.
    pub function: ClosestPairFn,
}

impl AlgorithmSpec {
    /// Upper bound of the sweep for this algorithm.
    #[must_use]
    pub fn effective_upper(&self, upper: u64) -> u64 {
        self.max_size.map_or(upper, |cap| upper.min(cap))
    }

    /// Run the algorithm.
    #[inline]
    #[must_use]
    pub fn run(&self, points: &[Point]) -> f64 {
        (self.function)(points)
    }
}

/// Ordered collection of the available algorithms.
pub struct AlgorithmRegistry {
    algorithms: Vec<AlgorithmSpec>,
}

impl AlgorithmRegistry {
    /// Registry with the four built-in algorithms.
    #[must_use]
    pub fn new() -> Self {
        Self {
            algorithms: vec![
                AlgorithmSpec {
                    name: "brute_force",
                    description: "Quadratic scan over ordered pairs with exact distances",
                    max_size: Some(BRUTE_FORCE_MAX_SIZE),
                    function: brute_force,
                },
                AlgorithmSpec {
                    name: "brute_force_improved",
                    description: "Quadratic scan over unordered pairs with integer pseudo-distances",
                    max_size: None,
                    function: brute_force_improved,
                },
                AlgorithmSpec {
                    name: "divide_and_conquer",
                    description: "Recursive halving, strip re-sorted by y at each level",
                    max_size: None,
                    function: divide_and_conquer,
                },
                AlgorithmSpec {
                    name: "divide_and_conquer_improved",
                    description: "Recursive halving over presorted x and y orders",
                    max_size: None,
                    function: divide_and_conquer_improved,
                },
            ],
        }
    }

    /// All registered algorithms, in registration order.
    #[must_use]
    pub fn all(&self) -> &[AlgorithmSpec] {
        &self.algorithms
    }

    /// Names of all registered algorithms.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.algorithms.iter().map(|a| a.name).collect()
    }

    /// Look up an algorithm by name.
    pub fn find(&self, name: &str) -> Result<&AlgorithmSpec, CoreError> {
        self.algorithms
            .iter()
            .find(|a| a.name == name)
            .ok_or_else(|| CoreError::UnknownAlgorithm(name.to_string()))
    }

    /// The reference algorithm results are checked against.
    #[must_use]
    pub fn control(&self) -> &AlgorithmSpec {
        self.find(CONTROL_ALGORITHM)
            .unwrap_or(&self.algorithms[1])
    }

    /// Resolve a selection of names. `"all"` selects every algorithm;
    /// duplicates are dropped, first occurrence wins.
    pub fn select<S: AsRef<str>>(&self, selection: &[S]) -> Result<Vec<&AlgorithmSpec>, CoreError> {
        let mut selected: Vec<&AlgorithmSpec> = Vec::new();
        for name in selection {
            let name = name.as_ref().trim();
            if name.is_empty() {
                continue;
            }
            if name == "all" {
                for algo in &self.algorithms {
                    if !selected.iter().any(|s| s.name == algo.name) {
                        selected.push(algo);
                    }
                }
                continue;
            }
            let algo = self.find(name)?;
            if !selected.iter().any(|s| s.name == algo.name) {
                selected.push(algo);
            }
        }

        if selected.is_empty() {
            return Err(CoreError::EmptySelection);
        }
        Ok(selected)
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_has_four_algorithms() {
        let registry = AlgorithmRegistry::new();
        assert_eq!(
            registry.names(),
            vec![
                "brute_force",
                "brute_force_improved",
                "divide_and_conquer",
                "divide_and_conquer_improved"
            ]
        );
    }

    #[test]
    fn find_known_and_unknown() {
        let registry = AlgorithmRegistry::new();
        assert_eq!(registry.find("divide_and_conquer").unwrap().name, "divide_and_conquer");
        assert!(matches!(
            registry.find("sweep_line"),
            Err(CoreError::UnknownAlgorithm(name)) if name == "sweep_line"
        ));
    }

    #[test]
    fn control_is_brute_force_improved() {
        let registry = AlgorithmRegistry::new();
        assert_eq!(registry.control().name, CONTROL_ALGORITHM);
    }

    #[test]
    fn brute_force_is_capped() {
        let registry = AlgorithmRegistry::new();
        let bf = registry.find("brute_force").unwrap();
        assert_eq!(bf.effective_upper(512), 512);
        assert_eq!(bf.effective_upper(10_000), BRUTE_FORCE_MAX_SIZE);

        let dc = registry.find("divide_and_conquer_improved").unwrap();
        assert_eq!(dc.effective_upper(10_000), 10_000);
    }

    #[test]
    fn select_all() {
        let registry = AlgorithmRegistry::new();
        let selected = registry.select(&["all"]).unwrap();
        assert_eq!(selected.len(), 4);
    }

    #[test]
    fn select_dedupes_and_keeps_order() {
        let registry = AlgorithmRegistry::new();
        let selected = registry
            .select(&["divide_and_conquer", "brute_force", "divide_and_conquer"])
            .unwrap();
        let names: Vec<_> = selected.iter().map(|a| a.name).collect();
        assert_eq!(names, vec!["divide_and_conquer", "brute_force"]);
    }

    #[test]
    fn select_unknown_fails() {
        let registry = AlgorithmRegistry::new();
        assert!(registry.select(&["brute_force", "nope"]).is_err());
    }

    #[test]
    fn select_empty_fails() {
        let registry = AlgorithmRegistry::new();
        let empty: [&str; 0] = [];
        assert!(matches!(registry.select(&empty), Err(CoreError::EmptySelection)));
        assert!(matches!(registry.select(&[" "]), Err(CoreError::EmptySelection)));
    }

    #[test]
    fn spec_run_calls_function() {
        let registry = AlgorithmRegistry::new();
        let spec = registry.find("brute_force_improved").unwrap();
        let d = spec.run(&[Point::new(0, 0), Point::new(0, 7)]);
        assert!((d - 7.0).abs() < f64::EPSILON);
    }
}
