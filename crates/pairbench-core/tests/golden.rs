//! Golden file integration tests.
//!
//! Reads tests/testdata/closest_pair_golden.json and verifies every
//! registered algorithm reproduces the known closest distances.

use serde::Deserialize;

use pairbench_core::{AlgorithmRegistry, Point, NO_PAIR_DISTANCE};

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    cases: Vec<GoldenCase>,
}

#[derive(Deserialize)]
struct GoldenCase {
    name: String,
    points: Vec<(i64, i64)>,
    squared: Option<u64>,
}

fn load_golden_data() -> GoldenData {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/closest_pair_golden.json"
    );
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

#[allow(clippy::cast_precision_loss)]
fn expected_distance(case: &GoldenCase) -> f64 {
    case.squared
        .map_or(NO_PAIR_DISTANCE, |squared| (squared as f64).sqrt())
}

#[test]
fn golden_file_is_not_empty() {
    let data = load_golden_data();
    assert!(data.cases.len() >= 5);
}

#[test]
fn all_algorithms_match_golden_values() {
    let data = load_golden_data();
    let registry = AlgorithmRegistry::new();

    for case in &data.cases {
        let points: Vec<Point> = case.points.iter().copied().map(Point::from).collect();
        let expected = expected_distance(case);
        for algo in registry.all() {
            let actual = algo.run(&points);
            assert_eq!(
                actual.to_bits(),
                expected.to_bits(),
                "{} on '{}': expected {expected}, got {actual}",
                algo.name,
                case.name
            );
        }
    }
}

#[test]
fn golden_values_survive_shuffling() {
    let data = load_golden_data();
    let registry = AlgorithmRegistry::new();

    for case in &data.cases {
        let mut points: Vec<Point> = case.points.iter().copied().map(Point::from).collect();
        points.reverse();
        let expected = expected_distance(case);
        for algo in registry.all() {
            assert_eq!(
                algo.run(&points).to_bits(),
                expected.to_bits(),
                "{} on reversed '{}'",
                algo.name,
                case.name
            );
        }
    }
}
