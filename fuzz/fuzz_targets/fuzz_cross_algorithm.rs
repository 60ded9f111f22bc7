#![no_main]

use libfuzzer_sys::fuzz_target;

use pairbench_core::{AlgorithmRegistry, Point};

fuzz_target!(|data: &[u8]| {
    // Two bytes per point keeps every squared distance exact in f64,
    // where all four algorithms must agree bit for bit.
    let points: Vec<Point> = data
        .chunks_exact(2)
        .take(2_000)
        .map(|c| Point::new(i64::from(c[0]), i64::from(c[1])))
        .collect();

    let registry = AlgorithmRegistry::new();
    let expected = registry.control().run(&points);
    for spec in registry.all() {
        let got = spec.run(&points);
        assert_eq!(got, expected, "{} disagrees on {} points", spec.name, points.len());
    }
});
