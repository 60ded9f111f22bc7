#![no_main]

use libfuzzer_sys::fuzz_target;

use pairbench_core::{brute_force_improved, divide_and_conquer_improved, Point};

fuzz_target!(|data: &[u8]| {
    // Full-range coordinates: nothing may overflow, and the two
    // pseudo-distance algorithms still pick the same pair.
    let points: Vec<Point> = data
        .chunks_exact(16)
        .take(512)
        .map(|c| {
            let x = i64::from_le_bytes([c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7]]);
            let y = i64::from_le_bytes([c[8], c[9], c[10], c[11], c[12], c[13], c[14], c[15]]);
            Point::new(x, y)
        })
        .collect();

    let brute = brute_force_improved(&points);
    let dc = divide_and_conquer_improved(&points);
    assert!(brute >= 0.0);
    assert_eq!(brute, dc, "n={}", points.len());
});
