use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

pub fn random_values<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    range: std::ops::RangeInclusive<i64>,
) -> Vec<i64> {
    (0..n).map(|_| rng.random_range(range.clone())).collect()
}

/// `q` inclusive ranges `[l, r]` with `l <= r < n`. `n` must be non-zero.
pub fn random_inclusive_ranges<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    q: usize,
) -> Vec<(usize, usize)> {
    assert!(n > 0);
    let mut ranges = Vec::with_capacity(q);
    for _ in 0..q {
        let l = rng.random_range(0..n);
        let r = rng.random_range(l..n);
        ranges.push((l, r));
    }
    ranges
}
