//! Benchmarks for layer summation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_bank::dsp::mix;

use crate::BUFFER_SIZES;

pub fn bench_mix(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/mix");

    for &size in BUFFER_SIZES {
        // Generate test signals
        let signal_a: Vec<f32> = (0..size).map(|i| (i as f32 * 0.1).sin()).collect();
        let signal_b: Vec<f32> = (0..size).map(|i| (i as f32 * 0.15).cos()).collect();

        group.bench_with_input(BenchmarkId::new("sum", size), &size, |b, _| {
            b.iter(|| mix::sum_truncated(black_box(&signal_a), black_box(&signal_b)))
        });
    }

    group.finish();
}
