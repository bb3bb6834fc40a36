//! Benchmarks for constant gain.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_bank::dsp::amplify::apply_gain;

use crate::BUFFER_SIZES;

pub fn bench_amplify(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/amplify");

    for &size in BUFFER_SIZES {
        let input: Vec<f32> = (0..size).map(|i| (i as f32 * 0.1).sin()).collect();
        let mut buffer = input.clone();

        group.bench_with_input(BenchmarkId::new("gain", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                apply_gain(black_box(&mut buffer), black_box(0.75));
            })
        });
    }

    group.finish();
}
