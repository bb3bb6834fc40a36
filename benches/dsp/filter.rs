//! Benchmarks for the resonant filter.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_bank::dsp::filter::{ResonantFilter, ResonantParams};

use crate::BUFFER_SIZES;

pub fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/filter");
    let params = ResonantParams {
        freq: 0.05,
        pole_radius: 0.94,
        zero_radius: 0.9,
        output_scale: 0.5,
    };

    for &size in BUFFER_SIZES {
        // Generate a test signal (sawtooth-like ramp)
        let input: Vec<f32> = (0..size)
            .map(|i| (i as f32 / size as f32) * 2.0 - 1.0)
            .collect();

        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("resonant", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                let mut filter = ResonantFilter::new(black_box(params), 44_100.0);
                filter.render(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}
