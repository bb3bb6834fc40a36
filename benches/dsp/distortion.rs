//! Benchmarks for waveshaping distortion.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_bank::dsp::distortion;

use crate::BUFFER_SIZES;

pub fn bench_distortion(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/distortion");

    for &size in BUFFER_SIZES {
        // Generate a test signal (sine-like values)
        let input: Vec<f32> = (0..size).map(|i| (i as f32 * 0.1).sin()).collect();

        // Clipped - branch per sample
        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("clipped", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                distortion::clipped_buffer(black_box(&mut buffer));
            })
        });

        // Sine - sin() per sample
        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("sine", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                distortion::sin_buffer(black_box(&mut buffer), black_box(2.0));
            })
        });
    }

    group.finish();
}
