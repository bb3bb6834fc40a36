//! Benchmarks for the generators.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_bank::dsp::oscillator::{freq_sweep, noise, NoiseSource};

use crate::BUFFER_SIZES;

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");

    for &size in BUFFER_SIZES {
        // Noise - SmallRng per sample
        let mut source = NoiseSource::seeded(1);
        group.bench_with_input(BenchmarkId::new("noise", size), &size, |b, &size| {
            b.iter(|| noise(black_box(size), &mut source))
        });

        // Sweep - sin() plus two accumulators per sample
        group.bench_with_input(BenchmarkId::new("sweep", size), &size, |b, &size| {
            b.iter(|| freq_sweep(black_box(size), black_box(80.0), black_box(20.0), 44_100.0))
        });
    }

    group.finish();
}
