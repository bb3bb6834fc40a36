//! Benchmarks for the fractional envelope.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_bank::dsp::envelope::EnvelopeShape;

use crate::BUFFER_SIZES;

pub fn bench_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/envelope");

    for &size in BUFFER_SIZES {
        let input = vec![1.0f32; size];
        let mut buffer = input.clone();

        // Bass drum shape: every segment present
        let full = EnvelopeShape::new(0.1, 0.4, 0.2, 0.2);
        group.bench_with_input(BenchmarkId::new("adsr", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                black_box(&full).apply(black_box(&mut buffer));
            })
        });

        // Sustain only
        let flat = EnvelopeShape::new(0.0, 0.0, 0.5, 0.0);
        group.bench_with_input(BenchmarkId::new("sustain", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                black_box(&flat).apply(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}
