//! Benchmarks for exponential decay (one exp() per sample).

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_bank::dsp::decay::apply_decay;

use crate::BUFFER_SIZES;

pub fn bench_decay(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/decay");

    for &size in BUFFER_SIZES {
        let input = vec![1.0f32; size];
        let mut buffer = input.clone();

        group.bench_with_input(BenchmarkId::new("decay", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                apply_decay(black_box(&mut buffer), black_box(1.0));
            })
        });
    }

    group.finish();
}
