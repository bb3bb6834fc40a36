//! Benchmarks for preset rendering.

use std::hint::black_box;

use criterion::Criterion;
use saavy_bank::{
    bank::presets,
    pipeline::{render_spec, RenderCtx},
    RenderConfig, SoundBank,
};

pub fn bench_bank(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/bank");
    let config = RenderConfig::new().with_seed(1);

    for entry in presets::all() {
        group.bench_function(entry.name.as_str(), |b| {
            b.iter(|| {
                let mut ctx = RenderCtx::seeded(config.sample_rate, 1);
                render_spec(black_box(&entry.spec), &mut ctx)
            })
        });
    }

    // Everything the inspector renders at startup
    group.bench_function("all_presets", |b| {
        b.iter(|| SoundBank::presets(black_box(&config)))
    });

    group.finish();
}
