//! Benchmarks for individual operators.

mod amplify;
mod decay;
mod distortion;
mod envelope;
mod filter;
mod mix;
mod oscillator;

pub use amplify::bench_amplify;
pub use decay::bench_decay;
pub use distortion::bench_distortion;
pub use envelope::bench_envelope;
pub use filter::bench_filter;
pub use mix::bench_mix;
pub use oscillator::bench_oscillator;
