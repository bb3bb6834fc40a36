//! Low-level DSP primitives used by the pipeline executor.
//!
//! Every operator here works on a plain `[f32]` sample buffer. Generators
//! build a new buffer of a caller-chosen length; transforms rewrite an
//! existing buffer in place and never change its length. The only
//! exception is the mixer, which sums whole buffers together.

/// Constant gain.
pub mod amplify;
/// Exponential decay across a whole buffer.
pub mod decay;
/// Clipped and sinusoidal waveshaping.
pub mod distortion;
/// Fractional attack/decay/sustain/release gain curve.
pub mod envelope;
/// Two-pole/two-zero resonant filter.
pub mod filter;
/// Sample-wise summation of rendered layers.
pub mod mix;
/// Noise and frequency-sweep generators.
pub mod oscillator;

pub use envelope::EnvelopeShape;
pub use filter::ResonantFilter;
pub use oscillator::NoiseSource;
