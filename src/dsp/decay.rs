//! Exponential decay across a whole buffer.
//!
//! Sample `i` of an `n`-sample buffer is scaled by
//!
//!   exp(-i/n · 4·factor)
//!
//! so at the last sample the level is close to `exp(-4·factor)`
//! (factor 1 ≈ -35 dB). This is a single continuous curve and is not gated
//! by any envelope boundaries.

/// Apply the exponential decay in place.
pub fn apply_decay(buffer: &mut [f32], factor: f32) {
    let n = buffer.len() as f32;
    let rate = factor * 4.0;
    for (i, sample) in buffer.iter_mut().enumerate() {
        *sample *= (-(i as f32) / n * rate).exp();
    }
}
