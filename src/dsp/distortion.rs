//! Distortion / Waveshaping
//!
//! Two transfer functions are used by the sound bank.
//!
//! # Clipped
//!
//! A piecewise curve with a doubling zone around zero and a flattened zone
//! outside it:
//!
//!   |x| < 0.3  →  2x
//!   otherwise  →  x/2 + 0.4·sign(x)
//!
//! `sign` is +1 for positive input and -1 for everything else (NaN
//! included). The two
//! pieces do not meet at ±0.3 (0.6 vs 0.55); that step is part of the
//! sound and is kept.
//!
//! | x    | out   |
//! | ---- | ----- |
//! | 0.1  | 0.2   |
//! | 0.29 | 0.58  |
//! | 0.3  | 0.55  |
//! | 1.0  | 0.9   |
//!
//! # Sine
//!
//!   f(x) = sin(x · π·drive/2)
//!
//! At drive 1 a full-scale input maps to ±1. Higher drive wraps the signal
//! around the sine, folding peaks back towards zero.

use std::f32::consts::PI;

/// Clipped waveshaper for a single sample.
#[inline]
pub fn clipped(sample: f32) -> f32 {
    if sample.abs() < 0.3 {
        sample * 2.0
    } else {
        let sign = if sample > 0.0 { 1.0 } else { -1.0 };
        sample / 2.0 + 0.4 * sign
    }
}

/// Sine waveshaper for a single sample.
#[inline]
pub fn sin_shape(sample: f32, drive: f32) -> f32 {
    (sample * (PI * drive / 2.0)).sin()
}

/// Apply the clipped waveshaper to an entire buffer in place.
pub fn clipped_buffer(buffer: &mut [f32]) {
    for sample in buffer.iter_mut() {
        *sample = clipped(*sample);
    }
}

/// Apply the sine waveshaper to an entire buffer in place.
pub fn sin_buffer(buffer: &mut [f32], drive: f32) {
    let scale = PI * drive / 2.0;
    for sample in buffer.iter_mut() {
        *sample = (*sample * scale).sin();
    }
}
