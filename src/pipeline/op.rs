#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::{
    amplify::apply_gain,
    decay::apply_decay,
    distortion::{clipped_buffer, sin_buffer},
    envelope::EnvelopeShape,
    filter::{apply_resonant_filter, ResonantParams},
    oscillator::{freq_sweep, noise},
};

use super::render::RenderCtx;

/// First step of every chain: decides the buffer length.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Generator {
    /// Uniform white noise in [-1, 1)
    Noise { length: usize },
    /// Phase-integrated sine sweep from `start_hz` to `end_hz`
    FreqSweep {
        length: usize,
        start_hz: f32,
        end_hz: f32,
    },
}

impl Generator {
    /// Number of samples this generator produces.
    pub fn length(&self) -> usize {
        match *self {
            Generator::Noise { length } | Generator::FreqSweep { length, .. } => length,
        }
    }

    pub fn generate(&self, ctx: &mut RenderCtx) -> Vec<f32> {
        match *self {
            Generator::Noise { length } => noise(length, &mut ctx.noise),
            Generator::FreqSweep {
                length,
                start_hz,
                end_hz,
            } => freq_sweep(length, start_hz, end_hz, ctx.sample_rate),
        }
    }
}

/// Length-preserving, in-place step applied after the generator.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    Gain(f32),
    ClippedDistort,
    SinDistort { drive: f32 },
    Envelope(EnvelopeShape),
    Decay(f32),
    ResonantFilter(ResonantParams),
}

impl Transform {
    pub fn apply(&self, buffer: &mut [f32], ctx: &RenderCtx) {
        match *self {
            Transform::Gain(factor) => apply_gain(buffer, factor),
            Transform::ClippedDistort => clipped_buffer(buffer),
            Transform::SinDistort { drive } => sin_buffer(buffer, drive),
            Transform::Envelope(shape) => shape.apply(buffer),
            Transform::Decay(factor) => apply_decay(buffer, factor),
            Transform::ResonantFilter(params) => {
                apply_resonant_filter(buffer, params, ctx.sample_rate)
            }
        }
    }
}
