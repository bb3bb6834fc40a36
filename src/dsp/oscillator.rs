//! Generators: white noise and the phase-integrated frequency sweep.

/*
Frequency Sweep
===============

The sweep does NOT compute phase from absolute time. It keeps two running
values:

    t   current phase (radians)
    dt  phase increment for the next sample

and advances them once per sample:

    out[i] = sin(t)
    t     += dt
    dt    += dd        where dd = (d2 - d1) / length

with d1 = 2π·f1/sample_rate and d2 = 2π·f2/sample_rate. Because the
increment itself ramps linearly, the phase picks up a quadratic term. The
kick drums in the preset bank are tuned against this exact recurrence, so
it must not be replaced by a closed-form chirp.

  phase increment
      d1 ┐╲
         │  ╲
         │    ╲
      d2 ┤      ╲___ (reached after `length` samples)
         └────────────→ sample
*/

use std::f32::consts::PI;

use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Source of uniform random samples for the noise generator.
///
/// Each rendered sound owns its own source, so noise streams never leak
/// between sounds.
pub struct NoiseSource {
    rng: SmallRng,
}

impl NoiseSource {
    /// Deterministic source: the same seed always yields the same samples.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Non-deterministic source seeded from the thread RNG.
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }

    /// Next sample, uniform in [-1, 1).
    #[inline]
    pub fn next_sample(&mut self) -> f32 {
        self.rng.random::<f32>() * 2.0 - 1.0
    }
}

/// Generate `length` samples of white noise.
pub fn noise(length: usize, source: &mut NoiseSource) -> Vec<f32> {
    (0..length).map(|_| source.next_sample()).collect()
}

/// Generate a sine sweep from `freq1` to `freq2` Hz over `length` samples.
///
/// See the module notes for the exact recurrence.
pub fn freq_sweep(length: usize, freq1: f32, freq2: f32, sample_rate: f32) -> Vec<f32> {
    let d1 = PI * 2.0 * freq1 / sample_rate;
    let d2 = PI * 2.0 * freq2 / sample_rate;
    let dd = (d2 - d1) / length as f32;

    let mut dt = d1;
    let mut t = 0.0f32;
    let mut out = Vec::with_capacity(length);
    for _ in 0..length {
        out.push(t.sin());
        t += dt;
        dt += dd;
    }
    out
}
