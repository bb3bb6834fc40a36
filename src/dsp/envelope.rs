//! Fractional ADSR gain curve.

/*
Fractional Envelope
===================

Unlike a gated voice envelope, this one knows the whole buffer up front.
Attack, decay and release are given as FRACTIONS of the buffer length;
whatever is left in the middle is the sustain plateau.

  gain
    1.0 ┐  ╱╲
        │ ╱  ╲________
    S   │╱            ╲
        │              ╲
    0.0 └───────────────╲──→ sample
         A   D    S     R
        a·n d·n        r·n

Boundaries in samples (n = buffer length):

    a = attack·n
    d = decay·n
    r = release·n

These are real numbers, not rounded. The curve is applied by four
contiguous loops sharing ONE running index i, each running while its
condition holds:

    attack   while i < a        gain = i / a
    decay    while i < a + d    gain = (1 - (i - a)/d)·(1 - S) + S
    sustain  while i < n - r    gain = S
    release  until i = n        gain = S·(1 - (i - j)/r)

where j is the integer index at which the release loop started. Every
sample is visited exactly once. A zero attack runs no attack iterations
and decay begins at index 0. A zero release leaves the tail at S.

Each loop also stops at the end of the buffer, so fractions summing past
1.0 can never grow it.
*/

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Attack/decay/release fractions plus a sustain level.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvelopeShape {
    /// Fraction of the buffer spent ramping 0 → 1
    pub attack: f32,
    /// Fraction of the buffer spent ramping 1 → sustain
    pub decay: f32,
    /// Plateau level
    pub sustain: f32,
    /// Fraction of the buffer spent ramping sustain → 0
    pub release: f32,
}

impl EnvelopeShape {
    pub fn new(attack: f32, decay: f32, sustain: f32, release: f32) -> Self {
        Self {
            attack,
            decay,
            sustain,
            release,
        }
    }

    /// Shape `buffer` in place.
    pub fn apply(&self, buffer: &mut [f32]) {
        apply_envelope(buffer, self.attack, self.decay, self.sustain, self.release);
    }
}

/// Multiply `buffer` by the fractional envelope described in the module notes.
pub fn apply_envelope(buffer: &mut [f32], attack: f32, decay: f32, sustain: f32, release: f32) {
    let n = buffer.len();
    let len = n as f32;
    let a = attack * len;
    let d = decay * len;
    let r = release * len;
    let inverse = 1.0 - sustain;

    let mut i = 0;
    while i < n && (i as f32) < a {
        buffer[i] *= i as f32 / a;
        i += 1;
    }
    while i < n && (i as f32) < a + d {
        buffer[i] *= (1.0 - (i as f32 - a) / d) * inverse + sustain;
        i += 1;
    }
    while i < n && (i as f32) < len - r {
        buffer[i] *= sustain;
        i += 1;
    }
    let release_start = i as f32;
    while i < n {
        buffer[i] *= sustain * (1.0 - (i as f32 - release_start) / r);
        i += 1;
    }
}
