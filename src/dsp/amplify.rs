//! Constant gain.

/*
Gain
====

  gain > 1.0  →  louder
  gain = 1.0  →  unchanged
  gain < 1.0  →  quieter
  gain = 0.0  →  silence
  gain < 0.0  →  inverted polarity

Every halving of amplitude is roughly -6 dB:

    dB = 20 × log₁₀(gain)

In the sound bank gain usually sits at the END of a chain, to bring a
distorted or resonant layer back into range before mixing. Because it is
linear, applying `g` and then `1/g` restores the input (up to rounding).
*/

/// Multiply a signal by a constant gain factor (in-place).
///
/// # Arguments
/// * `signal` - The signal buffer to modify in-place
/// * `gain` - The gain factor (0.0 = silence, 1.0 = unchanged, 2.0 = double)
#[inline]
pub fn apply_gain(signal: &mut [f32], gain: f32) {
    for sample in signal.iter_mut() {
        *sample *= gain;
    }
}
