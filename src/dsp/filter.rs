#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::f32::consts::PI;

/*
Resonant Two-Pole / Two-Zero Filter
===================================

A second-order IIR section with a conjugate pole pair and a conjugate zero
pair, both at angle θ:

    θ  = freq · 2 / sample_rate · π

    a2 = 1      a1 = -2·Rp·cos θ      a0 = Rp
    b2 = 1      b1 = -2·Rz·cos θ      b0 = Rz

    y[i] = (b2·x[i] + b1·x[i-1] + b0·x[i-2] - a1·y[i-1] - a0·y[i-2]) / a2 · scale

Note a0 and b0 are the radii themselves, not their squares, and `scale`
multiplies the whole expression, so it also scales the feedback path.

`freq` is fed straight into θ. The preset hats pass tiny values such as
0.05, which puts the resonance near DC; nothing here converts units.

| symbol | meaning                      |
| ------ | ---------------------------- |
| Rp     | pole radius (resonance)      |
| Rz     | zero radius (anti-resonance) |
| scale  | output scale                 |

History (x1, x2, y1, y2) starts at zero on every `new`, so chained stages
never share state.
*/

/// Parameters of one resonant filter stage.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResonantParams {
    pub freq: f32,
    pub pole_radius: f32,
    pub zero_radius: f32,
    pub output_scale: f32,
}

pub struct ResonantFilter {
    a1: f32,
    a0: f32,
    b1: f32,
    b0: f32,
    scale: f32,

    x1: f32, // x[i-1]
    x2: f32, // x[i-2]
    y1: f32, // y[i-1]
    y2: f32, // y[i-2]
}

impl ResonantFilter {
    const A2: f32 = 1.0;
    const B2: f32 = 1.0;

    pub fn new(params: ResonantParams, sample_rate: f32) -> Self {
        let theta = params.freq * 2.0 / sample_rate * PI;
        let cos = theta.cos();

        Self {
            a1: -2.0 * (cos * params.pole_radius),
            a0: params.pole_radius,
            b1: -2.0 * (cos * params.zero_radius),
            b0: params.zero_radius,
            scale: params.output_scale,
            x1: 0.0,
            x2: 0.0,
            y1: 0.0,
            y2: 0.0,
        }
    }

    /// Clear the filter history.
    pub fn reset(&mut self) {
        self.x1 = 0.0;
        self.x2 = 0.0;
        self.y1 = 0.0;
        self.y2 = 0.0;
    }

    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        let out = (Self::B2 * input + self.b1 * self.x1 + self.b0 * self.x2
            - self.a1 * self.y1
            - self.a0 * self.y2)
            / Self::A2
            * self.scale;

        self.x2 = self.x1;
        self.x1 = input;
        self.y2 = self.y1;
        self.y1 = out;
        out
    }

    pub fn render(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.process(*sample);
        }
    }
}

/// Run one fresh filter stage over `buffer` in place.
pub fn apply_resonant_filter(buffer: &mut [f32], params: ResonantParams, sample_rate: f32) {
    ResonantFilter::new(params, sample_rate).render(buffer);
}

#[cfg(test)]
mod tests {
    use super::*;

    const HAT: ResonantParams = ResonantParams {
        freq: 0.05,
        pole_radius: 0.94,
        zero_radius: 0.9,
        output_scale: 0.5,
    };

    #[test]
    fn test_silence_in_silence_out() {
        let mut buffer = vec![0.0f32; 1024];
        apply_resonant_filter(&mut buffer, HAT, 44_100.0);
        assert!(buffer.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_impulse_response_head() {
        let sample_rate = 44_100.0;
        let mut buffer = vec![0.0f32; 3];
        buffer[0] = 1.0;
        apply_resonant_filter(&mut buffer, HAT, sample_rate);

        let cos = (HAT.freq * 2.0 / sample_rate * PI).cos();
        let a1 = -2.0 * (cos * HAT.pole_radius);
        let b1 = -2.0 * (cos * HAT.zero_radius);

        let y0 = 1.0 * HAT.output_scale;
        let y1 = (b1 - a1 * y0) * HAT.output_scale;
        let y2 = (HAT.zero_radius - a1 * y1 - HAT.pole_radius * y0) * HAT.output_scale;

        assert!((buffer[0] - y0).abs() < 1e-6);
        assert!((buffer[1] - y1).abs() < 1e-6);
        assert!((buffer[2] - y2).abs() < 1e-6);
    }

    #[test]
    fn test_stages_do_not_share_state() {
        let input: Vec<f32> = (0..256).map(|i| ((i * 7919) % 200) as f32 / 100.0 - 1.0).collect();

        // Two chained stages
        let mut chained = input.clone();
        apply_resonant_filter(&mut chained, HAT, 44_100.0);
        apply_resonant_filter(&mut chained, HAT, 44_100.0);

        // Same thing by hand with explicit fresh filters
        let mut first = input.clone();
        ResonantFilter::new(HAT, 44_100.0).render(&mut first);
        let mut second = first.clone();
        ResonantFilter::new(HAT, 44_100.0).render(&mut second);

        assert_eq!(chained, second);
    }

    #[test]
    fn test_reset_clears_history() {
        let mut filter = ResonantFilter::new(HAT, 44_100.0);
        let mut warm = vec![1.0f32; 64];
        filter.render(&mut warm);
        filter.reset();

        let mut buffer = vec![0.0f32; 16];
        filter.render(&mut buffer);
        assert!(buffer.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_preset_hat_stays_bounded() {
        let mut buffer: Vec<f32> = (0..2000).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
        apply_resonant_filter(&mut buffer, HAT, 44_100.0);
        assert!(buffer.iter().all(|s| s.is_finite() && s.abs() < 10.0));
    }
}
