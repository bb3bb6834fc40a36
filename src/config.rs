#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{dsp::oscillator::NoiseSource, pipeline::RenderCtx, DEFAULT_SAMPLE_RATE};

/// Attack time handed to the playback engine for every sound.
pub const DEFAULT_ATTACK_SECONDS: f32 = 0.0005;
/// Dampen rate handed to the playback engine for every sound.
pub const DEFAULT_DAMPEN_RATE: f32 = 1.0;

/// Process-wide render settings.
///
/// Built once at startup and passed by reference to [`crate::SoundBank`];
/// nothing mutates it after rendering begins.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Samples per second
    pub sample_rate: f32,
    /// Noise seed; `None` draws fresh entropy on every render
    pub seed: Option<u64>,
    /// Constant returned by every binding's `attack_seconds`
    pub attack_seconds: f32,
    /// Constant returned by every binding's `dampen_rate`
    pub dampen_rate: f32,
}

impl RenderConfig {
    pub fn new() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            seed: None,
            attack_seconds: DEFAULT_ATTACK_SECONDS,
            dampen_rate: DEFAULT_DAMPEN_RATE,
        }
    }

    pub fn with_sample_rate(mut self, sample_rate: f32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_attack_seconds(mut self, seconds: f32) -> Self {
        self.attack_seconds = seconds;
        self
    }

    pub fn with_dampen_rate(mut self, rate: f32) -> Self {
        self.dampen_rate = rate;
        self
    }

    /// Noise source for the sound called `name`.
    ///
    /// With a seed, every sound gets its own stream derived from the seed and
    /// its name, so the order sounds are rendered in never changes their
    /// samples.
    pub fn noise_source(&self, name: &str) -> NoiseSource {
        match self.seed {
            Some(seed) => NoiseSource::seeded(seed ^ name_hash(name)),
            None => NoiseSource::from_entropy(),
        }
    }

    /// Fresh render context for the sound called `name`.
    pub fn render_ctx(&self, name: &str) -> RenderCtx {
        RenderCtx::new(self.sample_rate, self.noise_source(name))
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new()
    }
}

// FNV-1a: stable across runs and platforms, unlike `DefaultHasher`.
fn name_hash(name: &str) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    name.bytes()
        .fold(OFFSET, |hash, byte| (hash ^ byte as u64).wrapping_mul(PRIME))
}
