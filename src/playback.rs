//! Boundary to the external instrument engine.
//!
//! The engine asks three questions of every instrument: what is sample
//! `i`, how long is the attack, and how fast does it dampen. A
//! [`PlaybackBinding`] answers them from a rendered [`Sound`].
//!
//! Pitch and volume are the engine's job. The wave lookup ignores both and
//! simply loops the rendered buffer.
//!
//! The attack and dampen answers are constants taken from
//! [`RenderConfig`] (0.0005 s and 1.0 by default) no matter what is asked.
//! No per-sound timing is derived from the buffer yet.

use std::sync::Arc;

use crate::{bank::Sound, config::RenderConfig};

/// What the external engine expects from an instrument.
pub trait SoundProfile {
    /// Amplitude of sample `index` of the repeating waveform.
    fn wave_sample(&self, index: usize, sample_rate: f32, frequency: f32, volume: f32) -> f32;

    /// Attack length in seconds.
    fn attack_seconds(&self, sample_rate: f32, frequency: f32, volume: f32) -> f32;

    /// Signal decay rate.
    fn dampen_rate(&self, sample_rate: f32, frequency: f32, volume: f32) -> f32;
}

/// Read-only handle on one rendered sound.
#[derive(Debug, Clone)]
pub struct PlaybackBinding {
    sound: Arc<Sound>,
    attack_seconds: f32,
    dampen_rate: f32,
}

impl PlaybackBinding {
    pub fn new(sound: Arc<Sound>, config: &RenderConfig) -> Self {
        Self {
            sound,
            attack_seconds: config.attack_seconds,
            dampen_rate: config.dampen_rate,
        }
    }

    pub fn name(&self) -> &str {
        self.sound.name()
    }

    pub fn sound(&self) -> &Sound {
        &self.sound
    }

    /// Suggested note length for the sequencer, if the sound has one.
    pub fn note_duration(&self) -> Option<f32> {
        self.sound.note_duration()
    }
}

impl SoundProfile for PlaybackBinding {
    #[inline]
    fn wave_sample(&self, index: usize, _sample_rate: f32, _frequency: f32, _volume: f32) -> f32 {
        self.sound.looped(index)
    }

    fn attack_seconds(&self, _sample_rate: f32, _frequency: f32, _volume: f32) -> f32 {
        self.attack_seconds
    }

    fn dampen_rate(&self, _sample_rate: f32, _frequency: f32, _volume: f32) -> f32 {
        self.dampen_rate
    }
}
