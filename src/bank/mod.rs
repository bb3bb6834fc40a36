//! Named sound registry.
//!
//! Sounds are registered as [`SoundSpec`]s on a [`SoundBankBuilder`], then
//! rendered all at once by [`SoundBankBuilder::render`]. The resulting
//! [`SoundBank`] is read-only: lookups are hash-map hits and every buffer is
//! shared behind an `Arc` so playback bindings can hold on to it.
//!
//! # Example
//!
//! ```ignore
//! use saavy_bank::{bank::SoundBank, RenderConfig};
//!
//! let config = RenderConfig::new().with_seed(7);
//! let bank = SoundBank::presets(&config);
//!
//! let hat = bank.binding("hatClosed")?;
//! let sample = hat.wave_sample(0, 44_100.0, 440.0, 1.0);
//! ```

pub mod presets;

use std::{collections::HashMap, sync::Arc};

use log::{debug, info, warn};

use crate::{
    config::RenderConfig,
    error::BankError,
    pipeline::{render_spec, SoundSpec},
    playback::PlaybackBinding,
};

/// A sound waiting to be rendered.
#[derive(Debug, Clone)]
pub struct SoundEntry {
    pub name: String,
    pub spec: SoundSpec,
    /// Suggested note length in seconds for the external sequencer
    pub note_duration: Option<f32>,
}

impl SoundEntry {
    pub fn new(name: impl Into<String>, spec: impl Into<SoundSpec>) -> Self {
        Self {
            name: name.into(),
            spec: spec.into(),
            note_duration: None,
        }
    }

    pub fn note_duration(mut self, seconds: f32) -> Self {
        self.note_duration = Some(seconds);
        self
    }
}

/// A rendered sound. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Sound {
    name: String,
    samples: Vec<f32>,
    note_duration: Option<f32>,
}

impl Sound {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn note_duration(&self) -> Option<f32> {
        self.note_duration
    }

    /// Sample at `index`, treating the buffer as a loop.
    ///
    /// An empty buffer yields NaN rather than panicking.
    #[inline]
    pub fn looped(&self, index: usize) -> f32 {
        if self.samples.is_empty() {
            return f32::NAN;
        }
        self.samples[index % self.samples.len()]
    }

    /// Largest absolute sample value.
    pub fn peak(&self) -> f32 {
        self.samples.iter().fold(0.0f32, |acc, &s| acc.max(s.abs()))
    }

    /// Root-mean-square level, 0.0 for an empty buffer.
    pub fn rms(&self) -> f32 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let sum: f32 = self.samples.iter().map(|s| s * s).sum();
        (sum / self.samples.len() as f32).sqrt()
    }

    pub fn duration_seconds(&self, sample_rate: f32) -> f32 {
        self.samples.len() as f32 / sample_rate
    }
}

/// Collects sound entries before the one-shot render.
#[derive(Debug, Clone, Default)]
pub struct SoundBankBuilder {
    entries: Vec<SoundEntry>,
}

impl SoundBankBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pre-filled with the built-in sounds.
    pub fn with_presets() -> Self {
        Self {
            entries: presets::all(),
        }
    }

    /// Register one entry. Names must be unique and mixes need a layer.
    pub fn register(&mut self, entry: SoundEntry) -> Result<(), BankError> {
        if self.entries.iter().any(|e| e.name == entry.name) {
            return Err(BankError::DuplicateSound { name: entry.name });
        }
        if entry.spec.layers().is_empty() {
            return Err(BankError::EmptyMix { name: entry.name });
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Chainable form of [`register`](Self::register).
    pub fn entry(mut self, entry: SoundEntry) -> Result<Self, BankError> {
        self.register(entry)?;
        Ok(self)
    }

    /// Chainable registration from a name and a spec.
    pub fn sound(
        self,
        name: impl Into<String>,
        spec: impl Into<SoundSpec>,
    ) -> Result<Self, BankError> {
        self.entry(SoundEntry::new(name, spec))
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Render every entry exactly once.
    pub fn render(self, config: &RenderConfig) -> SoundBank {
        info!(
            "rendering {} sounds at {} Hz ({})",
            self.entries.len(),
            config.sample_rate,
            if config.seed.is_some() { "seeded" } else { "unseeded" }
        );

        let mut sounds = HashMap::with_capacity(self.entries.len());
        let mut order = Vec::with_capacity(self.entries.len());

        for entry in self.entries {
            let sound = render_entry(entry, config);
            order.push(sound.name.clone());
            sounds.insert(sound.name.clone(), Arc::new(sound));
        }

        SoundBank {
            sounds,
            order,
            config: config.clone(),
        }
    }
}

fn render_entry(entry: SoundEntry, config: &RenderConfig) -> Sound {
    let mut ctx = config.render_ctx(&entry.name);
    let samples = render_spec(&entry.spec, &mut ctx);

    let sound = Sound {
        name: entry.name,
        samples,
        note_duration: entry.note_duration,
    };

    debug!(
        "rendered '{}': {} samples, peak {:.3}",
        sound.name,
        sound.len(),
        sound.peak()
    );
    if sound.samples.iter().any(|s| !s.is_finite()) {
        warn!("sound '{}' contains non-finite samples", sound.name);
    }

    sound
}

/// Rendered sounds keyed by name.
pub struct SoundBank {
    sounds: HashMap<String, Arc<Sound>>,
    order: Vec<String>,
    config: RenderConfig,
}

impl SoundBank {
    pub fn builder() -> SoundBankBuilder {
        SoundBankBuilder::new()
    }

    /// Render the built-in sounds.
    pub fn presets(config: &RenderConfig) -> Self {
        SoundBankBuilder::with_presets().render(config)
    }

    pub fn get(&self, name: &str) -> Result<&Sound, BankError> {
        self.sounds
            .get(name)
            .map(Arc::as_ref)
            .ok_or_else(|| BankError::UnknownSound {
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sounds.contains_key(name)
    }

    /// Playback binding for `name`, sharing the rendered buffer.
    pub fn binding(&self, name: &str) -> Result<PlaybackBinding, BankError> {
        let sound = self
            .sounds
            .get(name)
            .ok_or_else(|| BankError::UnknownSound {
                name: name.to_string(),
            })?;
        Ok(PlaybackBinding::new(Arc::clone(sound), &self.config))
    }

    /// Bindings for every sound, in registration order.
    pub fn bindings(&self) -> impl Iterator<Item = PlaybackBinding> + '_ {
        self.order
            .iter()
            .map(|name| PlaybackBinding::new(Arc::clone(&self.sounds[name]), &self.config))
    }

    /// Names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Sounds in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Sound> {
        self.order.iter().map(|name| self.sounds[name].as_ref())
    }

    pub fn len(&self) -> usize {
        self.sounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sounds.is_empty()
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }
}
