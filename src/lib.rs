pub mod bank; // Named sound registry, rendered once at startup
pub mod config;
pub mod dsp;
pub mod error;
pub mod pipeline; // Declarative operator chains and mixes
pub mod playback; // Read-only bindings for the external instrument engine

pub use bank::{Sound, SoundBank};
pub use config::RenderConfig;
pub use error::BankError;
pub use pipeline::{Chain, Generator, SoundSpec, Transform};
pub use playback::{PlaybackBinding, SoundProfile};

/// Sample rate used when none is configured explicitly.
pub const DEFAULT_SAMPLE_RATE: f32 = 44_100.0;
