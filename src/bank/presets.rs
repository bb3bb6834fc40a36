//! Built-in drum sounds.
//!
//! Each function returns a ready-to-register [`SoundEntry`]. Use them as
//! they are, or as starting points for your own chains.
//!
//! | name        | source          | length | note  |
//! | ----------- | --------------- | ------ | ----- |
//! | `bassDrum`  | two sweeps, mix | 5000   | 0.1 s |
//! | `hatClosed` | noise           | 2000   | 0.05 s|
//! | `hatOpen`   | noise           | 10000  | 0.1 s |

use crate::pipeline::{Chain, SoundSpec};

use super::SoundEntry;

pub const BASS_DRUM: &str = "bassDrum";
pub const HAT_CLOSED: &str = "hatClosed";
pub const HAT_OPEN: &str = "hatOpen";

/// Bass drum.
///
/// Two slightly detuned downward sweeps layered together. The first layer
/// is pushed through the clipped shaper for the "knock", the second is
/// wrapped harder by the sine shaper for body. Both are halved so the sum
/// stays near full scale.
pub fn bass_drum() -> SoundEntry {
    let knock = Chain::freq_sweep(5000, 80.0, 20.0)
        .clipped_distort()
        .envelope(0.1, 0.4, 0.2, 0.2)
        .sin_distort(1.0)
        .gain(0.5);

    let body = Chain::freq_sweep(5000, 78.0, 30.0)
        .envelope(0.05, 0.4, 0.2, 0.2)
        .sin_distort(2.0)
        .gain(0.5);

    SoundEntry::new(BASS_DRUM, SoundSpec::mix([knock, body])).note_duration(0.1)
}

/// Closed hi-hat: a short burst of decaying, filtered noise.
pub fn hat_closed() -> SoundEntry {
    let chain = Chain::noise(2000)
        .decay(1.0)
        .resonant_filter(0.05, 0.94, 0.9, 0.5)
        .gain(0.75);

    SoundEntry::new(HAT_CLOSED, chain).note_duration(0.05)
}

/// Open hi-hat.
///
/// Longer noise through three resonant stages in series, each starting from
/// silence, with the decay applied last so the ring-out stays audible.
pub fn hat_open() -> SoundEntry {
    let chain = Chain::noise(10000)
        .resonant_filter(0.7, 0.8, 0.5, 0.75)
        .resonant_filter(0.7, 0.8, 0.5, 0.8)
        .resonant_filter(0.8, 0.8, 0.5, 0.8)
        .decay(0.8);

    SoundEntry::new(HAT_OPEN, chain).note_duration(0.1)
}

/// Every built-in sound.
pub fn all() -> Vec<SoundEntry> {
    vec![bass_drum(), hat_closed(), hat_open()]
}
