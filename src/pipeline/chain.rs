#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::{envelope::EnvelopeShape, filter::ResonantParams};

use super::op::{Generator, Transform};

/// One generator followed by in-place transforms, applied in order.
///
/// The generator slot is not optional, so a chain always knows its length
/// before any transform runs.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    source: Generator,
    transforms: Vec<Transform>,
}

impl Chain {
    pub fn new(source: Generator) -> Self {
        Self {
            source,
            transforms: Vec::new(),
        }
    }

    /// Start a chain from `length` samples of white noise.
    pub fn noise(length: usize) -> Self {
        Self::new(Generator::Noise { length })
    }

    /// Start a chain from a sine sweep.
    pub fn freq_sweep(length: usize, start_hz: f32, end_hz: f32) -> Self {
        Self::new(Generator::FreqSweep {
            length,
            start_hz,
            end_hz,
        })
    }

    /// Append any transform.
    pub fn then(mut self, transform: Transform) -> Self {
        self.transforms.push(transform);
        self
    }

    pub fn gain(self, factor: f32) -> Self {
        self.then(Transform::Gain(factor))
    }

    pub fn clipped_distort(self) -> Self {
        self.then(Transform::ClippedDistort)
    }

    pub fn sin_distort(self, drive: f32) -> Self {
        self.then(Transform::SinDistort { drive })
    }

    /// Attack, decay and release are fractions of the buffer length.
    pub fn envelope(self, attack: f32, decay: f32, sustain: f32, release: f32) -> Self {
        self.then(Transform::Envelope(EnvelopeShape::new(
            attack, decay, sustain, release,
        )))
    }

    pub fn decay(self, factor: f32) -> Self {
        self.then(Transform::Decay(factor))
    }

    pub fn resonant_filter(
        self,
        freq: f32,
        pole_radius: f32,
        zero_radius: f32,
        output_scale: f32,
    ) -> Self {
        self.then(Transform::ResonantFilter(ResonantParams {
            freq,
            pole_radius,
            zero_radius,
            output_scale,
        }))
    }

    pub fn source(&self) -> &Generator {
        &self.source
    }

    pub fn transforms(&self) -> &[Transform] {
        &self.transforms
    }

    /// Length of the buffer this chain renders.
    pub fn len(&self) -> usize {
        self.source.length()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// How to render one named sound.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum SoundSpec {
    /// A single chain
    Chain(Chain),
    /// Independently rendered chains, summed over the shortest length
    Mix(Vec<Chain>),
}

impl SoundSpec {
    pub fn mix<I>(layers: I) -> Self
    where
        I: IntoIterator<Item = Chain>,
    {
        SoundSpec::Mix(layers.into_iter().collect())
    }

    /// The chains that get rendered, in order.
    pub fn layers(&self) -> &[Chain] {
        match self {
            SoundSpec::Chain(chain) => std::slice::from_ref(chain),
            SoundSpec::Mix(layers) => layers,
        }
    }

    /// Length of the rendered buffer.
    pub fn len(&self) -> usize {
        self.layers().iter().map(Chain::len).min().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Chain> for SoundSpec {
    fn from(chain: Chain) -> Self {
        SoundSpec::Chain(chain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fluent_chain_keeps_order() {
        let chain = Chain::noise(2000)
            .decay(1.0)
            .resonant_filter(0.05, 0.94, 0.9, 0.5)
            .gain(0.75);

        assert_eq!(chain.source(), &Generator::Noise { length: 2000 });
        assert!(matches!(
            chain.transforms(),
            [
                Transform::Decay(_),
                Transform::ResonantFilter(_),
                Transform::Gain(_)
            ]
        ));
    }

    #[test]
    fn test_chain_len_comes_from_generator() {
        let chain = Chain::freq_sweep(5000, 80.0, 20.0).clipped_distort().gain(0.5);
        assert_eq!(chain.len(), 5000);
    }

    #[test]
    fn test_mix_len_is_shortest_layer() {
        let spec = SoundSpec::mix([Chain::noise(5000), Chain::noise(3000)]);
        assert_eq!(spec.layers().len(), 2);
        assert_eq!(spec.len(), 3000);
    }

    #[test]
    fn test_single_chain_has_one_layer() {
        let spec: SoundSpec = Chain::noise(10).into();
        assert_eq!(spec.layers().len(), 1);
        assert_eq!(spec.len(), 10);
    }

    #[test]
    fn test_empty_mix_is_empty() {
        let spec = SoundSpec::mix(Vec::new());
        assert!(spec.is_empty());
    }
}
