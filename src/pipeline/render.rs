use crate::dsp::{mix::mix_layers, oscillator::NoiseSource};

use super::chain::{Chain, SoundSpec};

/// Context passed to operators during rendering
///
/// Contains everything a render needs from the outside world:
/// - sample_rate: samples per second, used by the sweep and the filter
/// - noise: random source for the noise generator
pub struct RenderCtx {
    pub sample_rate: f32,
    pub noise: NoiseSource,
}

impl RenderCtx {
    pub fn new(sample_rate: f32, noise: NoiseSource) -> Self {
        Self { sample_rate, noise }
    }

    /// Context whose noise repeats for the same seed
    pub fn seeded(sample_rate: f32, seed: u64) -> Self {
        Self::new(sample_rate, NoiseSource::seeded(seed))
    }
}

/// Run the generator, then every transform in declared order.
pub fn render_chain(chain: &Chain, ctx: &mut RenderCtx) -> Vec<f32> {
    let mut buffer = chain.source().generate(ctx);
    for transform in chain.transforms() {
        transform.apply(&mut buffer, ctx);
    }
    buffer
}

/// Render a spec into one buffer, mixing layers if there is more than one.
pub fn render_spec(spec: &SoundSpec, ctx: &mut RenderCtx) -> Vec<f32> {
    match spec {
        SoundSpec::Chain(chain) => render_chain(chain, ctx),
        SoundSpec::Mix(layers) => {
            // Layers render one after another so seeded noise stays reproducible
            let rendered: Vec<Vec<f32>> = layers
                .iter()
                .map(|chain| render_chain(chain, ctx))
                .collect();
            mix_layers(rendered)
        }
    }
}
