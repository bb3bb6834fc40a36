//! Declarative sound descriptions and the executor that renders them.
//!
//! A [`Chain`] is one generator followed by any number of in-place
//! transforms. A [`SoundSpec`] is either a single chain or a mix of chains
//! rendered independently and summed. Nothing in here holds global state:
//! everything a render needs travels in a [`RenderCtx`].
//!
//! ```ignore
//! use saavy_bank::pipeline::{Chain, SoundSpec};
//!
//! let hat = Chain::noise(2000)
//!     .decay(1.0)
//!     .resonant_filter(0.05, 0.94, 0.9, 0.5)
//!     .gain(0.75);
//!
//! let kick = SoundSpec::mix([
//!     Chain::freq_sweep(5000, 80.0, 20.0).clipped_distort().gain(0.5),
//!     Chain::freq_sweep(5000, 78.0, 30.0).sin_distort(2.0).gain(0.5),
//! ]);
//! ```

/// Chains and mixes of chains.
pub mod chain;
/// Operator invocations and their dispatch.
pub mod op;
/// Render context and executor entry points.
pub mod render;

pub use chain::{Chain, SoundSpec};
pub use op::{Generator, Transform};
pub use render::{render_chain, render_spec, RenderCtx};
