use thiserror::Error;

/// Errors raised while building or querying a [`crate::SoundBank`].
///
/// Numeric trouble inside a render (NaN, Inf) is never an error; it stays in
/// the buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankError {
    /// Lookup of a name that was never registered
    #[error("unknown sound '{name}'")]
    UnknownSound { name: String },
    /// A name registered twice
    #[error("sound '{name}' is already registered")]
    DuplicateSound { name: String },
    /// A mix with no layers to render
    #[error("sound '{name}' is a mix with no layers")]
    EmptyMix { name: String },
}
