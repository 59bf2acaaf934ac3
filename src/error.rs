//! Errors surfaced by field, codec construction, and decode operations.

use thiserror::Error;

/// Errors raised while building a field or codec descriptor.
///
/// These are programming errors (spec.md §7 "Misconfiguration"): they must never occur
/// for a valid, documented configuration, and implementations are expected to fail at
/// construction time rather than let a bad descriptor reach `encode`/`decode`.
#[derive(Error, Copy, Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// `ecc` must be strictly less than `q - 1` so that a codeword fits in the field.
    #[error("ecc ({ecc}) must be less than q-1 ({max})")]
    EccTooLarge { ecc: usize, max: usize },
    /// The configured primitive element did not generate the full multiplicative group.
    #[error("element {primitive:#x} is not primitive for this field (generated only {order} of {expected} elements)")]
    NotPrimitive { primitive: u32, order: usize, expected: usize },
}

/// Errors raised by `decode`/`decode_with_erasures` (spec.md §7).
#[derive(Error, Copy, Clone, Debug, Eq, PartialEq)]
pub enum DecodeError {
    /// More symbol errors were present than the code's error-correction bound allows,
    /// or the root finder failed to find as many roots as the locator's degree.
    #[error("uncorrectable: detected error count does not match the locator degree")]
    Uncorrectable,
    /// More erasure positions were supplied than the codec can correct.
    #[error("too many erasures: {supplied} supplied, at most {max} correctable")]
    TooManyErasures { supplied: usize, max: usize },
    /// A caller-supplied erasure position fell outside the codeword.
    #[error("erasure position {pos} is out of bounds for codeword length {n}")]
    InvalidErasurePosition { pos: usize, n: usize },
    /// A computed or supplied error/erasure position fell outside the codeword after
    /// accounting for the split between data and parity.
    #[error("error position {pos} out of bounds for codeword length {n}")]
    PositionOutOfBounds { pos: usize, n: usize },
}

/// Result alias for codec construction.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result alias for decode operations.
pub type DecodeResult<T> = Result<T, DecodeError>;
