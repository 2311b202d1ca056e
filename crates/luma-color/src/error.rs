//! Error types for strict color parsing.

/// Errors produced by the strict hex parser.
///
/// The lossy parser has no error path; only the strict surface
/// (`hex::parse`, `FromStr`, serde) reports failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseColorError {
    #[error("empty color string")]
    Empty,

    #[error("invalid hex color length: {0} (expected 3, 4, 6 or 8 digits)")]
    InvalidLength(usize),

    #[error("invalid hex digit: {0:?}")]
    InvalidDigit(char),
}
