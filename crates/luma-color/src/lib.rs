//! Color foundation for LUMA -- RGBA color type, hex parsing, blend helpers.
//!
//! Colors are plain 8-bit RGBA values that render backends can consume
//! directly. Two hex parsers are provided: a strict one for configuration
//! surfaces that should reject typos, and a lossy one for input that must
//! always yield a color. Colors serialize as hex strings.

pub mod color;
pub mod error;
pub mod hex;
pub mod ops;

pub use color::Color;
pub use error::ParseColorError;
