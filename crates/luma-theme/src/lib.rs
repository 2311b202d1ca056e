//! Theme system for LUMA -- light/dark modes, adaptive colors, TOML palettes.
//!
//! The host toolkit reports its appearance through [`ThemeProvider`]; render
//! code stores [`AdaptiveColor`] pairs and resolves them at draw time, so a
//! mode switch repaints correctly on the next frame. [`Palette`] names the
//! colors a widget set needs, ships built-in light/dark values, and accepts
//! TOML overrides without touching the filesystem.

pub mod adaptive;
pub mod mode;
pub mod palette;

pub use adaptive::AdaptiveColor;
pub use mode::{FnProvider, Mode, ThemeProvider};
pub use palette::{ModeOverrides, ModePalette, Palette, PaletteConfig, ThemeError};
