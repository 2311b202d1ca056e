//! Display modes and the provider seam.
//!
//! The host toolkit owns the current appearance. [`ThemeProvider`] is the
//! only coupling point: render code queries it when a color is resolved, so
//! an appearance change takes effect on the next draw without touching any
//! stored color values.

use serde::{Deserialize, Serialize};

/// A display mode the host environment can be in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Light appearance. Hosts that report no appearance land here.
    #[default]
    Light,
    /// Dark appearance.
    Dark,
}

impl Mode {
    /// Check whether this is the light mode.
    pub const fn is_light(self) -> bool {
        matches!(self, Self::Light)
    }

    /// Check whether this is the dark mode.
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// Source of the current display mode.
pub trait ThemeProvider {
    /// The mode in effect right now.
    fn mode(&self) -> Mode;
}

/// A fixed mode is its own provider. Useful in tests and for hosts that
/// cache the appearance once per frame.
impl ThemeProvider for Mode {
    fn mode(&self) -> Mode {
        *self
    }
}

/// Provider backed by a closure, for hosts that expose the appearance
/// through a query function.
pub struct FnProvider<F>(F);

impl<F> FnProvider<F>
where
    F: Fn() -> Mode,
{
    /// Wrap a mode-returning closure as a provider.
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> ThemeProvider for FnProvider<F>
where
    F: Fn() -> Mode,
{
    fn mode(&self) -> Mode {
        (self.0)()
    }
}
