//! Theme-adaptive colors.

use serde::{Deserialize, Serialize};

use luma_color::Color;

use crate::mode::{Mode, ThemeProvider};

/// A color pair that resolves against the current display mode.
///
/// The pair is the stored value; the effective [`Color`] is chosen when the
/// host renders, so a mode switch repaints correctly without rebuilding any
/// theme state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdaptiveColor {
    /// Color used in [`Mode::Light`].
    pub light: Color,
    /// Color used in [`Mode::Dark`].
    pub dark: Color,
}

impl AdaptiveColor {
    /// Pair a light-mode color with a dark-mode color.
    pub const fn new(light: Color, dark: Color) -> Self {
        Self { light, dark }
    }

    /// Use the same color in both modes.
    pub const fn uniform(color: Color) -> Self {
        Self {
            light: color,
            dark: color,
        }
    }

    /// The color for a specific mode.
    pub const fn for_mode(self, mode: Mode) -> Color {
        match mode {
            Mode::Light => self.light,
            Mode::Dark => self.dark,
        }
    }

    /// Resolve against the provider's current mode.
    pub fn resolve<P>(self, provider: &P) -> Color
    where
        P: ThemeProvider + ?Sized,
    {
        self.for_mode(provider.mode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::mode::FnProvider;

    const LIGHT_TEXT: Color = Color::rgb(20, 20, 30);
    const DARK_TEXT: Color = Color::rgb(230, 230, 240);

    #[test]
    fn resolves_per_provider_mode() {
        let text = AdaptiveColor::new(LIGHT_TEXT, DARK_TEXT);
        assert_eq!(text.resolve(&Mode::Light), LIGHT_TEXT);
        assert_eq!(text.resolve(&Mode::Dark), DARK_TEXT);
    }

    #[test]
    fn for_mode_selects_field() {
        let c = AdaptiveColor::new(Color::WHITE, Color::BLACK);
        assert_eq!(c.for_mode(Mode::Light), Color::WHITE);
        assert_eq!(c.for_mode(Mode::Dark), Color::BLACK);
    }

    #[test]
    fn uniform_ignores_mode() {
        let c = AdaptiveColor::uniform(Color::rgb(80, 160, 255));
        assert_eq!(c.for_mode(Mode::Light), c.for_mode(Mode::Dark));
    }

    #[test]
    fn resolve_follows_live_provider() {
        let c = AdaptiveColor::new(LIGHT_TEXT, DARK_TEXT);
        let current = std::cell::Cell::new(Mode::Light);
        let provider = FnProvider::new(|| current.get());
        assert_eq!(c.resolve(&provider), LIGHT_TEXT);
        current.set(Mode::Dark);
        assert_eq!(c.resolve(&provider), DARK_TEXT);
    }

    #[test]
    fn resolve_works_through_dyn_provider() {
        let c = AdaptiveColor::new(Color::WHITE, Color::BLACK);
        let provider: &dyn ThemeProvider = &Mode::Dark;
        assert_eq!(c.resolve(provider), Color::BLACK);
    }

    #[test]
    fn serde_round_trip() {
        let c = AdaptiveColor::new(Color::rgb(245, 245, 250), Color::rgb(18, 18, 24));
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "{\"light\":\"#f5f5fa\",\"dark\":\"#121218\"}");
        let back: AdaptiveColor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
