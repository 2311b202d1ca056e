//! Palettes -- named adaptive colors with built-in defaults and TOML overrides.
//!
//! A palette names the colors a widget set actually draws with. Applications
//! ship the built-in light/dark pair and optionally layer user configuration
//! on top: each mode's base colors can be overridden with hex strings, and
//! the interaction-state colors are derived from the resolved bases.

use serde::Deserialize;

use luma_color::Color;
use luma_color::hex;
use luma_color::ops::{darken, lighten, with_alpha};

use crate::adaptive::AdaptiveColor;
use crate::mode::{Mode, ThemeProvider};

/// Fully-resolved colors for one display mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModePalette {
    /// Main background color.
    pub background: Color,
    /// Surface/panel background color.
    pub surface: Color,
    /// Primary text color.
    pub text: Color,
    /// Dimmed/secondary text color.
    pub dim_text: Color,
    /// Primary accent color.
    pub accent: Color,
    /// Accent color on hover.
    pub accent_hover: Color,
    /// Accent color when pressed.
    pub accent_pressed: Color,
    /// Translucent accent for subtle fills.
    pub accent_subtle: Color,
    /// Border/separator color.
    pub border: Color,
    /// Success indicator color.
    pub success: Color,
    /// Warning indicator color.
    pub warning: Color,
    /// Error indicator color.
    pub error: Color,
}

impl ModePalette {
    /// Built-in light palette.
    pub fn light() -> Self {
        Self {
            background: Color::rgb(245, 245, 250),
            surface: Color::rgb(255, 255, 255),
            text: Color::rgb(20, 20, 30),
            dim_text: Color::rgb(100, 100, 120),
            accent: Color::rgb(50, 120, 220),
            accent_hover: Color::rgb(70, 140, 240),
            accent_pressed: Color::rgb(40, 100, 190),
            accent_subtle: Color::rgba(50, 120, 220, 20),
            border: Color::rgb(210, 210, 220),
            success: Color::rgb(50, 170, 90),
            warning: Color::rgb(220, 150, 30),
            error: Color::rgb(210, 60, 60),
        }
    }

    /// Built-in dark palette.
    pub fn dark() -> Self {
        Self {
            background: Color::rgb(18, 18, 24),
            surface: Color::rgb(30, 30, 40),
            text: Color::rgb(230, 230, 240),
            dim_text: Color::rgb(160, 160, 180),
            accent: Color::rgb(80, 160, 255),
            accent_hover: Color::rgb(110, 180, 255),
            accent_pressed: Color::rgb(60, 130, 220),
            accent_subtle: Color::rgba(80, 160, 255, 30),
            border: Color::rgb(60, 60, 80),
            success: Color::rgb(80, 200, 120),
            warning: Color::rgb(255, 180, 50),
            error: Color::rgb(240, 80, 80),
        }
    }

    /// Apply configuration overrides on top of this palette.
    ///
    /// Base colors fall back to `self`. The interaction-state colors are
    /// derived from the resolved bases: `surface` lightens the background,
    /// `accent_hover` lightens the accent, `accent_pressed` darkens it, and
    /// `accent_subtle` is the accent at low alpha. Explicit `surface` and
    /// `accent_hover` overrides win over derivation. An override that fails
    /// to parse is dropped with a warning.
    pub fn with_overrides(&self, overrides: &ModeOverrides) -> Self {
        // Helper: parse an optional hex color override.
        let ov = |field: &str, value: Option<&String>, fallback: Color| -> Color {
            match value {
                Some(s) => match hex::parse(s) {
                    Ok(color) => color,
                    Err(e) => {
                        log::warn!(
                            "Palette color '{field}' = '{s}' is invalid ({e}) -- keeping default"
                        );
                        fallback
                    }
                },
                None => fallback,
            }
        };

        let background = ov("background", overrides.background.as_ref(), self.background);
        let text = ov("text", overrides.text.as_ref(), self.text);
        let dim_text = ov("dim_text", overrides.dim_text.as_ref(), self.dim_text);
        let accent = ov("accent", overrides.accent.as_ref(), self.accent);
        let border = ov("border", overrides.border.as_ref(), self.border);
        let success = ov("success", overrides.success.as_ref(), self.success);
        let warning = ov("warning", overrides.warning.as_ref(), self.warning);
        let error = ov("error", overrides.error.as_ref(), self.error);

        let surface = ov(
            "surface",
            overrides.surface.as_ref(),
            lighten(background, 0.05),
        );
        let accent_hover = ov(
            "accent_hover",
            overrides.accent_hover.as_ref(),
            lighten(accent, 0.15),
        );

        Self {
            background,
            surface,
            text,
            dim_text,
            accent,
            accent_hover,
            accent_pressed: darken(accent, 0.85),
            accent_subtle: with_alpha(accent, 30),
            border,
            success,
            warning,
            error,
        }
    }
}

/// Optional per-mode color overrides, as hex strings.
///
/// Missing fields keep the built-in value. `surface` and `accent_hover`
/// default to values derived from `background` and `accent`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModeOverrides {
    pub background: Option<String>,
    pub surface: Option<String>,
    pub text: Option<String>,
    pub dim_text: Option<String>,
    pub accent: Option<String>,
    pub accent_hover: Option<String>,
    pub border: Option<String>,
    pub success: Option<String>,
    pub warning: Option<String>,
    pub error: Option<String>,
}

/// Palette configuration with per-mode override tables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaletteConfig {
    /// Overrides applied to the built-in light palette.
    #[serde(default)]
    pub light: ModeOverrides,
    /// Overrides applied to the built-in dark palette.
    #[serde(default)]
    pub dark: ModeOverrides,
}

/// The full adaptive palette: every named color as a light/dark pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub background: AdaptiveColor,
    pub surface: AdaptiveColor,
    pub text: AdaptiveColor,
    pub dim_text: AdaptiveColor,
    pub accent: AdaptiveColor,
    pub accent_hover: AdaptiveColor,
    pub accent_pressed: AdaptiveColor,
    pub accent_subtle: AdaptiveColor,
    pub border: AdaptiveColor,
    pub success: AdaptiveColor,
    pub warning: AdaptiveColor,
    pub error: AdaptiveColor,
}

impl Palette {
    /// The built-in light/dark pairing.
    pub fn builtin() -> Self {
        Self::from_modes(ModePalette::light(), ModePalette::dark())
    }

    /// Pair two resolved palettes into an adaptive one.
    pub fn from_modes(light: ModePalette, dark: ModePalette) -> Self {
        Self {
            background: AdaptiveColor::new(light.background, dark.background),
            surface: AdaptiveColor::new(light.surface, dark.surface),
            text: AdaptiveColor::new(light.text, dark.text),
            dim_text: AdaptiveColor::new(light.dim_text, dark.dim_text),
            accent: AdaptiveColor::new(light.accent, dark.accent),
            accent_hover: AdaptiveColor::new(light.accent_hover, dark.accent_hover),
            accent_pressed: AdaptiveColor::new(light.accent_pressed, dark.accent_pressed),
            accent_subtle: AdaptiveColor::new(light.accent_subtle, dark.accent_subtle),
            border: AdaptiveColor::new(light.border, dark.border),
            success: AdaptiveColor::new(light.success, dark.success),
            warning: AdaptiveColor::new(light.warning, dark.warning),
            error: AdaptiveColor::new(light.error, dark.error),
        }
    }

    /// Apply configuration on top of the built-in palettes.
    pub fn from_config(config: &PaletteConfig) -> Self {
        Self::from_modes(
            ModePalette::light().with_overrides(&config.light),
            ModePalette::dark().with_overrides(&config.dark),
        )
    }

    /// Parse a TOML configuration string and apply it.
    ///
    /// No file I/O happens here; callers own how configuration reaches them.
    pub fn from_toml(toml: &str) -> Result<Self, ThemeError> {
        let config: PaletteConfig = toml::from_str(toml)?;
        Ok(Self::from_config(&config))
    }

    /// The resolved palette for a specific mode.
    pub fn for_mode(&self, mode: Mode) -> ModePalette {
        ModePalette {
            background: self.background.for_mode(mode),
            surface: self.surface.for_mode(mode),
            text: self.text.for_mode(mode),
            dim_text: self.dim_text.for_mode(mode),
            accent: self.accent.for_mode(mode),
            accent_hover: self.accent_hover.for_mode(mode),
            accent_pressed: self.accent_pressed.for_mode(mode),
            accent_subtle: self.accent_subtle.for_mode(mode),
            border: self.border.for_mode(mode),
            success: self.success.for_mode(mode),
            warning: self.warning.for_mode(mode),
            error: self.error.for_mode(mode),
        }
    }

    /// Resolve every color against the provider's current mode.
    pub fn resolve<P>(&self, provider: &P) -> ModePalette
    where
        P: ThemeProvider + ?Sized,
    {
        self.for_mode(provider.mode())
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Errors produced when loading a palette.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- built-ins --

    #[test]
    fn builtin_light_is_light() {
        let p = ModePalette::light();
        assert!(p.background.r > 200);
        assert!(p.text.r < 50);
    }

    #[test]
    fn builtin_dark_is_dark() {
        let p = ModePalette::dark();
        assert!(p.background.r < 50);
        assert!(p.text.r > 200);
    }

    #[test]
    fn builtin_palette_pairs_modes() {
        let p = Palette::builtin();
        assert_eq!(p.background.light, ModePalette::light().background);
        assert_eq!(p.background.dark, ModePalette::dark().background);
    }

    #[test]
    fn for_mode_unzips() {
        let p = Palette::builtin();
        assert_eq!(p.for_mode(Mode::Light), ModePalette::light());
        assert_eq!(p.for_mode(Mode::Dark), ModePalette::dark());
    }

    #[test]
    fn resolve_follows_provider() {
        let p = Palette::builtin();
        assert_eq!(p.resolve(&Mode::Dark), ModePalette::dark());
        assert_eq!(p.resolve(&Mode::Light), ModePalette::light());
    }

    #[test]
    fn default_is_builtin() {
        assert_eq!(Palette::default(), Palette::builtin());
    }

    // -- configuration --

    #[test]
    fn from_toml_overrides_base_colors() {
        let toml = r##"
[light]
background = "#FFFFFF"

[dark]
background = "#000000"
accent = "#FF0000"
"##;
        let p = Palette::from_toml(toml).unwrap();
        assert_eq!(p.background.light, Color::rgb(255, 255, 255));
        assert_eq!(p.background.dark, Color::rgb(0, 0, 0));
        assert_eq!(p.accent.dark, Color::rgb(255, 0, 0));
        // Non-overridden bases keep the built-in values.
        assert_eq!(p.text.dark, ModePalette::dark().text);
        assert_eq!(p.accent.light, ModePalette::light().accent);
    }

    #[test]
    fn from_toml_derives_accent_states() {
        let toml = r##"
[dark]
accent = "#FF0000"
"##;
        let p = Palette::from_toml(toml).unwrap();
        let accent = Color::rgb(255, 0, 0);
        assert_eq!(p.accent_hover.dark, lighten(accent, 0.15));
        assert_eq!(p.accent_pressed.dark, darken(accent, 0.85));
        assert_eq!(p.accent_subtle.dark, accent.with_alpha(30));
    }

    #[test]
    fn from_toml_surface_derived_from_background() {
        let toml = r##"
[dark]
background = "#000000"
"##;
        let p = Palette::from_toml(toml).unwrap();
        assert_eq!(p.surface.dark, lighten(Color::BLACK, 0.05));
    }

    #[test]
    fn from_toml_surface_override_wins() {
        let toml = r##"
[dark]
background = "#000000"
surface = "#111111"
"##;
        let p = Palette::from_toml(toml).unwrap();
        assert_eq!(p.surface.dark, Color::rgb(0x11, 0x11, 0x11));
    }

    #[test]
    fn shorthand_overrides_accepted() {
        let toml = r##"
[light]
accent = "#f0c"
"##;
        let p = Palette::from_toml(toml).unwrap();
        assert_eq!(p.accent.light, Color::rgb(0xff, 0x00, 0xcc));
    }

    #[test]
    fn invalid_override_keeps_builtin() {
        let toml = r##"
[dark]
background = "not-a-color"
"##;
        let p = Palette::from_toml(toml).unwrap();
        assert_eq!(p.background.dark, ModePalette::dark().background);
    }

    #[test]
    fn empty_toml_keeps_builtin_bases() {
        let p = Palette::from_toml("").unwrap();
        let builtin = Palette::builtin();
        assert_eq!(p.background, builtin.background);
        assert_eq!(p.text, builtin.text);
        assert_eq!(p.border, builtin.border);
        // Interaction states are derived, not the hand-picked stock values.
        assert_eq!(
            p.surface.dark,
            lighten(ModePalette::dark().background, 0.05)
        );
    }

    #[test]
    fn bad_toml_is_an_error() {
        let err = Palette::from_toml("this is [[[not valid toml").unwrap_err();
        assert!(format!("{err}").contains("TOML parse error"));
    }
}
