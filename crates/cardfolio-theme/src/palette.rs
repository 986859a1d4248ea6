//! Palette configuration: the custom-property values behind the tokens.
//!
//! The token map (see [`crate::tokens`]) only references variables; the
//! palette supplies their values for each appearance. Swapping the active
//! appearance at root scope restyles the whole site without any component
//! change. Palettes load from TOML, with the stock light/dark appearances as
//! defaults.

use std::fmt;
use std::path::Path;

use cardfolio_core::error::Result;
use serde::{Deserialize, Serialize};

/// RGB channel triplet stored as bare channels (`251, 254, 251`), the form
/// the opacity-aware color tokens expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rgb(pub [u8; 3]);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.0[0], self.0[1], self.0[2])
    }
}

/// Channel values and shadows for one appearance.
///
/// An appearance is specified wholesale; partial overrides are not merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppearanceColors {
    /// Page background (`--color-fill`).
    pub fill: Rgb,
    /// Body text (`--color-text-base`).
    pub text_base: Rgb,
    /// Primary accent (`--color-accent`).
    pub accent: Rgb,
    /// Secondary accent (`--color-accent-secondary`).
    pub accent_secondary: Rgb,
    /// Card surface (`--color-card`).
    pub card: Rgb,
    /// Muted card surface (`--color-card-muted`).
    pub card_muted: Rgb,
    /// Borders and dividers (`--color-border`).
    pub border: Rgb,
    /// Success state (`--color-success`).
    pub success: Rgb,
    /// Error state (`--color-error`).
    pub error: Rgb,
    /// Warning state (`--color-warning`).
    pub warning: Rgb,

    /// Shadow values (`--shadow-sm/md/lg`).
    pub shadow_sm: String,
    pub shadow_md: String,
    pub shadow_lg: String,
}

impl AppearanceColors {
    /// Custom properties this appearance defines, as `(name, value)` pairs
    /// without the `--` prefix.
    #[must_use]
    pub fn custom_properties(&self) -> Vec<(&'static str, String)> {
        vec![
            ("color-fill", self.fill.to_string()),
            ("color-text-base", self.text_base.to_string()),
            ("color-accent", self.accent.to_string()),
            ("color-accent-secondary", self.accent_secondary.to_string()),
            ("color-card", self.card.to_string()),
            ("color-card-muted", self.card_muted.to_string()),
            ("color-border", self.border.to_string()),
            ("color-success", self.success.to_string()),
            ("color-error", self.error.to_string()),
            ("color-warning", self.warning.to_string()),
            ("shadow-sm", self.shadow_sm.clone()),
            ("shadow-md", self.shadow_md.clone()),
            ("shadow-lg", self.shadow_lg.clone()),
        ]
    }
}

/// Appearance-independent scale values (spacing, font weights).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleTokens {
    #[serde(default = "default_space_xs")]
    pub space_xs: String,
    #[serde(default = "default_space_sm")]
    pub space_sm: String,
    #[serde(default = "default_space_md")]
    pub space_md: String,
    #[serde(default = "default_space_lg")]
    pub space_lg: String,
    #[serde(default = "default_space_xl")]
    pub space_xl: String,
    #[serde(default = "default_space_2xl")]
    pub space_2xl: String,
    #[serde(default = "default_space_3xl")]
    pub space_3xl: String,
    #[serde(default = "default_weight_light")]
    pub font_weight_light: String,
    #[serde(default = "default_weight_regular")]
    pub font_weight_regular: String,
    #[serde(default = "default_weight_medium")]
    pub font_weight_medium: String,
}

impl ScaleTokens {
    /// Custom properties for the scale, as `(name, value)` pairs without the
    /// `--` prefix.
    #[must_use]
    pub fn custom_properties(&self) -> Vec<(&'static str, String)> {
        vec![
            ("space-xs", self.space_xs.clone()),
            ("space-sm", self.space_sm.clone()),
            ("space-md", self.space_md.clone()),
            ("space-lg", self.space_lg.clone()),
            ("space-xl", self.space_xl.clone()),
            ("space-2xl", self.space_2xl.clone()),
            ("space-3xl", self.space_3xl.clone()),
            ("font-weight-light", self.font_weight_light.clone()),
            ("font-weight-regular", self.font_weight_regular.clone()),
            ("font-weight-medium", self.font_weight_medium.clone()),
        ]
    }
}

impl Default for ScaleTokens {
    fn default() -> Self {
        Self {
            space_xs: default_space_xs(),
            space_sm: default_space_sm(),
            space_md: default_space_md(),
            space_lg: default_space_lg(),
            space_xl: default_space_xl(),
            space_2xl: default_space_2xl(),
            space_3xl: default_space_3xl(),
            font_weight_light: default_weight_light(),
            font_weight_regular: default_weight_regular(),
            font_weight_medium: default_weight_medium(),
        }
    }
}

/// The full palette: one appearance per theme plus the shared scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// Light appearance.
    #[serde(default = "default_light")]
    pub light: AppearanceColors,

    /// Dark appearance.
    #[serde(default = "default_dark")]
    pub dark: AppearanceColors,

    /// Shared scale values.
    #[serde(default)]
    pub scale: ScaleTokens,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            light: default_light(),
            dark: default_dark(),
            scale: ScaleTokens::default(),
        }
    }
}

impl Palette {
    /// Parse a palette from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Load a palette from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Emit the root-scope CSS defining every custom property the token map
    /// references: the light appearance on `:root`, the dark appearance under
    /// the `data-theme` selector.
    #[must_use]
    pub fn root_css(&self) -> String {
        let mut light_props = self.light.custom_properties();
        light_props.extend(self.scale.custom_properties());

        format!(
            ":root,\nhtml[data-theme=\"light\"] {{\n{}\n}}\nhtml[data-theme=\"dark\"] {{\n{}\n}}",
            property_block(&light_props),
            property_block(&self.dark.custom_properties()),
        )
    }
}

fn property_block(properties: &[(&'static str, String)]) -> String {
    properties
        .iter()
        .map(|(name, value)| format!("  --{name}: {value};"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn default_light() -> AppearanceColors {
    AppearanceColors {
        fill: Rgb([251, 254, 251]),
        text_base: Rgb([40, 39, 40]),
        accent: Rgb([0, 108, 172]),
        accent_secondary: Rgb([217, 4, 41]),
        card: Rgb([230, 230, 230]),
        card_muted: Rgb([205, 205, 205]),
        border: Rgb([236, 233, 233]),
        success: Rgb([34, 197, 94]),
        error: Rgb([239, 68, 68]),
        warning: Rgb([245, 158, 11]),
        shadow_sm: "0 1px 2px 0 rgba(0, 0, 0, 0.05)".to_string(),
        shadow_md: "0 4px 6px -1px rgba(0, 0, 0, 0.1)".to_string(),
        shadow_lg: "0 10px 15px -3px rgba(0, 0, 0, 0.1)".to_string(),
    }
}

fn default_dark() -> AppearanceColors {
    AppearanceColors {
        fill: Rgb([33, 39, 55]),
        text_base: Rgb([234, 237, 243]),
        accent: Rgb([255, 107, 1]),
        accent_secondary: Rgb([255, 167, 63]),
        card: Rgb([52, 63, 96]),
        card_muted: Rgb([138, 51, 2]),
        border: Rgb([171, 75, 8]),
        success: Rgb([34, 197, 94]),
        error: Rgb([248, 113, 113]),
        warning: Rgb([251, 191, 36]),
        shadow_sm: "0 1px 2px 0 rgba(0, 0, 0, 0.3)".to_string(),
        shadow_md: "0 4px 6px -1px rgba(0, 0, 0, 0.4)".to_string(),
        shadow_lg: "0 10px 15px -3px rgba(0, 0, 0, 0.4)".to_string(),
    }
}

fn default_space_xs() -> String {
    "0.25rem".to_string()
}
fn default_space_sm() -> String {
    "0.5rem".to_string()
}
fn default_space_md() -> String {
    "1rem".to_string()
}
fn default_space_lg() -> String {
    "1.5rem".to_string()
}
fn default_space_xl() -> String {
    "2rem".to_string()
}
fn default_space_2xl() -> String {
    "3rem".to_string()
}
fn default_space_3xl() -> String {
    "4rem".to_string()
}
fn default_weight_light() -> String {
    "300".to_string()
}
fn default_weight_regular() -> String {
    "400".to_string()
}
fn default_weight_medium() -> String {
    "500".to_string()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_empty_toml_yields_defaults() {
        let palette = Palette::from_toml_str("").expect("parse empty palette");
        assert_eq!(palette, Palette::default());
    }

    #[test]
    fn test_root_css_defines_both_appearances() {
        let css = Palette::default().root_css();

        assert!(css.contains(":root,\nhtml[data-theme=\"light\"] {"));
        assert!(css.contains("html[data-theme=\"dark\"] {"));
        assert!(css.contains("--color-fill: 251, 254, 251;"));
        assert!(css.contains("--color-accent: 255, 107, 1;"));
        assert!(css.contains("--space-md: 1rem;"));
        assert!(css.contains("--shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        write!(
            file,
            r#"
            [light]
            fill = [255, 255, 255]
            text_base = [0, 0, 0]
            accent = [0, 108, 172]
            accent_secondary = [217, 4, 41]
            card = [230, 230, 230]
            card_muted = [205, 205, 205]
            border = [236, 233, 233]
            success = [34, 197, 94]
            error = [239, 68, 68]
            warning = [245, 158, 11]
            shadow_sm = "none"
            shadow_md = "none"
            shadow_lg = "none"
            "#
        )
        .expect("write palette");

        let palette = Palette::load(file.path()).expect("load palette");
        assert_eq!(palette.light.fill, Rgb([255, 255, 255]));
        assert_eq!(palette.light.shadow_sm, "none");
        // Unspecified sections fall back to defaults.
        assert_eq!(palette.dark, Palette::default().dark);
        assert_eq!(palette.scale, ScaleTokens::default());
    }

    #[test]
    fn test_load_missing_file_errors() {
        let err = Palette::load("/nonexistent/palette.toml").unwrap_err();
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_invalid_toml_errors() {
        let err = Palette::from_toml_str("light = 3").unwrap_err();
        assert!(err.to_string().contains("TOML parse error"));
    }
}
