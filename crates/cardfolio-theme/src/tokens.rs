//! The static design-token map.
//!
//! One `ThemeTokens` value describes every semantic token the site's styling
//! uses. Token names are the class suffixes the styling toolchain generates
//! (`skin-accent` under the text category yields `text-skin-accent`), so the
//! map doubles as the source of truth for which utility classes exist.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::token::{ColorValue, FontSize, TokenValue};

/// Semantic token categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenCategory {
    /// Text color (`text-*`, `color`).
    Text,
    /// Background color (`bg-*`, `background-color`).
    Background,
    /// Gradient color stops (`from-*`).
    GradientStop,
    /// Outline color (`outline-*`).
    Outline,
    /// Border color (`border-*`).
    Border,
    /// Focus ring color (`ring-*`).
    Ring,
    /// SVG fill (`fill-*`).
    Fill,
    /// SVG stroke (`stroke-*`).
    Stroke,
}

impl TokenCategory {
    /// Utility class prefix for this category.
    #[must_use]
    pub fn class_prefix(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Background => "bg",
            Self::GradientStop => "from",
            Self::Outline => "outline",
            Self::Border => "border",
            Self::Ring => "ring",
            Self::Fill => "fill",
            Self::Stroke => "stroke",
        }
    }

    /// CSS property the category's utility classes set.
    #[must_use]
    pub fn css_property(self) -> &'static str {
        match self {
            Self::Text => "color",
            Self::Background => "background-color",
            Self::GradientStop => "--gradient-from",
            Self::Outline => "outline-color",
            Self::Border => "border-color",
            Self::Ring => "--ring-color",
            Self::Fill => "fill",
            Self::Stroke => "stroke",
        }
    }
}

/// Keyframes for a named animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyframes {
    /// `(offset, declarations)` pairs in playback order, e.g.
    /// `("0%", [("opacity", "0")])`.
    pub stops: Vec<(String, Vec<(String, String)>)>,
}

impl Keyframes {
    /// Emit the `@keyframes` block for this animation.
    #[must_use]
    pub fn css(&self, name: &str) -> String {
        let stops = self
            .stops
            .iter()
            .map(|(offset, declarations)| {
                let body = declarations
                    .iter()
                    .map(|(property, value)| format!("{property}: {value};"))
                    .collect::<Vec<_>>()
                    .join(" ");
                format!("  {offset} {{ {body} }}")
            })
            .collect::<Vec<_>>()
            .join("\n");
        format!("@keyframes {name} {{\n{stops}\n}}")
    }
}

/// The full design-token map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeTokens {
    /// Font stacks by family name.
    pub font_families: BTreeMap<String, Vec<String>>,

    /// Font-size scale.
    pub font_sizes: BTreeMap<String, FontSize>,

    /// Text colors.
    pub text: BTreeMap<String, ColorValue>,

    /// Background colors.
    pub background: BTreeMap<String, ColorValue>,

    /// Gradient color stops.
    pub gradient_stops: BTreeMap<String, ColorValue>,

    /// Outline colors.
    pub outline: BTreeMap<String, ColorValue>,

    /// Border colors.
    pub border: BTreeMap<String, ColorValue>,

    /// Focus ring colors.
    pub ring: BTreeMap<String, ColorValue>,

    /// SVG fill colors.
    pub fill: BTreeMap<String, ColorValue>,

    /// SVG stroke colors.
    pub stroke: BTreeMap<String, ColorValue>,

    /// Box-shadow tokens.
    pub shadows: BTreeMap<String, TokenValue>,

    /// Spacing scale.
    pub spacing: BTreeMap<String, TokenValue>,

    /// Animation shorthands by class suffix.
    pub animations: BTreeMap<String, String>,

    /// Keyframes by animation name.
    pub keyframes: BTreeMap<String, Keyframes>,
}

impl ThemeTokens {
    /// The color map for a category.
    #[must_use]
    pub fn colors(&self, category: TokenCategory) -> &BTreeMap<String, ColorValue> {
        match category {
            TokenCategory::Text => &self.text,
            TokenCategory::Background => &self.background,
            TokenCategory::GradientStop => &self.gradient_stops,
            TokenCategory::Outline => &self.outline,
            TokenCategory::Border => &self.border,
            TokenCategory::Ring => &self.ring,
            TokenCategory::Fill => &self.fill,
            TokenCategory::Stroke => &self.stroke,
        }
    }

    /// Resolve a `(category, token name)` pair to its CSS color value,
    /// optionally alpha-composited.
    #[must_use]
    pub fn resolve(
        &self,
        category: TokenCategory,
        name: &str,
        opacity: Option<f32>,
    ) -> Option<String> {
        self.colors(category)
            .get(name)
            .map(|value| value.resolve(opacity))
    }
}

impl Default for ThemeTokens {
    fn default() -> Self {
        let inter = || {
            vec![
                "Inter".to_string(),
                "system-ui".to_string(),
                "sans-serif".to_string(),
            ]
        };

        Self {
            font_families: BTreeMap::from([
                ("sans".to_string(), inter()),
                ("display".to_string(), inter()),
            ]),
            font_sizes: BTreeMap::from([
                (
                    "title".to_string(),
                    FontSize::with_tracking("4rem", "1.1", "-0.02em"),
                ),
                (
                    "heading".to_string(),
                    FontSize::with_tracking("2.25rem", "1.2", "-0.01em"),
                ),
                (
                    "subheading".to_string(),
                    FontSize::with_tracking("1.5rem", "1.4", "-0.01em"),
                ),
                ("lg".to_string(), FontSize::new("1.125rem", "1.5")),
                ("base".to_string(), FontSize::new("1rem", "1.6")),
                ("sm".to_string(), FontSize::new("0.875rem", "1.5")),
                ("xs".to_string(), FontSize::new("0.75rem", "1.4")),
            ]),
            text: BTreeMap::from([
                ("skin-base".to_string(), ColorValue::channel("color-text-base")),
                ("skin-accent".to_string(), ColorValue::channel("color-accent")),
                (
                    "skin-secondary".to_string(),
                    ColorValue::channel("color-accent-secondary"),
                ),
                ("skin-muted".to_string(), ColorValue::channel("color-text-base")),
                ("skin-inverted".to_string(), ColorValue::channel("color-fill")),
                ("skin-success".to_string(), ColorValue::channel("color-success")),
                ("skin-error".to_string(), ColorValue::channel("color-error")),
                ("skin-warning".to_string(), ColorValue::channel("color-warning")),
            ]),
            background: BTreeMap::from([
                ("skin-fill".to_string(), ColorValue::channel("color-fill")),
                ("skin-accent".to_string(), ColorValue::channel("color-accent")),
                (
                    "skin-accent-secondary".to_string(),
                    ColorValue::channel("color-accent-secondary"),
                ),
                (
                    "skin-inverted".to_string(),
                    ColorValue::channel("color-text-base"),
                ),
                ("skin-card".to_string(), ColorValue::channel("color-card")),
                (
                    "skin-card-muted".to_string(),
                    ColorValue::channel("color-card-muted"),
                ),
                ("skin-success".to_string(), ColorValue::channel("color-success")),
                ("skin-error".to_string(), ColorValue::channel("color-error")),
                ("skin-warning".to_string(), ColorValue::channel("color-warning")),
            ]),
            gradient_stops: BTreeMap::from([
                ("skin-accent".to_string(), ColorValue::channel("color-accent")),
                (
                    "skin-secondary".to_string(),
                    ColorValue::channel("color-accent-secondary"),
                ),
            ]),
            outline: BTreeMap::from([(
                "skin-fill".to_string(),
                ColorValue::channel("color-accent"),
            )]),
            border: BTreeMap::from([
                ("skin-line".to_string(), ColorValue::channel("color-border")),
                ("skin-fill".to_string(), ColorValue::channel("color-text-base")),
                ("skin-accent".to_string(), ColorValue::channel("color-accent")),
                (
                    "skin-secondary".to_string(),
                    ColorValue::channel("color-accent-secondary"),
                ),
            ]),
            ring: BTreeMap::from([
                ("skin-base".to_string(), ColorValue::channel("color-text-base")),
                ("skin-accent".to_string(), ColorValue::channel("color-accent")),
                (
                    "skin-secondary".to_string(),
                    ColorValue::channel("color-accent-secondary"),
                ),
                ("skin-fill".to_string(), ColorValue::channel("color-fill")),
            ]),
            fill: BTreeMap::from([
                ("skin-base".to_string(), ColorValue::channel("color-text-base")),
                ("skin-accent".to_string(), ColorValue::channel("color-accent")),
                (
                    "skin-secondary".to_string(),
                    ColorValue::channel("color-accent-secondary"),
                ),
                (
                    "transparent".to_string(),
                    ColorValue::Literal("transparent".to_string()),
                ),
            ]),
            stroke: BTreeMap::from([
                ("skin-base".to_string(), ColorValue::channel("color-text-base")),
                ("skin-accent".to_string(), ColorValue::channel("color-accent")),
                (
                    "skin-secondary".to_string(),
                    ColorValue::channel("color-accent-secondary"),
                ),
            ]),
            shadows: BTreeMap::from([
                ("sm".to_string(), TokenValue::Var("shadow-sm".to_string())),
                ("md".to_string(), TokenValue::Var("shadow-md".to_string())),
                ("lg".to_string(), TokenValue::Var("shadow-lg".to_string())),
            ]),
            spacing: BTreeMap::from([
                ("xs".to_string(), TokenValue::Var("space-xs".to_string())),
                ("sm".to_string(), TokenValue::Var("space-sm".to_string())),
                ("md".to_string(), TokenValue::Var("space-md".to_string())),
                ("lg".to_string(), TokenValue::Var("space-lg".to_string())),
                ("xl".to_string(), TokenValue::Var("space-xl".to_string())),
                ("2xl".to_string(), TokenValue::Var("space-2xl".to_string())),
                ("3xl".to_string(), TokenValue::Var("space-3xl".to_string())),
            ]),
            animations: BTreeMap::from([
                (
                    "fade-in".to_string(),
                    "fadeIn 0.5s ease-in-out".to_string(),
                ),
                (
                    "slide-up".to_string(),
                    "slideUp 0.5s ease-out".to_string(),
                ),
                (
                    "slide-down".to_string(),
                    "slideDown 0.5s ease-out".to_string(),
                ),
            ]),
            keyframes: BTreeMap::from([
                (
                    "fadeIn".to_string(),
                    Keyframes {
                        stops: vec![
                            ("0%".to_string(), vec![("opacity".to_string(), "0".to_string())]),
                            ("100%".to_string(), vec![("opacity".to_string(), "1".to_string())]),
                        ],
                    },
                ),
                (
                    "slideUp".to_string(),
                    Keyframes {
                        stops: vec![
                            (
                                "0%".to_string(),
                                vec![
                                    ("transform".to_string(), "translateY(20px)".to_string()),
                                    ("opacity".to_string(), "0".to_string()),
                                ],
                            ),
                            (
                                "100%".to_string(),
                                vec![
                                    ("transform".to_string(), "translateY(0)".to_string()),
                                    ("opacity".to_string(), "1".to_string()),
                                ],
                            ),
                        ],
                    },
                ),
                (
                    "slideDown".to_string(),
                    Keyframes {
                        stops: vec![
                            (
                                "0%".to_string(),
                                vec![
                                    ("transform".to_string(), "translateY(-20px)".to_string()),
                                    ("opacity".to_string(), "0".to_string()),
                                ],
                            ),
                            (
                                "100%".to_string(),
                                vec![
                                    ("transform".to_string(), "translateY(0)".to_string()),
                                    ("opacity".to_string(), "1".to_string()),
                                ],
                            ),
                        ],
                    },
                ),
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_resolution() {
        let tokens = ThemeTokens::default();

        assert_eq!(
            tokens.resolve(TokenCategory::Text, "skin-accent", None),
            Some("rgb(var(--color-accent))".to_string())
        );
        assert_eq!(
            tokens.resolve(TokenCategory::Text, "skin-accent", Some(0.5)),
            Some("rgba(var(--color-accent), 0.5)".to_string())
        );
    }

    #[test]
    fn test_unknown_token_resolves_to_none() {
        let tokens = ThemeTokens::default();
        assert_eq!(tokens.resolve(TokenCategory::Text, "skin-nonsense", None), None);
    }

    #[test]
    fn test_fill_transparent_is_literal() {
        let tokens = ThemeTokens::default();
        assert_eq!(
            tokens.resolve(TokenCategory::Fill, "transparent", Some(0.3)),
            Some("transparent".to_string())
        );
    }

    #[test]
    fn test_muted_aliases_base_variable() {
        let tokens = ThemeTokens::default();

        // `skin-muted` is a semantic alias over the same channel variable as
        // `skin-base`; opacity differentiates them in the styling rules.
        assert_eq!(
            tokens.resolve(TokenCategory::Text, "skin-muted", None),
            tokens.resolve(TokenCategory::Text, "skin-base", None),
        );
    }

    #[test]
    fn test_keyframes_css() {
        let tokens = ThemeTokens::default();
        let css = tokens.keyframes["fadeIn"].css("fadeIn");

        assert!(css.starts_with("@keyframes fadeIn {"));
        assert!(css.contains("0% { opacity: 0; }"));
        assert!(css.contains("100% { opacity: 1; }"));
    }

    #[test]
    fn test_every_animation_has_keyframes() {
        let tokens = ThemeTokens::default();
        for shorthand in tokens.animations.values() {
            let name = shorthand.split_whitespace().next().unwrap();
            assert!(
                tokens.keyframes.contains_key(name),
                "animation references undefined keyframes: {name}"
            );
        }
    }
}
