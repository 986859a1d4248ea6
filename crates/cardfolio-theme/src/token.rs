//! Token value types and opacity-aware color resolution.

use serde::{Deserialize, Serialize};

/// A color token backed by a CSS custom property carrying raw RGB channels.
///
/// The property holds bare channel values (`251, 254, 251`) rather than a
/// finished color, so one variable serves both the opaque and the
/// alpha-composited form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorToken {
    variable: String,
}

impl ColorToken {
    /// Create a token referencing the given custom property (without the
    /// `--` prefix).
    pub fn new(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
        }
    }

    /// The underlying custom-property name, without the `--` prefix.
    #[must_use]
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Resolve to a CSS color value.
    ///
    /// Without an opacity the result is the opaque `rgb(var(--name))` form;
    /// with one it is `rgba(var(--name), α)` referencing the same variable.
    #[must_use]
    pub fn resolve(&self, opacity: Option<f32>) -> String {
        match opacity {
            Some(alpha) => format!("rgba(var(--{}), {alpha})", self.variable),
            None => format!("rgb(var(--{}))", self.variable),
        }
    }
}

/// A color slot in the token map: either a channel-variable token or a
/// literal CSS color that ignores opacity (e.g. `transparent`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    /// Custom-property indirection with opacity support.
    Channel(ColorToken),
    /// Literal CSS value.
    Literal(String),
}

impl ColorValue {
    /// Shorthand for a channel-variable slot.
    pub fn channel(variable: impl Into<String>) -> Self {
        Self::Channel(ColorToken::new(variable))
    }

    /// Resolve to a CSS color value; literals ignore the opacity parameter.
    #[must_use]
    pub fn resolve(&self, opacity: Option<f32>) -> String {
        match self {
            Self::Channel(token) => token.resolve(opacity),
            Self::Literal(value) => value.clone(),
        }
    }
}

/// A non-color token value: either a custom-property indirection or a
/// literal CSS value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    /// Custom-property indirection (`var(--name)`).
    Var(String),
    /// Literal CSS value.
    Literal(String),
}

impl TokenValue {
    /// Emit the CSS value for this token.
    #[must_use]
    pub fn css(&self) -> String {
        match self {
            Self::Var(name) => format!("var(--{name})"),
            Self::Literal(value) => value.clone(),
        }
    }
}

/// A font-size token with its paired metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSize {
    /// Font size value.
    pub size: String,

    /// Line height paired with the size.
    pub line_height: String,

    /// Letter spacing, when the scale step tightens tracking.
    #[serde(default)]
    pub letter_spacing: Option<String>,
}

impl FontSize {
    /// Create a font-size token without letter spacing.
    pub fn new(size: impl Into<String>, line_height: impl Into<String>) -> Self {
        Self {
            size: size.into(),
            line_height: line_height.into(),
            letter_spacing: None,
        }
    }

    /// Create a font-size token with letter spacing.
    pub fn with_tracking(
        size: impl Into<String>,
        line_height: impl Into<String>,
        letter_spacing: impl Into<String>,
    ) -> Self {
        Self {
            size: size.into(),
            line_height: line_height.into(),
            letter_spacing: Some(letter_spacing.into()),
        }
    }

    /// The CSS declarations for this scale step, in emission order.
    #[must_use]
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        let mut declarations = vec![
            ("font-size", self.size.clone()),
            ("line-height", self.line_height.clone()),
        ];
        if let Some(letter_spacing) = &self.letter_spacing {
            declarations.push(("letter-spacing", letter_spacing.clone()));
        }
        declarations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opaque_resolution() {
        let token = ColorToken::new("color-accent");
        assert_eq!(token.resolve(None), "rgb(var(--color-accent))");
    }

    #[test]
    fn test_alpha_resolution_references_same_variable() {
        let token = ColorToken::new("color-accent");
        assert_eq!(token.resolve(Some(0.5)), "rgba(var(--color-accent), 0.5)");

        // Both forms point at the identical underlying variable.
        let opaque = token.resolve(None);
        let alpha = token.resolve(Some(0.5));
        assert!(opaque.contains("--color-accent"));
        assert!(alpha.contains("--color-accent"));
    }

    #[test]
    fn test_literal_color_ignores_opacity() {
        let value = ColorValue::Literal("transparent".to_string());
        assert_eq!(value.resolve(None), "transparent");
        assert_eq!(value.resolve(Some(0.5)), "transparent");
    }

    #[test]
    fn test_font_size_declarations() {
        let plain = FontSize::new("1rem", "1.6");
        assert_eq!(
            plain.declarations(),
            vec![
                ("font-size", "1rem".to_string()),
                ("line-height", "1.6".to_string()),
            ]
        );

        let tracked = FontSize::with_tracking("4rem", "1.1", "-0.02em");
        assert_eq!(
            tracked.declarations().last(),
            Some(&("letter-spacing", "-0.02em".to_string()))
        );
    }

    #[test]
    fn test_token_value_css() {
        assert_eq!(TokenValue::Var("space-md".to_string()).css(), "var(--space-md)");
        assert_eq!(
            TokenValue::Literal("0.875rem".to_string()).css(),
            "0.875rem"
        );
    }
}
