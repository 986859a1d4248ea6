//! Utility-class bindings and stylesheet emission.
//!
//! Flattens the token map into the class-to-declaration bindings the
//! build-time styling toolchain consumes. Emission order is deterministic
//! (categories in declaration order, tokens sorted by name) so generated
//! stylesheets diff cleanly between builds.

use tracing::debug;

use crate::tokens::{ThemeTokens, TokenCategory};

/// Every color category, in emission order.
const COLOR_CATEGORIES: [TokenCategory; 8] = [
    TokenCategory::Text,
    TokenCategory::Background,
    TokenCategory::GradientStop,
    TokenCategory::Outline,
    TokenCategory::Border,
    TokenCategory::Ring,
    TokenCategory::Fill,
    TokenCategory::Stroke,
];

/// A single utility-class binding: one class setting one declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtilityBinding {
    /// Utility class name, e.g. `text-skin-accent`.
    pub class: String,

    /// CSS property the class sets.
    pub property: String,

    /// Resolved CSS value (opaque form for color tokens).
    pub value: String,
}

impl UtilityBinding {
    /// Emit the CSS rule for this binding.
    #[must_use]
    pub fn rule(&self) -> String {
        format!(".{} {{ {}: {}; }}", self.class, self.property, self.value)
    }
}

/// Flatten the token map into utility-class bindings.
///
/// Color tokens bind their opaque form; styling rules that need an
/// alpha-composited value resolve the token again with an opacity.
#[must_use]
pub fn utility_bindings(tokens: &ThemeTokens) -> Vec<UtilityBinding> {
    let mut bindings = Vec::new();

    for category in COLOR_CATEGORIES {
        for (name, value) in tokens.colors(category) {
            bindings.push(UtilityBinding {
                class: format!("{}-{}", category.class_prefix(), name),
                property: category.css_property().to_string(),
                value: value.resolve(None),
            });
        }
    }

    for (name, value) in &tokens.shadows {
        bindings.push(UtilityBinding {
            class: format!("shadow-{name}"),
            property: "box-shadow".to_string(),
            value: value.css(),
        });
    }

    // Spacing tokens feed padding, margin, and gap utilities alike.
    for (name, value) in &tokens.spacing {
        for (prefix, property) in [("p", "padding"), ("m", "margin"), ("gap", "gap")] {
            bindings.push(UtilityBinding {
                class: format!("{prefix}-{name}"),
                property: property.to_string(),
                value: value.css(),
            });
        }
    }

    for (name, stack) in &tokens.font_families {
        bindings.push(UtilityBinding {
            class: format!("font-{name}"),
            property: "font-family".to_string(),
            value: stack.join(", "),
        });
    }

    debug!(count = bindings.len(), "flattened utility bindings");
    bindings
}

/// Emit the full utility stylesheet: one rule per binding, animation
/// classes, and their keyframes blocks.
#[must_use]
pub fn stylesheet(tokens: &ThemeTokens) -> String {
    let mut rules = utility_bindings(tokens)
        .iter()
        .map(UtilityBinding::rule)
        .collect::<Vec<_>>();

    // Font-size steps set paired metrics, so they emit as multi-declaration
    // rules rather than single-property bindings.
    for (name, font_size) in &tokens.font_sizes {
        let body = font_size
            .declarations()
            .iter()
            .map(|(property, value)| format!("{property}: {value};"))
            .collect::<Vec<_>>()
            .join(" ");
        rules.push(format!(".text-{name} {{ {body} }}"));
    }

    for (name, shorthand) in &tokens.animations {
        rules.push(format!(".animate-{name} {{ animation: {shorthand}; }}"));
    }

    for (name, keyframes) in &tokens.keyframes {
        rules.push(keyframes.css(name));
    }

    rules.join("\n")
}
