//! Cardfolio Theme Library
//!
//! Design-token configuration for the styling build step. A single token set
//! maps semantic names (text/background/border colors, spacing, font sizes,
//! shadows, animations) to CSS custom-property references; swapping the
//! underlying property values at root scope switches the whole appearance
//! without touching the component layer.
//!
//! Everything here is evaluated at build time. The rendering components only
//! reference class names; they never query this crate at runtime.

pub mod css;
pub mod palette;
pub mod store;
pub mod token;
pub mod tokens;

pub use css::{stylesheet, utility_bindings, UtilityBinding};
pub use palette::{AppearanceColors, Palette, Rgb};
pub use store::{init_global, ThemeStore};
pub use token::{ColorToken, ColorValue, FontSize, TokenValue};
pub use tokens::{Keyframes, ThemeTokens, TokenCategory};
