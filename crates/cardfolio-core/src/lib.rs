//! Cardfolio Core Library
//!
//! Record types, slugification, and error handling shared by the cardfolio
//! rendering and theming crates.

pub mod error;
pub mod record;
pub mod slug;

pub use error::{CoreError, Result};
pub use record::{ContentRecord, ImageAsset, OgImage, ProjectRecord};
pub use slug::slugify;
