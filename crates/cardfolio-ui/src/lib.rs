//! Cardfolio UI Components
//!
//! Card fragments for blog and portfolio listings. Every renderer is a pure
//! function from props to an HTML list-item string; a page-composition layer
//! iterates its records and embeds the fragments in a parent list.
//!
//! # Components
//!
//! ## Card
//! - [`render_card`] - Blog entry card (date, heading, description)
//!
//! ## ProjectCard
//! - [`render_project_card`] - Portfolio project card (image, tags, heading,
//!   description, link rows), with [`Variant`] selecting the layout
//!
//! ## Datetime
//! - [`render_datetime`] - Publish/modified date display
//!
//! # Example
//!
//! ```
//! use cardfolio_core::ProjectRecord;
//! use cardfolio_ui::{render_project_card, ProjectCardProps};
//!
//! let record = ProjectRecord {
//!     title: "Hello".to_string(),
//!     description: "d".to_string(),
//!     ..Default::default()
//! };
//! let html = render_project_card(&ProjectCardProps::new(record));
//! assert!(html.contains("Hello"));
//! ```

pub mod card;
pub mod datetime;
pub mod project_card;

pub use card::{render_card, CardProps};
pub use datetime::render_datetime;
pub use project_card::{render_project_card, ProjectCardProps, Variant};
