//! Record types consumed by the card renderers.
//!
//! Records are plain data supplied wholesale by an external content system,
//! constructed once per render pass and never mutated. The renderers consume
//! only the fields listed here and ignore anything else the source carries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Frontmatter for a blog entry shown in a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Entry title (presence enforced upstream, not here).
    pub title: String,

    /// Publication date.
    pub pub_datetime: DateTime<Utc>,

    /// Last modified date, when the entry has been updated since publishing.
    #[serde(default)]
    pub mod_datetime: Option<DateTime<Utc>>,

    /// Summary line shown under the heading.
    #[serde(default)]
    pub description: String,
}

/// Frontmatter for a portfolio project shown in a listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Project title.
    pub title: String,

    /// Summary line shown under the heading.
    #[serde(default)]
    pub description: String,

    /// Tags in display order.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Live deployment URL.
    #[serde(default)]
    pub url: Option<String>,

    /// Source repository URL.
    #[serde(default)]
    pub repository: Option<String>,

    /// Preview image, either a raw URL or a processed asset.
    #[serde(default)]
    pub og_image: Option<OgImage>,
}

/// Preview image reference.
///
/// Content sources supply either a plain URL string or an opaque handle to a
/// processed asset; both resolve to a single image URL via [`OgImage::src`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OgImage {
    /// Plain image URL.
    Url(String),
    /// Processed asset with intrinsic dimensions.
    Asset(ImageAsset),
}

impl OgImage {
    /// Resolve the image URL regardless of the source form.
    #[must_use]
    pub fn src(&self) -> &str {
        match self {
            Self::Url(url) => url,
            Self::Asset(asset) => &asset.src,
        }
    }
}

/// Handle to an image processed by an external asset pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageAsset {
    /// Resolved asset URL.
    pub src: String,

    /// Intrinsic width in pixels, when known.
    #[serde(default)]
    pub width: Option<u32>,

    /// Intrinsic height in pixels, when known.
    #[serde(default)]
    pub height: Option<u32>,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_og_image_src_from_url() {
        let image = OgImage::Url("/images/demo.png".to_string());
        assert_eq!(image.src(), "/images/demo.png");
    }

    #[test]
    fn test_og_image_src_from_asset() {
        let image = OgImage::Asset(ImageAsset {
            src: "/assets/demo.BqX3.png".to_string(),
            width: Some(1200),
            height: Some(630),
        });
        assert_eq!(image.src(), "/assets/demo.BqX3.png");
    }

    #[test]
    fn test_project_record_from_toml() {
        let record: ProjectRecord = toml::from_str(
            r#"
            title = "Terminal Portfolio"
            description = "A terminal-styled portfolio"
            tags = ["rust", "wasm"]
            url = "https://example.com"
            og_image = "/images/terminal.png"
            "#,
        )
        .expect("parse project record");

        assert_eq!(record.title, "Terminal Portfolio");
        assert_eq!(record.tags, vec!["rust", "wasm"]);
        assert_eq!(record.url.as_deref(), Some("https://example.com"));
        assert_eq!(record.repository, None);
        assert_eq!(
            record.og_image,
            Some(OgImage::Url("/images/terminal.png".to_string()))
        );
    }

    #[test]
    fn test_project_record_asset_image_from_toml() {
        let record: ProjectRecord = toml::from_str(
            r#"
            title = "Asset"

            [og_image]
            src = "/assets/a.png"
            width = 1200
            height = 630
            "#,
        )
        .expect("parse project record");

        assert_eq!(record.og_image.as_ref().map(OgImage::src), Some("/assets/a.png"));
    }

    #[test]
    fn test_content_record_optional_mod_datetime() {
        let record = ContentRecord {
            title: "Hello".to_string(),
            pub_datetime: Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap(),
            mod_datetime: None,
            description: "d".to_string(),
        };
        assert!(record.mod_datetime.is_none());
    }
}
