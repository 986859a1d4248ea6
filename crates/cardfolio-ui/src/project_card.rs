//! Portfolio project card.
//!
//! One rendering contract serves the three layout variants the site uses;
//! variants change wrapper classes and the tag/heading order, never the data
//! handling.

use cardfolio_core::{OgImage, ProjectRecord};
use tracing::trace;

use crate::card::{heading_html, href_attr};

/// Layout variant for [`render_project_card`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Image-forward layout, tags above the heading.
    #[default]
    Media,
    /// Heading-first layout with emphasized link rows.
    LinkRow,
    /// Dense list layout for sidebar/archive listings.
    Compact,
}

impl Variant {
    /// Classes on the anchor wrapping the card body.
    fn anchor_class(self) -> &'static str {
        match self {
            Self::Media => "grid w-full gap-2",
            Self::LinkRow => "flex w-full flex-col gap-2",
            Self::Compact => "flex w-full flex-col gap-1",
        }
    }

    /// Classes on the image element.
    fn image_class(self) -> &'static str {
        match self {
            Self::Media => {
                "h-48 w-full object-cover transition-transform duration-200 group-hover:scale-105"
            }
            Self::LinkRow => "h-32 w-full object-cover",
            Self::Compact => "h-24 w-full object-cover",
        }
    }

    /// Whether the tag list renders above the heading.
    fn tags_before_heading(self) -> bool {
        matches!(self, Self::Media)
    }
}

/// Props for [`render_project_card`].
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCardProps {
    /// Link target for the whole card. Rendered without an `href` when absent.
    pub href: Option<String>,

    /// The project record to render.
    pub frontmatter: ProjectRecord,

    /// Heading rank toggle: `true` renders `<h2>`, `false` renders `<h3>`.
    pub sec_heading: bool,

    /// Layout variant.
    pub variant: Variant,
}

impl ProjectCardProps {
    /// Create props with the default heading rank, no link, and the
    /// image-forward layout.
    #[must_use]
    pub fn new(frontmatter: ProjectRecord) -> Self {
        Self {
            href: None,
            frontmatter,
            sec_heading: true,
            variant: Variant::default(),
        }
    }

    /// Set the card link target.
    #[must_use]
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Set the heading rank toggle.
    #[must_use]
    pub fn with_sec_heading(mut self, sec_heading: bool) -> Self {
        self.sec_heading = sec_heading;
        self
    }

    /// Set the layout variant.
    #[must_use]
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }
}

/// Render a project record as a card list item.
///
/// Optional fields render nothing when absent: no image block, no link rows,
/// no reserved space. The tag list container is always present, empty or not.
#[must_use]
pub fn render_project_card(props: &ProjectCardProps) -> String {
    trace!(title = %props.frontmatter.title, variant = ?props.variant, "rendering project card");

    let fm = &props.frontmatter;

    let image_html = fm
        .og_image
        .as_ref()
        .map(|image| image_block_html(image, &fm.title, props.variant))
        .unwrap_or_default();
    let tags_html = tag_list_html(&fm.tags);
    let heading_html = heading_html(&fm.title, props.sec_heading);
    let description_html = format!(r#"<p class="text-skin-base/80">{}</p>"#, fm.description);

    let mut links_html = String::new();
    if let Some(url) = &fm.url {
        links_html.push_str(&link_row_html("Live", url));
    }
    if let Some(repository) = &fm.repository {
        if !links_html.is_empty() {
            links_html.push('\n');
        }
        links_html.push_str(&link_row_html("Repository", repository));
    }

    let body = if props.variant.tags_before_heading() {
        [image_html, tags_html, heading_html, description_html, links_html]
    } else {
        [image_html, heading_html, tags_html, description_html, links_html]
    };
    let body = body
        .iter()
        .filter(|part| !part.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join("\n        ");

    format!(
        r#"<li class="card group">
    <a{href} class="{anchor_class}">
        {body}
    </a>
</li>"#,
        href = href_attr(props.href.as_deref()),
        anchor_class = props.variant.anchor_class(),
    )
}

/// Render the preview image block.
fn image_block_html(image: &OgImage, title: &str, variant: Variant) -> String {
    format!(
        r#"<div class="mb-4 overflow-hidden rounded-sm border border-skin-line">
            <img src="{src}" alt="{title}" class="{class}" />
        </div>"#,
        src = image.src(),
        class = variant.image_class(),
    )
}

/// Render the tag list; the container is present even when empty.
fn tag_list_html(tags: &[String]) -> String {
    let items = tags
        .iter()
        .map(|tag| format!("<li>#<span>{tag}</span></li>"))
        .collect::<Vec<_>>()
        .join("");
    format!(r#"<ul class="flex flex-wrap gap-4 text-sm text-skin-base/70">{items}</ul>"#)
}

/// Render a labeled link row.
///
/// The visible link text is the literal URL; the `title` attribute repeats it
/// so truncated rows still expose the full target on hover.
fn link_row_html(label: &str, url: &str) -> String {
    format!(
        r#"<div class="flex gap-2 text-sm"><span class="text-skin-base/70">{label}:</span><a href="{url}" title="{url}" class="text-skin-accent hover:opacity-80">{url}</a></div>"#
    )
}

#[cfg(test)]
mod tests {
    use cardfolio_core::ImageAsset;

    use super::*;

    fn test_record() -> ProjectRecord {
        ProjectRecord {
            title: "Terminal Portfolio".to_string(),
            description: "A terminal-styled portfolio".to_string(),
            tags: vec!["rust".to_string(), "wasm".to_string()],
            url: Some("https://example.com".to_string()),
            repository: Some("https://github.com/example/terminal".to_string()),
            og_image: Some(OgImage::Url("/images/terminal.png".to_string())),
        }
    }

    #[test]
    fn test_render_project_card() {
        let html = render_project_card(&ProjectCardProps::new(test_record()).with_href("/projects/terminal"));

        assert!(html.contains(r#"<li class="card group">"#));
        assert!(html.contains(r#"<a href="/projects/terminal""#));
        assert!(html.contains(r#"<img src="/images/terminal.png" alt="Terminal Portfolio""#));
        assert!(html.contains("Terminal Portfolio"));
        assert!(html.contains("A terminal-styled portfolio"));
    }

    #[test]
    fn test_no_image_when_absent() {
        let mut record = test_record();
        record.og_image = None;
        let html = render_project_card(&ProjectCardProps::new(record));

        assert!(!html.contains("<img"));
        assert!(!html.contains("overflow-hidden"));
    }

    #[test]
    fn test_image_src_resolution() {
        let mut record = test_record();
        record.og_image = Some(OgImage::Url("/plain.png".to_string()));
        let html = render_project_card(&ProjectCardProps::new(record));
        assert!(html.contains(r#"src="/plain.png""#));

        let mut record = test_record();
        record.og_image = Some(OgImage::Asset(ImageAsset {
            src: "/assets/hashed.png".to_string(),
            width: Some(1200),
            height: Some(630),
        }));
        let html = render_project_card(&ProjectCardProps::new(record));
        assert!(html.contains(r#"src="/assets/hashed.png""#));
    }

    #[test]
    fn test_tag_count_matches_record() {
        let html = render_project_card(&ProjectCardProps::new(test_record()));
        assert_eq!(html.matches("<li>#<span>").count(), 2);
        assert!(html.contains("<li>#<span>rust</span></li>"));
        assert!(html.contains("<li>#<span>wasm</span></li>"));
    }

    #[test]
    fn test_empty_tags_keep_container() {
        let mut record = test_record();
        record.tags.clear();
        let html = render_project_card(&ProjectCardProps::new(record));

        assert!(html.contains(r#"<ul class="flex flex-wrap gap-4 text-sm text-skin-base/70"></ul>"#));
    }

    #[test]
    fn test_link_rows_follow_presence() {
        let html = render_project_card(&ProjectCardProps::new(test_record()));
        assert_eq!(html.matches("Live:").count(), 1);
        assert_eq!(html.matches("Repository:").count(), 1);
        assert!(html.contains(r#"<a href="https://example.com" title="https://example.com""#));
        assert!(html.contains(">https://example.com</a>"));

        let mut record = test_record();
        record.url = None;
        record.repository = None;
        let html = render_project_card(&ProjectCardProps::new(record));
        assert!(!html.contains("Live:"));
        assert!(!html.contains("Repository:"));
    }

    #[test]
    fn test_heading_rank_follows_sec_heading() {
        let html = render_project_card(&ProjectCardProps::new(test_record()));
        assert!(html.contains("<h2"));

        let html = render_project_card(&ProjectCardProps::new(test_record()).with_sec_heading(false));
        assert!(html.contains("<h3"));
        assert!(!html.contains("<h2"));
    }

    #[test]
    fn test_variant_changes_layout_not_data() {
        let media = render_project_card(&ProjectCardProps::new(test_record()));
        let link_row = render_project_card(
            &ProjectCardProps::new(test_record()).with_variant(Variant::LinkRow),
        );

        // Media: tags precede the heading; LinkRow: heading precedes tags.
        assert!(media.find("<ul").unwrap() < media.find("<h2").unwrap());
        assert!(link_row.find("<h2").unwrap() < link_row.find("<ul").unwrap());

        // Same logical content in both.
        for html in [&media, &link_row] {
            assert!(html.contains("Terminal Portfolio"));
            assert!(html.contains("<li>#<span>rust</span></li>"));
            assert!(html.contains("Live:"));
        }
    }

    #[test]
    fn test_minimal_record_scenario() {
        let record = ProjectRecord {
            title: "Hello".to_string(),
            description: "d".to_string(),
            tags: vec![],
            url: None,
            repository: None,
            og_image: None,
        };
        let html = render_project_card(&ProjectCardProps::new(record));

        assert!(!html.contains("<img"));
        assert!(html.contains("></ul>"));
        assert!(html.contains(">Hello</h2>"));
        assert!(html.contains(">d</p>"));
        assert!(!html.contains("Live:"));
        assert!(!html.contains("Repository:"));
    }
}
