//! Blog entry card.
//!
//! Renders a content record as a list item: date line, heading, description.

use cardfolio_core::{slugify, ContentRecord};
use tracing::trace;

use crate::datetime::render_datetime;

/// Classes shared by the card headings across components.
pub(crate) const HEADING_CLASS: &str = "text-lg font-medium text-skin-accent hover:opacity-80";

/// Props for [`render_card`].
#[derive(Debug, Clone, PartialEq)]
pub struct CardProps {
    /// Link target for the whole card. Rendered without an `href` when absent.
    pub href: Option<String>,

    /// The content record to render.
    pub frontmatter: ContentRecord,

    /// Heading rank toggle: `true` renders `<h2>`, `false` renders `<h3>`.
    pub sec_heading: bool,
}

impl CardProps {
    /// Create props with the default heading rank (`<h2>`) and no link.
    #[must_use]
    pub fn new(frontmatter: ContentRecord) -> Self {
        Self {
            href: None,
            frontmatter,
            sec_heading: true,
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
}

/// Render a content record as a card list item.
///
/// Pure pass-through: fields render verbatim and a missing title degrades to
/// an empty heading rather than an error.
#[must_use]
pub fn render_card(props: &CardProps) -> String {
    trace!(title = %props.frontmatter.title, "rendering card");

    let fm = &props.frontmatter;
    let datetime_html = render_datetime(
        fm.pub_datetime,
        fm.mod_datetime,
        "text-sm text-skin-base/70",
    );
    let heading_html = heading_html(&fm.title, props.sec_heading);

    format!(
        r#"<li class="card group">
    <a{href} class="grid w-full gap-2">
        {datetime_html}
        {heading_html}
        <p class="mb-2 text-skin-base/80">{description}</p>
    </a>
</li>"#,
        href = href_attr(props.href.as_deref()),
        description = fm.description,
    )
}

/// Render the card heading at rank 2 or 3.
///
/// The heading carries a view-transition name derived from the title so the
/// listing entry and its detail page animate as one element.
pub(crate) fn heading_html(title: &str, sec_heading: bool) -> String {
    let tag = if sec_heading { "h2" } else { "h3" };
    format!(
        r#"<{tag} style="view-transition-name: {slug}" class="{HEADING_CLASS}">{title}</{tag}>"#,
        slug = slugify(title),
    )
}

/// Render an `href` attribute, or nothing when the target is absent.
pub(crate) fn href_attr(href: Option<&str>) -> String {
    href.map(|h| format!(r#" href="{h}""#)).unwrap_or_default()
}
