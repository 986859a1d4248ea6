//! Publish/modified date display.

use chrono::{DateTime, Utc};

/// Render the date line for a card.
///
/// When a modified date is present it wins over the publish date and the
/// display text is prefixed with `Updated:`; otherwise the publish date
/// renders bare. The machine-readable `datetime` attribute always carries the
/// displayed instant in RFC 3339 form.
#[must_use]
pub fn render_datetime(
    pub_datetime: DateTime<Utc>,
    mod_datetime: Option<DateTime<Utc>>,
    class: &str,
) -> String {
    let (shown, label) = match mod_datetime {
        Some(updated) => (updated, r#"<span class="sr-only-label">Updated:</span> "#),
        None => (pub_datetime, ""),
    };

    format!(
        r#"<time class="{class}" datetime="{iso}">{label}{display}</time>"#,
        iso = shown.to_rfc3339(),
        display = shown.format("%B %-d, %Y"),
    )
}
