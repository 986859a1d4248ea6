//! Slugification for stable view-transition identifiers.

/// Generate a URL-safe slug from a string.
///
/// Lowercases the input, maps non-alphanumeric characters to hyphens, and
/// collapses runs so the result carries no leading, trailing, or doubled
/// hyphens. Deterministic: equal titles always produce equal slugs, which is
/// what makes the slug usable as a view-transition key across pages.
#[must_use]
pub fn slugify(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
