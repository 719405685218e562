//! Slug derivation for content URLs.
//!
//! Matches the transform the admin forms apply client-side, so slugs
//! generated server-side (seed data) and browser-side agree.

/// Derive a URL slug: lowercase, runs of non-alphanumeric characters
/// collapsed to a single hyphen, leading and trailing hyphens trimmed.
pub fn slugify(input: &str) -> String {
    let mut slug = String::new();
    let mut last_was_dash = false;

    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_was_dash = false;
        } else if !slug.is_empty() && !last_was_dash {
            slug.push('-');
            last_was_dash = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    slug
}
