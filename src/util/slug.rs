use slug::slugify;

/// Fallback slug for titles that reduce to nothing after slugification.
const EMPTY_SLUG: &str = "untitled";

/// Derives a URL-safe slug from an article title.
///
/// Titles consisting entirely of characters that slugification strips
/// (punctuation, symbols) fall back to a fixed placeholder so the slug
/// column never receives an empty string.
///
/// # Arguments
/// - `title` - The article title
///
/// # Returns
/// - `String` - Lowercased, hyphen-separated slug
pub fn generate_slug(title: &str) -> String {
    let slug = slugify(title);
    if slug.is_empty() {
        EMPTY_SLUG.to_string()
    } else {
        slug
    }
}
