//! Helpful utilities for working with text.

use htmlentity::entity::{self, ICodedDataTrait};

/// Converts HTML entities into their single-character equivalents.
///
/// Reddit HTML-encodes post titles: "&" arrives as "&amp;", "<" as
/// "&lt;", and so on. This function turns those entities back into the
/// characters a human expects to read, and trims leading and trailing
/// whitespace while it is at it.
///
/// # Examples
///
/// ```
/// use whatshot::text::convert_html_entities;
/// let raw = "Ask r/rust: &lt;T&gt; or &amp;T?";
/// assert_eq!(convert_html_entities(raw), "Ask r/rust: <T> or &T?");
/// ```
///
/// ```
/// use whatshot::text::convert_html_entities;
/// let raw = "  Announcing Rust 1.88.0  ";
/// assert_eq!(convert_html_entities(raw), "Announcing Rust 1.88.0");
/// ```
///
/// ```
/// use whatshot::text::convert_html_entities;
/// let raw = "No entities here";
/// assert_eq!(convert_html_entities(raw), raw);
/// ```
pub fn convert_html_entities(text: &str) -> String {
    let text = text.trim();
    entity::decode(text.as_bytes())
        .to_string()
        .unwrap_or(text.to_string())
}
