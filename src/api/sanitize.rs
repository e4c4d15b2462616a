//! Strict HTML sanitization of free-text input.
//!
//! No markup survives: `<script>` and `<style>` elements are removed with
//! their content, comments are removed, every other tag is stripped and the
//! remaining text is entity-escaped. Surrounding whitespace is trimmed, so a
//! value made only of markup sanitizes to the empty string.

use std::sync::LazyLock;

use regex::Regex;

static COMMENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!--.*?(?:-->|\z)").expect("Invalid comment regex pattern")
});

static CONTENT_ELEMENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)<script\b[^>]*>.*?(?:</script\s*>|\z)|<style\b[^>]*>.*?(?:</style\s*>|\z)",
    )
    .expect("Invalid content element regex pattern")
});

static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)</?[A-Za-z!?][^>]*>").expect("Invalid tag regex pattern")
});

/// Removes all markup from `input` and returns the escaped, trimmed text.
///
/// # Examples
///
/// ```rust
/// use task_api::api::sanitize::strict;
///
/// assert_eq!(strict("<b>Buy</b> milk"), "Buy milk");
/// assert_eq!(strict("  <script>alert(1)</script>  "), "");
/// assert_eq!(strict("Tom & Jerry"), "Tom &amp; Jerry");
/// ```
#[must_use]
pub fn strict(input: &str) -> String {
    let without_comments = COMMENT_PATTERN.replace_all(input, "");
    let without_content = CONTENT_ELEMENT_PATTERN.replace_all(&without_comments, "");
    let text = TAG_PATTERN.replace_all(&without_content, "");
    let decoded = html_escape::decode_html_entities(&text);

    html_escape::encode_text(decoded.trim()).into_owned()
}
