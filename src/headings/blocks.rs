//! Block-element density near the top of the content
//!
//! Counts structural elements in a prefix of the content as a proxy for how
//! much vertical space that prefix takes up. The prefix ends at the first
//! whitespace at or after the configured threshold, so the cut never splits
//! a word or tag name.

use scraper::{Html, Selector};
use std::sync::LazyLock;

/// Tags counted as one block each
pub const BLOCK_ELEMENTS: [&str; 32] = [
    "h1", "h2", "h3", "h4", "h5", "h6", "li", "div", "pre", "hr", "blockquote", "address",
    "article", "aside", "canvas", "dd", "dl", "fieldset", "figcaption", "figure", "footer",
    "form", "header", "hgroup", "main", "nav", "noscript", "output", "section", "table",
    "tfoot", "video",
];

static BLOCK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(&BLOCK_ELEMENTS.join(", "))
        .expect("BUG: hardcoded block element selector is invalid")
});

/// Byte offset of the first whitespace at or after `threshold`.
///
/// `None` when the content is shorter than `threshold` or has no whitespace
/// past it.
#[must_use]
pub fn density_boundary(content: &str, threshold: u64) -> Option<usize> {
    let start = usize::try_from(threshold).ok()?;
    if start >= content.len() {
        return None;
    }

    content
        .char_indices()
        .skip_while(|(index, _)| *index < start)
        .find(|(_, c)| c.is_whitespace())
        .map(|(index, _)| index)
}

/// Number of block-level elements in the content up to the density boundary.
///
/// Zero when no boundary exists.
#[must_use]
pub fn count_block_elements(content: &str, threshold: u64) -> u64 {
    let Some(boundary) = density_boundary(content, threshold) else {
        log::debug!("No whitespace at or after offset {threshold}; block count is 0");
        return 0;
    };

    let prefix = Html::parse_fragment(&content[..boundary]);
    let count = prefix.select(&BLOCK_SELECTOR).count();

    log::trace!("{count} block elements in the first {boundary} bytes");
    u64::try_from(count).unwrap_or(u64::MAX)
}
