//! Level-2 heading discovery.
//!
//! The content is parsed once as a best-effort HTML fragment to enumerate
//! `<h2>` elements and their text. Offsets are then located in the ORIGINAL
//! content string, never in a re-serialized tree, because serialization can
//! reorder attributes and change whitespace.
//!
//! Raw `<h2 …>…</h2>` elements are walked in document order, with comments,
//! scripts and styles masked out since the parser never reports headings
//! inside them. Each parsed heading binds to the next raw element whose inner
//! text, with tags stripped and entities decoded, equals the parsed text.
//! Offsets come from that element's own tags, so they are strictly ascending
//! and a match never crosses an element boundary.
//!
//! For the first heading only, when no raw element matches and the content
//! opens with a bare `<h2>`, the fixed offset of that tag's `>` is used.
//!
//! Headings that are empty or cannot be located are skipped.

use html_escape::{decode_html_entities, encode_text};
use regex::Regex;
use scraper::{Html, Selector};
use std::borrow::Cow;
use std::sync::LazyLock;

use super::slug::AnchorSlugs;
use super::types::Heading;

static H2_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h2").expect("BUG: hardcoded CSS selector 'h2' is invalid"));

static H2_ELEMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<h2(?:\s[^>]*)?>(.*?)</h2\s*>").expect("H2_ELEMENT_RE: hardcoded regex is valid")
});

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("TAG_RE: hardcoded regex is valid"));

/// Spans the parser treats as opaque text. An unterminated comment runs to
/// the end of the content.
static OPAQUE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<!--.*?(?:-->|\z)|<script\b.*?(?:</script\s*>|\z)|<style\b.*?(?:</style\s*>|\z)")
        .expect("OPAQUE_RE: hardcoded regex is valid")
});

const CLOSE_TAG: &str = "</h2>";
const SHORT_OPEN_TAG: &str = "<h2>";

/// Offset of the `>` in a bare `<h2>` at the very start of the content
const SHORT_OPEN_TAG_END: usize = SHORT_OPEN_TAG.len() - 1;

/// Offsets of one located heading in the original content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Location {
    text_begin: usize,
    text_end: usize,
    close_tag_offset: usize,
}

/// One raw `<h2>` element found in the content
#[derive(Debug, Clone, PartialEq, Eq)]
struct RawHeading {
    location: Location,

    /// Inner text with tags stripped, entities decoded and trimmed
    normalized: String,
}

/// Find every locatable level-2 heading in `content`, in document order
#[must_use]
pub fn scan_headings(content: &str) -> Vec<Heading> {
    if content.trim().is_empty() {
        return Vec::new();
    }

    let document = Html::parse_fragment(content);
    let raw = raw_headings(content);
    let mut slugs = AnchorSlugs::new();
    let mut headings = Vec::new();
    let mut next_raw = 0;

    for (position, element) in document.select(&H2_SELECTOR).enumerate() {
        let raw_text: String = element.text().collect();
        let plain = raw_text.trim();

        if plain.is_empty() {
            log::debug!("Skipping empty h2 #{position}");
            continue;
        }

        let text = encode_text(plain).into_owned();

        let location = match raw[next_raw..].iter().position(|r| r.normalized == plain) {
            Some(skipped) => {
                let matched = next_raw + skipped;
                next_raw = matched + 1;
                raw[matched].location
            }
            None if position == 0 => {
                let Some(location) = locate_short_form(content) else {
                    log::debug!("Could not locate h2 #{position} ({text:?}) in content");
                    continue;
                };
                location
            }
            None => {
                log::debug!("Could not locate h2 #{position} ({text:?}) in content");
                continue;
            }
        };

        let anchor_slug = slugs.assign(plain, headings.len() + 1);

        log::trace!(
            "h2 '{}' -> #{} at {}..{}",
            text,
            anchor_slug,
            location.text_begin,
            location.close_tag_offset
        );

        headings.push(Heading {
            text,
            anchor_slug,
            text_begin: location.text_begin,
            text_end: location.text_end,
            close_tag_offset: location.close_tag_offset,
        });
    }

    headings
}

/// `content` with comments, scripts and styles blanked to spaces. Byte
/// offsets are preserved.
fn mask_opaque(content: &str) -> Cow<'_, str> {
    if !OPAQUE_RE.is_match(content) {
        return Cow::Borrowed(content);
    }

    let mut masked = String::with_capacity(content.len());
    let mut copied = 0;
    for span in OPAQUE_RE.find_iter(content) {
        masked.push_str(&content[copied..span.start()]);
        masked.extend(std::iter::repeat_n(' ', span.len()));
        copied = span.end();
    }
    masked.push_str(&content[copied..]);
    Cow::Owned(masked)
}

/// Every raw h2 element outside opaque spans, in document order
fn raw_headings(content: &str) -> Vec<RawHeading> {
    let masked = mask_opaque(content);

    H2_ELEMENT_RE
        .captures_iter(&masked)
        .filter_map(|captures| {
            let whole = captures.get(0)?;
            let inner = captures.get(1)?;

            let stripped = TAG_RE.replace_all(inner.as_str(), "");
            let normalized = decode_html_entities(&stripped).trim().to_string();

            Some(RawHeading {
                location: Location {
                    text_begin: inner.start() - 1,
                    text_end: inner.end(),
                    close_tag_offset: whole.end(),
                },
                normalized,
            })
        })
        .collect()
}

/// Fixed offset for content opening with a bare `<h2>`
fn locate_short_form(content: &str) -> Option<Location> {
    if !content.starts_with(SHORT_OPEN_TAG) {
        return None;
    }

    let text_end = SHORT_OPEN_TAG.len() + content[SHORT_OPEN_TAG.len()..].find(CLOSE_TAG)?;
    Some(Location {
        text_begin: SHORT_OPEN_TAG_END,
        text_end,
        close_tag_offset: text_end + CLOSE_TAG.len(),
    })
}
