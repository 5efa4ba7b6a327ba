//! Data types shared by the heading scanner, rewriter and menu builder

use serde::{Deserialize, Serialize};
use std::fmt;
use xxhash_rust::xxh3::xxh3_64;

/// Identifier of the page being rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(pub u64);

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PageId {
    fn from(id: u64) -> Self {
        PageId(id)
    }
}

/// One level-2 heading discovered in a page.
///
/// All offsets are byte offsets into the ORIGINAL content string as it was
/// scanned. They are never recomputed against rewritten content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Trimmed, HTML-escaped heading text
    pub text: String,

    /// Fragment-safe identifier, unique within the page
    pub anchor_slug: String,

    /// Offset of the `>` closing the heading's opening tag. The inner text
    /// starts right after it, and the inline class attribute is inserted
    /// here.
    pub text_begin: usize,

    /// Offset where the inner markup ends, i.e. the start of `</h2>`
    pub text_end: usize,

    /// Offset immediately after the heading's `</h2>`
    pub close_tag_offset: usize,
}

/// How the rewriter treats a heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// Near the top of the content: marked with a class, no back-to-top link
    Inline,
    /// Gets an anchor span and a back-to-top link after the heading
    Anchored,
}

/// Byte length plus xxh3 hash of a content string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    len: usize,
    hash: u64,
}

impl Fingerprint {
    #[must_use]
    pub fn of(content: &str) -> Self {
        Self {
            len: content.len(),
            hash: xxh3_64(content.as_bytes()),
        }
    }

    #[must_use]
    pub fn matches(&self, content: &str) -> bool {
        self.len == content.len() && self.hash == xxh3_64(content.as_bytes())
    }
}

/// Everything remembered about one page between render stages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageScan {
    /// Headings in document order
    pub headings: Vec<Heading>,

    /// Block-level elements counted near the top of the content
    pub block_count: u64,

    fingerprint: Fingerprint,
}

impl PageScan {
    #[must_use]
    pub fn new(content: &str, headings: Vec<Heading>, block_count: u64) -> Self {
        Self {
            headings,
            block_count,
            fingerprint: Fingerprint::of(content),
        }
    }

    /// Whether `content` is byte-for-byte the content that was scanned
    #[must_use]
    pub fn matches(&self, content: &str) -> bool {
        self.fingerprint.matches(content)
    }

    #[must_use]
    pub fn fingerprint(&self) -> Fingerprint {
        self.fingerprint
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.headings.is_empty()
    }
}
