//! Shared configuration constants for anchorhead
//!
//! This module contains default values and configuration constants used
//! throughout the codebase to ensure consistency and avoid magic numbers.

/// Slug used to prefix asset handles and the stored option key
pub const ANCHORHEAD_SLUG: &str = "anchorhead";

/// Version string stamped onto enqueued assets
pub const ANCHORHEAD_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default top-link threshold: 25 characters
///
/// Headings whose opening tag ends before this offset are treated as
/// inline and get no back-to-top link.
pub const DEFAULT_TOP_LINK_THRESHOLD: u64 = 25;

/// Default block-elements threshold: 500 characters
///
/// Only the first ~500 characters of content are inspected when estimating
/// how much vertical space block-level elements take near the top.
pub const DEFAULT_BLOCK_ELEMENTS_THRESHOLD: u64 = 500;

/// Default smooth-scroll duration: 650 ms
pub const DEFAULT_SCROLL_SPEED_MS: u64 = 650;

/// Characters of scroll budget charged per block-level element
///
/// One block element is modelled as one full line of text, roughly 75
/// characters at typical content widths.
pub const CHARS_PER_BLOCK_ELEMENT: u64 = 75;
