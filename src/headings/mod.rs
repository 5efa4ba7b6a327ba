//! Heading discovery, annotation and table-of-contents menu
//!
//! - `scanner`: locate level-2 headings and their offsets in raw content
//! - `blocks`: block-element density near the top of the content
//! - `threshold`: inline/anchored classification
//! - `splice`: single-pass insertion primitive
//! - `rewriter`: apply per-heading insertions
//! - `menu`: render the ordered-list menu
//! - `index`: render-scoped per-page cache

pub mod blocks;
pub mod index;
pub mod menu;
pub mod rewriter;
pub mod scanner;
pub mod slug;
pub mod splice;
pub mod threshold;
pub mod types;

pub use blocks::{BLOCK_ELEMENTS, count_block_elements, density_boundary};
pub use index::{HeadingIndex, Stage};
pub use menu::build_menu;
pub use rewriter::{ContentRewriter, INLINE_HEADING_ATTR, top_link_markup};
pub use scanner::scan_headings;
pub use slug::AnchorSlugs;
pub use splice::{Insertion, SpliceError, SplicePlan};
pub use threshold::{ThresholdPolicy, classify, effective_threshold};
pub use types::{Fingerprint, Heading, PageId, PageScan, Placement};
