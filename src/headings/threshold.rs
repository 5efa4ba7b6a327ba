//! Inline/anchored classification

use super::types::Placement;
use crate::config::Settings;
use crate::utils::CHARS_PER_BLOCK_ELEMENT;

/// Base threshold widened by one line's worth of characters per block
/// element. Saturates instead of overflowing.
#[must_use]
pub fn effective_threshold(base: u64, blocks: u64) -> u64 {
    base.saturating_add(blocks.saturating_mul(CHARS_PER_BLOCK_ELEMENT))
}

/// A heading is inline only when the threshold lies strictly past its
/// opening tag.
#[must_use]
pub fn classify(threshold: u64, text_begin: usize) -> Placement {
    let text_begin = u64::try_from(text_begin).unwrap_or(u64::MAX);
    if threshold > text_begin {
        Placement::Inline
    } else {
        Placement::Anchored
    }
}

/// Effective threshold for one page, fixed for the whole rewrite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdPolicy {
    threshold: u64,
}

impl ThresholdPolicy {
    #[must_use]
    pub fn new(base: u64, blocks: u64) -> Self {
        Self {
            threshold: effective_threshold(base, blocks),
        }
    }

    #[must_use]
    pub fn from_settings(settings: &Settings, blocks: u64) -> Self {
        Self::new(settings.top_link_threshold(), blocks)
    }

    #[must_use]
    pub fn threshold(&self) -> u64 {
        self.threshold
    }

    #[must_use]
    pub fn placement(&self, text_begin: usize) -> Placement {
        classify(self.threshold, text_begin)
    }
}
