//! Render-scoped heading cache
//!
//! One entry per page id, written by the scan stage and read by the
//! annotate and menu stages. Pages rendered concurrently touch disjoint
//! entries, so no page can observe another page's offsets. The owner clears
//! entries at the render boundary with [`HeadingIndex::reset`] or
//! [`HeadingIndex::clear`].

use dashmap::{DashMap, DashSet};
use std::sync::Arc;

use super::types::{Fingerprint, PageId, PageScan};

/// Render stages that must run at most once per page per cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Annotate,
    Menu,
}

/// Per-page scan results for the current render cycle
#[derive(Debug, Default)]
pub struct HeadingIndex {
    scans: DashMap<PageId, Arc<PageScan>>,
    annotated: DashMap<PageId, Fingerprint>,
    processed: DashSet<(PageId, Stage)>,
}

impl HeadingIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the scan for a page. The last scan for a page wins and re-opens
    /// its stages.
    pub fn insert(&self, page: PageId, scan: PageScan) {
        self.scans.insert(page, Arc::new(scan));
        self.annotated.remove(&page);
        self.processed.remove(&(page, Stage::Annotate));
        self.processed.remove(&(page, Stage::Menu));
    }

    #[must_use]
    pub fn get(&self, page: PageId) -> Option<Arc<PageScan>> {
        self.scans.get(&page).map(|entry| Arc::clone(entry.value()))
    }

    /// Remember the content the annotate stage produced for a page
    pub fn record_annotated(&self, page: PageId, content: &str) {
        self.annotated.insert(page, Fingerprint::of(content));
    }

    /// Whether `content` is what the page's scan or annotate stage saw last
    #[must_use]
    pub fn is_current(&self, page: PageId, content: &str) -> bool {
        let annotated = self
            .annotated
            .get(&page)
            .is_some_and(|fingerprint| fingerprint.matches(content));

        annotated || self.get(page).is_some_and(|scan| scan.matches(content))
    }

    /// Record that `stage` ran for `page`. Returns `false` when it already had.
    pub fn mark_processed(&self, page: PageId, stage: Stage) -> bool {
        self.processed.insert((page, stage))
    }

    #[must_use]
    pub fn is_processed(&self, page: PageId, stage: Stage) -> bool {
        self.processed.contains(&(page, stage))
    }

    /// End of a page's render cycle
    pub fn reset(&self, page: PageId) {
        self.scans.remove(&page);
        self.annotated.remove(&page);
        self.processed.remove(&(page, Stage::Annotate));
        self.processed.remove(&(page, Stage::Menu));
    }

    /// End of every render cycle
    pub fn clear(&self) {
        self.scans.clear();
        self.annotated.clear();
        self.processed.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scans.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scans.is_empty()
    }
}
