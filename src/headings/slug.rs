//! Anchor slug assignment with per-page disambiguation.
//!
//! Slugs come from the heading text. When two headings on one page produce
//! the same slug, later ones get `-2`, `-3`, … appended so no two anchors
//! share a DOM id. Text without any slug-able characters falls back to
//! `section-<ordinal>`.

use std::collections::{HashMap, HashSet};

/// Hands out unique anchor slugs for one page
#[derive(Debug, Default)]
pub struct AnchorSlugs {
    issued: HashSet<String>,
    occurrences: HashMap<String, usize>,
}

impl AnchorSlugs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a slug for heading text. `ordinal` is the heading's 1-based
    /// position among emitted headings.
    pub fn assign(&mut self, text: &str, ordinal: usize) -> String {
        let base = match ::slug::slugify(text) {
            s if s.is_empty() => format!("section-{ordinal}"),
            s => s,
        };

        let count = self.occurrences.entry(base.clone()).or_insert(0);
        let mut candidate = base.clone();
        loop {
            *count += 1;
            if *count > 1 {
                candidate = format!("{base}-{count}");
            }
            if !self.issued.contains(&candidate) {
                break;
            }
        }

        self.issued.insert(candidate.clone());
        candidate
    }
}
