//! Heading annotation
//!
//! Plans one insertion per scanned heading against the original content and
//! applies them in a single pass. Inline headings get a class attribute on
//! their opening tag. Anchored headings get an anchor target and a
//! back-to-top link right after `</h2>`.

use std::borrow::Cow;

use super::splice::SplicePlan;
use super::threshold::ThresholdPolicy;
use super::types::{Heading, Placement};

/// Attribute added to the opening tag of an inline heading
pub const INLINE_HEADING_ATTR: &str = r#" class="inline-heading""#;

/// Markup inserted after an anchored heading
#[must_use]
pub fn top_link_markup(anchor_slug: &str) -> String {
    format!(
        r##"<span id="{anchor_slug}"></span><a class="ah-top" data-scroll href="#" role="link">Back to top</a>"##
    )
}

/// Rewrites one page's content from its scan
#[derive(Debug, Clone, Copy)]
pub struct ContentRewriter<'h> {
    headings: &'h [Heading],
    policy: ThresholdPolicy,
}

impl<'h> ContentRewriter<'h> {
    #[must_use]
    pub fn new(headings: &'h [Heading], policy: ThresholdPolicy) -> Self {
        Self { headings, policy }
    }

    /// Insertion plan for the headings, in document order
    #[must_use]
    pub fn plan(&self) -> SplicePlan {
        let mut plan = SplicePlan::new();

        for heading in self.headings {
            match self.policy.placement(heading.text_begin) {
                Placement::Inline => {
                    plan.insert(heading.text_begin, INLINE_HEADING_ATTR);
                }
                Placement::Anchored => {
                    plan.insert(heading.close_tag_offset, top_link_markup(&heading.anchor_slug));
                }
            }
        }

        plan
    }

    /// Apply the plan to `content`, which must be the scanned content.
    ///
    /// An unusable plan leaves the content untouched.
    #[must_use]
    pub fn rewrite<'a>(&self, content: &'a str) -> Cow<'a, str> {
        let plan = self.plan();
        if plan.is_empty() {
            return Cow::Borrowed(content);
        }

        match plan.apply(content) {
            Ok(rewritten) => {
                log::debug!(
                    "Annotated {} headings (threshold {}), +{} bytes",
                    plan.len(),
                    self.policy.threshold(),
                    plan.inserted_len()
                );
                Cow::Owned(rewritten)
            }
            Err(e) => {
                log::warn!("Heading offsets do not fit content, leaving it unchanged: {e}");
                Cow::Borrowed(content)
            }
        }
    }
}
