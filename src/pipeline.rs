//! Render pipeline: the three stages the host runs once per page render
//!
//! 1. [`HeadingAnchors::scan_headings`] records the page's headings and
//!    block density, passing content through.
//! 2. [`HeadingAnchors::annotate_headings`] inserts inline classes or anchors
//!    and back-to-top links.
//! 3. [`HeadingAnchors::build_toc_menu`] prepends the menu.
//!
//! Content is parsed once, in stage 1. Stages 2 and 3 work from the cached
//! scan and never raise: every precondition failure passes content through.

use serde_json::{Map, Value};
use std::borrow::Cow;
use std::sync::Arc;

use crate::config::{Presentation, Settings};
use crate::error::AnchorheadResult;
use crate::frontend::smooth_scroll_init;
use crate::headings::{
    ContentRewriter, HeadingIndex, PageId, PageScan, Stage, ThresholdPolicy, build_menu,
    count_block_elements, scan_headings,
};
use crate::page_meta::show_anchors_from_meta;

/// Host render state for one call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageContext {
    pub page_id: PageId,

    /// Whether the call happens while rendering a single document's main
    /// content, as opposed to excerpts, widgets or feeds
    pub in_the_loop: bool,

    /// Per-page switch from the page's meta
    pub show_anchors: bool,
}

impl PageContext {
    /// Main-content render of a page with anchors on
    #[must_use]
    pub fn new(page_id: u64) -> Self {
        Self {
            page_id: PageId(page_id),
            in_the_loop: true,
            show_anchors: true,
        }
    }

    /// Render outside the main content; every stage passes through
    #[must_use]
    pub fn outside_loop(page_id: u64) -> Self {
        Self {
            in_the_loop: false,
            ..Self::new(page_id)
        }
    }

    /// Main-content render honouring the page's stored meta
    #[must_use]
    pub fn from_meta(page_id: u64, meta: &Map<String, Value>) -> Self {
        Self::new(page_id).with_show_anchors(show_anchors_from_meta(meta))
    }

    #[must_use]
    pub fn with_show_anchors(mut self, show_anchors: bool) -> Self {
        self.show_anchors = show_anchors;
        self
    }
}

/// Heading anchors and table of contents for rendered pages.
///
/// Cloning is cheap and clones share one [`HeadingIndex`].
#[derive(Debug, Clone)]
pub struct HeadingAnchors {
    settings: Arc<Settings>,
    presentation: Arc<Presentation>,
    index: Arc<HeadingIndex>,
}

impl Default for HeadingAnchors {
    fn default() -> Self {
        Self::new(Settings::default(), Presentation::default())
    }
}

impl HeadingAnchors {
    #[must_use]
    pub fn new(settings: Settings, presentation: Presentation) -> Self {
        Self {
            settings: Arc::new(settings),
            presentation: Arc::new(presentation),
            index: Arc::new(HeadingIndex::new()),
        }
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    #[must_use]
    pub fn index(&self) -> &HeadingIndex {
        &self.index
    }

    /// Stage 1. Scan `content` and cache the result under the page id,
    /// replacing any earlier scan. Content is returned unchanged.
    pub fn scan_headings<'a>(&self, content: &'a str, ctx: &PageContext) -> &'a str {
        if !ctx.in_the_loop {
            log::debug!("Page {}: not in the loop, skipping scan", ctx.page_id);
            return content;
        }

        if !ctx.show_anchors {
            log::debug!("Page {}: anchors switched off", ctx.page_id);
            self.index.reset(ctx.page_id);
            return content;
        }

        let headings = scan_headings(content);
        let block_count = if headings.is_empty() {
            0
        } else {
            count_block_elements(content, self.settings.block_elements_threshold())
        };

        log::debug!(
            "Page {}: {} headings, {} block elements",
            ctx.page_id,
            headings.len(),
            block_count
        );

        self.index
            .insert(ctx.page_id, PageScan::new(content, headings, block_count));
        content
    }

    /// Stage 2. Annotate the scanned headings of `content`.
    ///
    /// Passes content through when it is blank, outside the loop, has no
    /// scan or no headings, differs from the scanned content, or was already
    /// annotated in this cycle.
    #[must_use]
    pub fn annotate_headings<'a>(&self, content: &'a str, ctx: &PageContext) -> Cow<'a, str> {
        if content.trim().is_empty() || !ctx.in_the_loop {
            return Cow::Borrowed(content);
        }

        let Some(scan) = self.index.get(ctx.page_id) else {
            log::debug!("Page {}: no scan, nothing to annotate", ctx.page_id);
            return Cow::Borrowed(content);
        };

        if scan.is_empty() {
            return Cow::Borrowed(content);
        }

        if !scan.matches(content) {
            log::warn!(
                "Page {}: content changed since it was scanned, skipping annotation",
                ctx.page_id
            );
            return Cow::Borrowed(content);
        }

        if !self.index.mark_processed(ctx.page_id, Stage::Annotate) {
            log::debug!("Page {}: already annotated", ctx.page_id);
            return Cow::Borrowed(content);
        }

        let policy = ThresholdPolicy::from_settings(&self.settings, scan.block_count);
        let annotated = ContentRewriter::new(&scan.headings, policy).rewrite(content);

        self.index.record_annotated(ctx.page_id, &annotated);
        annotated
    }

    /// Stage 3. Prepend the table-of-contents menu to `content`.
    ///
    /// Same pass-through conditions as [`Self::annotate_headings`]; content
    /// may be either the scanned or the annotated string.
    #[must_use]
    pub fn build_toc_menu<'a>(&self, content: &'a str, ctx: &PageContext) -> Cow<'a, str> {
        if content.trim().is_empty() || !ctx.in_the_loop {
            return Cow::Borrowed(content);
        }

        let Some(scan) = self.index.get(ctx.page_id) else {
            log::debug!("Page {}: no scan, no menu", ctx.page_id);
            return Cow::Borrowed(content);
        };

        if scan.is_empty() {
            return Cow::Borrowed(content);
        }

        if !self.index.is_current(ctx.page_id, content) {
            log::warn!(
                "Page {}: content changed since it was scanned, skipping menu",
                ctx.page_id
            );
            return Cow::Borrowed(content);
        }

        if !self.index.mark_processed(ctx.page_id, Stage::Menu) {
            log::debug!("Page {}: menu already built", ctx.page_id);
            return Cow::Borrowed(content);
        }

        let menu = build_menu(&scan.headings, &self.presentation);
        Cow::Owned(menu + content)
    }

    /// Run all three stages for one page and close its render cycle
    #[must_use]
    pub fn render(&self, content: &str, ctx: &PageContext) -> String {
        let scanned = self.scan_headings(content, ctx);
        let annotated = self.annotate_headings(scanned, ctx);
        let rendered = self.build_toc_menu(&annotated, ctx).into_owned();

        self.end_render(ctx.page_id);
        rendered
    }

    /// [`Self::render`] on tokio's blocking pool
    ///
    /// # Errors
    ///
    /// Returns [`crate::AnchorheadError::TaskFailed`] if the render task
    /// panics or is cancelled.
    pub async fn render_async(
        &self,
        content: impl Into<Arc<str>>,
        ctx: PageContext,
    ) -> AnchorheadResult<String> {
        let content: Arc<str> = content.into();
        let anchors = self.clone();

        let rendered =
            tokio::task::spawn_blocking(move || anchors.render(&content, &ctx)).await?;
        Ok(rendered)
    }

    /// Drop a page's cached scan at the end of its render cycle
    pub fn end_render(&self, page: PageId) {
        self.index.reset(page);
    }

    /// Drop every cached scan
    pub fn reset(&self) {
        self.index.clear();
    }

    /// Smooth-scroll initialisation for the page footer
    #[must_use]
    pub fn smooth_scroll_script(&self) -> String {
        smooth_scroll_init(&self.settings)
    }
}
