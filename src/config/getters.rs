//! Getter methods for `Settings` and `Presentation`

use super::types::{FloatPosition, Presentation, ScrollType, Settings};

impl Settings {
    #[must_use]
    pub fn top_link_threshold(&self) -> u64 {
        self.top_link_threshold
    }

    #[must_use]
    pub fn block_elements_threshold(&self) -> u64 {
        self.block_elements_threshold
    }

    #[must_use]
    pub fn scroll_speed(&self) -> u64 {
        self.scroll_speed
    }

    #[must_use]
    pub fn scroll_type(&self) -> ScrollType {
        self.scroll_type
    }

    #[must_use]
    pub fn content_selector(&self) -> Option<&str> {
        self.content_selector.as_deref()
    }
}

impl Presentation {
    #[must_use]
    pub fn new(float_picker: FloatPosition, toc_title: impl Into<String>) -> Self {
        Self {
            float_picker,
            toc_title: toc_title.into(),
        }
    }

    #[must_use]
    pub fn float_picker(&self) -> FloatPosition {
        self.float_picker
    }

    #[must_use]
    pub fn toc_title(&self) -> &str {
        &self.toc_title
    }
}
