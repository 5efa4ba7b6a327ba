//! Fluent builder for `Settings`
//!
//! Every option has a declared default, so unlike a typestate builder
//! there are no required fields and `build()` cannot fail.

use super::types::{ScrollType, Settings};

#[derive(Debug, Clone, Default)]
pub struct SettingsBuilder {
    settings: Settings,
}

impl Settings {
    /// Create a builder starting from the declared defaults
    #[must_use]
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::default()
    }
}

impl SettingsBuilder {
    #[must_use]
    pub fn top_link_threshold(mut self, chars: u64) -> Self {
        self.settings.top_link_threshold = chars;
        self
    }

    #[must_use]
    pub fn block_elements_threshold(mut self, chars: u64) -> Self {
        self.settings.block_elements_threshold = chars;
        self
    }

    #[must_use]
    pub fn scroll_speed(mut self, millis: u64) -> Self {
        self.settings.scroll_speed = millis;
        self
    }

    #[must_use]
    pub fn scroll_type(mut self, scroll_type: ScrollType) -> Self {
        self.settings.scroll_type = scroll_type;
        self
    }

    /// Set the link selector for the smooth-scroll script.
    ///
    /// Blank selectors are stored as unset.
    #[must_use]
    pub fn content_selector(mut self, selector: Option<impl Into<String>>) -> Self {
        self.settings.content_selector = selector
            .map(Into::into)
            .filter(|selector: &String| !selector.trim().is_empty());
        self
    }

    #[must_use]
    pub fn build(self) -> Settings {
        self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_match_settings_default() {
        assert_eq!(Settings::builder().build(), Settings::default());
    }

    #[test]
    fn test_builder_overrides() {
        let settings = Settings::builder()
            .top_link_threshold(10)
            .block_elements_threshold(0)
            .scroll_speed(0)
            .scroll_type(ScrollType::Linear)
            .content_selector(Some("[data-scroll]"))
            .build();

        assert_eq!(settings.top_link_threshold(), 10);
        assert_eq!(settings.block_elements_threshold(), 0);
        assert_eq!(settings.scroll_speed(), 0);
        assert_eq!(settings.scroll_type(), ScrollType::Linear);
        assert_eq!(settings.content_selector(), Some("[data-scroll]"));
    }

    #[test]
    fn test_blank_selector_is_unset() {
        let settings = Settings::builder().content_selector(Some("  ")).build();
        assert_eq!(settings.content_selector(), None);

        let settings = Settings::builder().content_selector(None::<String>).build();
        assert_eq!(settings.content_selector(), None);
    }
}
