//! Core configuration types for heading anchors
//!
//! `Settings` mirrors the stored option map read on every render.
//! `Presentation` holds the host-managed display preferences (menu float
//! and title) that live outside the option map.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::{
    DEFAULT_BLOCK_ELEMENTS_THRESHOLD, DEFAULT_SCROLL_SPEED_MS, DEFAULT_TOP_LINK_THRESHOLD,
};

/// Stored plugin options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Settings {
    /// Character offset below which headings are treated as inline.
    ///
    /// Zero adds back-to-top links to every heading.
    pub(crate) top_link_threshold: u64,

    /// How far into the content (in characters) block-level elements are
    /// counted to compensate the top-link threshold
    pub(crate) block_elements_threshold: u64,

    /// Smooth-scroll duration in milliseconds. Zero jumps immediately.
    pub(crate) scroll_speed: u64,

    /// Easing curve handed to the smooth-scroll script
    pub(crate) scroll_type: ScrollType,

    /// Optional selector for links the smooth-scroll script should handle
    pub(crate) content_selector: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            top_link_threshold: DEFAULT_TOP_LINK_THRESHOLD,
            block_elements_threshold: DEFAULT_BLOCK_ELEMENTS_THRESHOLD,
            scroll_speed: DEFAULT_SCROLL_SPEED_MS,
            scroll_type: ScrollType::default(),
            content_selector: None,
        }
    }
}

/// Host-managed presentation preferences for the menu
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Presentation {
    pub(crate) float_picker: FloatPosition,
    pub(crate) toc_title: String,
}

/// Where the table-of-contents menu floats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FloatPosition {
    #[default]
    None,
    Left,
    Right,
}

impl FloatPosition {
    pub const ALL: [FloatPosition; 3] = [FloatPosition::None, FloatPosition::Left, FloatPosition::Right];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FloatPosition::None => "none",
            FloatPosition::Left => "left",
            FloatPosition::Right => "right",
        }
    }
}

impl fmt::Display for FloatPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FloatPosition {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|position| position.as_str() == s)
            .ok_or_else(|| UnknownChoice(s.to_string()))
    }
}

/// Easing curves understood by the smooth-scroll script
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScrollType {
    Linear,
    #[serde(rename = "easeInQuad")]
    EaseInQuad,
    #[serde(rename = "easeInCubic")]
    EaseInCubic,
    #[serde(rename = "easeInQuart")]
    EaseInQuart,
    #[serde(rename = "easeInQuint")]
    EaseInQuint,
    #[default]
    #[serde(rename = "easeInOutQuad")]
    EaseInOutQuad,
    #[serde(rename = "easeInOutCubic")]
    EaseInOutCubic,
    #[serde(rename = "easeInOutQuart")]
    EaseInOutQuart,
    #[serde(rename = "easeInOutQuint")]
    EaseInOutQuint,
    #[serde(rename = "easeOutQuad")]
    EaseOutQuad,
    #[serde(rename = "easeOutCubic")]
    EaseOutCubic,
    #[serde(rename = "easeOutQuart")]
    EaseOutQuart,
    #[serde(rename = "easeOutQuint")]
    EaseOutQuint,
}

impl ScrollType {
    pub const ALL: [ScrollType; 13] = [
        ScrollType::Linear,
        ScrollType::EaseInQuad,
        ScrollType::EaseInCubic,
        ScrollType::EaseInQuart,
        ScrollType::EaseInQuint,
        ScrollType::EaseInOutQuad,
        ScrollType::EaseInOutCubic,
        ScrollType::EaseInOutQuart,
        ScrollType::EaseInOutQuint,
        ScrollType::EaseOutQuad,
        ScrollType::EaseOutCubic,
        ScrollType::EaseOutQuart,
        ScrollType::EaseOutQuint,
    ];

    /// Name as the smooth-scroll script expects it
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ScrollType::Linear => "Linear",
            ScrollType::EaseInQuad => "easeInQuad",
            ScrollType::EaseInCubic => "easeInCubic",
            ScrollType::EaseInQuart => "easeInQuart",
            ScrollType::EaseInQuint => "easeInQuint",
            ScrollType::EaseInOutQuad => "easeInOutQuad",
            ScrollType::EaseInOutCubic => "easeInOutCubic",
            ScrollType::EaseInOutQuart => "easeInOutQuart",
            ScrollType::EaseInOutQuint => "easeInOutQuint",
            ScrollType::EaseOutQuad => "easeOutQuad",
            ScrollType::EaseOutCubic => "easeOutCubic",
            ScrollType::EaseOutQuart => "easeOutQuart",
            ScrollType::EaseOutQuint => "easeOutQuint",
        }
    }
}

impl fmt::Display for ScrollType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScrollType {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scroll_type| scroll_type.as_str() == s)
            .ok_or_else(|| UnknownChoice(s.to_string()))
    }
}

/// A select/radio value outside the declared choice list
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not one of the permitted choices")]
pub struct UnknownChoice(pub String);
