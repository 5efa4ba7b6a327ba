//! Per-page fields edited in the page editor's meta boxes
//!
//! Meta boxes form a closed set resolved through a static lookup table.
//! Each box declares its fields with a type and a default, and posted values
//! are cleaned through the sanitizer before they are stored.

use serde_json::{Map, Value};

use crate::sanitize::{SanitizeError, clean, is_truthy};

/// Per-page switch that turns anchors and the menu off for one page
pub const SHOW_ANCHORS: &str = "show-anchors";

/// A per-page field: name, declared type and default
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageField {
    pub name: &'static str,
    pub declared_type: &'static str,
    pub default: i64,
}

/// Every per-page field, across all meta boxes
pub static PAGE_FIELDS: [PageField; 1] = [PageField {
    name: SHOW_ANCHORS,
    declared_type: "checkbox",
    default: 1,
}];

/// Known meta boxes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageMetabox {
    ShowAnchors,
}

static METABOXES: [(&str, PageMetabox); 1] = [("showanchors", PageMetabox::ShowAnchors)];

impl PageMetabox {
    pub const ALL: [PageMetabox; 1] = [PageMetabox::ShowAnchors];

    /// Resolve a meta box by its registered key
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        METABOXES
            .iter()
            .find(|(registered, _)| *registered == key)
            .map(|(_, metabox)| *metabox)
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            PageMetabox::ShowAnchors => "showanchors",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            PageMetabox::ShowAnchors => "Show Anchor Links",
        }
    }

    /// Post type the box is shown for
    #[must_use]
    pub fn post_type(self) -> &'static str {
        "page"
    }

    /// Form nonce field guarding saves from this box
    #[must_use]
    pub fn nonce(self) -> &'static str {
        match self {
            PageMetabox::ShowAnchors => "nonce_anchorhead_showanchors",
        }
    }

    #[must_use]
    pub fn fields(self) -> &'static [PageField] {
        match self {
            PageMetabox::ShowAnchors => &PAGE_FIELDS[..1],
        }
    }

    /// Clean this box's fields out of a posted form.
    ///
    /// A field that is absent or empty in the post is stored as `""`.
    ///
    /// # Errors
    ///
    /// Fails only when a field's declared type is empty.
    pub fn validate(self, posted: &Map<String, Value>) -> Result<Map<String, Value>, SanitizeError> {
        let mut cleaned = Map::new();

        for field in self.fields() {
            let value = match posted.get(field.name) {
                Some(value) if is_truthy(value) => clean(value, field.declared_type)?,
                _ => Value::from(""),
            };
            cleaned.insert(field.name.to_string(), value);
        }

        Ok(cleaned)
    }
}

/// Clean every per-page field out of a posted form.
///
/// # Errors
///
/// Fails only when a field's declared type is empty.
pub fn validate_page_meta(posted: &Map<String, Value>) -> Result<Map<String, Value>, SanitizeError> {
    let mut cleaned = Map::new();
    for metabox in PageMetabox::ALL {
        cleaned.extend(metabox.validate(posted)?);
    }
    Ok(cleaned)
}

/// Whether anchors are shown for a page, given its stored meta.
///
/// Only a stored, empty `show-anchors` value turns them off. Pages that were
/// never saved through the meta box keep the default.
#[must_use]
pub fn show_anchors_from_meta(meta: &Map<String, Value>) -> bool {
    match meta.get(SHOW_ANCHORS) {
        None => true,
        // Hosts may store meta as a list of values
        Some(Value::Array(values)) => values.first().is_some_and(is_truthy),
        Some(value) => is_truthy(value),
    }
}
