//! Declared option registry
//!
//! Each stored option has a name, a declared field type and a default.
//! The registry drives three things:
//!
//! 1. Activation: [`default_options`] builds the option map written once at
//!    install time.
//! 2. Saving the settings form: [`validate_options`] cleans every submitted
//!    value with its declared type before it becomes [`Settings`].
//! 3. Presentation preferences: [`validate_presentation`] does the same for
//!    the float and title preferences.

use serde_json::{Map, Value};

use super::types::{FloatPosition, Presentation, ScrollType, Settings};
use crate::error::ConfigError;
use crate::sanitize;

/// One declared option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
    pub name: &'static str,
    /// Declared type name as understood by [`sanitize::clean`]
    pub declared_type: &'static str,
    pub default: &'static str,
}

/// Options stored in the plugin option map
pub static OPTION_SPECS: &[OptionSpec] = &[
    OptionSpec {
        name: "top-link-threshold",
        declared_type: "number",
        default: "25",
    },
    OptionSpec {
        name: "block-elements-threshold",
        declared_type: "number",
        default: "500",
    },
    OptionSpec {
        name: "scroll-speed",
        declared_type: "number",
        default: "650",
    },
    OptionSpec {
        name: "scroll-type",
        declared_type: "select",
        default: "easeInOutQuad",
    },
    OptionSpec {
        name: "content-selector",
        declared_type: "text",
        default: "",
    },
];

/// Presentation preferences managed outside the option map
pub static PRESENTATION_SPECS: &[OptionSpec] = &[
    OptionSpec {
        name: "float-picker",
        declared_type: "radio",
        default: "none",
    },
    OptionSpec {
        name: "toc-title",
        declared_type: "text",
        default: "",
    },
];

/// Look up a declared option by name
#[must_use]
pub fn option_spec(name: &str) -> Option<&'static OptionSpec> {
    OPTION_SPECS
        .iter()
        .chain(PRESENTATION_SPECS)
        .find(|spec| spec.name == name)
}

/// Build the activation-time option map from declared defaults.
///
/// # Errors
///
/// Returns [`ConfigError::Sanitize`] if a declared type is empty.
pub fn default_options() -> Result<Map<String, Value>, ConfigError> {
    clean_declared(OPTION_SPECS, &Map::new())
}

/// Clean a submitted option map into `Settings`.
///
/// Missing keys take their declared default. Negative numbers clamp to
/// zero, unknown easing names fall back to the default curve and a blank
/// content selector is stored as unset.
///
/// # Errors
///
/// Fails when `input` is not a JSON object or when cleaning fails.
pub fn validate_options(input: &Value) -> Result<Settings, ConfigError> {
    let input = as_object(input)?;
    let mut cleaned = clean_declared(OPTION_SPECS, input)?;

    for key in ["top-link-threshold", "block-elements-threshold", "scroll-speed"] {
        if let Some(value) = cleaned.get_mut(key) {
            if value.as_i64().is_some_and(|n| n < 0) {
                log::debug!("Clamping negative '{key}' to 0");
                *value = Value::from(0);
            }
        }
    }

    if let Some(value) = cleaned.get_mut("scroll-type") {
        let known = value
            .as_str()
            .is_some_and(|name| name.parse::<ScrollType>().is_ok());
        if !known {
            log::warn!("Unknown scroll-type {value}, using {}", ScrollType::default());
            *value = Value::from(ScrollType::default().as_str());
        }
    }

    if cleaned
        .get("content-selector")
        .and_then(Value::as_str)
        .is_some_and(str::is_empty)
    {
        cleaned.insert("content-selector".to_string(), Value::Null);
    }

    Ok(serde_json::from_value(Value::Object(cleaned))?)
}

/// Clean submitted presentation preferences.
///
/// # Errors
///
/// Fails when `input` is not a JSON object or when cleaning fails.
pub fn validate_presentation(input: &Value) -> Result<Presentation, ConfigError> {
    let input = as_object(input)?;
    let mut cleaned = clean_declared(PRESENTATION_SPECS, input)?;

    if let Some(value) = cleaned.get_mut("float-picker") {
        let known = value
            .as_str()
            .is_some_and(|name| name.parse::<FloatPosition>().is_ok());
        if !known {
            log::warn!("Unknown float-picker {value}, using none");
            *value = Value::from(FloatPosition::None.as_str());
        }
    }

    Ok(serde_json::from_value(Value::Object(cleaned))?)
}

fn clean_declared(
    specs: &[OptionSpec],
    input: &Map<String, Value>,
) -> Result<Map<String, Value>, ConfigError> {
    let mut cleaned = Map::with_capacity(specs.len());

    for spec in specs {
        let submitted = input
            .get(spec.name)
            .cloned()
            .unwrap_or_else(|| Value::from(spec.default));

        let value = sanitize::clean(&submitted, spec.declared_type).map_err(|source| {
            ConfigError::Sanitize {
                option: spec.name.to_string(),
                source,
            }
        })?;

        cleaned.insert(spec.name.to_string(), value);
    }

    Ok(cleaned)
}

fn as_object(input: &Value) -> Result<&Map<String, Value>, ConfigError> {
    match input {
        Value::Object(map) => Ok(map),
        Value::Null => Err(ConfigError::NotAnObject("null")),
        Value::Bool(_) => Err(ConfigError::NotAnObject("a boolean")),
        Value::Number(_) => Err(ConfigError::NotAnObject("a number")),
        Value::String(_) => Err(ConfigError::NotAnObject("a string")),
        Value::Array(_) => Err(ConfigError::NotAnObject("an array")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_options_list() {
        assert_eq!(OPTION_SPECS.len(), 5);
        assert!(OPTION_SPECS.iter().all(|spec| !spec.declared_type.is_empty()));
        assert_eq!(option_spec("scroll-speed").map(|s| s.declared_type), Some("number"));
        assert_eq!(option_spec("toc-title").map(|s| s.default), Some(""));
        assert!(option_spec("missing").is_none());
    }

    #[test]
    fn test_default_options_are_typed() {
        let defaults = default_options().unwrap();
        assert_eq!(defaults["top-link-threshold"], json!(25));
        assert_eq!(defaults["block-elements-threshold"], json!(500));
        assert_eq!(defaults["scroll-speed"], json!(650));
        assert_eq!(defaults["scroll-type"], json!("easeInOutQuad"));
        assert_eq!(defaults["content-selector"], json!(""));
    }

    #[test]
    fn test_validate_empty_map_gives_defaults() {
        assert_eq!(validate_options(&json!({})).unwrap(), Settings::default());
    }

    #[test]
    fn test_validate_cleans_submitted_values() {
        let settings = validate_options(&json!({
            "top-link-threshold": " 40 ",
            "block-elements-threshold": "abc",
            "scroll-speed": "-5",
            "scroll-type": "easeOutQuint",
            "content-selector": "  <i>[data-scroll]</i> ",
        }))
        .unwrap();

        assert_eq!(settings.top_link_threshold(), 40);
        assert_eq!(settings.block_elements_threshold(), 0);
        assert_eq!(settings.scroll_speed(), 0);
        assert_eq!(settings.scroll_type(), ScrollType::EaseOutQuint);
        assert_eq!(settings.content_selector(), Some("[data-scroll]"));
    }

    #[test]
    fn test_validate_unknown_scroll_type_falls_back() {
        let settings = validate_options(&json!({ "scroll-type": "bouncy" })).unwrap();
        assert_eq!(settings.scroll_type(), ScrollType::EaseInOutQuad);
    }

    #[test]
    fn test_validate_rejects_non_objects() {
        assert!(matches!(
            validate_options(&json!([1, 2])),
            Err(ConfigError::NotAnObject("an array"))
        ));
    }

    #[test]
    fn test_validate_presentation() {
        let presentation =
            validate_presentation(&json!({ "float-picker": "left", "toc-title": " On this page " }))
                .unwrap();
        assert_eq!(presentation.float_picker(), FloatPosition::Left);
        assert_eq!(presentation.toc_title(), "On this page");

        let presentation = validate_presentation(&json!({ "float-picker": "center" })).unwrap();
        assert_eq!(presentation, Presentation::default());
    }
}
