//! Type-directed cleaning of submitted option values
//!
//! Every stored option and per-page field has a declared field type. The
//! settings form and the page editor run each submitted value through
//! [`clean`] with that type before anything is persisted.
//!
//! Values arrive as loosely typed JSON (form posts, stored option maps), so
//! the input and the output are both [`serde_json::Value`].

pub mod number;
pub mod text;

use serde_json::Value;
use std::fmt;
use thiserror::Error;

pub use number::{clean_number, parse_integer};
pub use text::{clean_email, clean_text, clean_textarea, clean_url};

/// Sanitization failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SanitizeError {
    /// `clean` was called without a declared type
    #[error("Specify the data type to sanitize.")]
    MissingType,
}

/// Declared type of an option or page field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    Checkbox,
    Number,
    Select,
    Radio,
    Email,
    Url,
    Textarea,
    /// Free text, also used for any declared type without a dedicated rule
    Text(String),
}

impl FieldType {
    /// Resolve a declared type name.
    ///
    /// # Errors
    ///
    /// Returns [`SanitizeError::MissingType`] when `declared` is empty or
    /// whitespace only.
    pub fn from_declared(declared: &str) -> Result<Self, SanitizeError> {
        let declared = declared.trim();
        if declared.is_empty() {
            return Err(SanitizeError::MissingType);
        }

        Ok(match declared.to_ascii_lowercase().as_str() {
            "checkbox" => FieldType::Checkbox,
            "number" => FieldType::Number,
            "select" => FieldType::Select,
            "radio" => FieldType::Radio,
            "email" => FieldType::Email,
            "url" => FieldType::Url,
            "textarea" => FieldType::Textarea,
            other => FieldType::Text(other.to_string()),
        })
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldType::Checkbox => "checkbox",
            FieldType::Number => "number",
            FieldType::Select => "select",
            FieldType::Radio => "radio",
            FieldType::Email => "email",
            FieldType::Url => "url",
            FieldType::Textarea => "textarea",
            FieldType::Text(name) => name,
        };
        f.write_str(name)
    }
}

/// Clean `value` according to the declared type name.
///
/// # Errors
///
/// Returns [`SanitizeError::MissingType`] when `declared` is empty. Every
/// other input degrades to a cleaned value.
pub fn clean(value: &Value, declared: &str) -> Result<Value, SanitizeError> {
    let field_type = FieldType::from_declared(declared)?;
    Ok(clean_as(value, &field_type))
}

/// Clean `value` for an already resolved field type
#[must_use]
pub fn clean_as(value: &Value, field_type: &FieldType) -> Value {
    match field_type {
        FieldType::Checkbox => Value::from(i64::from(is_truthy(value))),
        FieldType::Number => Value::from(clean_number(value)),
        // Choice membership is validated by the caller
        FieldType::Select | FieldType::Radio => value.clone(),
        FieldType::Email => Value::from(clean_email(&value_as_text(value))),
        FieldType::Url => Value::from(clean_url(&value_as_text(value))),
        FieldType::Textarea => Value::from(clean_textarea(&value_as_text(value))),
        FieldType::Text(_) => Value::from(clean_text(&value_as_text(value))),
    }
}

/// Loose truthiness used for checkbox values.
///
/// Null, `false`, zero, the empty string, `"0"` and empty arrays are false.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !(s.is_empty() || s == "0"),
        Value::Array(items) => !items.is_empty(),
        Value::Object(_) => true,
    }
}

fn value_as_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) => String::new(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => String::new(),
    }
}
