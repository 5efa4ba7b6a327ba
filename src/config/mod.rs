//! Configuration module for heading anchors
//!
//! This module provides the `Settings` option map, the host presentation
//! preferences, the declared option registry used to clean submitted values,
//! and JSON persistence for standalone use.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod loader;
pub mod options;
pub mod types;

// Re-exports for public API
pub use builder::SettingsBuilder;
pub use loader::StoredOptions;
pub use options::{
    OPTION_SPECS, OptionSpec, PRESENTATION_SPECS, default_options, option_spec,
    validate_options, validate_presentation,
};
pub use types::{FloatPosition, Presentation, ScrollType, Settings, UnknownChoice};
