//! Settings persistence, validation and per-page meta

use kodegen_tools_anchorhead::config::{OPTION_SPECS, option_spec};
use kodegen_tools_anchorhead::{
    ConfigError, FloatPosition, HeadingAnchors, PageContext, PageMetabox, Presentation,
    ScrollType, Settings, StoredOptions, default_options, validate_options, validate_page_meta,
    validate_presentation,
};
use serde_json::json;

mod common;
use common::{TWO_HEADINGS, create_test_dir};

#[test]
fn test_builder_defaults_match_declared_defaults() {
    let settings = Settings::builder().build();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.top_link_threshold(), 25);
    assert_eq!(settings.block_elements_threshold(), 500);
    assert_eq!(settings.scroll_speed(), 650);
    assert_eq!(settings.scroll_type(), ScrollType::EaseInOutQuad);
    assert_eq!(settings.content_selector(), None);
}

#[test]
fn test_builder_drops_blank_selector() {
    let settings = Settings::builder().content_selector(Some("   ")).build();
    assert_eq!(settings.content_selector(), None);
}

#[test]
fn test_every_option_has_a_declared_type() {
    for spec in OPTION_SPECS {
        assert!(!spec.declared_type.is_empty(), "{}", spec.name);
        assert_eq!(option_spec(spec.name), Some(spec));
    }
}

#[test]
fn test_activation_defaults_validate_to_default_settings() {
    let defaults = default_options().unwrap();
    let settings = validate_options(&serde_json::Value::Object(defaults)).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_settings_serialize_with_option_names() {
    let value = serde_json::to_value(Settings::default()).unwrap();
    assert_eq!(value["top-link-threshold"], json!(25));
    assert_eq!(value["scroll-type"], json!("easeInOutQuad"));
    assert_eq!(value["content-selector"], serde_json::Value::Null);
}

#[test]
fn test_submitted_form_is_cleaned() {
    let settings = validate_options(&json!({
        "top-link-threshold": "0,00",
        "scroll-speed": "01000",
        "scroll-type": "Linear",
    }))
    .unwrap();

    assert_eq!(settings.top_link_threshold(), 0);
    assert_eq!(settings.scroll_speed(), 512);
    assert_eq!(settings.scroll_type(), ScrollType::Linear);
    assert_eq!(settings.block_elements_threshold(), 500);
}

#[test]
fn test_presentation_choices_are_validated() {
    let presentation = validate_presentation(&json!({ "float-picker": "up" })).unwrap();
    assert_eq!(presentation.float_picker(), FloatPosition::None);

    assert!(matches!(
        validate_presentation(&json!("left")),
        Err(ConfigError::NotAnObject(_))
    ));
}

#[test]
fn test_stored_options_file_drives_rendering() {
    let dir = create_test_dir().unwrap();
    let path = dir.path().join("anchorhead-options.json");

    let stored = StoredOptions {
        options: Settings::builder().top_link_threshold(0).build(),
        presentation: Presentation::new(FloatPosition::Left, "Contents"),
    };
    stored.save(&path).unwrap();

    let loaded = StoredOptions::load(&path).unwrap();
    assert_eq!(loaded, stored);

    let anchors = HeadingAnchors::new(loaded.options, loaded.presentation);
    let rendered = anchors.render(TWO_HEADINGS, &PageContext::new(1));
    assert!(rendered.starts_with(r#"<nav class="ah-toc" data-float="left"><h3 class="toc-title">Contents</h3><ol class="ah-menu">"#));
    assert!(rendered.contains(r#"<span id="first"></span>"#));
}

#[test]
fn test_settings_file_with_bad_values_is_cleaned() {
    let dir = create_test_dir().unwrap();
    let path = dir.path().join("options.json");
    std::fs::write(
        &path,
        r#"{"options": {"top-link-threshold": "lots", "scroll-type": "wobble"}}"#,
    )
    .unwrap();

    let loaded = StoredOptions::load(&path).unwrap();
    assert_eq!(loaded.options.top_link_threshold(), 0);
    assert_eq!(loaded.options.scroll_type(), ScrollType::EaseInOutQuad);
    assert_eq!(loaded.presentation, Presentation::default());
}

#[test]
fn test_page_meta_round_trip() {
    let posted = json!({ "show-anchors": "on", "unrelated": "x" });
    let stored = validate_page_meta(posted.as_object().unwrap()).unwrap();
    assert_eq!(stored.len(), 1);
    assert!(PageContext::from_meta(1, &stored).show_anchors);

    let posted = json!({});
    let stored = validate_page_meta(posted.as_object().unwrap()).unwrap();
    assert!(!PageContext::from_meta(1, &stored).show_anchors);

    assert_eq!(
        PageMetabox::from_key("showanchors").map(PageMetabox::title),
        Some("Show Anchor Links")
    );
}
