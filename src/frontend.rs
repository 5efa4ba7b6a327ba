//! Browser-side glue: the smooth-scroll initialisation snippet and the
//! stylesheets and scripts the host enqueues.

use html_escape::encode_safe;
use url::Url;

use crate::config::Settings;
use crate::utils::{ANCHORHEAD_SLUG, ANCHORHEAD_VERSION};

/// Inline script starting the smooth-scroll library with the stored easing
/// and speed, plus the link selector when one is configured.
#[must_use]
pub fn smooth_scroll_init(settings: &Settings) -> String {
    let mut entries = vec![
        format!("easing: '{}'", encode_safe(settings.scroll_type().as_str())),
        format!("speed: '{}'", settings.scroll_speed()),
    ];

    if let Some(selector) = settings.content_selector() {
        entries.push(format!("selector: '{}'", encode_safe(selector)));
    }

    format!("<script>smoothScroll.init({{{}}});</script>", entries.join(", "))
}

/// What kind of asset a handle refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Style { media: &'static str },
    Script { in_footer: bool },
}

/// One enqueued stylesheet or script
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub handle: String,
    pub src: Url,
    pub dependencies: &'static [&'static str],
    pub version: &'static str,
    pub kind: AssetKind,
}

impl Asset {
    fn new(
        base_url: &Url,
        handle: String,
        path: &str,
        dependencies: &'static [&'static str],
        kind: AssetKind,
    ) -> Result<Self, url::ParseError> {
        Ok(Self {
            handle,
            src: base_url.join(path)?,
            dependencies,
            version: ANCHORHEAD_VERSION,
            kind,
        })
    }
}

/// Assets for public pages.
///
/// # Errors
///
/// Fails when an asset path cannot be joined onto `base_url`.
pub fn public_assets(base_url: &Url) -> Result<Vec<Asset>, url::ParseError> {
    Ok(vec![
        Asset::new(
            base_url,
            format!("{ANCHORHEAD_SLUG}-public"),
            "assets/css/anchorhead-public.css",
            &[],
            AssetKind::Style { media: "all" },
        )?,
        Asset::new(
            base_url,
            format!("{ANCHORHEAD_SLUG}-smooth-scroll"),
            "assets/js/anchorhead-public.min.js",
            &[],
            AssetKind::Script { in_footer: false },
        )?,
    ])
}

/// Assets for the settings screens.
///
/// # Errors
///
/// Fails when an asset path cannot be joined onto `base_url`.
pub fn admin_assets(base_url: &Url) -> Result<Vec<Asset>, url::ParseError> {
    Ok(vec![
        Asset::new(
            base_url,
            ANCHORHEAD_SLUG.to_string(),
            "assets/css/anchorhead-admin.css",
            &[],
            AssetKind::Style { media: "all" },
        )?,
        Asset::new(
            base_url,
            ANCHORHEAD_SLUG.to_string(),
            "assets/js/anchorhead-admin.min.js",
            &["jquery"],
            AssetKind::Script { in_footer: true },
        )?,
    ])
}

/// Live-preview script for the theme customizer.
///
/// # Errors
///
/// Fails when the asset path cannot be joined onto `base_url`.
pub fn customizer_assets(base_url: &Url) -> Result<Vec<Asset>, url::ParseError> {
    Ok(vec![Asset::new(
        base_url,
        format!("{ANCHORHEAD_SLUG}-customizer"),
        "assets/js/anchorhead-customizer.min.js",
        &["jquery", "customize-preview"],
        AssetKind::Script { in_footer: true },
    )?])
}
