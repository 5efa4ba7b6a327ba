pub mod config;
pub mod error;
pub mod frontend;
pub mod headings;
pub mod page_meta;
pub mod pipeline;
pub mod sanitize;
pub mod utils;

pub use config::{
    FloatPosition, Presentation, ScrollType, Settings, SettingsBuilder, StoredOptions,
    default_options, validate_options, validate_presentation,
};
pub use error::{AnchorheadError, AnchorheadResult, ConfigError};
pub use frontend::{Asset, AssetKind, admin_assets, customizer_assets, public_assets, smooth_scroll_init};
pub use headings::{Heading, HeadingIndex, PageId, PageScan, Placement};
pub use page_meta::{PageMetabox, show_anchors_from_meta, validate_page_meta};
pub use pipeline::{HeadingAnchors, PageContext};
pub use sanitize::{FieldType, SanitizeError, clean};
pub use utils::{ANCHORHEAD_SLUG, ANCHORHEAD_VERSION};
