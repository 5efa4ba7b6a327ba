//! Test utilities and helper functions for the anchorhead test suite

use anyhow::Result;
use kodegen_tools_anchorhead::{HeadingAnchors, Presentation, Settings};
use tempfile::TempDir;

/// Two-heading page used across scenarios
#[allow(dead_code)]
pub const TWO_HEADINGS: &str = "<p>intro</p><h2>First</h2><p>body</p><h2>Second</h2>";

/// Creates a temporary directory for test output
#[allow(dead_code)]
pub fn create_test_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Pipeline with the given top-link threshold and a 500-character block
/// window
#[allow(dead_code)]
pub fn anchors_with_threshold(top_link_threshold: u64) -> HeadingAnchors {
    let settings = Settings::builder()
        .top_link_threshold(top_link_threshold)
        .block_elements_threshold(500)
        .build();
    HeadingAnchors::new(settings, Presentation::default())
}

/// Page whose first `<h2>` closes its opening tag at byte `offset`
#[allow(dead_code)]
pub fn page_with_heading_at(offset: usize) -> String {
    // "<p>" + filler + "</p>" + "<h2"
    let filler = "x".repeat(offset - 10);
    format!("<p>{filler}</p><h2>Heading</h2><p>after</p>")
}

/// Builds a page from (paragraph, heading) pairs
#[allow(dead_code)]
pub fn create_test_page(sections: &[(&str, &str)]) -> String {
    sections
        .iter()
        .map(|(paragraph, heading)| format!("<p>{paragraph}</p><h2>{heading}</h2>"))
        .collect()
}
