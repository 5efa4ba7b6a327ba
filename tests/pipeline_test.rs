//! End-to-end tests for the scan, annotate and menu stages

use kodegen_tools_anchorhead::headings::{INLINE_HEADING_ATTR, scan_headings, top_link_markup};
use kodegen_tools_anchorhead::{
    FloatPosition, HeadingAnchors, PageContext, PageId, Presentation, Settings,
};
use proptest::prelude::*;
use tokio::task::JoinSet;

mod common;
use common::{TWO_HEADINGS, anchors_with_threshold, create_test_page, page_with_heading_at};

#[test]
fn test_two_heading_scenario() {
    let anchors = anchors_with_threshold(10);
    let ctx = PageContext::new(1);

    let scanned = anchors.scan_headings(TWO_HEADINGS, &ctx);
    let scan = anchors.index().get(PageId(1)).unwrap();
    assert_eq!(scan.headings.len(), 2);
    assert_eq!(scan.headings[0].text, "First");
    assert_eq!(scan.headings[1].text, "Second");
    assert!(scan.headings[0].text_begin < scan.headings[1].text_begin);
    assert_eq!(scan.block_count, 0);

    let annotated = anchors.annotate_headings(scanned, &ctx);
    assert!(annotated.contains(&format!("<h2>First</h2>{}", top_link_markup("first"))));
    assert!(annotated.contains(&format!("<h2>Second</h2>{}", top_link_markup("second"))));

    let page = anchors.build_toc_menu(&annotated, &ctx);
    let first = page.find(r##"href="#first""##).unwrap();
    let second = page.find(r##"href="#second""##).unwrap();
    assert!(first < second);
    assert_eq!(page.matches("<li>").count(), 2);
    assert!(page.starts_with("<nav"));
}

#[test]
fn test_threshold_boundary_is_strict() {
    let anchors = anchors_with_threshold(25);

    let inline = page_with_heading_at(24);
    assert_eq!(scan_headings(&inline)[0].text_begin, 24);
    let rendered = anchors.render(&inline, &PageContext::new(1));
    assert!(rendered.contains(&format!("<h2{INLINE_HEADING_ATTR}>Heading</h2><p>")));
    assert!(!rendered.contains("ah-top"));

    let anchored = page_with_heading_at(25);
    assert_eq!(scan_headings(&anchored)[0].text_begin, 25);
    let rendered = anchors.render(&anchored, &PageContext::new(2));
    assert!(rendered.contains(&format!("<h2>Heading</h2>{}", top_link_markup("heading"))));
    assert!(!rendered.contains("inline-heading"));
}

#[test]
fn test_block_elements_widen_threshold() {
    // Two divs near the top add 150 characters to a 25 character threshold
    let content = "<div>a</div><div>b</div><p>filler text</p><h2>Late</h2>";
    let settings = Settings::builder()
        .top_link_threshold(25)
        .block_elements_threshold(0)
        .build();
    let anchors = HeadingAnchors::new(settings, Presentation::default());

    let rendered = anchors.render(content, &PageContext::new(1));
    assert!(rendered.contains(r#"<h2 class="inline-heading">Late</h2>"#));
}

#[test]
fn test_scan_twice_does_not_duplicate() {
    let anchors = anchors_with_threshold(10);
    let ctx = PageContext::new(4);

    anchors.scan_headings(TWO_HEADINGS, &ctx);
    anchors.scan_headings(TWO_HEADINGS, &ctx);

    assert_eq!(anchors.index().len(), 1);
    assert_eq!(anchors.index().get(PageId(4)).unwrap().headings.len(), 2);
}

#[test]
fn test_empty_content_passes_through() {
    let anchors = anchors_with_threshold(10);
    let ctx = PageContext::new(1);

    assert_eq!(anchors.scan_headings("", &ctx), "");
    assert_eq!(anchors.annotate_headings("", &ctx), "");
    assert_eq!(anchors.build_toc_menu("", &ctx), "");
    assert_eq!(anchors.render("", &ctx), "");
}

#[test]
fn test_page_without_headings_is_untouched() {
    let anchors = anchors_with_threshold(10);
    let content = "<p>Just a paragraph</p><h3>Not level two</h3>";
    assert_eq!(anchors.render(content, &PageContext::new(1)), content);
}

#[test]
fn test_duplicate_headings_get_unique_ids() {
    let anchors = anchors_with_threshold(0);
    let content = create_test_page(&[("one", "Setup"), ("two", "Setup"), ("three", "Setup")]);

    let rendered = anchors.render(&content, &PageContext::new(1));
    for id in ["setup", "setup-2", "setup-3"] {
        assert_eq!(rendered.matches(&format!(r#"id="{id}""#)).count(), 1, "{id}");
        assert!(rendered.contains(&format!(r##"href="#{id}""##)), "{id}");
    }
}

#[test]
fn test_menu_presentation() {
    let anchors = HeadingAnchors::new(
        Settings::default(),
        Presentation::new(FloatPosition::Right, "On this page"),
    );

    let rendered = anchors.render(TWO_HEADINGS, &PageContext::new(1));
    assert!(rendered.starts_with(
        r#"<nav class="ah-toc" data-float="right"><h3 class="toc-title">On this page</h3><ol class="ah-menu">"#
    ));
}

#[test]
fn test_commented_out_heading_gets_no_anchor() {
    let anchors = anchors_with_threshold(0);
    let content = "<!-- <h2>Usage</h2> --><p>one</p><h2>Usage</h2><p>two</p>";

    let rendered = anchors.render(content, &PageContext::new(1));
    assert!(rendered.contains("<!-- <h2>Usage</h2> --><p>one</p>"));
    assert!(rendered.contains(&format!("<h2>Usage</h2>{}<p>two</p>", top_link_markup("usage"))));
    assert_eq!(rendered.matches(r#"id="usage""#).count(), 1);
}

#[test]
fn test_inline_class_lands_on_heading_with_leading_markup() {
    let anchors = HeadingAnchors::default();
    let content = r#"<h2><img src="a.png">Title</h2><p>x</p>"#;

    let rendered = anchors.render(content, &PageContext::new(1));
    assert!(rendered.ends_with(&format!(r#"<h2{INLINE_HEADING_ATTR}><img src="a.png">Title</h2><p>x</p>"#)));
}

#[test]
fn test_page_meta_switch() {
    let anchors = anchors_with_threshold(10);
    let meta = serde_json::json!({ "show-anchors": "" });
    let ctx = PageContext::from_meta(1, meta.as_object().unwrap());

    assert_eq!(anchors.render(TWO_HEADINGS, &ctx), TWO_HEADINGS);
}

#[tokio::test]
async fn test_concurrent_pages_stay_isolated() {
    let anchors = anchors_with_threshold(0);
    let mut tasks = JoinSet::new();

    for page in 1..=8u64 {
        let anchors = anchors.clone();
        tasks.spawn(async move {
            let heading = format!("Page {page} notes");
            let content = create_test_page(&[("lead", heading.as_str())]);
            let rendered = anchors
                .render_async(content, PageContext::new(page))
                .await
                .unwrap();
            (page, rendered)
        });
    }

    while let Some(joined) = tasks.join_next().await {
        let (page, rendered) = joined.unwrap();
        assert!(rendered.contains(&format!(r#"id="page-{page}-notes""#)));
        assert_eq!(rendered.matches("<li>").count(), 1);
    }

    assert!(anchors.index().is_empty());
}

fn sections() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(("[a-z ]{0,40}", "[A-Za-z]{1,12}"), 1..6)
}

proptest! {
    #[test]
    fn prop_annotated_length_is_original_plus_insertions(sections in sections()) {
        let pairs: Vec<(&str, &str)> =
            sections.iter().map(|(p, h)| (p.as_str(), h.as_str())).collect();
        let content = create_test_page(&pairs);

        let headings = scan_headings(&content);
        prop_assert_eq!(headings.len(), sections.len());

        let anchors = anchors_with_threshold(0);
        let ctx = PageContext::new(1);
        let scanned = anchors.scan_headings(&content, &ctx);
        let annotated = anchors.annotate_headings(scanned, &ctx);

        let inserted: usize = headings
            .iter()
            .map(|heading| top_link_markup(&heading.anchor_slug).len())
            .sum();
        prop_assert_eq!(annotated.len(), content.len() + inserted);

        // Anchor ids appear in document order
        let mut last = 0;
        for heading in &headings {
            let position = annotated
                .find(&format!(r#"<span id="{}">"#, heading.anchor_slug))
                .unwrap();
            prop_assert!(position >= last);
            last = position;
        }
    }
}
