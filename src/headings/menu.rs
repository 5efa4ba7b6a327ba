//! Table-of-contents menu markup

use html_escape::{decode_html_entities, encode_double_quoted_attribute, encode_text};

use super::types::Heading;
use crate::config::Presentation;

/// Menu linking to each heading's anchor, in document order.
///
/// The list sits in a `nav` wrapper that carries the float position and the
/// optional title, which is emitted only when the configured title is not
/// blank.
/// Heading text is already escaped by the scanner and is used as is.
#[must_use]
pub fn build_menu(headings: &[Heading], presentation: &Presentation) -> String {
    let mut menu = format!(
        r#"<nav class="ah-toc" data-float="{}">"#,
        presentation.float_picker()
    );

    let title = presentation.toc_title().trim();
    if !title.is_empty() {
        // Decode first so an already-escaped title is not escaped twice
        let title = encode_text(&decode_html_entities(title)).into_owned();
        menu.push_str(&format!(r#"<h3 class="toc-title">{title}</h3>"#));
    }

    menu.push_str(r#"<ol class="ah-menu">"#);
    for heading in headings {
        menu.push_str(&format!(
            r##"<li><a data-scroll href="#{}">{}</a></li>"##,
            encode_double_quoted_attribute(&heading.anchor_slug),
            heading.text
        ));
    }

    menu.push_str("</ol></nav>");
    menu
}
