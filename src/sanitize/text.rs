//! Text-like field cleaning: free text, textarea, email and url

use html_escape::encode_text;
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

static SCRIPT_STYLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b.*?(?:</script\s*>|\z)|<style\b.*?(?:</style\s*>|\z)")
        .expect("SCRIPT_STYLE_RE: hardcoded regex is valid")
});

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("TAG_RE: hardcoded regex is valid"));

static WHITESPACE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN_RE: hardcoded regex is valid"));

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)+$")
        .expect("EMAIL_RE: hardcoded regex is valid")
});

const ALLOWED_URL_SCHEMES: [&str; 4] = ["http", "https", "mailto", "ftp"];

/// Single-line text: script and style elements dropped with their contents,
/// remaining tags stripped, whitespace collapsed, trimmed, escaped
#[must_use]
pub fn clean_text(raw: &str) -> String {
    let without_code = SCRIPT_STYLE_RE.replace_all(raw, "");
    let stripped = TAG_RE.replace_all(&without_code, "");
    let collapsed = WHITESPACE_RUN_RE.replace_all(&stripped, " ");
    encode_text(collapsed.trim()).into_owned()
}

/// Multi-line text: trimmed and escaped, line breaks kept
#[must_use]
pub fn clean_textarea(raw: &str) -> String {
    encode_text(raw.trim()).into_owned()
}

/// Email address: trimmed. Anything that is not a plausible address cleans
/// to the empty string.
#[must_use]
pub fn clean_email(raw: &str) -> String {
    let trimmed = raw.trim();
    if EMAIL_RE.is_match(trimmed) {
        trimmed.to_string()
    } else {
        log::debug!("Rejected malformed email value");
        String::new()
    }
}

/// Absolute url with an allowed scheme, otherwise the empty string
#[must_use]
pub fn clean_url(raw: &str) -> String {
    let trimmed = raw.trim();
    match Url::parse(trimmed) {
        Ok(url) if ALLOWED_URL_SCHEMES.contains(&url.scheme()) => url.to_string(),
        Ok(url) => {
            log::debug!("Rejected url with scheme '{}'", url.scheme());
            String::new()
        }
        Err(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text() {
        assert_eq!(clean_text("  Table of   Contents \n"), "Table of Contents");
        assert_eq!(clean_text("<script>x</script>On this page"), "On this page");
        assert_eq!(clean_text("<STYLE type=\"text/css\">p{}</style>Title"), "Title");
        assert_eq!(clean_text("Title<script>never closed"), "Title");
        assert_eq!(clean_text("Q&A"), "Q&amp;A");
    }

    #[test]
    fn test_clean_textarea_keeps_newlines() {
        assert_eq!(clean_textarea(" a\nb < c "), "a\nb &lt; c");
    }

    #[test]
    fn test_clean_email() {
        assert_eq!(clean_email(" test@test.com"), "test@test.com");
        assert_eq!(clean_email("test@test.com "), "test@test.com");
        assert_eq!(clean_email("a"), "");
        assert_eq!(clean_email("a@b"), "");
    }

    #[test]
    fn test_clean_url() {
        assert_eq!(clean_url(" https://example.com/docs "), "https://example.com/docs");
        assert_eq!(clean_url("javascript:alert(1)"), "");
        assert_eq!(clean_url("/relative"), "");
    }
}
