//! Per-row input sanitization.
//!
//! # Responsibility
//! - Normalize one raw row into a `SanitizedRow`.
//!
//! # Invariants
//! - Sanitization is total: it never fails and never panics.
//! - Missing fields degrade to empty strings (`is_new` to `false`).
//! - Only `description` may keep markup, limited to inline formatting tags.

use crate::input::row::{
    raw_field, RawRow, SanitizedRow, COLUMN_DESCRIPTION, COLUMN_IS_NEW, COLUMN_NAME,
    COLUMN_QUADRANT, COLUMN_RING, COLUMN_TOPIC,
};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

const DESCRIPTION_ALLOWED_TAGS: &[&str] = &[
    "b", "i", "em", "strong", "a", "p", "br", "ul", "ol", "li",
];
const ALLOWED_LINK_SCHEMES: &[&str] = &["http", "https", "mailto"];
const QUOTE_CHARS: &[char] = &['"', '\''];
const MAX_STRIP_PASSES: usize = 16;

static SCRIPT_BLOCK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<(script|style)\b[^>]*>.*?</(script|style)\s*>").expect("valid script regex")
});
static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<(/?)([a-zA-Z][a-zA-Z0-9]*)\b[^>]*>").expect("valid tag regex"));
static HREF_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\bhref\s*=\s*("[^"]*"|'[^']*')"#).expect("valid href regex")
});

/// Sanitizes one raw row.
pub fn sanitize(raw: &RawRow) -> SanitizedRow {
    let field = |column: &str| raw_field(raw, column).unwrap_or_default();

    SanitizedRow {
        name: clean_text(field(COLUMN_NAME)),
        ring: clean_text(field(COLUMN_RING)),
        quadrant: clean_text(field(COLUMN_QUADRANT)),
        is_new: parse_is_new(field(COLUMN_IS_NEW)),
        topic: clean_text(field(COLUMN_TOPIC)),
        description: clean_description(field(COLUMN_DESCRIPTION)),
    }
}

/// Returns `true` only for a case-insensitive `true` literal.
pub fn parse_is_new(raw: &str) -> bool {
    trim_noise(raw).eq_ignore_ascii_case("true")
}

/// Strips all markup and surrounding noise from a plain-text field.
pub fn clean_text(raw: &str) -> String {
    let plain = strip_until_stable(raw, |text| TAG_RE.replace_all(text, "").into_owned());
    trim_noise(&plain).to_string()
}

/// Keeps allow-listed inline tags (without attributes, except a safe `a href`).
pub fn clean_description(raw: &str) -> String {
    let filtered = strip_until_stable(raw, |text| {
        TAG_RE
            .replace_all(text, |caps: &Captures<'_>| filter_tag(caps))
            .into_owned()
    });
    trim_noise(&filtered).to_string()
}

/// Repeats script-block removal plus `pass` until the text stops changing.
///
/// Removing an inner tag can splice the remainder into a new tag
/// (`<<b>script>`), so a single pass is not enough.
fn strip_until_stable(raw: &str, pass: impl Fn(&str) -> String) -> String {
    let mut current = raw.to_string();
    for _ in 0..MAX_STRIP_PASSES {
        let without_scripts = SCRIPT_BLOCK_RE.replace_all(&current, "");
        let next = pass(&*without_scripts);
        if next == current {
            return current;
        }
        current = next;
    }
    current.replace(['<', '>'], "")
}

fn filter_tag(caps: &Captures<'_>) -> String {
    let closing = &caps[1];
    let tag = caps[2].to_ascii_lowercase();
    if !DESCRIPTION_ALLOWED_TAGS.contains(&tag.as_str()) {
        return String::new();
    }
    if !closing.is_empty() {
        return format!("</{tag}>");
    }
    if tag == "a" {
        let href = HREF_RE
            .captures(&caps[0])
            .and_then(|href| safe_href(href[1].trim_matches(QUOTE_CHARS)));
        if let Some(href) = href {
            return format!("<a href=\"{href}\">");
        }
    }
    format!("<{tag}>")
}

/// Accepts relative links and `http`, `https`, `mailto` URLs.
///
/// Whitespace and control characters are removed before the scheme check;
/// an `&` ahead of the path could hide an entity-encoded scheme and is rejected.
fn safe_href(value: &str) -> Option<String> {
    let compact: String = value
        .chars()
        .filter(|c| !c.is_control() && !c.is_whitespace())
        .collect();
    if compact.is_empty() {
        return None;
    }
    let head_end = compact
        .find(['/', '?', '#'])
        .unwrap_or(compact.len());
    let head = &compact[..head_end];
    if head.contains('&') {
        return None;
    }
    if let Some(colon) = head.find(':') {
        let scheme = head[..colon].to_ascii_lowercase();
        if !ALLOWED_LINK_SCHEMES.contains(&scheme.as_str()) {
            return None;
        }
    }
    Some(compact.replace('"', "&quot;"))
}

/// Trims whitespace and one matched pair of surrounding quotes.
fn trim_noise(raw: &str) -> &str {
    let trimmed = raw.trim();
    for quote in QUOTE_CHARS {
        if trimmed.len() >= 2 && trimmed.starts_with(*quote) && trimmed.ends_with(*quote) {
            return trimmed[1..trimmed.len() - 1].trim();
        }
    }
    trimmed
}

#[cfg(test)]
mod tests {
    use super::{clean_description, clean_text, parse_is_new, sanitize, trim_noise};
    use crate::input::row::{RawRow, SanitizedRow};

    fn row(pairs: &[(&str, &str)]) -> RawRow {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn is_new_accepts_only_true_literal() {
        for value in ["true", "True", "TRUE", " true ", "\"true\""] {
            assert!(parse_is_new(value), "`{value}` should be new");
        }
        for value in ["false", "", "yes", "1", "truthy"] {
            assert!(!parse_is_new(value), "`{value}` should not be new");
        }
    }

    #[test]
    fn trim_noise_strips_matched_quotes_only() {
        assert_eq!(trim_noise("  \"Adopt\" "), "Adopt");
        assert_eq!(trim_noise("'Trial'"), "Trial");
        assert_eq!(trim_noise("\"Hold"), "\"Hold");
        assert_eq!(trim_noise("\""), "\"");
    }

    #[test]
    fn clean_text_removes_markup_and_scripts() {
        assert_eq!(clean_text("<b>Rust</b>"), "Rust");
        assert_eq!(clean_text("Go<script>alert(1)</script>"), "Go");
        assert_eq!(clean_text("a < b"), "a < b");
        assert_eq!(clean_text("Go<STYLE type=\"text/css\">p { color: red }</style>"), "Go");
        assert_eq!(clean_text("<i>observability</i> <span>tooling</span>"), "observability tooling");
    }

    #[test]
    fn clean_text_removes_tags_rebuilt_by_stripping() {
        let name = clean_text("<<b>script>alert(1)<</b>/script>");
        assert!(!name.contains('<'), "got `{name}`");
        assert_eq!(clean_text("<<i>b>bold<</i>/b>"), "bold");
    }

    #[test]
    fn clean_description_keeps_inline_formatting() {
        assert_eq!(
            clean_description("<p class=\"x\">Use <strong>it</strong></p><img src=x>"),
            "<p>Use <strong>it</strong></p>"
        );
        assert_eq!(
            clean_description("<a href='https://example.com' onclick='x()'>docs</a>"),
            "<a href=\"https://example.com\">docs</a>"
        );
        assert_eq!(
            clean_description("<a href=\"javascript:alert(1)\">x</a>"),
            "<a>x</a>"
        );
        assert_eq!(
            clean_description("<B>Bold</B><BR><Em>x</EM>"),
            "<b>Bold</b><br><em>x</em>"
        );
        assert_eq!(
            clean_description("intro<style>.x { display: none }</style><p>body</p>"),
            "intro<p>body</p>"
        );
    }

    #[test]
    fn clean_description_drops_tags_rebuilt_by_stripping() {
        let description = clean_description("<<x>img src=x onerror=alert(1)>");
        assert!(!description.contains("<img"), "got `{description}`");
        assert!(!description.contains("onerror"), "got `{description}`");
        assert_eq!(
            clean_description("<<u>script>alert(1)<</u>/script><p>ok</p>"),
            "<p>ok</p>"
        );
    }

    #[test]
    fn links_keep_only_safe_schemes() {
        for href in [
            "vbscript:msgbox(1)",
            "data:text/html;base64,PHNjcmlwdD4=",
            "java\tscript:alert(1)",
            " JAVASCRIPT:alert(1)",
            "javascript&#58;alert(1)",
        ] {
            let html = format!("<a href=\"{href}\">x</a>");
            assert_eq!(clean_description(&html), "<a>x</a>", "href `{href}`");
        }
        for (href, kept) in [
            ("HTTPS://example.com/a?b#c", "HTTPS://example.com/a?b#c"),
            ("mailto:team@example.com", "mailto:team@example.com"),
            ("/radar/tools", "/radar/tools"),
            ("notes.html#adopt", "notes.html#adopt"),
        ] {
            let html = format!("<a href='{href}'>x</a>");
            assert_eq!(
                clean_description(&html),
                format!("<a href=\"{kept}\">x</a>"),
                "href `{href}`"
            );
        }
    }

    #[test]
    fn sanitize_defaults_missing_optional_fields() {
        let sanitized = sanitize(&row(&[
            ("name", " Rust "),
            ("ring", "Adopt"),
            ("quadrant", "languages"),
            ("isNew", "TRUE"),
        ]));
        assert_eq!(sanitized.name, "Rust");
        assert_eq!(sanitized.ring, "Adopt");
        assert_eq!(sanitized.quadrant, "languages");
        assert!(sanitized.is_new);
        assert_eq!(sanitized.topic, "");
        assert_eq!(sanitized.description, "");
    }

    #[test]
    fn sanitize_is_total_for_empty_row() {
        let sanitized = sanitize(&RawRow::new());
        assert_eq!(sanitized, SanitizedRow::default());
    }
}
