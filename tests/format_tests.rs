//! Formatter contract tests.
//!
//! These pin the display-level properties the panels rely on: digit
//! grouping, short-URL linkification, timestamp rendering, and the
//! escaping the row renderer applies to backend-supplied fields.

use followdash::api::UserRecord;
use followdash::format::{
    escape_html, linkify_short_urls, to_display_timestamp, with_thousands_separators,
};
use followdash::render::{RowVariant, render_row};

// ---------------------------------------------------------------------------
// Thousands separators
// ---------------------------------------------------------------------------

#[test]
fn separators_group_digits_in_threes() {
    assert_eq!(with_thousands_separators(42), "42");
    assert_eq!(with_thousands_separators(1234567), "1,234,567");
    assert_eq!(with_thousands_separators(100), "100");
    assert_eq!(with_thousands_separators(1000), "1,000");
    assert_eq!(with_thousands_separators(10000), "10,000");
    assert_eq!(with_thousands_separators(100000), "100,000");
    assert_eq!(with_thousands_separators(1000000), "1,000,000");
}

#[test]
fn every_group_after_the_first_has_exactly_three_digits() {
    for n in [1i64, 12, 999, 5000, 123456, 9999999, 1_000_000_007] {
        let formatted = with_thousands_separators(n);
        let groups: Vec<&str> = formatted.split(',').collect();
        assert!(groups[0].len() <= 3 && !groups[0].is_empty());
        for group in &groups[1..] {
            assert_eq!(group.len(), 3, "bad grouping in {formatted}");
        }
        assert_eq!(formatted.replace(',', ""), n.to_string());
    }
}

// ---------------------------------------------------------------------------
// Short URL linkification
// ---------------------------------------------------------------------------

#[test]
fn short_url_token_becomes_anchor_with_verbatim_href() {
    let out = linkify_short_urls("profile https://t.co/Xy9 here");
    assert!(out.contains(r#"<a href="https://t.co/Xy9" target="_blank">https://t.co/Xy9</a>"#));
    assert!(out.starts_with("profile "));
    assert!(out.ends_with(" here"));
}

#[test]
fn non_matching_tokens_are_untouched() {
    let text = "plain text with https://example.com/x and t.co mention";
    assert_eq!(linkify_short_urls(text), text);
}

#[test]
fn word_order_and_spacing_survive_rejoin() {
    let text = "a b  c https://t.co/q d";
    let out = linkify_short_urls(text);
    let stripped = out
        .replace(r#"<a href="https://t.co/q" target="_blank">"#, "")
        .replace("</a>", "");
    assert_eq!(stripped, text);
}

// ---------------------------------------------------------------------------
// Timestamps
// ---------------------------------------------------------------------------

#[test]
fn backend_updated_on_renders_as_utc() {
    assert_eq!(
        to_display_timestamp("Mon, 01 Jan 2024 09:30:00 UTC"),
        "Mon, 01 Jan 2024 09:30:00 UTC"
    );
    assert_eq!(
        to_display_timestamp("2024-01-01T09:30:00+02:00"),
        "Mon, 01 Jan 2024 07:30:00 UTC"
    );
}

// ---------------------------------------------------------------------------
// Row escaping (injection defect fix)
// ---------------------------------------------------------------------------

#[test]
fn hostile_record_fields_cannot_inject_markup() {
    let record = UserRecord {
        username: r#"x" onmouseover="steal()"#.to_string(),
        name: "<img src=x onerror=alert(1)>".to_string(),
        location: "</td><td>escaped".to_string(),
        description: "<script>document.cookie</script>".to_string(),
        ..Default::default()
    };

    let row = render_row(&record, RowVariant::Report);
    assert!(!row.contains("<script>"));
    assert!(!row.contains("<img src=x"));
    assert!(!row.contains(r#"" onmouseover"#));
    assert!(row.contains("&lt;script&gt;"));
}

#[test]
fn escape_html_is_idempotent_on_clean_text() {
    assert_eq!(escape_html("plain text 123"), "plain text 123");
}
