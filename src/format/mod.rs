//! Display formatting — pure functions with no side effects.
//!
//! Everything the views print goes through here: thousands-separated
//! counters, human-readable UTC timestamps, short-URL hyperlinking, and
//! HTML escaping for interpolated record fields.

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;

/// Prefix of the shortened URLs the backend leaves inside profile
/// descriptions. Tokens starting with this are turned into anchors.
pub const SHORT_URL_PREFIX: &str = "https://t.co/";

// ---------------------------------------------------------------------------
// Numbers
// ---------------------------------------------------------------------------

/// Insert thousands separators into an integer: `1234567` → `"1,234,567"`.
///
/// Negative values keep their sign in front of the first group.
pub fn with_thousands_separators(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if n < 0 {
        out.push('-');
    }

    let first = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - first) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

// ---------------------------------------------------------------------------
// Timestamps
// ---------------------------------------------------------------------------

/// Render a backend timestamp as a human-readable UTC time.
///
/// The backend emits RFC 1123 (`Mon, 02 Jan 2006 15:04:05 UTC`) for
/// `updated_on` and RFC 3339 for record fields; epoch seconds are accepted
/// as well. Unparseable input is returned verbatim — display never fails.
pub fn to_display_timestamp(value: &str) -> String {
    match parse_timestamp(value) {
        Some(t) => t.format("%a, %d %b %Y %H:%M:%S UTC").to_string(),
        None => value.to_string(),
    }
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(t) = DateTime::parse_from_rfc3339(value) {
        return Some(t.with_timezone(&Utc));
    }

    // RFC 1123 with a "UTC"/"GMT" zone name; rfc2822 parsing covers the
    // rest of the format once the zone is numeric.
    let numeric_zone = value.replace(" UTC", " +0000").replace(" GMT", " +0000");
    if let Ok(t) = DateTime::parse_from_rfc2822(&numeric_zone) {
        return Some(t.with_timezone(&Utc));
    }

    if let Ok(epoch) = value.parse::<i64>() {
        return DateTime::from_timestamp(epoch, 0);
    }

    None
}

/// Format a point in time as an ISO date (`YYYY-MM-DD`), the key format the
/// backend uses for daily series and the `/data/day/{date}` path segment.
pub fn to_iso_date(t: DateTime<Utc>) -> String {
    t.format("%Y-%m-%d").to_string()
}

// ---------------------------------------------------------------------------
// Short URLs
// ---------------------------------------------------------------------------

fn short_url_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^https://t\.co/\S+$").expect("valid short-url regex"))
}

/// Wrap shortened-URL tokens in anchors, leaving everything else untouched.
///
/// The text is split on single spaces and rejoined the same way, so word
/// order and spacing survive the round trip. The anchor href is the token
/// verbatim.
pub fn linkify_short_urls(text: &str) -> String {
    text.split(' ')
        .map(|token| {
            if short_url_re().is_match(token) {
                format!(r#"<a href="{token}" target="_blank">{token}</a>"#)
            } else {
                token.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ---------------------------------------------------------------------------
// HTML escaping
// ---------------------------------------------------------------------------

/// Escape a record field for interpolation into row markup.
///
/// The backend does not sanitize usernames or descriptions, so every field
/// the row renderer interpolates must pass through here first.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Strings
// ---------------------------------------------------------------------------

/// Make a value comparable regardless of case or surrounding whitespace.
pub fn normalize(val: &str) -> String {
    val.trim().to_lowercase()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_groups_of_three() {
        assert_eq!(with_thousands_separators(0), "0");
        assert_eq!(with_thousands_separators(42), "42");
        assert_eq!(with_thousands_separators(999), "999");
        assert_eq!(with_thousands_separators(1000), "1,000");
        assert_eq!(with_thousands_separators(1234567), "1,234,567");
    }

    #[test]
    fn thousands_keeps_sign() {
        assert_eq!(with_thousands_separators(-7), "-7");
        assert_eq!(with_thousands_separators(-1000), "-1,000");
        assert_eq!(with_thousands_separators(-1234567), "-1,234,567");
    }

    #[test]
    fn timestamp_parses_rfc3339() {
        assert_eq!(
            to_display_timestamp("2020-12-30T11:45:26Z"),
            "Wed, 30 Dec 2020 11:45:26 UTC"
        );
    }

    #[test]
    fn timestamp_parses_rfc1123() {
        // what the backend's updated_on field looks like
        assert_eq!(
            to_display_timestamp("Wed, 30 Dec 2020 11:45:26 UTC"),
            "Wed, 30 Dec 2020 11:45:26 UTC"
        );
    }

    #[test]
    fn timestamp_parses_epoch_seconds() {
        assert_eq!(
            to_display_timestamp("1609328726"),
            "Wed, 30 Dec 2020 11:45:26 UTC"
        );
    }

    #[test]
    fn timestamp_passes_through_garbage() {
        assert_eq!(to_display_timestamp("not a time"), "not a time");
        assert_eq!(to_display_timestamp(""), "");
    }

    #[test]
    fn iso_date_format() {
        let t = DateTime::parse_from_rfc3339("2020-12-30T11:45:26Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(to_iso_date(t), "2020-12-30");
    }

    #[test]
    fn linkify_wraps_short_url_tokens() {
        let out = linkify_short_urls("see https://t.co/abc123 for more");
        assert_eq!(
            out,
            r#"see <a href="https://t.co/abc123" target="_blank">https://t.co/abc123</a> for more"#
        );
    }

    #[test]
    fn linkify_leaves_other_tokens_alone() {
        assert_eq!(
            linkify_short_urls("no links here http://example.com"),
            "no links here http://example.com"
        );
    }

    #[test]
    fn linkify_preserves_spacing() {
        assert_eq!(linkify_short_urls("a  b"), "a  b");
        assert_eq!(linkify_short_urls(""), "");
    }

    #[test]
    fn escape_html_covers_markup_characters() {
        assert_eq!(
            escape_html(r#"<img src="x" onerror='y'> & co"#),
            "&lt;img src=&quot;x&quot; onerror=&#39;y&#39;&gt; &amp; co"
        );
    }

    #[test]
    fn normalize_lowercases_and_trims() {
        assert_eq!(normalize("  FolLowed "), "followed");
    }
}
