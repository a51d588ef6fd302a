//! Backend data contract — the JSON payloads the followme service serves
//! and the typed errors a fetch can produce.
//!
//! The shapes here are fixed by the backend; field names (including the
//! camelCase pagination flags) must not drift. Series objects are
//! insertion-ordered by date, which is why the crate enables serde_json's
//! `preserve_order` feature — chart label/value alignment is positional.

pub mod client;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use client::{ApiClient, Backend};

// ---------------------------------------------------------------------------
// Listing kinds
// ---------------------------------------------------------------------------

/// Discriminator selecting which subset of a day's events a table shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListKind {
    /// Accounts that started following you.
    #[default]
    Followed,
    /// Accounts that stopped following you.
    Unfollowed,
    /// Accounts you started following.
    Friended,
    /// Accounts you stopped following.
    Unfriended,
}

impl ListKind {
    /// The path segment / query value the backend expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Followed => "followed",
            Self::Unfollowed => "unfollowed",
            Self::Friended => "friended",
            Self::Unfriended => "unfriended",
        }
    }

    /// Parse a user- or query-supplied listing kind, case/space tolerant.
    pub fn parse(s: &str) -> Option<Self> {
        match crate::format::normalize(s).as_str() {
            "followed" => Some(Self::Followed),
            "unfollowed" => Some(Self::Unfollowed),
            "friended" => Some(Self::Friended),
            "unfriended" => Some(Self::Unfriended),
            _ => None,
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// One user-centric record, shared by the day-event and report responses.
///
/// Identity is the username. Rows rendered from a record have no lifecycle
/// of their own — they are discarded and re-created on every refresh.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRecord {
    pub username: String,
    pub name: String,
    pub location: String,
    pub description: String,
    pub profile_image: String,
    pub updated_at: String,
    pub friend_count: i64,
    pub followers_count: i64,
    pub post_count: i64,
    pub listed_count: i64,
    /// Follow/unfollow direction flag, only present on day-event rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_relation: Option<String>,
}

// ---------------------------------------------------------------------------
// Dashboard snapshot
// ---------------------------------------------------------------------------

/// An insertion-ordered date-label → number mapping.
///
/// The backend guarantees equal-length, same-ordered series for a snapshot;
/// no client-side alignment or validation is performed.
pub type Series = serde_json::Map<String, serde_json::Value>;

/// Aggregate counters for the snapshot period.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AccountState {
    pub follower_count: i64,
    pub friend_count: i64,
    pub new_follower_count: i64,
    pub new_unfollower_count: i64,
}

/// The time-indexed series attached to a snapshot.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DashboardSeries {
    pub all_followers: Series,
    pub new_followers: Series,
    pub lost_followers: Series,
    pub avg_followers: Series,
    pub avg_total: Series,
    pub all_friends: Series,
    pub new_friends: Series,
    pub lost_friends: Series,
}

/// The whole aggregate dashboard payload for a period.
///
/// Read-only: the frontend re-fetches the entire snapshot on every period
/// change instead of patching it incrementally.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DashboardSnapshot {
    pub state: AccountState,
    pub user: UserRecord,
    pub updated_on: String,
    pub days: i64,
    pub series: DashboardSeries,
}

// ---------------------------------------------------------------------------
// Paginated pages
// ---------------------------------------------------------------------------

/// Response of `/data/day/{date}/list/{listType}/page/{page}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DayPage {
    pub events: Vec<UserRecord>,
    #[serde(rename = "pagePrev")]
    pub page_prev: i64,
    #[serde(rename = "pageNext")]
    pub page_next: i64,
    #[serde(rename = "hasPrev")]
    pub has_prev: bool,
    #[serde(rename = "hasNext")]
    pub has_next: bool,
    #[serde(rename = "followVerb")]
    pub follow_verb: Option<String>,
}

/// Response of `/data/report/{lastID}` — a forward-only cursor page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReportPage {
    pub list: Vec<UserRecord>,
    #[serde(rename = "lastID")]
    pub last_id: i64,
    #[serde(rename = "hasMore")]
    pub has_more: bool,
}

// ---------------------------------------------------------------------------
// Fetch errors
// ---------------------------------------------------------------------------

/// Structured error body the backend attaches to failed JSON requests.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ErrorBody {
    pub message: String,
    pub status: String,
}

/// Why a fetch produced no usable payload.
#[derive(Debug)]
pub enum FetchError {
    /// No HTTP response at all — transport failure or undecodable body.
    Network(String),
    /// The backend answered with a non-2xx status, possibly with a
    /// structured error body.
    Http { status: u16, body: Option<ErrorBody> },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(reason) => write!(f, "network failure: {reason}"),
            Self::Http { status, body: Some(b) } => {
                write!(f, "http {status}: {}", b.message)
            }
            Self::Http { status, body: None } => write!(f, "http {status}"),
        }
    }
}

impl std::error::Error for FetchError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_kind_parses_tolerantly() {
        assert_eq!(ListKind::parse("followed"), Some(ListKind::Followed));
        assert_eq!(ListKind::parse(" Unfollowed "), Some(ListKind::Unfollowed));
        assert_eq!(ListKind::parse("FRIENDED"), Some(ListKind::Friended));
        assert_eq!(ListKind::parse("unfriended"), Some(ListKind::Unfriended));
        assert_eq!(ListKind::parse("everyone"), None);
    }

    #[test]
    fn day_page_deserializes_camel_case_flags() {
        let json = r#"{
            "events": [{"username": "alice", "followers_count": 12}],
            "pagePrev": 0, "pageNext": 2,
            "hasPrev": false, "hasNext": true,
            "followVerb": "they followed you"
        }"#;
        let page: DayPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.events.len(), 1);
        assert_eq!(page.events[0].username, "alice");
        assert_eq!(page.events[0].followers_count, 12);
        assert!(!page.has_prev);
        assert!(page.has_next);
        assert_eq!(page.page_next, 2);
        assert_eq!(page.follow_verb.as_deref(), Some("they followed you"));
    }

    #[test]
    fn day_page_tolerates_missing_fields() {
        let page: DayPage = serde_json::from_str("{}").unwrap();
        assert!(page.events.is_empty());
        assert!(!page.has_next);
    }

    #[test]
    fn report_page_deserializes() {
        let json = r#"{"list": [{"username": "bob"}], "lastID": 42, "hasMore": true}"#;
        let page: ReportPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.list.len(), 1);
        assert_eq!(page.last_id, 42);
        assert!(page.has_more);
    }

    #[test]
    fn snapshot_series_preserve_insertion_order() {
        let json = r#"{
            "state": {"follower_count": 10},
            "series": {
                "new_followers": {"2024-01-02": 5, "2024-01-01": 3, "2024-01-03": 1}
            }
        }"#;
        let snap: DashboardSnapshot = serde_json::from_str(json).unwrap();
        let labels: Vec<&str> = snap.series.new_followers.keys().map(String::as_str).collect();
        assert_eq!(labels, ["2024-01-02", "2024-01-01", "2024-01-03"]);
    }

    #[test]
    fn fetch_error_display() {
        let e = FetchError::Http {
            status: 500,
            body: Some(ErrorBody {
                message: "boom".into(),
                status: "Error".into(),
            }),
        };
        assert_eq!(e.to_string(), "http 500: boom");
        assert_eq!(FetchError::Network("refused".into()).to_string(), "network failure: refused");
    }
}
