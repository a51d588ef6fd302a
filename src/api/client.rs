//! Synchronous HTTP client for the followme JSON endpoints.
//!
//! The [`Backend`] trait is the seam between the controllers and the wire:
//! production code talks to [`ApiClient`] (ureq), tests substitute a stub
//! with canned pages.

use std::time::Duration;

use serde::de::DeserializeOwned;

use super::{DashboardSnapshot, DayPage, ErrorBody, FetchError, ListKind, ReportPage};

// ---------------------------------------------------------------------------
// Backend seam
// ---------------------------------------------------------------------------

/// The three fetches the dashboard frontend performs.
pub trait Backend {
    /// `GET /data/dash?days={N}` — the aggregate snapshot for a period.
    fn fetch_dashboard(&self, days: u32) -> Result<DashboardSnapshot, FetchError>;

    /// `GET /data/day/{date}/list/{listType}/page/{page}` — one page of a
    /// day's events.
    fn fetch_day(&self, date: &str, list: ListKind, page: i64) -> Result<DayPage, FetchError>;

    /// `GET /data/report/{lastID}` — the next page of the contact report.
    fn fetch_report(&self, last_id: i64) -> Result<ReportPage, FetchError>;
}

// ---------------------------------------------------------------------------
// Path construction
// ---------------------------------------------------------------------------

/// Exact backend paths; these are a compatibility contract.
pub fn dash_path(days: u32) -> String {
    format!("/data/dash?days={days}")
}

pub fn day_path(date: &str, list: ListKind, page: i64) -> String {
    format!("/data/day/{date}/list/{list}/page/{page}")
}

pub fn report_path(last_id: i64) -> String {
    format!("/data/report/{last_id}")
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// ureq-backed [`Backend`] implementation.
///
/// Cheap to construct — hosts build one per command or per incoming web
/// request rather than caching it.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    timeout: Duration,
}

impl ApiClient {
    /// Build a client for the given backend base URL.
    pub fn new(base_url: &str, timeout_ms: u64) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_millis(timeout_ms),
        }
    }

    /// The configured base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, path);

        let response = match ureq::get(&url).timeout(self.timeout).call() {
            Ok(resp) => resp,
            Err(ureq::Error::Status(status, resp)) => {
                // Structured error bodies carry the server's message.
                let body = resp.into_json::<ErrorBody>().ok();
                return Err(FetchError::Http { status, body });
            }
            Err(ureq::Error::Transport(t)) => {
                return Err(FetchError::Network(t.to_string()));
            }
        };

        response
            .into_json::<T>()
            .map_err(|e| FetchError::Network(format!("undecodable response body: {e}")))
    }
}

impl Backend for ApiClient {
    fn fetch_dashboard(&self, days: u32) -> Result<DashboardSnapshot, FetchError> {
        self.get_json(&dash_path(days))
    }

    fn fetch_day(&self, date: &str, list: ListKind, page: i64) -> Result<DayPage, FetchError> {
        self.get_json(&day_path(date, list, page))
    }

    fn fetch_report(&self, last_id: i64) -> Result<ReportPage, FetchError> {
        self.get_json(&report_path(last_id))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_match_backend_contract() {
        assert_eq!(dash_path(7), "/data/dash?days=7");
        assert_eq!(
            day_path("2024-01-02", ListKind::Unfollowed, 3),
            "/data/day/2024-01-02/list/unfollowed/page/3"
        );
        assert_eq!(report_path(0), "/data/report/0");
        assert_eq!(report_path(991), "/data/report/991");
    }

    #[test]
    fn client_strips_trailing_slash() {
        let client = ApiClient::new("http://localhost:8080/", 5000);
        assert_eq!(client.base_url(), "http://localhost:8080");
    }
}
