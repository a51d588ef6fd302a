//! Unified failure policy for all fetches.
//!
//! The original frontend handled failures three different ways across its
//! script revisions (silent console log, forced logout, inline banner).
//! This module is the single deterministic policy that replaces them:
//! authentication failures force a navigation, structured server errors
//! surface the server's own message inline, and everything else shows a
//! fixed fallback banner.

use crate::api::FetchError;

/// Fallback banner for failures without a usable server message.
pub const FALLBACK_MESSAGE: &str = "Error loading data, see logs for details.";

/// Default re-authentication path on the backend.
pub const DEFAULT_LOGOUT_PATH: &str = "/auth/logout";

/// What a host should do after a load attempt failed (or was superseded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Nothing user-visible; the event was only worth a log line. Produced
    /// for responses discarded by the last-request-wins rule.
    LogOnly,
    /// Show this message in the panel's inline error banner.
    ShowBanner(String),
    /// Navigate away, e.g. to the logout/re-auth path.
    Redirect(String),
}

/// Maps a [`FetchError`] to the [`Action`] hosts must take.
#[derive(Debug, Clone)]
pub struct ErrorPolicy {
    logout_path: String,
}

impl Default for ErrorPolicy {
    fn default() -> Self {
        Self {
            logout_path: DEFAULT_LOGOUT_PATH.to_string(),
        }
    }
}

impl ErrorPolicy {
    /// Policy with a configured logout path.
    pub fn new(logout_path: &str) -> Self {
        Self {
            logout_path: logout_path.to_string(),
        }
    }

    /// Decide the user-visible consequence of a failed fetch.
    ///
    /// 401 → redirect to the logout path; a structured error body → banner
    /// with the server's message; anything else → the fixed fallback banner.
    pub fn handle(&self, err: &FetchError) -> Action {
        match err {
            FetchError::Http { status: 401, .. } => Action::Redirect(self.logout_path.clone()),
            FetchError::Http { body: Some(body), .. } if !body.message.is_empty() => {
                Action::ShowBanner(body.message.clone())
            }
            _ => Action::ShowBanner(FALLBACK_MESSAGE.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ErrorBody;

    #[test]
    fn auth_failure_redirects_to_logout() {
        let policy = ErrorPolicy::default();
        let err = FetchError::Http { status: 401, body: None };
        assert_eq!(policy.handle(&err), Action::Redirect("/auth/logout".into()));
    }

    #[test]
    fn auth_failure_uses_configured_path() {
        let policy = ErrorPolicy::new("/logout");
        let err = FetchError::Http {
            status: 401,
            body: Some(ErrorBody {
                message: "Unauthorized, please login again.".into(),
                status: "Error".into(),
            }),
        };
        // 401 wins over the structured body
        assert_eq!(policy.handle(&err), Action::Redirect("/logout".into()));
    }

    #[test]
    fn server_error_shows_its_message() {
        let policy = ErrorPolicy::default();
        let err = FetchError::Http {
            status: 500,
            body: Some(ErrorBody {
                message: "boom".into(),
                status: "Error".into(),
            }),
        };
        assert_eq!(policy.handle(&err), Action::ShowBanner("boom".into()));
    }

    #[test]
    fn network_failure_shows_fallback() {
        let policy = ErrorPolicy::default();
        let err = FetchError::Network("connection refused".into());
        assert_eq!(
            policy.handle(&err),
            Action::ShowBanner(FALLBACK_MESSAGE.into())
        );
    }

    #[test]
    fn empty_error_body_shows_fallback() {
        let policy = ErrorPolicy::default();
        let err = FetchError::Http {
            status: 503,
            body: Some(ErrorBody::default()),
        };
        assert_eq!(
            policy.handle(&err),
            Action::ShowBanner(FALLBACK_MESSAGE.into())
        );
    }
}
