//! Aggregate numbers panel and the two dashboard charts.

use crate::api::{Backend, DashboardSnapshot, FetchError};
use crate::format::{to_display_timestamp, with_thousands_separators};
use crate::render::{ChartSpec, event_chart, total_chart};
use crate::view::error::{Action, ErrorPolicy};

// ---------------------------------------------------------------------------
// Panel
// ---------------------------------------------------------------------------

/// The dashboard's owned page region: six formatted metric slots, the
/// updated-on slot, and two chart slots. Slots are overwritten whole on
/// every refresh — charts are values that get destroyed and recreated, not
/// mutated in place.
#[derive(Debug, Clone, Default)]
pub struct DashboardPanel {
    pub follower_count: String,
    pub friend_count: String,
    pub gained_count: String,
    pub lost_count: String,
    pub listed_count: String,
    pub post_count: String,
    pub updated_on: String,
    /// Display name/handle of the monitored account.
    pub username: String,
    pub description: String,
    pub event_chart: Option<ChartSpec>,
    pub total_chart: Option<ChartSpec>,
    pub banner: Option<String>,
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

/// Owns the dashboard panel; one snapshot fetch per period change redraws
/// everything. Uses the same request-sequence staleness rule as the table
/// controller, so rapid period switching is last-request-wins.
#[derive(Debug)]
pub struct DashboardController<B: Backend> {
    backend: B,
    policy: ErrorPolicy,
    panel: DashboardPanel,
    seq: u64,
}

impl<B: Backend> DashboardController<B> {
    pub fn new(backend: B, policy: ErrorPolicy) -> Self {
        Self {
            backend,
            policy,
            panel: DashboardPanel::default(),
            seq: 0,
        }
    }

    /// The owned page region, for rendering.
    pub fn panel(&self) -> &DashboardPanel {
        &self.panel
    }

    /// Start a new request, invalidating every in-flight one.
    pub fn begin_request(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    /// Fetch the snapshot for `days` and redraw the whole panel.
    ///
    /// Returns `None` when the panel was rendered, otherwise the [`Action`]
    /// the error policy decided.
    pub fn load_dashboard(&mut self, days: u32) -> Option<Action> {
        let token = self.begin_request();
        let result = self.backend.fetch_dashboard(days);
        self.apply_dashboard(token, result)
    }

    /// Apply a snapshot response obtained under `token`; stale tokens leave
    /// the panel untouched.
    pub fn apply_dashboard(
        &mut self,
        token: u64,
        result: Result<DashboardSnapshot, FetchError>,
    ) -> Option<Action> {
        if token != self.seq {
            println!("discarding superseded snapshot (token {token} < {})", self.seq);
            return Some(Action::LogOnly);
        }

        match result {
            Ok(snapshot) => {
                self.render(&snapshot);
                None
            }
            Err(err) => {
                println!("dashboard load failed: {err}");
                let action = self.policy.handle(&err);
                if let Action::ShowBanner(msg) = &action {
                    self.panel.banner = Some(msg.clone());
                }
                Some(action)
            }
        }
    }

    fn render(&mut self, snapshot: &DashboardSnapshot) {
        let state = &snapshot.state;
        self.panel = DashboardPanel {
            follower_count: with_thousands_separators(state.follower_count),
            friend_count: with_thousands_separators(state.friend_count),
            gained_count: with_thousands_separators(state.new_follower_count),
            lost_count: with_thousands_separators(state.new_unfollower_count),
            listed_count: with_thousands_separators(snapshot.user.listed_count),
            post_count: with_thousands_separators(snapshot.user.post_count),
            updated_on: to_display_timestamp(&snapshot.updated_on),
            username: snapshot.user.username.clone(),
            description: snapshot.user.description.clone(),
            event_chart: Some(event_chart(&snapshot.series)),
            total_chart: Some(total_chart(&snapshot.series)),
            banner: None,
        };
    }
}
