//! Paginated list view — day events and the contact report.

use crate::api::{Backend, DayPage, FetchError, ListKind, ReportPage, UserRecord};
use crate::render::{RowVariant, render_row};
use crate::view::error::{Action, ErrorPolicy};

// ---------------------------------------------------------------------------
// Panel
// ---------------------------------------------------------------------------

/// One pagination control: the page target it navigates to and whether the
/// control is shown at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageControl {
    pub target: i64,
    pub visible: bool,
}

/// The table's owned page region.
///
/// Holds both the source records (for non-HTML hosts) and the rendered row
/// markup; every successful load replaces both wholesale.
#[derive(Debug, Clone, Default)]
pub struct TablePanel {
    pub records: Vec<UserRecord>,
    pub rows: Vec<String>,
    /// Backward cursor (day listing).
    pub prev: PageControl,
    /// Forward cursor (day listing).
    pub next: PageControl,
    /// Forward cursor (report listing).
    pub more: PageControl,
    pub follow_verb: Option<String>,
    pub banner: Option<String>,
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

/// Owns the paginated table panel and the fetch-and-render cycle for it.
///
/// Each load clears the table body, fetches one page, stores the returned
/// cursors on the pagination controls, and renders one row per record. A
/// monotonically increasing request-sequence token gives last-request-wins
/// ordering: a response applied with a stale token is discarded instead of
/// overwriting newer data.
#[derive(Debug)]
pub struct TableController<B: Backend> {
    backend: B,
    policy: ErrorPolicy,
    panel: TablePanel,
    seq: u64,
}

impl<B: Backend> TableController<B> {
    pub fn new(backend: B, policy: ErrorPolicy) -> Self {
        Self {
            backend,
            policy,
            panel: TablePanel::default(),
            seq: 0,
        }
    }

    /// The owned page region, for rendering.
    pub fn panel(&self) -> &TablePanel {
        &self.panel
    }

    /// Start a new request, invalidating every in-flight one.
    pub fn begin_request(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    /// Load one page of a day's events.
    ///
    /// Returns `None` when the panel was rendered, otherwise the [`Action`]
    /// the error policy decided.
    pub fn load_day(&mut self, date: &str, list: ListKind, page: i64) -> Option<Action> {
        self.panel.rows.clear();
        self.panel.records.clear();
        let token = self.begin_request();
        let result = self.backend.fetch_day(date, list, page);
        self.apply_day(token, result)
    }

    /// Load one page of the contact report.
    pub fn load_report(&mut self, last_id: i64) -> Option<Action> {
        self.panel.rows.clear();
        self.panel.records.clear();
        let token = self.begin_request();
        let result = self.backend.fetch_report(last_id);
        self.apply_report(token, result)
    }

    /// Apply a day-page response obtained under `token`.
    ///
    /// Split from [`load_day`](Self::load_day) so the staleness rule is
    /// observable: a token older than the newest `begin_request` leaves the
    /// panel untouched.
    pub fn apply_day(
        &mut self,
        token: u64,
        result: Result<DayPage, FetchError>,
    ) -> Option<Action> {
        if token != self.seq {
            println!("discarding superseded day response (token {token} < {})", self.seq);
            return Some(Action::LogOnly);
        }

        match result {
            Ok(page) => {
                self.panel.banner = None;
                self.panel.follow_verb = page.follow_verb.clone();
                self.panel.prev = PageControl {
                    target: page.page_prev,
                    visible: page.has_prev,
                };
                self.panel.next = PageControl {
                    target: page.page_next,
                    visible: page.has_next,
                };
                self.panel.more = PageControl::default();
                self.replace_rows(page.events, RowVariant::Event);
                None
            }
            Err(err) => Some(self.fail(&err)),
        }
    }

    /// Apply a report-page response obtained under `token`.
    pub fn apply_report(
        &mut self,
        token: u64,
        result: Result<ReportPage, FetchError>,
    ) -> Option<Action> {
        if token != self.seq {
            println!("discarding superseded report response (token {token} < {})", self.seq);
            return Some(Action::LogOnly);
        }

        match result {
            Ok(page) => {
                self.panel.banner = None;
                self.panel.follow_verb = None;
                self.panel.prev = PageControl::default();
                self.panel.next = PageControl::default();
                self.panel.more = PageControl {
                    target: page.last_id,
                    visible: page.has_more,
                };
                self.replace_rows(page.list, RowVariant::Report);
                None
            }
            Err(err) => Some(self.fail(&err)),
        }
    }

    fn replace_rows(&mut self, records: Vec<UserRecord>, variant: RowVariant) {
        self.panel.rows = records.iter().map(|r| render_row(r, variant)).collect();
        self.panel.records = records;
    }

    fn fail(&mut self, err: &FetchError) -> Action {
        println!("table load failed: {err}");
        let action = self.policy.handle(err);
        if let Action::ShowBanner(msg) = &action {
            self.panel.banner = Some(msg.clone());
        }
        action
    }
}
