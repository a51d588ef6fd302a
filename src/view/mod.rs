//! View state and controllers.
//!
//! Each controller owns one panel — its rendition of a disjoint page
//! region — and exposes a single load operation that fetches, then fully
//! replaces the panel contents. No partial or merged state survives a
//! refresh, so stale rows can never leak across period or page changes.

pub mod dash;
pub mod error;
pub mod table;

pub use dash::{DashboardController, DashboardPanel};
pub use error::{Action, ErrorPolicy, FALLBACK_MESSAGE};
pub use table::{PageControl, TableController, TablePanel};
