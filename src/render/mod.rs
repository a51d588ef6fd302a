//! Pure rendering — record rows to HTML markup, series to chart specs.
//!
//! Nothing in here performs I/O; the controllers call these synchronously
//! within each render pass.

pub mod chart;
pub mod row;

pub use chart::{ChartSpec, Dataset, event_chart, total_chart};
pub use row::{RowVariant, render_row};
