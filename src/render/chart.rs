//! Chart specs built from snapshot series.
//!
//! A [`ChartSpec`] is a declarative, Chart.js-compatible description of one
//! canvas. Label-to-value alignment is strictly positional: labels and every
//! dataset are read out of the series in insertion order, and the backend
//! guarantees equal-length, same-ordered series — no alignment or validation
//! happens here.

use serde::Serialize;

use crate::api::{DashboardSeries, Series};

// Palette carried over from the original dashboard.
const ROSE_FAINT: &str = "rgba(206, 149, 166,0.1)";
const ROSE_SOFT: &str = "rgba(206, 149, 166,0.5)";
const ROSE_FILL: &str = "rgba(206, 149, 166,0.4)";
const ROSE_STRONG: &str = "rgba(206, 149, 166,0.7)";
const GREEN_FAINT: &str = "rgba(127, 201, 143,0.1)";
const GREEN_SOFT: &str = "rgba(127, 201, 143,0.5)";
const GREEN_FILL: &str = "rgba(127, 201, 143,0.4)";
const GREEN_STRONG: &str = "rgba(127, 201, 143,0.7)";
const CREAM: &str = "rgba(255, 255, 204,0.4)";
const GRAY_FILL: &str = "rgba(109, 110, 110, 0.4)";
const GRAY: &str = "rgba(109, 110, 110, 1)";

// ---------------------------------------------------------------------------
// Spec types
// ---------------------------------------------------------------------------

/// One dataset on a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub label: String,
    /// Per-dataset type override (a line on top of a bar chart).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub data: Vec<f64>,
    #[serde(rename = "backgroundColor")]
    pub background_color: String,
    #[serde(rename = "borderColor")]
    pub border_color: String,
    #[serde(rename = "borderWidth")]
    pub border_width: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
}

impl Dataset {
    fn bar(label: &str, data: Vec<f64>, background: &str, border: &str) -> Self {
        Self {
            label: label.to_string(),
            kind: None,
            data,
            background_color: background.to_string(),
            border_color: border.to_string(),
            border_width: 1,
            fill: None,
        }
    }

    fn line(label: &str, data: Vec<f64>, color: &str) -> Self {
        Self {
            label: label.to_string(),
            kind: Some("line".to_string()),
            data,
            background_color: color.to_string(),
            border_color: color.to_string(),
            border_width: 2,
            fill: Some(false),
        }
    }
}

/// Declarative description of one chart canvas.
///
/// Canvases are destroyed and recreated on every dashboard refresh, so a
/// spec is a value, not a handle: the panel slot is simply overwritten.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    /// Base chart type: `"bar"` or `"line"`.
    pub kind: String,
    pub title: String,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub stacked: bool,
    /// Navigation base for bar clicks; the rendered page appends
    /// `/{label}?qt={datasetLabel}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drill_base: Option<String>,
}

// ---------------------------------------------------------------------------
// Series readout
// ---------------------------------------------------------------------------

/// Category labels of a series, in insertion (chronological) order.
pub fn series_labels(series: &Series) -> Vec<String> {
    series.keys().cloned().collect()
}

/// Numeric values of a series, in insertion order. Non-numeric values
/// render as zero rather than failing the whole chart.
pub fn series_values(series: &Series) -> Vec<f64> {
    series.values().map(|v| v.as_f64().unwrap_or(0.0)).collect()
}

// ---------------------------------------------------------------------------
// Chart builders
// ---------------------------------------------------------------------------

/// The stacked daily-events chart: four bar datasets plus a running-average
/// line. Clicking a bar drills into that day's event list.
pub fn event_chart(series: &DashboardSeries) -> ChartSpec {
    ChartSpec {
        kind: "bar".to_string(),
        title: "Who (un)followed and whom you (un)friended - click day for details".to_string(),
        labels: series_labels(&series.new_followers),
        datasets: vec![
            Dataset::bar(
                "unfollowed",
                series_values(&series.lost_followers),
                ROSE_FAINT,
                ROSE_SOFT,
            ),
            Dataset::bar(
                "followed",
                series_values(&series.new_followers),
                GREEN_FAINT,
                GREEN_SOFT,
            ),
            Dataset::bar(
                "friended",
                series_values(&series.new_friends),
                GREEN_FILL,
                GREEN_STRONG,
            ),
            Dataset::bar(
                "unfriended",
                series_values(&series.lost_friends),
                ROSE_FILL,
                ROSE_STRONG,
            ),
            Dataset::line("average", series_values(&series.avg_followers), CREAM),
        ],
        stacked: true,
        drill_base: Some("/view/day".to_string()),
    }
}

/// The running-totals line chart: daily follower count plus running average.
pub fn total_chart(series: &DashboardSeries) -> ChartSpec {
    ChartSpec {
        kind: "line".to_string(),
        title: "Totals number of followers per day".to_string(),
        labels: series_labels(&series.all_followers),
        datasets: vec![
            Dataset {
                label: "Count".to_string(),
                kind: None,
                data: series_values(&series.all_followers),
                background_color: GRAY_FILL.to_string(),
                border_color: GRAY.to_string(),
                border_width: 1,
                fill: None,
            },
            Dataset::line("Average", series_values(&series.avg_total), CREAM),
        ],
        stacked: false,
        drill_base: None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
