//! CLI command implementations.
//!
//! Subcommand handlers for:
//! - `followdash dash` — aggregate metrics and per-day series for a period
//! - `followdash day` — one page of a day's follow/unfollow events
//! - `followdash report` — contacts you follow who don't follow back
//!
//! Each handler builds an [`ApiClient`] from the resolved config, drives the
//! matching controller once, and prints the resulting panel.

use anyhow::Result;
use chrono::Utc;
use colored::Colorize;

use crate::api::{ApiClient, ListKind};
use crate::config::DashConfig;
use crate::format::to_iso_date;
use crate::render::ChartSpec;
use crate::view::{Action, DashboardController, ErrorPolicy, TableController, TablePanel};

/// Output format for the analytics commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    pub fn from_str_opt(s: Option<&str>) -> Self {
        match s {
            Some("json") => Self::Json,
            _ => Self::Table,
        }
    }
}

fn client(config: &DashConfig) -> ApiClient {
    ApiClient::new(&config.api.base_url, config.api.timeout_ms)
}

fn policy(config: &DashConfig) -> ErrorPolicy {
    ErrorPolicy::new(&config.api.logout_path)
}

/// Translate a failed load into CLI output and a non-zero exit.
fn report_action(config: &DashConfig, action: Action) -> Result<()> {
    match action {
        Action::Redirect(path) => {
            println!(
                "{}",
                format!(
                    "Session expired. Re-authenticate at {}{path}",
                    config.api.base_url
                )
                .yellow()
            );
            anyhow::bail!("authentication required")
        }
        Action::ShowBanner(msg) => {
            println!("{}", msg.red());
            anyhow::bail!("load failed")
        }
        Action::LogOnly => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// followdash dash
// ---------------------------------------------------------------------------

/// Show the aggregate dashboard for the last N days.
pub fn run_dash(config: &DashConfig, days: Option<u32>, format: OutputFormat) -> Result<()> {
    let days = days.unwrap_or(config.view.default_days);
    let mut controller = DashboardController::new(client(config), policy(config));

    if let Some(action) = controller.load_dashboard(days) {
        return report_action(config, action);
    }

    let panel = controller.panel();
    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "days": days,
                "updated_on": panel.updated_on,
                "metrics": {
                    "follower_count": panel.follower_count,
                    "friend_count": panel.friend_count,
                    "gained_count": panel.gained_count,
                    "lost_count": panel.lost_count,
                    "listed_count": panel.listed_count,
                    "post_count": panel.post_count,
                },
                "event_chart": panel.event_chart,
                "total_chart": panel.total_chart,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Table => {
            println!(
                "{}",
                format!("Follower Dashboard — Last {days} Days").bold().cyan()
            );
            println!("{}", "=".repeat(60));
            println!();
            println!("  {} {}", "Followers:     ".bold(), panel.follower_count);
            println!("  {} {}", "Following:     ".bold(), panel.friend_count);
            println!("  {} {}", "Gained:        ".bold(), panel.gained_count.green());
            println!("  {} {}", "Lost:          ".bold(), panel.lost_count.red());
            println!("  {} {}", "Listed:        ".bold(), panel.listed_count);
            println!("  {} {}", "Posts:         ".bold(), panel.post_count);
            println!("  {} {}", "Updated:       ".bold(), panel.updated_on.dimmed());
            println!();

            if let Some(chart) = &panel.event_chart {
                print_series_table(chart);
            }
        }
    }

    Ok(())
}

/// Print a chart spec as a per-day table: one row per label, one column per
/// dataset. Relies on the positional label/value alignment of the spec.
fn print_series_table(chart: &ChartSpec) {
    println!("{}", "Daily Events".bold().cyan());

    print!("  {:<12}", "Date");
    for ds in &chart.datasets {
        print!(" {:>11}", ds.label);
    }
    println!();
    println!("  {}", "-".repeat(12 + 12 * chart.datasets.len()));

    for (i, label) in chart.labels.iter().enumerate() {
        print!("  {label:<12}");
        for ds in &chart.datasets {
            match ds.data.get(i) {
                Some(v) => print!(" {v:>11.1}"),
                None => print!(" {:>11}", "-"),
            }
        }
        println!();
    }
}

// ---------------------------------------------------------------------------
// followdash day
// ---------------------------------------------------------------------------

/// Show one page of a day's events.
pub fn run_day(
    config: &DashConfig,
    date: Option<String>,
    list: Option<String>,
    page: i64,
    format: OutputFormat,
) -> Result<()> {
    let date = date.unwrap_or_else(|| to_iso_date(Utc::now()));
    let list_str = list.unwrap_or_else(|| config.view.default_list.clone());
    let Some(kind) = ListKind::parse(&list_str) else {
        anyhow::bail!(
            "invalid list kind '{list_str}' (expected followed, unfollowed, friended, or unfriended)"
        );
    };

    let mut controller = TableController::new(client(config), policy(config));
    if let Some(action) = controller.load_day(&date, kind, page) {
        return report_action(config, action);
    }

    let panel = controller.panel();
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&panel.records)?);
        }
        OutputFormat::Table => {
            let verb = panel.follow_verb.as_deref().unwrap_or(kind.as_str());
            println!("{}", format!("{date} — {verb}").bold().cyan());
            print_record_table(panel, true);

            if panel.prev.visible {
                println!("  {}", format!("previous page: --page {}", panel.prev.target).dimmed());
            }
            if panel.next.visible {
                println!("  {}", format!("next page: --page {}", panel.next.target).dimmed());
            }
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// followdash report
// ---------------------------------------------------------------------------

/// Show contacts you follow who don't follow back.
pub fn run_report(config: &DashConfig, last_id: i64, format: OutputFormat) -> Result<()> {
    let mut controller = TableController::new(client(config), policy(config));
    if let Some(action) = controller.load_report(last_id) {
        return report_action(config, action);
    }

    let panel = controller.panel();
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&panel.records)?);
        }
        OutputFormat::Table => {
            println!("{}", "Contacts Not Following Back".bold().cyan());
            print_record_table(panel, false);

            if panel.more.visible {
                println!("  {}", format!("more: --last {}", panel.more.target).dimmed());
            }
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Shared table printing
// ---------------------------------------------------------------------------

fn print_record_table(panel: &TablePanel, with_relation: bool) {
    if panel.records.is_empty() {
        println!("{}", "  (no records)".dimmed());
        return;
    }

    print!("  {:<18} {:<20}", "User", "Name");
    if with_relation {
        print!(" {:>9}", "Follows?");
    }
    println!(" {:>10} {:>10} {:>8} {:>6}", "Friends", "Followers", "Posts", "Lists");
    println!("  {}", "-".repeat(if with_relation { 88 } else { 78 }));

    for (i, r) in panel.records.iter().enumerate() {
        let mut line = format!(
            "  {:<18} {:<20}",
            truncate(&format!("@{}", r.username), 18),
            truncate(&r.name, 20)
        );
        if with_relation {
            line.push_str(&format!(" {:>9}", r.has_relation.as_deref().unwrap_or("-")));
        }
        line.push_str(&format!(
            " {:>10} {:>10} {:>8} {:>6}",
            r.friend_count, r.followers_count, r.post_count, r.listed_count
        ));

        if i % 2 == 0 {
            println!("{line}");
        } else {
            println!("{}", line.dimmed());
        }
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_parses() {
        assert_eq!(OutputFormat::from_str_opt(Some("json")), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str_opt(Some("table")), OutputFormat::Table);
        assert_eq!(OutputFormat::from_str_opt(None), OutputFormat::Table);
    }

    #[test]
    fn truncate_respects_limit() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a_very_long_username", 10), "a_very_lo…");
    }
}
