//! Server-rendered HTML pages.
//!
//! Every page is assembled from a panel snapshot — no client-side fetching.
//! Charts are drawn by Chart.js from the spec JSON embedded in the page;
//! everything else is static markup.

use crate::api::ListKind;
use crate::format::{escape_html, linkify_short_urls};
use crate::view::{DashboardPanel, TablePanel};

const STYLE: &str = r#"
:root {
  --bg: #0d1117; --surface: #161b22; --border: #30363d;
  --text: #e6edf3; --muted: #8b949e; --accent: #58a6ff;
  --green: #3fb950; --red: #f85149; --radius: 8px;
}
* { margin: 0; padding: 0; box-sizing: border-box; }
body {
  background: var(--bg); color: var(--text);
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif;
  font-size: 14px; line-height: 1.5;
}
.app { max-width: 1100px; margin: 0 auto; padding: 24px; }
header {
  display: flex; align-items: baseline; justify-content: space-between;
  margin-bottom: 24px; padding-bottom: 16px; border-bottom: 1px solid var(--border);
}
header h1 { font-size: 22px; font-weight: 600; }
header nav a { color: var(--accent); text-decoration: none; margin-left: 16px; }
.error-msg {
  background: rgba(248, 81, 73, 0.1); border: 1px solid var(--red);
  border-radius: var(--radius); color: var(--red);
  padding: 10px 14px; margin-bottom: 16px;
}
.metrics { display: grid; grid-template-columns: repeat(auto-fit, minmax(150px, 1fr)); gap: 12px; margin-bottom: 16px; }
.metric {
  background: var(--surface); border: 1px solid var(--border);
  border-radius: var(--radius); padding: 14px;
}
.metric .label { color: var(--muted); font-size: 12px; }
.metric .data { font-size: 22px; font-weight: 600; }
.metric.gained .data { color: var(--green); }
.metric.lost .data { color: var(--red); }
.meta { color: var(--muted); font-size: 12px; margin-bottom: 16px; }
.chart-box {
  background: var(--surface); border: 1px solid var(--border);
  border-radius: var(--radius); padding: 14px; margin-bottom: 16px; height: 320px;
}
.selector { margin-bottom: 16px; }
.selector a { color: var(--muted); text-decoration: none; margin-right: 10px; }
.selector a.active { color: var(--accent); font-weight: 600; }
table { width: 100%; border-collapse: collapse; background: var(--surface); border-radius: var(--radius); }
th, td { text-align: left; padding: 8px 10px; border-bottom: 1px solid var(--border); }
th { color: var(--muted); font-size: 12px; }
td.user-data { text-align: right; }
th.num { text-align: right; }
.profile-image { width: 36px; height: 36px; border-radius: 50%; }
.user-data-row:hover { background: rgba(255,255,255,0.04); cursor: pointer; }
.pager { margin-top: 12px; }
.pager a { color: var(--accent); text-decoration: none; margin-right: 16px; }
"#;

const CHART_SCRIPT: &str = r#"
function drawChart(id, spec) {
  if (!spec) return;
  const ctx = document.getElementById(id).getContext('2d');
  new Chart(ctx, {
    type: spec.kind,
    data: { labels: spec.labels, datasets: spec.datasets },
    options: {
      responsive: true,
      maintainAspectRatio: false,
      plugins: {
        title: { display: true, text: spec.title },
        legend: { position: 'bottom' }
      },
      scales: {
        x: { stacked: spec.stacked },
        y: { stacked: spec.stacked }
      },
      onClick: (evt, items) => {
        if (spec.drill_base && items.length) {
          const label = spec.labels[items[0].index];
          const ds = evt.chart.data.datasets[items[0].datasetIndex].label;
          window.location.href = spec.drill_base + '/' + label + '?qt=' + ds;
        }
      }
    }
  });
}
"#;

// ---------------------------------------------------------------------------
// Shell
// ---------------------------------------------------------------------------

fn shell(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{STYLE}</style>
<script src="https://cdn.jsdelivr.net/npm/chart.js@4"></script>
</head>
<body>
<div class="app">
<header>
<h1>{title}</h1>
<nav><a href="/view/dash">Dashboard</a><a href="/view/report">Report</a><a href="/logout">Logout</a></nav>
</header>
{body}
</div>
</body>
</html>"#
    )
}

fn banner_html(banner: Option<&str>) -> String {
    match banner {
        Some(msg) => format!(r#"<div class="error-msg">{}</div>"#, escape_html(msg)),
        None => String::new(),
    }
}

// ---------------------------------------------------------------------------
// Dashboard page
// ---------------------------------------------------------------------------

pub fn dashboard_page(panel: &DashboardPanel, days: u32) -> String {
    let mut body = String::new();
    body.push_str(&banner_html(panel.banner.as_deref()));

    if !panel.username.is_empty() {
        body.push_str(&format!(
            r#"<div class="meta">@{} — {}</div>"#,
            escape_html(&panel.username),
            linkify_short_urls(&escape_html(&panel.description))
        ));
    }

    body.push_str(&day_selector(days));
    body.push_str(&metrics_grid(panel));
    body.push_str(&format!(
        r#"<div class="meta">updated: {}</div>"#,
        escape_html(&panel.updated_on)
    ));

    body.push_str(r#"<div class="chart-box"><canvas id="follower-event-series"></canvas></div>"#);
    body.push_str(r#"<div class="chart-box"><canvas id="follower-count-series"></canvas></div>"#);

    let event_spec = spec_json(panel.event_chart.as_ref());
    let total_spec = spec_json(panel.total_chart.as_ref());
    body.push_str(&format!(
        "<script>{CHART_SCRIPT}\ndrawChart('follower-event-series', {event_spec});\ndrawChart('follower-count-series', {total_spec});</script>"
    ));

    shell("Follower Dashboard", &body)
}

fn metrics_grid(panel: &DashboardPanel) -> String {
    let metric = |class: &str, label: &str, value: &str| {
        format!(
            r#"<div class="metric {class}"><div class="label">{label}</div><div class="data">{}</div></div>"#,
            escape_html(value)
        )
    };

    format!(
        r#"<div class="metrics">{}{}{}{}{}{}</div>"#,
        metric("", "Followers", &panel.follower_count),
        metric("", "Following", &panel.friend_count),
        metric("gained", "Gained", &panel.gained_count),
        metric("lost", "Lost", &panel.lost_count),
        metric("", "Listed", &panel.listed_count),
        metric("", "Posts", &panel.post_count),
    )
}

fn day_selector(days: u32) -> String {
    let mut out = String::from(r#"<div class="selector">Period: "#);
    for option in [2u32, 3, 7, 14, 30] {
        let class = if option == days { r#" class="active""# } else { "" };
        out.push_str(&format!(
            r#"<a href="/view/dash?days={option}"{class}>{option}d</a>"#
        ));
    }
    out.push_str("</div>");
    out
}

fn spec_json(spec: Option<&crate::render::ChartSpec>) -> String {
    match spec {
        Some(s) => serde_json::to_string(s).unwrap_or_else(|_| "null".to_string()),
        None => "null".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Day page
// ---------------------------------------------------------------------------

pub fn day_page(panel: &TablePanel, date: &str, kind: ListKind) -> String {
    // The date comes straight from the request path.
    let date = escape_html(date);
    let mut body = String::new();
    body.push_str(&banner_html(panel.banner.as_deref()));

    if let Some(verb) = &panel.follow_verb {
        body.push_str(&format!(
            r#"<div class="meta" id="followVerb">{}</div>"#,
            escape_html(verb)
        ));
    }

    body.push_str(&list_selector(&date, kind));
    body.push_str(
        r#"<table id="events-table"><thead><tr>
<th></th><th>User</th><th>Follows?</th>
<th class="num">Friends</th><th class="num">Followers</th><th class="num">Posts</th><th class="num">Lists</th>
</tr></thead><tbody>"#,
    );
    for row in &panel.rows {
        body.push_str(row);
    }
    body.push_str("</tbody></table>");

    let mut pager = String::from(r#"<div class="pager">"#);
    if panel.prev.visible {
        pager.push_str(&format!(
            r#"<a id="day-list-prev" href="/view/day/{date}?qt={kind}&page={}">&laquo; previous</a>"#,
            panel.prev.target
        ));
    }
    if panel.next.visible {
        pager.push_str(&format!(
            r#"<a id="day-list-next" href="/view/day/{date}?qt={kind}&page={}">next &raquo;</a>"#,
            panel.next.target
        ));
    }
    pager.push_str("</div>");
    body.push_str(&pager);

    shell(&format!("Events — {date}"), &body)
}

fn list_selector(date: &str, kind: ListKind) -> String {
    let mut out = String::from(r#"<div class="selector" id="list-selector">"#);
    for option in [
        ListKind::Followed,
        ListKind::Unfollowed,
        ListKind::Friended,
        ListKind::Unfriended,
    ] {
        let class = if option == kind { r#" class="active""# } else { "" };
        out.push_str(&format!(
            r#"<a href="/view/day/{date}?qt={option}"{class}>{option}</a>"#
        ));
    }
    out.push_str("</div>");
    out
}

// ---------------------------------------------------------------------------
// Report page
// ---------------------------------------------------------------------------

pub fn report_page(panel: &TablePanel) -> String {
    let mut body = String::new();
    body.push_str(&banner_html(panel.banner.as_deref()));

    body.push_str(
        r#"<table id="report-table"><thead><tr>
<th></th><th>User</th>
<th class="num">Friends</th><th class="num">Followers</th><th class="num">Posts</th><th class="num">Lists</th>
</tr></thead><tbody>"#,
    );
    for row in &panel.rows {
        body.push_str(row);
    }
    body.push_str("</tbody></table>");

    if panel.more.visible {
        body.push_str(&format!(
            r#"<div class="pager"><a id="report-list-more" href="/view/report?last={}">more &raquo;</a></div>"#,
            panel.more.target
        ));
    }

    shell("Contacts Not Following Back", &body)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
