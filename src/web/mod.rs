//! Local web view.
//!
//! A lightweight HTTP server (sync, via `tiny_http`) that renders the
//! dashboard, day, and report views as server-side HTML. Each incoming
//! request builds the matching controller, performs one fetch against the
//! backend, and renders the resulting panel — the browser never talks to
//! the backend directly.
//!
//! Launched via `followdash web` (default: `http://127.0.0.1:9787`).

mod page;

use std::io::Cursor;

use anyhow::{Context, Result};
use tiny_http::{Header, Method, Response, Server, StatusCode};

use crate::api::{ApiClient, ListKind};
use crate::config::DashConfig;
use crate::view::{Action, DashboardController, ErrorPolicy, TableController};

// ---------------------------------------------------------------------------
// Server entry point
// ---------------------------------------------------------------------------

/// Start the web view server.
///
/// Blocks the current thread. Handles requests sequentially (sufficient for
/// a local single-user dashboard) and recovers from errors per-request
/// without crashing the server.
pub fn serve(config: &DashConfig) -> Result<()> {
    let addr = &config.web.addr;
    let server = Server::http(addr)
        .map_err(|e| anyhow::anyhow!("failed to start HTTP server on {addr}: {e}"))?;

    println!("followdash running at http://{addr}");
    println!("backend: {}", config.api.base_url);
    println!("Press Ctrl+C to stop.\n");

    if config.web.open_browser {
        let _ = open_browser(&format!("http://{addr}"));
    }

    for request in server.incoming_requests() {
        let method = request.method().clone();
        let url = request.url().to_string();

        let result = if method == Method::Get {
            dispatch(config, &url)
        } else {
            Ok(not_found())
        };

        match result {
            Ok(resp) => {
                let _ = request.respond(resp);
            }
            Err(e) => {
                let body = serde_json::json!({ "error": e.to_string() }).to_string();
                let resp = Response::from_data(body.into_bytes())
                    .with_header(content_type_json())
                    .with_status_code(StatusCode(500));
                let _ = request.respond(resp);
            }
        }

        // Brief access log
        println!(
            "{} {} {}",
            method,
            url,
            chrono::Local::now().format("%H:%M:%S")
        );
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

fn dispatch(config: &DashConfig, url: &str) -> Result<Response<Cursor<Vec<u8>>>> {
    let path = url.split('?').next().unwrap_or(url);

    match path {
        "/" | "/view/dash" => dash_view(config, url),
        "/view/report" => report_view(config, url),
        "/logout" => Ok(see_other(&format!(
            "{}{}",
            config.api.base_url, config.api.logout_path
        ))),
        _ => match path.strip_prefix("/view/day/") {
            Some(date) if !date.is_empty() && !date.contains('/') => {
                day_view(config, date, url)
            }
            _ => Ok(not_found()),
        },
    }
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

fn dash_view(config: &DashConfig, url: &str) -> Result<Response<Cursor<Vec<u8>>>> {
    let days = query_param(url, "days")
        .and_then(|v| v.parse().ok())
        .unwrap_or(config.view.default_days);

    let mut controller = DashboardController::new(client(config), policy(config));
    let action = controller.load_dashboard(days);

    if let Some(Action::Redirect(path)) = action {
        return Ok(see_other(&format!("{}{path}", config.api.base_url)));
    }

    Ok(html_response(page::dashboard_page(controller.panel(), days)))
}

fn day_view(config: &DashConfig, date: &str, url: &str) -> Result<Response<Cursor<Vec<u8>>>> {
    let kind = query_param(url, "qt")
        .and_then(|v| ListKind::parse(&v))
        .or_else(|| ListKind::parse(&config.view.default_list))
        .unwrap_or_default();
    let page_num = query_param(url, "page")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);

    let mut controller = TableController::new(client(config), policy(config));
    let action = controller.load_day(date, kind, page_num);

    if let Some(Action::Redirect(path)) = action {
        return Ok(see_other(&format!("{}{path}", config.api.base_url)));
    }

    Ok(html_response(page::day_page(controller.panel(), date, kind)))
}

fn report_view(config: &DashConfig, url: &str) -> Result<Response<Cursor<Vec<u8>>>> {
    let last_id = query_param(url, "last")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);

    let mut controller = TableController::new(client(config), policy(config));
    let action = controller.load_report(last_id);

    if let Some(Action::Redirect(path)) = action {
        return Ok(see_other(&format!("{}{path}", config.api.base_url)));
    }

    Ok(html_response(page::report_page(controller.panel())))
}

fn client(config: &DashConfig) -> ApiClient {
    ApiClient::new(&config.api.base_url, config.api.timeout_ms)
}

fn policy(config: &DashConfig) -> ErrorPolicy {
    ErrorPolicy::new(&config.api.logout_path)
}

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

/// Extract a query parameter value from a URL.
fn query_param(url: &str, key: &str) -> Option<String> {
    url.split('?').nth(1)?.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        if k == key && !v.is_empty() {
            Some(v.to_string())
        } else {
            None
        }
    })
}

fn html_response(html: String) -> Response<Cursor<Vec<u8>>> {
    Response::from_data(html.into_bytes())
        .with_header(content_type_html())
        .with_status_code(StatusCode(200))
}

fn see_other(location: &str) -> Response<Cursor<Vec<u8>>> {
    Response::from_data(Vec::new())
        .with_header(
            Header::from_bytes("Location", location.as_bytes()).expect("valid location header"),
        )
        .with_status_code(StatusCode(303))
}

fn not_found() -> Response<Cursor<Vec<u8>>> {
    let body = r#"{"error": "not found"}"#;
    Response::from_data(body.as_bytes().to_vec())
        .with_header(content_type_json())
        .with_status_code(StatusCode(404))
}

fn content_type_json() -> Header {
    Header::from_bytes("Content-Type", "application/json; charset=utf-8")
        .expect("valid content type")
}

fn content_type_html() -> Header {
    Header::from_bytes("Content-Type", "text/html; charset=utf-8").expect("valid content type")
}

/// Attempt to open a URL in the system default browser.
fn open_browser(url: &str) -> Result<()> {
    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/C", "start", url])
            .spawn()
            .context("failed to open browser")?;
    }

    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open")
            .arg(url)
            .spawn()
            .context("failed to open browser")?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open")
            .arg(url)
            .spawn()
            .context("failed to open browser")?;
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_param_extracts_value() {
        assert_eq!(query_param("/view/dash?days=7", "days"), Some("7".into()));
        assert_eq!(
            query_param("/view/day/2024-01-01?qt=unfollowed&page=2", "qt"),
            Some("unfollowed".into())
        );
        assert_eq!(
            query_param("/view/day/2024-01-01?qt=unfollowed&page=2", "page"),
            Some("2".into())
        );
    }

    #[test]
    fn query_param_returns_none_for_missing_or_empty() {
        assert_eq!(query_param("/view/dash", "days"), None);
        assert_eq!(query_param("/view/dash?days=", "days"), None);
        assert_eq!(query_param("/view/dash?other=1", "days"), None);
    }
}
