//! followdash — terminal and local-web frontend for the followme
//! follower-analytics service.
//!
//! The backend exposes a small JSON API (`/data/dash`, `/data/day/...`,
//! `/data/report/...`); this crate fetches those payloads and renders them
//! as colored CLI tables, server-rendered HTML pages, or Chart.js-compatible
//! chart specs. All rendering flows through two controllers that each own a
//! disjoint panel and fully replace its contents on every refresh.

pub mod api;
pub mod cli;
pub mod config;
pub mod format;
pub mod render;
pub mod view;
pub mod web;
