use anyhow::Result;
use clap::{Parser, Subcommand};

use followdash::{cli, config, web};

#[derive(Debug, Parser)]
#[command(name = "followdash")]
#[command(about = "Follower analytics dashboard for the followme service")]
struct App {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the aggregate dashboard: metrics and per-day event series
    Dash {
        /// Number of days to aggregate over
        #[arg(long)]
        days: Option<u32>,
        /// Output format: table (default), json
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Show one page of a day's follow/unfollow events
    Day {
        /// ISO date (YYYY-MM-DD); defaults to today (UTC)
        date: Option<String>,
        /// Listing kind: followed, unfollowed, friended, unfriended
        #[arg(long)]
        list: Option<String>,
        /// Page number
        #[arg(long, default_value = "0")]
        page: i64,
        /// Output format: table (default), json
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Show contacts you follow who don't follow back
    Report {
        /// Resume cursor from a previous page
        #[arg(long, default_value = "0")]
        last: i64,
        /// Output format: table (default), json
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Serve the local web view
    Web {
        /// Bind address (host:port)
        #[arg(long)]
        addr: Option<String>,
    },
}

fn main() -> Result<()> {
    let app = App::parse();
    let mut cfg = config::load();

    match app.command {
        Commands::Dash { days, format } => {
            let fmt = cli::OutputFormat::from_str_opt(Some(&format));
            cli::run_dash(&cfg, days, fmt)
        }
        Commands::Day {
            date,
            list,
            page,
            format,
        } => {
            let fmt = cli::OutputFormat::from_str_opt(Some(&format));
            cli::run_day(&cfg, date, list, page, fmt)
        }
        Commands::Report { last, format } => {
            let fmt = cli::OutputFormat::from_str_opt(Some(&format));
            cli::run_report(&cfg, last, fmt)
        }
        Commands::Web { addr } => {
            if let Some(addr) = addr {
                cfg.web.addr = addr;
            }
            web::serve(&cfg)
        }
    }
}
