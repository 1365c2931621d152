//! CLI entry point for the population dashboard.
//!
//! `serve` exposes the summary API and dashboard over HTTP; `summarize` runs
//! a single fetch-clean-summarize cycle and reports the result.

use anyhow::Result;
use clap::{Parser, Subcommand};
use population_dashboard::{
    config::ServiceConfig,
    infra::source_from_config,
    output::{append_totals, print_json, print_pretty},
    pipeline::population_summary,
    server::{AppState, serve},
};
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "population_dashboard")]
#[command(about = "Serve population summaries and a chart dashboard", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (`/population`, `/dashboard/`)
    Serve {
        #[command(flatten)]
        config: ServiceConfig,
    },
    /// Fetch the dataset once and print its summaries
    Summarize {
        #[command(flatten)]
        config: ServiceConfig,

        /// Print the summary as JSON instead of debug format
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Optional CSV file to append yearly totals to
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/population_dashboard.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("population_dashboard.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            let source = source_from_config(&config)?;
            let state = AppState::new(config, source);
            serve(state).await?;
        }
        Commands::Summarize {
            config,
            json,
            output,
        } => {
            let source = source_from_config(&config)?;
            let summary = population_summary(source.as_ref()).await?;

            if json {
                print_json(&summary)?;
            } else {
                print_pretty(&summary);
            }

            if let Some(path) = output {
                append_totals(&path, &summary)?;
                info!(path = %path, years = summary.total_population_per_year.len(), "Totals appended");
            }
        }
    }

    Ok(())
}
