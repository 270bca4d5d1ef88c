use analytics::AnalyticsEngine;
use anyhow::{Context, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use configuration::{Config, LoggingSettings, OutputFormat};
use data_loader::{date_bounds, filter_by_date_range, load_orders_file};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

mod render;

/// The main entry point for the sales dashboard.
fn main() -> anyhow::Result<()> {
    // Load DASHBOARD__* overrides from a .env file, if there is one.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let config = configuration::load_config_from(&cli.config)
        .with_context(|| format!("failed to load configuration from {}", cli.config.display()))?;
    let _log_guard = init_tracing(&config.logging)?;

    // Execute the appropriate command
    match cli.command {
        Commands::Report(args) => handle_report(args, &config),
        Commands::Bounds(args) => handle_bounds(args, &config),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Sales reporting over an order export: daily orders, products, demographics and RFM.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the sales report for a date range.
    Report(ReportArgs),
    /// Print the first and last order date of the dataset.
    Bounds(BoundsArgs),
}

#[derive(Parser)]
struct ReportArgs {
    /// The CSV order export. Overrides `data.path`.
    #[arg(long)]
    data: Option<PathBuf>,

    /// First day to include (format: YYYY-MM-DD). Defaults to the first order date.
    #[arg(long)]
    from: Option<NaiveDate>,

    /// Last day to include (format: YYYY-MM-DD). Defaults to the last order date.
    #[arg(long)]
    to: Option<NaiveDate>,

    /// Rows in each leaderboard. Overrides `report.top_n`.
    #[arg(long)]
    top: Option<usize>,

    /// Output format. Overrides `report.format`.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

#[derive(Parser)]
struct BoundsArgs {
    /// The CSV order export. Overrides `data.path`.
    #[arg(long)]
    data: Option<PathBuf>,
}

// ==============================================================================
// Logging
// ==============================================================================

/// Installs the global subscriber. `RUST_LOG` wins over the configured level.
///
/// The returned guard must be held for the life of the program so the file writer flushes.
fn init_tracing(settings: &LoggingSettings) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .with_context(|| format!("invalid log filter '{}'", settings.level))?;
    let stderr_layer = fmt::layer().with_writer(std::io::stderr);

    match &settings.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, "sales-dashboard.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .try_init()?;
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .try_init()?;
            Ok(None)
        }
    }
}

// ==============================================================================
// Command Logic
// ==============================================================================

/// Loads, filters and summarizes the orders, then prints the report.
fn handle_report(args: ReportArgs, config: &Config) -> anyhow::Result<()> {
    let path = args.data.unwrap_or_else(|| config.data.path.clone());
    let orders = load_orders_file(&path)
        .with_context(|| format!("failed to load orders from {}", path.display()))?;

    let bounds = date_bounds(&orders);
    let start = args
        .from
        .or(config.report.start_date)
        .or(bounds.map(|(first, _)| first));
    let end = args
        .to
        .or(config.report.end_date)
        .or(bounds.map(|(_, last)| last));

    let filtered = match (start, end) {
        (Some(start), Some(end)) => filter_by_date_range(&orders, start, end)?,
        _ => orders,
    };

    let top_n = args.top.unwrap_or(config.report.top_n);
    if top_n == 0 {
        bail!("--top must be greater than 0");
    }

    let report = AnalyticsEngine::new()
        .build_report(&filtered, top_n)
        .context("failed to build the sales report")?;

    match args.format.unwrap_or(config.report.format) {
        OutputFormat::Table => print!("{}", render::render_report(&report)?),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

fn handle_bounds(args: BoundsArgs, config: &Config) -> anyhow::Result<()> {
    let path = args.data.unwrap_or_else(|| config.data.path.clone());
    let orders = load_orders_file(&path)
        .with_context(|| format!("failed to load orders from {}", path.display()))?;

    match date_bounds(&orders) {
        Some((first, last)) => println!("{first} {last}"),
        None => tracing::warn!(path = %path.display(), "The dataset contains no orders."),
    }

    Ok(())
}
