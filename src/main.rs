//! SeoLens main entry point
//!
//! This is the command-line interface for the SeoLens page auditor.

use clap::Parser;
use seolens::analyzer::{analyze_batch, build_http_client};
use seolens::config::load_config;
use seolens::report::{print_report, write_csv};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// SeoLens: an ad-hoc SEO page auditor
///
/// SeoLens fetches each configured URL once, extracts SEO signals from the
/// markup (title, meta tags, headings, link counts, structured data), prints
/// a per-page summary, and writes a CSV report.
#[derive(Parser, Debug)]
#[command(name = "seolens")]
#[command(version = "1.0.0")]
#[command(about = "An ad-hoc SEO page auditor", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Override the CSV output path from the config
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Skip writing the CSV report
    #[arg(long, conflicts_with = "output")]
    no_csv: bool,

    /// Validate config and show what would be analyzed without fetching
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = load_config(&cli.config)?;

    if cli.dry_run {
        handle_dry_run(&config, cli.output.as_deref());
        return Ok(());
    }

    // Build the HTTP client once; it is shared across the whole batch
    let client = build_http_client(&config.fetch)?;
    let delay = Duration::from_millis(config.batch.delay_ms);

    tracing::info!("Analyzing {} URLs", config.urls.len());
    let results = analyze_batch(&client, &config.urls, delay).await;

    // Console summary, always
    print_report(&results);

    // CSV report, unless suppressed
    if !cli.no_csv {
        let csv_path = cli
            .output
            .unwrap_or_else(|| PathBuf::from(&config.output.csv_path));
        write_csv(&results, &csv_path)?;
        println!("\nResults saved to '{}'", csv_path.display());
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("seolens=info,warn"),
            1 => EnvFilter::new("seolens=debug,info"),
            2 => EnvFilter::new("seolens=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and echoes what would run
fn handle_dry_run(config: &seolens::Config, output_override: Option<&Path>) {
    println!("=== SeoLens Dry Run ===\n");

    println!("Fetch:");
    println!("  User-Agent: {}", config.fetch.user_agent);
    println!("  Timeout: {}s", config.fetch.timeout_secs);

    println!("\nBatch:");
    println!("  Delay between requests: {}ms", config.batch.delay_ms);

    println!("\nOutput:");
    match output_override {
        Some(path) => println!("  CSV: {} (overridden)", path.display()),
        None => println!("  CSV: {}", config.output.csv_path),
    }

    println!("\nURLs ({}):", config.urls.len());
    for url in &config.urls {
        println!("  - {}", url);
    }

    println!("\n✓ Configuration is valid");
}
