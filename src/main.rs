//! Gutenberg-Freq main entry point
//!
//! This is the command-line interface for the Gutenberg-Freq word-frequency
//! harvester.

use anyhow::Context;
use clap::Parser;
use gutenberg_freq::config::{load_config_with_hash, validate, Config};
use gutenberg_freq::output::print_summary;
use gutenberg_freq::{harvest, BookId, GutenbergClient};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Gutenberg-Freq: A word-frequency harvester for public-domain texts
///
/// Downloads Project Gutenberg books, strips their license framing, counts
/// the remaining words and writes the ranked counts as tab-separated files.
#[derive(Parser, Debug)]
#[command(name = "gutenberg-freq")]
#[command(version)]
#[command(about = "A word-frequency harvester for Project Gutenberg texts", long_about = None)]
struct Cli {
    /// Path to an optional TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Book ids to harvest, replacing the configured list (e.g. 84,1342)
    #[arg(long, value_delimiter = ',')]
    books: Option<Vec<BookId>>,

    /// Minimum length of a counted word
    #[arg(long, value_name = "N")]
    min_length: Option<usize>,

    /// Count common names and titles instead of discarding them
    #[arg(long)]
    keep_names: bool,

    /// Show the resolved configuration and URLs without downloading anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {:#}", e);
            return Err(e.into());
        }
    };

    if cli.dry_run {
        handle_dry_run(&config)?;
    } else {
        handle_harvest(&config).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("gutenberg_freq=info,warn"),
            1 => EnvFilter::new("gutenberg_freq=debug,info"),
            2 => EnvFilter::new("gutenberg_freq=trace,debug"),
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

/// Loads the configuration file (if any) and applies command-line overrides
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("reading {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    if let Some(books) = &cli.books {
        config.source.books = books.clone();
    }
    if let Some(min_length) = cli.min_length {
        config.filter.min_word_length = min_length;
    }
    if cli.keep_names {
        config.filter.exclude_names = false;
    }

    validate(&config).context("invalid command-line override")?;
    Ok(config)
}

/// Handles the --dry-run mode: shows what would be harvested
fn handle_dry_run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Gutenberg-Freq Dry Run ===\n");

    println!("Source:");
    println!("  Base URL: {}", config.source.base_url);
    println!("  Timeout: {}s", config.source.timeout_secs);
    println!("  User agent: {}", config.source.user_agent);

    println!("\nFilter:");
    println!("  Min word length: {}", config.filter.min_word_length);
    println!("  Exclude names: {}", config.filter.exclude_names);
    println!("  Extra stop words: {}", config.filter.extra_stop_words.len());
    println!("  Extra names: {}", config.filter.extra_names.len());
    println!("  Dictionaries: {}", config.filter.dictionaries.len());

    println!("\nOutput:");
    println!("  All words: {}", config.output.full_path);
    println!(
        "  Top {}: {}",
        config.output.top_n, config.output.top_path
    );

    let client = GutenbergClient::new(&config.source)?;
    println!("\nBooks ({}):", config.source.books.len());
    for &id in &config.source.books {
        println!("  - {}", client.primary_url(id));
        println!("    fallback {}", client.fallback_url(id));
    }

    println!("\n✓ Configuration is valid");

    Ok(())
}

/// Handles the main harvest operation
async fn handle_harvest(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Building word frequency dictionary from Project Gutenberg");
    tracing::info!("Books to process: {}", config.source.books.len());

    match harvest(config).await {
        Ok((report, written)) => {
            print_summary(&report.table, &report.summary, config.output.summary_top);
            tracing::info!(
                "Wrote {} entries to {} and {} to {}",
                written.full,
                config.output.full_path,
                written.top,
                config.output.top_path
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("Harvest failed: {}", e);
            Err(e.into())
        }
    }
}
