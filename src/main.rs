//! Jobsweep main entry point
//!
//! This is the command-line interface for the jobsweep job-listing harvester.

use clap::Parser;
use jobsweep::config::load_config_with_hash;
use jobsweep::harvest::run_harvest;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Jobsweep: a polite job-listing harvester
///
/// Jobsweep collects job listings from a public guest search surface,
/// resolves each listing into a structured record under rate-limit
/// pressure, and persists the run as a JSON collection.
#[derive(Parser, Debug)]
#[command(name = "jobsweep")]
#[command(version = "1.0.0")]
#[command(about = "A polite job-listing harvester", long_about = None)]
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

    /// Validate config and show what would be harvested without any network call
    #[arg(long, conflicts_with_all = ["stats", "export_summary"])]
    dry_run: bool,

    /// Show statistics for the persisted collection and exit
    #[arg(long, conflicts_with_all = ["dry_run", "export_summary"])]
    stats: bool,

    /// Generate the market summary from the persisted collection and exit
    #[arg(long, conflicts_with_all = ["dry_run", "stats"])]
    export_summary: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, _config_hash) = match load_config_with_hash(&cli.config) {
        Ok((cfg, hash)) => {
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            (cfg, hash)
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Handle different modes
    if cli.dry_run {
        handle_dry_run(&config);
    } else if cli.stats {
        handle_stats(&config)?;
    } else if cli.export_summary {
        handle_export_summary(&config)?;
    } else {
        handle_harvest(config).await?;
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
            0 => EnvFilter::new("jobsweep=info,warn"),
            1 => EnvFilter::new("jobsweep=debug,info"),
            2 => EnvFilter::new("jobsweep=trace,debug"),
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

/// Handles the --dry-run mode: validates config and shows what would be harvested
fn handle_dry_run(config: &jobsweep::config::Config) {
    println!("=== Jobsweep Dry Run ===\n");

    println!("Search:");
    println!("  Location: {}", config.search.location);
    println!(
        "  Max jobs per keyword: {}",
        config.search.max_jobs_per_keyword
    );
    println!("  Search endpoint: {}", config.search.search_url);
    println!("  Detail endpoint: {}", config.search.detail_url);

    println!("\nKeywords ({}):", config.search.keywords.len());
    for keyword in &config.search.keywords {
        println!("  - {}", keyword);
    }

    println!("\nPacing:");
    println!(
        "  Page delay: {}-{}ms",
        config.pacing.page_delay_min_ms, config.pacing.page_delay_max_ms
    );
    println!(
        "  Detail delay: {}-{}ms",
        config.pacing.detail_delay_min_ms, config.pacing.detail_delay_max_ms
    );
    println!("  Workers: {}", config.pacing.workers);
    println!("  Max attempts: {}", config.pacing.max_attempts);

    println!("\nOutput:");
    println!("  Collection: {}", config.output.collection_path);
    println!("  Summary: {}", config.output.summary_path);

    println!("\n✓ Configuration is valid");
    println!(
        "✓ Would harvest up to {} listings across {} keywords",
        config.search.max_jobs_per_keyword * config.search.keywords.len(),
        config.search.keywords.len()
    );
}

/// Handles the --stats mode: shows statistics for the persisted collection
fn handle_stats(config: &jobsweep::config::Config) -> anyhow::Result<()> {
    use jobsweep::output::{compute_statistics, load_collection, print_statistics};
    use std::path::Path;

    println!("Collection: {}\n", config.output.collection_path);

    let records = load_collection(Path::new(&config.output.collection_path))?;
    let stats = compute_statistics(&records);
    print_statistics(&stats);

    Ok(())
}

/// Handles the --export-summary mode: generates the market summary text
fn handle_export_summary(config: &jobsweep::config::Config) -> anyhow::Result<()> {
    use jobsweep::output::{load_collection, write_summary};
    use std::path::Path;

    println!("=== Exporting Market Summary ===\n");
    println!("Collection: {}", config.output.collection_path);
    println!("Output: {}", config.output.summary_path);
    println!();

    let records = load_collection(Path::new(&config.output.collection_path))?;
    write_summary(
        Path::new(&config.output.summary_path),
        &records,
        config.output.summary_limit,
    )?;

    println!("✓ Summary exported to: {}", config.output.summary_path);

    Ok(())
}

/// Handles the main harvest operation
async fn handle_harvest(config: jobsweep::config::Config) -> anyhow::Result<()> {
    tracing::info!(
        "Harvesting {} keywords in '{}', up to {} listings each",
        config.search.keywords.len(),
        config.search.location,
        config.search.max_jobs_per_keyword
    );

    let collection_path = config.output.collection_path.clone();

    match run_harvest(config).await {
        Ok(records) => {
            tracing::info!("Harvest completed successfully");
            println!(
                "Done! Saved {} records to {}",
                records.len(),
                collection_path
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("Harvest failed: {}", e);
            Err(e.into())
        }
    }
}
