//! Webaudit main entry point
//!
//! Command-line interface for the website content and link auditor.

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use webaudit::config::load_config;
use webaudit::report::{print_summary, write_reports};
use webaudit::run_audit;
use webaudit::url::is_valid_url;

/// Webaudit: website spelling and link-integrity auditor
///
/// Webaudit discovers a site's pages through its sitemap or by crawling,
/// spell checks the visible text of every page, and probes referenced
/// resources for broken links.
#[derive(Parser, Debug)]
#[command(name = "webaudit")]
#[command(version = "1.0.0")]
#[command(about = "Website spelling and link-integrity auditor", long_about = None)]
struct Cli {
    /// Website URL to audit
    #[arg(value_name = "URL")]
    website_url: String,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG", default_value = "config.toml")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Force spell checking on
    #[arg(long, overrides_with = "no_spell_check")]
    spell_check: bool,

    /// Force spell checking off
    #[arg(long, overrides_with = "spell_check")]
    no_spell_check: bool,

    /// Force link checking on
    #[arg(long, overrides_with = "no_link_check")]
    link_check: bool,

    /// Force link checking off
    #[arg(long, overrides_with = "link_check")]
    no_link_check: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    if !is_valid_url(&cli.website_url) {
        tracing::error!("Invalid website URL: {}", cli.website_url);
        return Err(format!("invalid website URL: {}", cli.website_url).into());
    }

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = match load_config(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Command-line switches override the config's feature toggles
    let spell_check = feature_override(cli.spell_check, cli.no_spell_check, config.features.spell_check);
    let link_check = feature_override(cli.link_check, cli.no_link_check, config.features.link_check);

    if !spell_check && !link_check {
        tracing::error!("Both spell checking and link checking are disabled; nothing to do");
        return Err("nothing to do".into());
    }

    let reporting = config.reporting.clone();

    let outcome = match run_audit(config, &cli.website_url, spell_check, link_check).await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!("Audit failed: {}", e);
            return Err(e.into());
        }
    };

    write_reports(&outcome, &reporting, spell_check, link_check)?;

    if !cli.quiet {
        print_summary(&outcome);
    }

    Ok(())
}

/// Resolves a feature toggle from its on/off switches and config default
fn feature_override(on: bool, off: bool, config_value: bool) -> bool {
    if on {
        true
    } else if off {
        false
    } else {
        config_value
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("webaudit=info,warn"),
            1 => EnvFilter::new("webaudit=debug,info"),
            2 => EnvFilter::new("webaudit=trace,debug"),
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
