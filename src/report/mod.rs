//! Report generation
//!
//! Writes the HTML report and CSV exports into the configured output
//! directory and prints the end-of-run console summary.

pub mod csv;
pub mod html;
pub mod summary;

pub use summary::print_summary;

use crate::audit::AuditOutcome;
use crate::config::ReportingConfig;
use std::path::Path;

/// Writes all enabled report files for a finished audit
///
/// The output directory is created if it does not exist. Reports for
/// disabled features are skipped: the spelling CSV is only written when
/// spell checking ran, and the broken-links CSV only when link checking
/// ran.
///
/// # Arguments
///
/// * `outcome` - Aggregated audit results
/// * `config` - Reporting configuration naming the output directory
/// * `spell_enabled` - Whether spell checking ran
/// * `link_enabled` - Whether link checking ran
pub fn write_reports(
    outcome: &AuditOutcome,
    config: &ReportingConfig,
    spell_enabled: bool,
    link_enabled: bool,
) -> std::io::Result<()> {
    let dir = Path::new(&config.output_dir);
    std::fs::create_dir_all(dir)?;

    if config.html_report {
        let path = dir.join("spell_check_report.html");
        std::fs::write(&path, html::render(outcome))?;
        tracing::info!("Wrote {}", path.display());
    }

    if config.csv_report {
        if spell_enabled {
            let path = dir.join("spelling_errors.csv");
            std::fs::write(&path, csv::render_findings(&outcome.findings))?;
            tracing::info!("Wrote {}", path.display());
        }

        if link_enabled {
            let path = dir.join("broken_links.csv");
            std::fs::write(&path, csv::render_broken_links(&outcome.broken_links))?;
            tracing::info!("Wrote {}", path.display());
        }
    }

    Ok(())
}
