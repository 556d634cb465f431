//! Component command - Creates header, implementation and test files

use anyhow::{Context, Result};
use colored::*;
use std::path::Path;

use crate::core::scaffold::{self, Outcome, Report};
use crate::core::template::Stamp;
use crate::core::utils;

/// Scaffold `component` into the current working directory
pub fn run(component: &str, verbose: bool) -> Result<()> {
    if verbose {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        utils::print_info(&format!("Directory: {}", cwd.display()));
    }

    run_in(Path::new("."), component, verbose)?;
    Ok(())
}

/// Scaffold `component` into `dir`. Skipped files are not an error.
pub fn run_in(dir: &Path, component: &str, verbose: bool) -> Result<Vec<Report>> {
    if verbose {
        println!("{}", format!("🔨 Creating component '{}'...", component).bright_yellow());
    }

    let stamp = Stamp::now(component);
    let reports = scaffold::scaffold(dir, &stamp, |report| utils::print_report(report, verbose))?;

    if verbose {
        let written = reports.iter().filter(|r| r.outcome == Outcome::Written).count();
        let skipped = reports.len() - written;
        println!();
        println!(
            "   {} written, {} skipped",
            written.to_string().bright_green(),
            skipped.to_string().bright_yellow()
        );
    }

    Ok(reports)
}
