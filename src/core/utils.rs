//! Utilities module - Console messages

use colored::*;

use crate::core::scaffold::{Outcome, Report};

/// Print a success message
pub fn print_success(message: &str) {
    println!("   {} {}", "✓".bright_green(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("   {} {}", "⚠".bright_yellow(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("   {} {}", "ℹ".bright_cyan(), message);
}

/// Confirmation or skip notice for one scaffolded file
pub fn report_line(report: &Report) -> String {
    match report.outcome {
        Outcome::Written => format!("writing {}", report.file_name),
        Outcome::Skipped => format!("I will not overwrite {}... skipping", report.file_name),
    }
}

/// Print the confirmation or skip notice for one scaffolded file
pub fn print_report(report: &Report, verbose: bool) {
    let line = report_line(report);
    match report.outcome {
        Outcome::Written => {
            print_success(&line);
            if verbose {
                println!(
                    "     {} ({} bytes)",
                    report.path.display().to_string().bright_black(),
                    report.bytes
                );
            }
        }
        Outcome::Skipped => print_warning(&line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn report(file_name: &str, outcome: Outcome) -> Report {
        Report {
            file_name: file_name.to_string(),
            path: PathBuf::from(".").join(file_name),
            bytes: 42,
            outcome,
        }
    }

    #[test]
    fn written_line_names_the_file() {
        let line = report_line(&report("widget.hpp", Outcome::Written));
        assert_eq!(line, "writing widget.hpp");
    }

    #[test]
    fn skipped_line_names_the_file() {
        let line = report_line(&report("widget.t.cpp", Outcome::Skipped));
        assert_eq!(line, "I will not overwrite widget.t.cpp... skipping");
    }

    #[test]
    fn line_uses_file_name_not_path() {
        let line = report_line(&report("widget.cpp", Outcome::Written));
        assert!(!line.contains("./"));
    }
}
