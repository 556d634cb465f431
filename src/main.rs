//! mxd admin - Developer support for the mxd Library
//!
//! Scaffolds the three files every mxd component starts from: the header,
//! its implementation and its unit tests, each pre-filled with the usual
//! file/author/date/copyright block.
//!
//! # Usage
//! ```bash
//! admin widget      # widget.hpp, widget.cpp, widget.t.cpp
//! ```
//!
//! Existing files are never overwritten.

use anyhow::Result;
use clap::Parser;
use colored::*;

mod commands;
mod core;

#[derive(Debug, Parser)]
#[command(name = "admin")]
#[command(about = crate::core::config::DESCRIPTION, long_about = None)]
struct Cli {
    /// Create files for the given component
    component: String,

    /// Verbose output (banner, paths, summary)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Banner
    if cli.verbose {
        println!("{}", "🔧 mxd admin".bright_cyan().bold());
        println!("{}", format!("   {}", crate::core::config::DESCRIPTION).bright_black());
        println!();
    }

    commands::component::run(&cli.component, cli.verbose)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn component_is_required() {
        let err = Cli::try_parse_from(["admin"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn component_is_taken_verbatim() {
        let cli = Cli::try_parse_from(["admin", "time point"]).unwrap();
        assert_eq!(cli.component, "time point");
        assert!(!cli.verbose);
    }

    #[test]
    fn verbose_is_the_only_flag() {
        let cli = Cli::try_parse_from(["admin", "-v", "widget"]).unwrap();
        assert_eq!(cli.component, "widget");
        assert!(cli.verbose);

        for flag in ["-q", "--quiet", "-V", "--version"] {
            assert!(Cli::try_parse_from(["admin", flag, "widget"]).is_err(), "{}", flag);
        }
    }

    #[test]
    fn help_shows_description() {
        let help = Cli::command().render_help().to_string();
        assert!(help.contains("Developer support for mxd Library"));
        assert!(help.contains("<COMPONENT>"));
    }

    #[test]
    fn only_one_component() {
        assert!(Cli::try_parse_from(["admin", "a", "b"]).is_err());
    }
}
