//! Scaffold module - Writes the component files
//!
//! Files are never overwritten: an existing target is left untouched and
//! reported as skipped. The three writes are independent and not
//! transactional, so an I/O error leaves earlier files in place.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::core::template::{Stamp, Template};

/// What happened to a single target file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Written,
    Skipped,
}

/// Result of scaffolding one file
#[derive(Debug, Clone)]
pub struct Report {
    pub file_name: String,
    pub path: PathBuf,
    pub bytes: usize,
    pub outcome: Outcome,
}

/// Write `text` to a new file at `path`, unless the path already exists
///
/// A dangling symlink at `path` counts as existing: `create_new` refuses to
/// follow it, so the link target is never created.
pub fn write_new_file(path: &Path, text: &str) -> Result<Outcome> {
    if path.exists() {
        return Ok(Outcome::Skipped);
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(Outcome::Skipped),
        Err(e) => {
            return Err(e).context(format!("Failed to create file: {}", path.display()));
        }
    };

    file.write_all(text.as_bytes())
        .context(format!("Failed to write file: {}", path.display()))?;

    Ok(Outcome::Written)
}

/// Render and write header, implementation and test file into `dir`
///
/// `on_report` sees each file as soon as it is handled, so output for earlier
/// files is not lost when a later write fails.
pub fn scaffold<F>(dir: &Path, stamp: &Stamp, mut on_report: F) -> Result<Vec<Report>>
where
    F: FnMut(&Report),
{
    let mut reports = Vec::with_capacity(Template::ALL.len());

    for template in Template::ALL {
        let file_name = template.file_name(&stamp.component);
        let path = dir.join(&file_name);
        let text = template.render(stamp);
        let outcome = write_new_file(&path, &text)?;

        let report = Report {
            file_name,
            path,
            bytes: text.len(),
            outcome,
        };
        on_report(&report);
        reports.push(report);
    }

    Ok(reports)
}
