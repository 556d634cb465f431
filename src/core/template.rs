//! Template module - The three fixed component templates
//!
//! Every component of the mxd Library is a header, an implementation file and
//! a unit-test file. The skeletons live under `templates/` and are embedded at
//! compile time.

use chrono::{Local, NaiveDate};

use crate::core::config::{date_formats, placeholders, suffixes};

const HEADER: &str = include_str!("../../templates/header.hpp.in");
const IMPLEMENTATION: &str = include_str!("../../templates/implementation.cpp.in");
const TEST: &str = include_str!("../../templates/test.t.cpp.in");

/// One of the three generated files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Header,
    Implementation,
    Test,
}

impl Template {
    /// All templates, in the order they are written
    pub const ALL: [Template; 3] = [Template::Header, Template::Implementation, Template::Test];

    /// File suffix appended to the component name
    pub fn suffix(self) -> &'static str {
        match self {
            Template::Header => suffixes::HEADER,
            Template::Implementation => suffixes::IMPLEMENTATION,
            Template::Test => suffixes::TEST,
        }
    }

    /// Target file name for `component`
    pub fn file_name(self, component: &str) -> String {
        format!("{}{}", component, self.suffix())
    }

    /// Raw template text
    pub fn text(self) -> &'static str {
        match self {
            Template::Header => HEADER,
            Template::Implementation => IMPLEMENTATION,
            Template::Test => TEST,
        }
    }

    /// Fill the template with the component name and date from `stamp`
    pub fn render(self, stamp: &Stamp) -> String {
        // Component goes last so braces in the name are never expanded.
        self.text()
            .replace(placeholders::DATE, &stamp.long_date())
            .replace(placeholders::YEAR, &stamp.year())
            .replace(placeholders::COMPONENT, &stamp.component)
    }
}

/// Per-invocation rendering input: the component and the date it was created
#[derive(Debug, Clone)]
pub struct Stamp {
    pub component: String,
    pub date: NaiveDate,
}

impl Stamp {
    /// Capture today's local date for `component`
    pub fn now(component: &str) -> Self {
        Self::new(component, Local::now().date_naive())
    }

    pub fn new(component: &str, date: NaiveDate) -> Self {
        Self {
            component: component.to_string(),
            date,
        }
    }

    /// e.g. "December 12, 2018"
    pub fn long_date(&self) -> String {
        self.date.format(date_formats::LONG).to_string()
    }

    pub fn year(&self) -> String {
        self.date.format(date_formats::YEAR).to_string()
    }
}
