//! Configuration module - Scaffolding constants

/// Command-line description shown by `--help`
pub const DESCRIPTION: &str = "Developer support for mxd Library";

/// Generated file suffixes
pub mod suffixes {
    /// Interface header
    pub const HEADER: &str = ".hpp";

    /// Implementation file
    pub const IMPLEMENTATION: &str = ".cpp";

    /// Unit-test file
    pub const TEST: &str = ".t.cpp";
}

/// strftime formats used in the file headers
pub mod date_formats {
    /// Long-form date, e.g. "December 12, 2018"
    pub const LONG: &str = "%B %d, %Y";

    /// Copyright year
    pub const YEAR: &str = "%Y";
}

/// Template placeholders
pub mod placeholders {
    pub const COMPONENT: &str = "{component}";
    pub const DATE: &str = "{date}";
    pub const YEAR: &str = "{year}";
}
