//!
//! The conformance tester filters.
//!

use regex::Regex;

///
/// Checks if the test name is covered by the prefix list.
///
/// Entries are literal prefixes, not patterns: `Call50000` also covers
/// `Call50000_ecrec`. Matching is case-sensitive, and an empty list covers
/// nothing.
///
pub fn covered(name: &str, prefixes: &[String]) -> bool {
    prefixes.iter().any(|prefix| name.starts_with(prefix.as_str()))
}

/// The default fixture file extension.
pub const FIXTURE_EXTENSION: &str = ".json";

///
/// The file-name and directory filters applied during fixture discovery.
///
#[derive(Debug, Default)]
pub struct Filters {
    /// The fixture file-name filter. Defaults to the fixture extension.
    file_filter: Option<Regex>,
    /// The directory exclusion filter.
    exclude_dir: Option<Regex>,
}

impl Filters {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(file_filter: Option<Regex>, exclude_dir: Option<Regex>) -> Self {
        Self {
            file_filter,
            exclude_dir,
        }
    }

    ///
    /// Check if the fixture file must be visited.
    ///
    pub fn check_file_name(&self, name: &str) -> bool {
        match self.file_filter {
            Some(ref filter) => filter.is_match(name),
            None => name.ends_with(FIXTURE_EXTENSION),
        }
    }

    ///
    /// Check if the walker may descend into the directory.
    ///
    pub fn check_directory(&self, name: &str) -> bool {
        match self.exclude_dir {
            Some(ref filter) => !filter.is_match(name),
            None => true,
        }
    }
}
