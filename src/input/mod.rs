//! Target input subsystem.
//!
//! # Responsibilities
//! - Represent a URL to probe (`Target`)
//! - Name where targets come from: one URL or a list file (`TargetSource`)
//! - Stream a list file line by line, skipping blank lines
//!
//! # Design Decisions
//! - Targets are not validated beyond being non-empty; the HTTP client
//!   rejects malformed URLs as fetch errors
//! - The list file is opened once and read lazily, so targets are fetched
//!   in file order as they are read

pub mod list;

use std::fmt;
use std::path::PathBuf;

pub use list::{InputError, TargetList};

/// A URL to probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target(String);

impl Target {
    /// Trim surrounding whitespace; `None` if nothing is left.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where the targets of a run come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetSource {
    /// A single URL given on the command line.
    Single(Target),
    /// A file with one URL per line.
    List(PathBuf),
}
