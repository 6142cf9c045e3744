//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Column width used to align header names in the report.
pub const DEFAULT_HEADER_WIDTH: usize = 35;

/// Root configuration for the auditor.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct AuditorConfig {
    /// Report rendering settings.
    pub output: OutputConfig,

    /// HTTP client settings.
    pub client: ClientConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Report rendering configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Emit ANSI color escape codes. No terminal detection is done.
    pub color: bool,

    /// Width of the header-name column.
    pub header_width: usize,

    /// Line printed after every target in list mode.
    pub separator: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            header_width: DEFAULT_HEADER_WIDTH,
            separator: "-".repeat(32),
        }
    }
}

/// HTTP client configuration.
///
/// Timeouts, redirects and TLS stay at the client defaults.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    /// Overrides the client's default User-Agent.
    pub user_agent: Option<String>,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}
