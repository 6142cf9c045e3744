//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration
//! - Initialize logging
//! - Build the HTTP client and run the audit against stdout

use std::io;

use crate::audit::{Auditor, Reporter, RunSummary};
use crate::cli::Cli;
use crate::config::{load_config, AuditorConfig, ConfigError};
use crate::error::AuditError;
use crate::http::HttpFetcher;
use crate::input::TargetSource;
use crate::observability::logging::init_logging;

/// Config file (or defaults) with command-line overrides applied.
pub fn resolve_config(cli: &Cli) -> Result<AuditorConfig, ConfigError> {
    let mut config = match cli.config {
        Some(ref path) => load_config(path)?,
        None => AuditorConfig::default(),
    };

    if cli.no_color {
        config.output.color = false;
    }

    Ok(config)
}

/// Audit `source` with the client and output described by `config`.
pub async fn run(config: AuditorConfig, source: TargetSource) -> Result<RunSummary, AuditError> {
    init_logging(&config.observability.log_level);

    tracing::info!(
        color = config.output.color,
        header_width = config.output.header_width,
        user_agent = ?config.client.user_agent,
        "Configuration loaded"
    );

    let fetcher = HttpFetcher::new(&config.client)?;
    let reporter = Reporter::new(io::stdout().lock(), &config.output);

    Auditor::new(fetcher, reporter).run(&source).await
}
