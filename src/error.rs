//! Top-level error type for a run.

use thiserror::Error;

use crate::config::ConfigError;
use crate::input::InputError;

/// Errors that end a run with a non-zero exit code.
///
/// Fetch failures are not here: they are reported per target and the run
/// carries on.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}
