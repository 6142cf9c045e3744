//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (column width, log level)
//! - Reject values the HTTP client would refuse later
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AuditorConfig → Result<(), Vec<ValidationError>>

use reqwest::header::HeaderValue;
use thiserror::Error;

use crate::config::schema::AuditorConfig;

const MAX_HEADER_WIDTH: usize = 256;
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("output.header_width must be between 1 and {max}, got {got}")]
    HeaderWidth { got: usize, max: usize },

    #[error("output.separator must not be empty")]
    EmptySeparator,

    #[error("observability.log_level '{0}' is not one of trace, debug, info, warn, error")]
    LogLevel(String),

    #[error("client.user_agent is not a valid header value")]
    UserAgent,
}

/// Check a deserialized configuration for semantic errors.
pub fn validate_config(config: &AuditorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let width = config.output.header_width;
    if width == 0 || width > MAX_HEADER_WIDTH {
        errors.push(ValidationError::HeaderWidth {
            got: width,
            max: MAX_HEADER_WIDTH,
        });
    }

    if config.output.separator.is_empty() {
        errors.push(ValidationError::EmptySeparator);
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::LogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if let Some(ref agent) = config.client.user_agent {
        if HeaderValue::from_str(agent).is_err() {
            errors.push(ValidationError::UserAgent);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
