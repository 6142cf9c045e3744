//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → AuditorConfig (validated, immutable)
//!     → CLI overrides applied (--no-color)
//! ```
//!
//! # Design Decisions
//! - Every field has a default, so running without a config file is the norm
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{AuditorConfig, ClientConfig, ObservabilityConfig, OutputConfig};
