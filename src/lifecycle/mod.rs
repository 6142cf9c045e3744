//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Apply CLI overrides → Init logging → Build client → Audit
//! ```
//!
//! # Design Decisions
//! - Fail fast: config and client errors end the run before any request

pub mod startup;

pub use startup::{resolve_config, run};
