//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via `tracing`
//! - Logs go to stderr; stdout carries only the report

pub mod logging;
