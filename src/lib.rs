//! HTTP header auditor library.
//!
//! Fetches URLs one at a time, prints their response headers and checks
//! two security properties: a `Strict-Transport-Security` header and at
//! least one cookie carrying the `Secure` attribute.

pub mod audit;
pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod input;
pub mod lifecycle;
pub mod observability;
pub mod output;

pub use audit::{Auditor, Reporter, RunSummary, Verdict};
pub use config::AuditorConfig;
pub use error::AuditError;
pub use http::{Fetch, FetchError, HttpFetcher, ResponseSnapshot};
pub use input::{Target, TargetSource};
