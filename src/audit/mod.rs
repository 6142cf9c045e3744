//! Header and cookie audit subsystem.
//!
//! # Data Flow
//! ```text
//! TargetSource
//!     → runner.rs (sequential loop, one fetch per target)
//!     → verdict.rs (HSTS + Secure cookie checks)
//!     → report.rs (colorized text on stdout)
//! ```

pub mod report;
pub mod runner;
pub mod verdict;

pub use report::Reporter;
pub use runner::{Auditor, RunSummary};
pub use verdict::Verdict;
