//! HTTP fetching subsystem.
//!
//! # Data Flow
//! ```text
//! Target URL
//!     → client.rs (single GET, transport errors → FetchError)
//!     → response.rs (status, headers, parsed cookies)
//!     → audit subsystem
//! ```

pub mod client;
pub mod response;

pub use client::{Fetch, FetchError, HttpFetcher};
pub use response::ResponseSnapshot;
