//! Captured response metadata.
//!
//! # Responsibilities
//! - Hold status and headers for the lifetime of one target
//! - Parse `Set-Cookie` headers into cookies
//! - Render header names in canonical form for display
//!
//! # Design Decisions
//! - Header lookup is case-insensitive (`HeaderMap` semantics)
//! - Unparseable `Set-Cookie` values are skipped, not reported

use std::borrow::Cow;

use cookie::Cookie;
use reqwest::header::{HeaderMap, HeaderName, SET_COOKIE};
use reqwest::StatusCode;

/// Status and headers of a received response.
#[derive(Debug, Clone)]
pub struct ResponseSnapshot {
    pub status: StatusCode,
    pub headers: HeaderMap,
}

impl ResponseSnapshot {
    pub fn new(status: StatusCode, headers: HeaderMap) -> Self {
        Self { status, headers }
    }

    /// First value of a header as text; non-UTF-8 bytes are replaced.
    pub fn header(&self, name: &HeaderName) -> Option<Cow<'_, str>> {
        self.headers
            .get(name)
            .map(|v| String::from_utf8_lossy(v.as_bytes()))
    }

    /// Every header entry, one item per value, as `(canonical name, value)`.
    pub fn header_entries(&self) -> impl Iterator<Item = (String, String)> + '_ {
        self.headers.iter().map(|(name, value)| {
            (
                canonical_name(name.as_str()),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
    }

    /// Cookies set by the response, in header order.
    pub fn cookies(&self) -> Vec<Cookie<'static>> {
        self.headers
            .get_all(SET_COOKIE)
            .iter()
            .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
            .filter_map(|raw| match Cookie::parse(raw.clone()) {
                Ok(cookie) => Some(cookie),
                Err(e) => {
                    tracing::debug!(set_cookie = %raw, error = %e, "Skipping unparseable cookie");
                    None
                }
            })
            .collect()
    }
}

/// Capitalize each dash-separated word: `x-frame-options` → `X-Frame-Options`.
pub fn canonical_name(name: &str) -> String {
    name.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}
