//! Security posture checks for a single response.

use reqwest::header::STRICT_TRANSPORT_SECURITY;

use crate::http::ResponseSnapshot;

/// Outcome of the HSTS and Secure-cookie checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Verdict {
    /// Trimmed `Strict-Transport-Security` value, if non-empty.
    pub hsts: Option<String>,
    /// Serialized form of every cookie carrying the `Secure` attribute.
    pub secure_cookies: Vec<String>,
}

impl Verdict {
    pub fn evaluate(response: &ResponseSnapshot) -> Self {
        let hsts = response
            .header(&STRICT_TRANSPORT_SECURITY)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        let secure_cookies = response
            .cookies()
            .into_iter()
            .filter(|cookie| cookie.secure().unwrap_or(false))
            .map(|cookie| cookie.to_string())
            .collect();

        Self {
            hsts,
            secure_cookies,
        }
    }

    pub fn hsts_present(&self) -> bool {
        self.hsts.is_some()
    }

    pub fn secure_cookie_present(&self) -> bool {
        !self.secure_cookies.is_empty()
    }
}
