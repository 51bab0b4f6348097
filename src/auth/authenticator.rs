//! Authenticator implementation
//!
//! Applies the bearer credential to request builders.

use super::types::Credential;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::RequestBuilder;

/// Applies authentication to HTTP requests
#[derive(Debug, Clone)]
pub struct Authenticator {
    credential: Credential,
}

impl Authenticator {
    /// Create an authenticator for the given credential
    pub fn new(credential: impl Into<Credential>) -> Self {
        Self {
            credential: credential.into(),
        }
    }

    /// The credential this authenticator applies
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// The `Authorization` header value, marked sensitive
    ///
    /// Returns `None` if the token contains bytes that cannot appear in a
    /// header.
    pub fn header_value(&self) -> Option<HeaderValue> {
        let mut value =
            HeaderValue::from_str(&format!("Bearer {}", self.credential.token())).ok()?;
        value.set_sensitive(true);
        Some(value)
    }

    /// Apply authentication to a request builder
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        match self.header_value() {
            Some(value) => req.header(AUTHORIZATION, value),
            None => req.bearer_auth(self.credential.token()),
        }
    }
}
