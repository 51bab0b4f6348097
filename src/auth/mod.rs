//! Authentication module
//!
//! The Up API uses personal access tokens sent as bearer credentials.
//! [`Credential`] holds the token without ever printing it, and the
//! [`Authenticator`] stamps it onto outgoing requests.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::Credential;
