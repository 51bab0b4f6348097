//! HTTP module
//!
//! Request construction and response decoding for the Up API.
//!
//! # Features
//!
//! - **Request Builder**: resolves paths against the base URL and sets the
//!   accept, user agent and bearer headers
//! - **Response Decoder**: classifies status codes and decodes either the
//!   expected shape or the structured API error
//! - **Query Options**: serializes typed option structs to query strings
//! - **Cancellation**: every exchange races the caller's token

mod client;
mod query;

pub use client::{Client, Decoded, ResponseMeta};
pub use query::{add_options, encode_options};
