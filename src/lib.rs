// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # up-client
//!
//! A typed, async client for the Up banking API.
//!
//! ## Features
//!
//! - **Typed Resources**: accounts, transactions, categories, tags, webhooks
//! - **Transparent Pagination**: list calls follow every `next` link and
//!   return one merged collection
//! - **Structured Errors**: API errors surface their status, title, detail
//!   and source
//! - **Cancellation**: every call takes a token that abandons in-flight work
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use up_client::{CancellationToken, Client, Result};
//! use up_client::services::ListTransactionsOptions;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::from_env()?;
//!     let ctx = CancellationToken::new();
//!
//!     let ping = client.utility().ping(&ctx).await?;
//!     println!("{}", ping.meta.status_emoji);
//!
//!     // Every page, merged in server order
//!     let transactions = client
//!         .transactions()
//!         .list(&ctx, Some(&ListTransactionsOptions::default()))
//!         .await?;
//!     println!("{} transactions", transactions.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Resource Services                      │
//! │  accounts  transactions  categories  tags  webhooks  util   │
//! └─────────────────────────────────────────────────────────────┘
//!                                │
//! ┌───────────────┬──────────────┴─────┬────────────────────────┐
//! │    Request    │      Response      │       Pagination       │
//! ├───────────────┼────────────────────┼────────────────────────┤
//! │ Base URL join │ Status >= 400      │ Follow links.next      │
//! │ Query options │   -> ApiError      │ Merge in fetch order   │
//! │ Bearer auth   │ JSON decode        │ Cycle / page guard     │
//! │ JSON body     │ Cancellation race  │                        │
//! └───────────────┴────────────────────┴────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: Document resource model fields before 1.0 release

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Caller-driven cancellation
pub mod cancel;

/// Client configuration
pub mod config;

/// Bearer token authentication
pub mod auth;

/// Request building and response decoding
pub mod http;

/// Transparent multi-page aggregation
pub mod pagination;

/// Resource schemas
pub mod models;

/// Endpoint calls per resource family
pub mod services;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use cancel::CancellationToken;
pub use config::ClientConfig;
pub use error::{ApiError, Error, Result};
pub use http::Client;
pub use pagination::{Links, ListOptions, ListResponse, Paginated};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
