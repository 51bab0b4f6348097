//! Pagination module
//!
//! Transparent aggregation of cursor-linked list endpoints.
//!
//! # Overview
//!
//! Every Up list endpoint answers with `{ "data": [...], "links": { "prev",
//! "next" } }`. [`Client::paginate`](crate::Client::paginate) follows `next`
//! until it is absent and returns one container holding every page's items.
//! The loop is generic over [`Paginated`], so accounts, transactions, tags,
//! webhooks and delivery logs share a single implementation.

mod engine;
mod types;

pub use types::{Links, ListOptions, ListResponse, Paginated};
