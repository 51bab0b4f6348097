//! Resource services
//!
//! One service per resource family. Each borrows the shared [`Client`] and
//! composes request building, decoding and pagination into endpoint calls.
//!
//! ```rust,ignore
//! let client = Client::from_env()?;
//! let ctx = CancellationToken::new();
//! let accounts = client.accounts().list(&ctx, None).await?;
//! ```

mod accounts;
mod categories;
mod tags;
mod transactions;
mod utility;
mod webhooks;

pub use accounts::{AccountsService, ListAccountsOptions};
pub use categories::{CategoriesService, ListCategoriesOptions};
pub use tags::TagsService;
pub use transactions::{ListTransactionsOptions, TransactionsService};
pub use utility::UtilityService;
pub use webhooks::WebhooksService;

use crate::http::Client;

impl Client {
    /// Account endpoints
    pub fn accounts(&self) -> AccountsService<'_> {
        AccountsService::new(self)
    }

    /// Category endpoints
    pub fn categories(&self) -> CategoriesService<'_> {
        CategoriesService::new(self)
    }

    /// Tag endpoints
    pub fn tags(&self) -> TagsService<'_> {
        TagsService::new(self)
    }

    /// Transaction endpoints
    pub fn transactions(&self) -> TransactionsService<'_> {
        TransactionsService::new(self)
    }

    /// Webhook endpoints
    pub fn webhooks(&self) -> WebhooksService<'_> {
        WebhooksService::new(self)
    }

    /// Utility endpoints
    pub fn utility(&self) -> UtilityService<'_> {
        UtilityService::new(self)
    }
}
