//! Transaction endpoints

use crate::cancel::CancellationToken;
use crate::error::Result;
use crate::http::{add_options, Client};
use crate::models::{SingleResponse, Transaction, TransactionList, TransactionStatus};
use crate::pagination::ListOptions;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Filters for listing transactions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListTransactionsOptions {
    #[serde(flatten)]
    pub list: ListOptions,
    #[serde(rename = "filter[status]", skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionStatus>,
    /// Only transactions created at or after this instant
    #[serde(rename = "filter[since]", skip_serializing_if = "Option::is_none")]
    pub since: Option<DateTime<Utc>>,
    /// Only transactions created before this instant
    #[serde(rename = "filter[until]", skip_serializing_if = "Option::is_none")]
    pub until: Option<DateTime<Utc>>,
    /// Category ID
    #[serde(rename = "filter[category]", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Tag label
    #[serde(rename = "filter[tag]", skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

/// Transaction endpoints
#[derive(Debug, Clone, Copy)]
pub struct TransactionsService<'a> {
    client: &'a Client,
}

impl<'a> TransactionsService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List transactions across all accounts, following all pages
    pub async fn list(
        &self,
        ctx: &CancellationToken,
        opts: Option<&ListTransactionsOptions>,
    ) -> Result<TransactionList> {
        let path = add_options(&self.client.endpoint(&["transactions"])?, opts)?;
        self.client.paginate(ctx, &path).await
    }

    /// List transactions of one account, following all pages
    pub async fn list_by_account(
        &self,
        ctx: &CancellationToken,
        account_id: &str,
        opts: Option<&ListTransactionsOptions>,
    ) -> Result<TransactionList> {
        let endpoint = self
            .client
            .endpoint(&["accounts", account_id, "transactions"])?;
        let path = add_options(&endpoint, opts)?;
        self.client.paginate(ctx, &path).await
    }

    /// Get a single transaction
    pub async fn get(&self, ctx: &CancellationToken, transaction_id: &str) -> Result<Transaction> {
        let path = self.client.endpoint(&["transactions", transaction_id])?;
        let response: SingleResponse<Transaction> = self.client.get_json(ctx, &path).await?;
        Ok(response.data)
    }
}
