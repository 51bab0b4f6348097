//! Account endpoints

use crate::cancel::CancellationToken;
use crate::error::Result;
use crate::http::{add_options, Client};
use crate::models::{Account, AccountList, AccountType, OwnershipType, SingleResponse};
use crate::pagination::ListOptions;
use serde::Serialize;

/// Filters for listing accounts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListAccountsOptions {
    #[serde(flatten)]
    pub list: ListOptions,
    #[serde(rename = "filter[accountType]", skip_serializing_if = "Option::is_none")]
    pub account_type: Option<AccountType>,
    #[serde(rename = "filter[ownershipType]", skip_serializing_if = "Option::is_none")]
    pub ownership_type: Option<OwnershipType>,
}

/// Account endpoints
#[derive(Debug, Clone, Copy)]
pub struct AccountsService<'a> {
    client: &'a Client,
}

impl<'a> AccountsService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List every account, following all pages
    pub async fn list(
        &self,
        ctx: &CancellationToken,
        opts: Option<&ListAccountsOptions>,
    ) -> Result<AccountList> {
        let path = add_options(&self.client.endpoint(&["accounts"])?, opts)?;
        self.client.paginate(ctx, &path).await
    }

    /// Get a single account
    pub async fn get(&self, ctx: &CancellationToken, account_id: &str) -> Result<Account> {
        let path = self.client.endpoint(&["accounts", account_id])?;
        let response: SingleResponse<Account> = self.client.get_json(ctx, &path).await?;
        Ok(response.data)
    }
}
