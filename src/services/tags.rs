//! Tag endpoints

use crate::cancel::CancellationToken;
use crate::error::Result;
use crate::http::{add_options, Client};
use crate::models::{TagList, TransactionTagsRequest};
use crate::pagination::ListOptions;
use reqwest::Method;

/// Tag endpoints
#[derive(Debug, Clone, Copy)]
pub struct TagsService<'a> {
    client: &'a Client,
}

impl<'a> TagsService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List every tag in use, following all pages
    pub async fn list(&self, ctx: &CancellationToken, opts: Option<&ListOptions>) -> Result<TagList> {
        let path = add_options(&self.client.endpoint(&["tags"])?, opts)?;
        self.client.paginate(ctx, &path).await
    }

    /// Add tags to a transaction
    pub async fn add_to_transaction<S: AsRef<str>>(
        &self,
        ctx: &CancellationToken,
        transaction_id: &str,
        tag_ids: &[S],
    ) -> Result<()> {
        self.send_tags(ctx, Method::POST, transaction_id, tag_ids).await
    }

    /// Remove tags from a transaction
    pub async fn remove_from_transaction<S: AsRef<str>>(
        &self,
        ctx: &CancellationToken,
        transaction_id: &str,
        tag_ids: &[S],
    ) -> Result<()> {
        self.send_tags(ctx, Method::DELETE, transaction_id, tag_ids)
            .await
    }

    async fn send_tags<S: AsRef<str>>(
        &self,
        ctx: &CancellationToken,
        method: Method,
        transaction_id: &str,
        tag_ids: &[S],
    ) -> Result<()> {
        let path = self
            .client
            .endpoint(&["transactions", transaction_id, "relationships", "tags"])?;
        let body = TransactionTagsRequest::new(tag_ids.iter().map(|id| id.as_ref()));
        let request = self.client.new_request(method, &path, Some(&body))?;
        self.client.execute_no_content(ctx, request).await?;
        Ok(())
    }
}
