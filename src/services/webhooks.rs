//! Webhook endpoints

use crate::cancel::CancellationToken;
use crate::error::Result;
use crate::http::{add_options, Client};
use crate::models::{
    SingleResponse, Webhook, WebhookCreateRequest, WebhookDeliveryLogList, WebhookEvent,
    WebhookList,
};
use crate::pagination::ListOptions;
use reqwest::Method;

/// Webhook endpoints
#[derive(Debug, Clone, Copy)]
pub struct WebhooksService<'a> {
    client: &'a Client,
}

impl<'a> WebhooksService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List every webhook, following all pages
    pub async fn list(
        &self,
        ctx: &CancellationToken,
        opts: Option<&ListOptions>,
    ) -> Result<WebhookList> {
        let path = add_options(&self.client.endpoint(&["webhooks"])?, opts)?;
        self.client.paginate(ctx, &path).await
    }

    /// Get a single webhook
    pub async fn get(&self, ctx: &CancellationToken, webhook_id: &str) -> Result<Webhook> {
        let path = self.client.endpoint(&["webhooks", webhook_id])?;
        let response: SingleResponse<Webhook> = self.client.get_json(ctx, &path).await?;
        Ok(response.data)
    }

    /// Register a new webhook
    ///
    /// The returned webhook carries its `secret_key`; it is not shown again.
    pub async fn create(
        &self,
        ctx: &CancellationToken,
        url: &str,
        description: Option<&str>,
    ) -> Result<Webhook> {
        let path = self.client.endpoint(&["webhooks"])?;
        let body = WebhookCreateRequest::new(url, description.map(str::to_owned));
        let request = self.client.new_request(Method::POST, &path, Some(&body))?;
        let response: SingleResponse<Webhook> = self.client.execute(ctx, request).await?.value;
        Ok(response.data)
    }

    /// Delete a webhook
    pub async fn delete(&self, ctx: &CancellationToken, webhook_id: &str) -> Result<()> {
        let path = self.client.endpoint(&["webhooks", webhook_id])?;
        let request = self.client.new_request::<()>(Method::DELETE, &path, None)?;
        self.client.execute_no_content(ctx, request).await?;
        Ok(())
    }

    /// Send a `PING` event to a webhook
    pub async fn ping(&self, ctx: &CancellationToken, webhook_id: &str) -> Result<WebhookEvent> {
        let path = self.client.endpoint(&["webhooks", webhook_id, "ping"])?;
        let request = self.client.new_request::<()>(Method::POST, &path, None)?;
        let response: SingleResponse<WebhookEvent> =
            self.client.execute(ctx, request).await?.value;
        Ok(response.data)
    }

    /// List delivery logs of a webhook, following all pages
    pub async fn list_logs(
        &self,
        ctx: &CancellationToken,
        webhook_id: &str,
        opts: Option<&ListOptions>,
    ) -> Result<WebhookDeliveryLogList> {
        let endpoint = self.client.endpoint(&["webhooks", webhook_id, "logs"])?;
        let path = add_options(&endpoint, opts)?;
        self.client.paginate(ctx, &path).await
    }
}
