//! Utility endpoints

use crate::cancel::CancellationToken;
use crate::error::Result;
use crate::http::Client;
use crate::models::PingResponse;

/// Utility endpoints
#[derive(Debug, Clone, Copy)]
pub struct UtilityService<'a> {
    client: &'a Client,
}

impl<'a> UtilityService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Verify the token works
    pub async fn ping(&self, ctx: &CancellationToken) -> Result<PingResponse> {
        let path = self.client.endpoint(&["util", "ping"])?;
        self.client.get_json(ctx, &path).await
    }
}
