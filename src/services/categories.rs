//! Category endpoints

use crate::cancel::CancellationToken;
use crate::error::Result;
use crate::http::{add_options, Client};
use crate::models::{Category, CategoryList, CategoryUpdateRequest, SingleResponse};
use reqwest::Method;
use serde::Serialize;

/// Filters for listing categories
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListCategoriesOptions {
    /// Only children of this parent category
    #[serde(rename = "filter[parent]", skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

/// Category endpoints
#[derive(Debug, Clone, Copy)]
pub struct CategoriesService<'a> {
    client: &'a Client,
}

impl<'a> CategoriesService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List categories (the endpoint is not paginated)
    pub async fn list(
        &self,
        ctx: &CancellationToken,
        opts: Option<&ListCategoriesOptions>,
    ) -> Result<CategoryList> {
        let path = add_options(&self.client.endpoint(&["categories"])?, opts)?;
        self.client.paginate(ctx, &path).await
    }

    /// Get a single category
    pub async fn get(&self, ctx: &CancellationToken, category_id: &str) -> Result<Category> {
        let path = self.client.endpoint(&["categories", category_id])?;
        let response: SingleResponse<Category> = self.client.get_json(ctx, &path).await?;
        Ok(response.data)
    }

    /// Assign a category to a transaction
    pub async fn update_transaction_category(
        &self,
        ctx: &CancellationToken,
        transaction_id: &str,
        category_id: &str,
    ) -> Result<()> {
        self.patch_category(ctx, transaction_id, &CategoryUpdateRequest::set(category_id))
            .await
    }

    /// Remove the category from a transaction
    pub async fn remove_transaction_category(
        &self,
        ctx: &CancellationToken,
        transaction_id: &str,
    ) -> Result<()> {
        self.patch_category(ctx, transaction_id, &CategoryUpdateRequest::clear())
            .await
    }

    async fn patch_category(
        &self,
        ctx: &CancellationToken,
        transaction_id: &str,
        body: &CategoryUpdateRequest,
    ) -> Result<()> {
        let path = self.client.endpoint(&[
            "transactions",
            transaction_id,
            "relationships",
            "category",
        ])?;
        let request = self.client.new_request(Method::PATCH, &path, Some(body))?;
        self.client.execute_no_content(ctx, request).await?;
        Ok(())
    }
}
