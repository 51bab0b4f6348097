//! Categories

use super::common::{Relationship, RelationshipList, ResourceIdentifier, ResourceLinks};
use crate::pagination::{Links, Paginated};
use serde::{Deserialize, Serialize};

/// A spending category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub id: String,
    pub attributes: CategoryAttributes,
    #[serde(default)]
    pub relationships: CategoryRelationships,
    #[serde(default)]
    pub links: ResourceLinks,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAttributes {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRelationships {
    #[serde(default)]
    pub parent: Relationship,
    #[serde(default)]
    pub children: RelationshipList,
}

/// Category listing
///
/// The endpoint returns every category at once and carries no cursor links,
/// so pagination stops after the first page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryList {
    pub data: Vec<Category>,
}

impl Paginated for CategoryList {
    fn links(&self) -> Option<&Links> {
        None
    }

    fn item_count(&self) -> usize {
        self.data.len()
    }

    fn absorb(&mut self, next: Self) {
        self.data.extend(next.data);
    }
}

/// Body for setting or clearing a transaction's category
///
/// `data: null` removes the category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryUpdateRequest {
    pub data: Option<ResourceIdentifier>,
}

impl CategoryUpdateRequest {
    /// Assign `category_id`
    pub fn set(category_id: impl Into<String>) -> Self {
        Self {
            data: Some(ResourceIdentifier::new("categories", category_id)),
        }
    }

    /// Remove the category
    pub fn clear() -> Self {
        Self { data: None }
    }
}
