//! Tags

use super::common::{RelatedResource, ResourceIdentifier};
use crate::pagination::ListResponse;
use serde::{Deserialize, Serialize};

/// A tag; its ID is the tag label itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub id: String,
    #[serde(default)]
    pub relationships: TagRelationships,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRelationships {
    #[serde(default)]
    pub transactions: RelatedResource,
}

/// Aggregated tag listing
pub type TagList = ListResponse<Tag>;

/// Body for adding tags to, or removing tags from, a transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionTagsRequest {
    pub data: Vec<ResourceIdentifier>,
}

impl TransactionTagsRequest {
    /// Reference each tag label as a `tags` resource
    pub fn new<I, S>(tag_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            data: tag_ids
                .into_iter()
                .map(|id| ResourceIdentifier::new("tags", id))
                .collect(),
        }
    }
}
