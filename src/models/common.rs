//! Building blocks shared by several resources

use serde::{Deserialize, Serialize};

/// A monetary amount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyObject {
    /// ISO 4217 currency code
    pub currency_code: String,
    /// Decimal amount as a string, e.g. `"-12.50"`
    pub value: String,
    /// Amount in the smallest unit of the currency, e.g. `-1250`
    pub value_in_base_units: i64,
}

/// `{ "type": ..., "id": ... }` reference to another resource
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceIdentifier {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub id: String,
}

impl ResourceIdentifier {
    /// Create a reference
    pub fn new(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            id: id.into(),
        }
    }
}

/// `links` object of a resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLinks {
    /// Canonical URL of the resource
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
}

/// `links` object of a relationship
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedLinks {
    /// URL listing the related resources
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related: Option<String>,
}

/// To-one relationship; `data` is `null` when unset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    pub data: Option<ResourceIdentifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<RelatedLinks>,
}

impl Relationship {
    /// ID of the related resource, if any
    pub fn id(&self) -> Option<&str> {
        self.data.as_ref().map(|data| data.id.as_str())
    }
}

/// To-many relationship
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipList {
    #[serde(default)]
    pub data: Vec<ResourceIdentifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<RelatedLinks>,
}

/// Relationship exposing only a link to the related collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedResource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<RelatedLinks>,
}

/// `{ "data": ... }` document for a single resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleResponse<T> {
    pub data: T,
}
