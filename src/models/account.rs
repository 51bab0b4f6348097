//! Accounts

use super::common::{MoneyObject, RelatedResource, ResourceLinks};
use crate::pagination::ListResponse;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of bank account
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    Saver,
    Transactional,
    HomeLoan,
    /// A value not listed above, kept as sent
    #[serde(untagged)]
    Other(String),
}

/// Structure under which an account is owned
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OwnershipType {
    Individual,
    Joint,
    /// A value not listed above, kept as sent
    #[serde(untagged)]
    Other(String),
}

/// An Up bank account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub id: String,
    pub attributes: AccountAttributes,
    #[serde(default)]
    pub relationships: AccountRelationships,
    #[serde(default)]
    pub links: ResourceLinks,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountAttributes {
    pub display_name: String,
    pub account_type: AccountType,
    pub ownership_type: OwnershipType,
    pub balance: MoneyObject,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRelationships {
    #[serde(default)]
    pub transactions: RelatedResource,
}

/// Aggregated account listing
pub type AccountList = ListResponse<Account>;
