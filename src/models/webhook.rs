//! Webhooks, webhook events and delivery logs

use super::common::{RelatedResource, Relationship, ResourceLinks};
use crate::pagination::ListResponse;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of event delivered to a webhook
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WebhookEventType {
    TransactionCreated,
    TransactionSettled,
    TransactionDeleted,
    Ping,
    /// A value not listed above, kept as sent
    #[serde(untagged)]
    Other(String),
}

/// Outcome of delivering an event
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WebhookDeliveryStatus {
    Delivered,
    Undeliverable,
    BadResponseCode,
    /// A value not listed above, kept as sent
    #[serde(untagged)]
    Other(String),
}

/// A registered webhook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webhook {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub id: String,
    pub attributes: WebhookAttributes,
    #[serde(default)]
    pub relationships: WebhookRelationships,
    #[serde(default)]
    pub links: ResourceLinks,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookAttributes {
    pub url: String,
    pub description: Option<String>,
    /// Signing key, only returned when the webhook is created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookRelationships {
    #[serde(default)]
    pub logs: RelatedResource,
}

/// Aggregated webhook listing
pub type WebhookList = ListResponse<Webhook>;

/// Body of `POST /webhooks`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookCreateRequest {
    pub data: WebhookCreateData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookCreateData {
    pub attributes: WebhookInputAttributes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookInputAttributes {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl WebhookCreateRequest {
    /// Register `url`, optionally with a description
    pub fn new(url: impl Into<String>, description: Option<String>) -> Self {
        Self {
            data: WebhookCreateData {
                attributes: WebhookInputAttributes {
                    url: url.into(),
                    description,
                },
            },
        }
    }
}

/// An event sent to a webhook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookEvent {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub id: String,
    pub attributes: WebhookEventAttributes,
    pub relationships: WebhookEventRelationships,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookEventAttributes {
    pub event_type: WebhookEventType,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookEventRelationships {
    pub webhook: Relationship,
    /// Absent for `PING` events
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction: Option<Relationship>,
}

/// Record of one delivery attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookDeliveryLog {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub id: String,
    pub attributes: WebhookDeliveryLogAttributes,
    pub relationships: WebhookDeliveryLogRelationships,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookDeliveryLogAttributes {
    pub request: WebhookDeliveryRequest,
    /// `null` when the endpoint never answered
    pub response: Option<WebhookDeliveryResponse>,
    pub delivery_status: WebhookDeliveryStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookDeliveryRequest {
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookDeliveryResponse {
    pub status_code: u16,
    pub body: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookDeliveryLogRelationships {
    pub webhook_event: Relationship,
}

/// Aggregated delivery log listing
pub type WebhookDeliveryLogList = ListResponse<WebhookDeliveryLog>;
