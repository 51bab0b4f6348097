//! Resource schemas
//!
//! Serde shapes for the Up API's JSON:API documents. Field names follow the
//! remote contract exactly; nothing here performs I/O.

mod account;
mod category;
mod common;
mod tag;
mod transaction;
mod utility;
mod webhook;

pub use account::{
    Account, AccountAttributes, AccountList, AccountRelationships, AccountType, OwnershipType,
};
pub use category::{
    Category, CategoryAttributes, CategoryList, CategoryRelationships, CategoryUpdateRequest,
};
pub use common::{
    MoneyObject, RelatedLinks, RelatedResource, Relationship, RelationshipList,
    ResourceIdentifier, ResourceLinks, SingleResponse,
};
pub use tag::{Tag, TagList, TagRelationships, TransactionTagsRequest};
pub use transaction::{
    CardPurchaseMethod, CardPurchaseMethodKind, Cashback, HoldInfo, RoundUp, Transaction,
    TransactionAttributes, TransactionList, TransactionRelationships, TransactionStatus,
};
pub use utility::{PingMeta, PingResponse};
pub use webhook::{
    Webhook, WebhookAttributes, WebhookCreateData, WebhookCreateRequest, WebhookDeliveryLog,
    WebhookDeliveryLogAttributes, WebhookDeliveryLogList, WebhookDeliveryLogRelationships,
    WebhookDeliveryRequest, WebhookDeliveryResponse, WebhookDeliveryStatus, WebhookEvent,
    WebhookEventAttributes, WebhookEventRelationships, WebhookEventType, WebhookInputAttributes,
    WebhookList, WebhookRelationships,
};
