//! Utility endpoints

use serde::{Deserialize, Serialize};

/// Response of `GET /util/ping`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PingResponse {
    pub meta: PingMeta,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PingMeta {
    /// ID of the authenticated user
    pub id: String,
    pub status_emoji: String,
}
