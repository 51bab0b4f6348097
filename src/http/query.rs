//! Query-option encoding
//!
//! Option structs declare their wire keys with `#[serde(rename = "...")]`
//! and skip unset fields with `skip_serializing_if = "Option::is_none"`, so
//! only explicitly set options reach the query string.

use crate::error::Result;
use serde::Serialize;

/// Encode an options value as a query string without the leading `?`
pub fn encode_options<O: Serialize + ?Sized>(opts: &O) -> Result<String> {
    Ok(serde_urlencoded::to_string(opts)?)
}

/// Append the encoded options to `path`
///
/// `None`, or options with nothing set, leave the path untouched. A path that
/// already carries a query gets the options appended after `&`.
pub fn add_options<O: Serialize + ?Sized>(path: &str, opts: Option<&O>) -> Result<String> {
    let Some(opts) = opts else {
        return Ok(path.to_string());
    };

    let query = encode_options(opts)?;
    if query.is_empty() {
        return Ok(path.to_string());
    }

    let separator = if path.contains('?') { '&' } else { '?' };
    Ok(format!("{path}{separator}{query}"))
}
