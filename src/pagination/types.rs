//! Pagination types and traits
//!
//! Defines the page container shared by every list endpoint and the
//! capability the engine needs from it.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Cursor links of one page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    /// URL of the previous page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    /// URL of the next page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

impl Links {
    /// Next page URL, treating an empty string as absent
    pub fn next(&self) -> Option<&str> {
        self.next.as_deref().filter(|url| !url.is_empty())
    }

    /// Previous page URL, treating an empty string as absent
    pub fn prev(&self) -> Option<&str> {
        self.prev.as_deref().filter(|url| !url.is_empty())
    }

    /// Whether another page follows
    pub fn has_next(&self) -> bool {
        self.next().is_some()
    }
}

/// One page of a list endpoint: `{ "data": [...], "links": {...} }`
///
/// After aggregation, `data` holds every page's items in fetch order and
/// `links` are those of the last page fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    /// Items in server order
    pub data: Vec<T>,
    /// Cursor links
    #[serde(default)]
    pub links: Links,
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            links: Links::default(),
        }
    }
}

impl<T> ListResponse<T> {
    /// Number of items held
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether no items are held
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over the items
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T> IntoIterator for ListResponse<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

/// A decodable page the engine can follow and merge
///
/// Implemented once per container shape; the engine never inspects the
/// concrete item type.
pub trait Paginated: DeserializeOwned + Send {
    /// Cursor links, or `None` for shapes without pagination metadata
    fn links(&self) -> Option<&Links>;

    /// Number of items on this page
    fn item_count(&self) -> usize;

    /// Append a following page's items and adopt its links
    fn absorb(&mut self, next: Self);

    /// URL of the following page, if any
    fn next_link(&self) -> Option<&str> {
        self.links().and_then(Links::next)
    }
}

impl<T> Paginated for ListResponse<T>
where
    T: DeserializeOwned + Send,
{
    fn links(&self) -> Option<&Links> {
        Some(&self.links)
    }

    fn item_count(&self) -> usize {
        self.data.len()
    }

    fn absorb(&mut self, next: Self) {
        self.data.extend(next.data);
        self.links = next.links;
    }
}

/// Paging parameters shared by every paginated endpoint
///
/// Endpoint option structs embed this with `#[serde(flatten)]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListOptions {
    /// Items per page
    #[serde(rename = "page[size]", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// Start after this cursor
    #[serde(rename = "page[after]", skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    /// End before this cursor
    #[serde(rename = "page[before]", skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
}

impl ListOptions {
    /// Create empty list options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size
    #[must_use]
    pub fn with_page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Set the after cursor
    #[must_use]
    pub fn with_after(mut self, cursor: impl Into<String>) -> Self {
        self.after = Some(cursor.into());
        self
    }

    /// Set the before cursor
    #[must_use]
    pub fn with_before(mut self, cursor: impl Into<String>) -> Self {
        self.before = Some(cursor.into());
        self
    }
}
