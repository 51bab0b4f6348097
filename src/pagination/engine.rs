//! Page aggregation loop
//!
//! Walks the `next` links of a list endpoint and merges every page into one
//! container. Pages are fetched strictly one after another because each URL
//! is only known once the previous page has been decoded.

use super::types::Paginated;
use crate::cancel::CancellationToken;
use crate::error::{Error, Result};
use crate::http::Client;
use std::collections::HashSet;
use tracing::{debug, warn};

impl Client {
    /// Fetch `start` and every page linked from it, merged in fetch order
    ///
    /// The returned container's links are those of the last page. Any
    /// failure, including the token firing between pages, discards what
    /// was accumulated so far.
    ///
    /// A `next` link that points at an already fetched URL fails with
    /// [`Error::PaginationCycle`]; fetching more than the configured
    /// `max_pages` fails with [`Error::PageLimitExceeded`].
    pub async fn paginate<P: Paginated>(&self, ctx: &CancellationToken, start: &str) -> Result<P> {
        if start.is_empty() {
            return Err(Error::config("pagination start URL is empty"));
        }

        let mut next_url = Some(start.to_string());
        let mut accumulated: Option<P> = None;
        let mut visited = HashSet::new();
        let mut pages = 0usize;

        while let Some(url) = next_url.take() {
            ctx.check()?;

            let request = self.get_request(&url)?;
            let target = request.url().to_string();
            if !visited.insert(target.clone()) {
                warn!("Pagination cycle detected at {}", target);
                return Err(Error::PaginationCycle { url: target });
            }
            if let Some(limit) = self.max_pages() {
                if pages >= limit {
                    warn!("Pagination stopped after {} pages", limit);
                    return Err(Error::PageLimitExceeded { limit });
                }
            }

            let page: P = self.execute(ctx, request).await?.value;
            pages += 1;
            debug!("Page {}: fetched {} items", pages, page.item_count());

            next_url = page.next_link().map(str::to_owned);

            match accumulated.as_mut() {
                Some(all) => all.absorb(page),
                None => accumulated = Some(page),
            }
        }

        let all = accumulated.ok_or_else(|| Error::config("pagination fetched no pages"))?;
        debug!(
            "Pagination complete: {} items in {} pages",
            all.item_count(),
            pages
        );
        Ok(all)
    }
}
