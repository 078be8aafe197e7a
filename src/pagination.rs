use std::thread;
use std::time::Duration;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::client::Client;
use crate::error::{Error, Result};
use crate::request::{Endpoint, NO_BODY};

/// Pause between successive page fetches of one listing.
pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_millis(500);

/// Pacing and bounds for paginated listings.
#[derive(Debug, Clone, Copy)]
pub struct PagingPolicy {
    /// Sleep inserted between one page and the request for the next.
    pub delay: Duration,
    /// Abort once this many pages have been fetched and the listing still
    /// continues; `None` trusts the server to terminate.
    pub max_pages: Option<u32>,
}

impl Default for PagingPolicy {
    fn default() -> Self {
        PagingPolicy {
            delay: DEFAULT_PAGE_DELAY,
            max_pages: None,
        }
    }
}

/// One page of a listing as it comes off the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    /// Record count as reported by the server. Logged, never used to
    /// drive the loop; the token alone decides termination.
    #[serde(default)]
    pub count: u64,
    /// Continuation cursor. Absent or empty means the listing is done.
    #[serde(default)]
    pub next_page_token: Option<String>,
    #[serde(default)]
    pub records: Vec<T>,
}

impl Client {
    /// Fetches every page of a listing and returns the records in arrival
    /// order.
    ///
    /// The first request goes to `path` bare; each continuation token is
    /// sent back as `?next=<token>`. A page without a token (or with an
    /// empty one) ends the sequence. Between pages the configured delay
    /// is observed, and a failure on any page discards everything fetched
    /// so far.
    pub fn list_all<T>(&self, path: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let policy = self.paging;
        let mut records = Vec::new();
        let mut next_token: Option<String> = None;
        let mut pages_fetched: u32 = 0;

        loop {
            let url = match &next_token {
                Some(token) => format!("{}?next={}", path, token),
                None => path.to_string(),
            };

            let endpoint = Endpoint::new(Method::GET, url);
            let page: Page<T> = self
                .perform(&endpoint, NO_BODY)
                .map_err(|source| pagination_error(pages_fetched, source))?;

            pages_fetched += 1;

            let continuation = page
                .next_page_token
                .as_deref()
                .is_some_and(|token| !token.is_empty());
            debug!(
                page = pages_fetched,
                count = page.count,
                received = page.records.len(),
                continuation,
                "fetched page"
            );

            records.extend(page.records);

            match page.next_page_token.filter(|token| !token.is_empty()) {
                None => return Ok(records),
                Some(token) => {
                    if let Some(limit) = policy.max_pages {
                        if pages_fetched >= limit {
                            return Err(pagination_error(
                                pages_fetched,
                                Error::PageLimit { limit },
                            ));
                        }
                    }

                    next_token = Some(token);
                    thread::sleep(policy.delay);
                }
            }
        }
    }
}

fn pagination_error(pages_fetched: u32, source: Error) -> Error {
    Error::Pagination {
        pages_fetched,
        source: Box::new(source),
    }
}
