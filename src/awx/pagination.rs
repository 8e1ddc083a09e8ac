//! Aggregation of paginated AWX collections
//!
//! Pages are requested one after another and concatenated in page order until
//! the server stops advertising a next page. There is no page cap and no
//! deduplication: a collection that changes between two requests can yield
//! skipped or repeated records.

use serde::de::DeserializeOwned;

use super::api::types::Host;
use super::api::Result;
use super::transport::{AwxTransport, PageRequest};

/// Page size used when walking an inventory's hosts
pub const HOST_PAGE_SIZE: u32 = 200;

/// Position of one collection walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    page: u32,
    page_size: u32,
    has_next: bool,
}

impl PageCursor {
    /// Start at page 1
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size,
            has_next: true,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn has_next(&self) -> bool {
        self.has_next
    }

    /// Request for the current page
    pub fn request(&self) -> PageRequest {
        PageRequest {
            page: self.page,
            page_size: self.page_size,
        }
    }

    /// Record whether the page just fetched has a successor
    ///
    /// Moves to the next page when it does; returns `has_next`.
    pub fn advance(&mut self, has_next: bool) -> bool {
        self.has_next = has_next;
        if has_next {
            self.page += 1;
        }
        has_next
    }
}

/// Fetch every record of the collection at `endpoint`, in page order
pub async fn collect_all_pages<T, C>(transport: &C, endpoint: &str, page_size: u32) -> Result<Vec<T>>
where
    T: DeserializeOwned + Send,
    C: AwxTransport,
{
    let mut cursor = PageCursor::new(page_size);
    let mut items: Vec<T> = Vec::new();

    loop {
        let page = transport.list_page::<T>(endpoint, cursor.request()).await?;
        let has_next = page.has_next();
        let received = page.results.len();
        items.extend(page.results);

        log::debug!(
            "{} page {}: {} records (total {}, server count {})",
            endpoint,
            cursor.page(),
            received,
            items.len(),
            page.count
        );

        if !cursor.advance(has_next) {
            break;
        }
    }

    Ok(items)
}

/// Fetch all hosts of an inventory
pub async fn fetch_all_hosts<C: AwxTransport>(transport: &C, inventory_id: u64) -> Result<Vec<Host>> {
    let endpoint = format!("inventories/{}/hosts/", inventory_id);
    collect_all_pages(transport, &endpoint, HOST_PAGE_SIZE).await
}
