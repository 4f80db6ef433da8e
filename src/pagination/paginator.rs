//! Lazy page-at-a-time cursor over a listing endpoint

use super::types::{Endpoint, PageBounds, PageEnvelope};
use crate::decode::{serde_decoder, with_path_prefix, Decoder};
use crate::error::{Error, Result};
use crate::http::Transport;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Page-at-a-time access to a page-numbered listing endpoint
///
/// A paginator starts at page 1 with nothing fetched. The first read that
/// needs data or metadata (`get_data`, `first`, `has_next_page`,
/// `total_pages`, `total_results`) fetches the current page; after that those
/// reads are served from memory until a navigation call (`next_page`,
/// `get_page`) moves to another page.
///
/// Every fetch is one transport call. A fetch is committed only when the
/// whole page decoded, so a failed call leaves the paginator exactly as it
/// was. All methods take `&mut self`: one paginator serves one caller at a
/// time and has no internal locking.
pub struct Paginator<T> {
    transport: Arc<dyn Transport>,
    endpoint: Endpoint,
    decoder: Decoder<T>,
    bounds: PageBounds,
    page: u32,
    data: Vec<T>,
    total_pages: Option<u32>,
    total_results: Option<u64>,
    fetched: bool,
}

/// A fully decoded page waiting to be committed
struct FetchedPage<T> {
    page: u32,
    data: Vec<T>,
    total_pages: Option<u32>,
    total_results: Option<u64>,
}

impl<T> Paginator<T> {
    /// Create a paginator positioned at page 1
    pub fn new(transport: Arc<dyn Transport>, endpoint: Endpoint, decoder: Decoder<T>) -> Self {
        Self {
            transport,
            endpoint,
            decoder,
            bounds: PageBounds::default(),
            page: 1,
            data: Vec::new(),
            total_pages: None,
            total_results: None,
            fetched: false,
        }
    }

    /// Create a paginator decoding items with their `Deserialize` impl
    pub fn typed(transport: Arc<dyn Transport>, endpoint: Endpoint) -> Self
    where
        T: DeserializeOwned + 'static,
    {
        Self::new(transport, endpoint, serde_decoder::<T>())
    }

    /// Set the out-of-range policy used by [`Paginator::get_page`]
    #[must_use]
    pub fn with_bounds(mut self, bounds: PageBounds) -> Self {
        self.bounds = bounds;
        self
    }

    // ------------------------------------------------------------------------
    // Accessors (never fetch)
    // ------------------------------------------------------------------------

    /// Current 1-based page number
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Whether at least one page has been fetched
    pub fn is_fetched(&self) -> bool {
        self.fetched
    }

    /// The bound endpoint
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// The out-of-range policy
    pub fn bounds(&self) -> PageBounds {
        self.bounds
    }

    /// Total pages as of the last fetch, without fetching
    pub fn known_total_pages(&self) -> Option<u32> {
        self.total_pages
    }

    /// Total results as of the last fetch, without fetching
    pub fn known_total_results(&self) -> Option<u64> {
        self.total_results
    }

    /// Consume the paginator, keeping the current page's items
    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    // ------------------------------------------------------------------------
    // Reads (fetch the current page once if nothing was fetched yet)
    // ------------------------------------------------------------------------

    /// Items of the current page
    pub async fn get_data(&mut self) -> Result<&[T]> {
        self.ensure_fetched().await?;
        Ok(&self.data)
    }

    /// First item of the current page, `None` when the page is empty
    pub async fn first(&mut self) -> Result<Option<&T>> {
        Ok(self.get_data().await?.first())
    }

    /// Whether the server reported a page after the current one
    pub async fn has_next_page(&mut self) -> Result<bool> {
        self.ensure_fetched().await?;
        Ok(self.total_pages.is_some_and(|total| self.page < total))
    }

    /// Total number of pages reported by the server
    pub async fn total_pages(&mut self) -> Result<Option<u32>> {
        self.ensure_fetched().await?;
        Ok(self.total_pages)
    }

    /// Total number of items across all pages reported by the server
    pub async fn total_results(&mut self) -> Result<Option<u64>> {
        self.ensure_fetched().await?;
        Ok(self.total_results)
    }

    // ------------------------------------------------------------------------
    // Navigation (always fetch)
    // ------------------------------------------------------------------------

    /// Move to the following page
    ///
    /// Fails with `Error::NoNextPage` when the last page is already known to
    /// be the current one. Before the first fetch nothing is known, so the
    /// request goes to the server.
    pub async fn next_page(&mut self) -> Result<&[T]> {
        if let Some(total) = self.total_pages {
            if self.page >= total {
                return Err(Error::NoNextPage {
                    page: self.page,
                    total_pages: total,
                });
            }
        }

        let next = self.page.saturating_add(1);
        self.load(next).await?;
        Ok(&self.data)
    }

    /// Jump to page `page` (1-based)
    ///
    /// Page numbers past the known last page are handled according to the
    /// paginator's [`PageBounds`].
    pub async fn get_page(&mut self, page: u32) -> Result<&[T]> {
        if page == 0 {
            return Err(Error::InvalidPage { page });
        }

        let target = self.bounds.resolve(page, self.total_pages)?;
        self.load(target).await?;
        Ok(&self.data)
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    async fn ensure_fetched(&mut self) -> Result<()> {
        if !self.fetched {
            self.load(self.page).await?;
        }
        Ok(())
    }

    async fn load(&mut self, page: u32) -> Result<()> {
        let fetched = self.fetch(page).await?;
        self.commit(fetched);
        Ok(())
    }

    async fn fetch(&self, page: u32) -> Result<FetchedPage<T>> {
        let path = self.endpoint.path();
        let query = self.endpoint.query_for_page(page);
        let body = self.transport.get_json(path, &query).await?;
        let envelope = PageEnvelope::from_value(body)?;

        if let Some(reported) = envelope.page {
            if reported != page {
                warn!(path, requested = page, reported, "Server returned a different page");
            }
        }
        if envelope.total_pages.is_none() || envelope.total_results.is_none() {
            warn!(path, page, "Page metadata missing from response");
        }

        let data = envelope
            .results
            .into_iter()
            .enumerate()
            .map(|(i, item)| {
                (self.decoder)(item).map_err(|e| with_path_prefix(e, &format!("results[{i}]")))
            })
            .collect::<Result<Vec<T>>>()?;

        Ok(FetchedPage {
            page,
            data,
            total_pages: envelope.total_pages,
            total_results: envelope.total_results,
        })
    }

    fn commit(&mut self, fetched: FetchedPage<T>) {
        debug!(
            path = self.endpoint.path(),
            page = fetched.page,
            items = fetched.data.len(),
            total_pages = ?fetched.total_pages,
            total_results = ?fetched.total_results,
            "Page loaded"
        );

        self.page = fetched.page;
        self.data = fetched.data;
        self.total_pages = fetched.total_pages;
        self.total_results = fetched.total_results;
        self.fetched = true;
    }
}

impl<T> fmt::Debug for Paginator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paginator")
            .field("endpoint", &self.endpoint)
            .field("bounds", &self.bounds)
            .field("page", &self.page)
            .field("items", &self.data.len())
            .field("total_pages", &self.total_pages)
            .field("total_results", &self.total_results)
            .field("fetched", &self.fetched)
            .finish_non_exhaustive()
    }
}
