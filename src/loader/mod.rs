//! Paginated collection loader
//!
//! Keeps the pages fetched so far for one listing, in fetch order, and the
//! state of the next fetch. At most one fetch is in flight at a time: asking
//! for another page while one is loading (or once the listing has settled) is
//! a no-op.
//!
//! Two ways to drive it:
//! - `fetch_next` / `retry` await a [`PageSource`] directly.
//! - `begin_fetch_next` / `begin_retry` hand out a [`PageRequest`] and
//!   `complete` applies the result later. The UI uses this form because the
//!   fetch runs on a background runtime.

pub mod policy;
pub mod sentinel;
pub mod source;

pub use policy::{PaginationPolicy, DEFAULT_PAGE_SIZE};
pub use sentinel::{SentinelTrigger, TriggerMode};
pub use source::{FnPageSource, PageSource};

/// One fetch's worth of items
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub index: u32,
    pub items: Vec<T>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<E> {
    /// Nothing fetched yet
    Idle,
    /// First page in flight
    Loading,
    /// A follow-up page in flight
    LoadingMore,
    /// At least one page loaded and more are expected
    HasMore,
    /// Last fetch failed; pages loaded before it are kept
    Error(E),
    /// No further pages
    Settled,
}

impl<E> FetchState<E> {
    pub fn is_fetching(&self) -> bool {
        matches!(self, FetchState::Loading | FetchState::LoadingMore)
    }
}

/// Ticket for a page fetch started with `begin_fetch_next` / `begin_retry`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
}

/// Outcome of applying a fetch result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Appended,
    Failed,
    /// The result did not belong to the fetch in flight and was dropped
    Discarded,
}

#[derive(Debug)]
pub struct PageLoader<T, E> {
    policy: PaginationPolicy,
    pages: Vec<Page<T>>,
    state: FetchState<E>,
    in_flight: Option<PageRequest>,
}

impl<T, E> PageLoader<T, E> {
    pub fn new(policy: PaginationPolicy) -> Self {
        Self {
            policy,
            pages: Vec::new(),
            state: FetchState::Idle,
            in_flight: None,
        }
    }

    /// Start from a prefetched first page instead of an empty collection
    pub fn hydrated(policy: PaginationPolicy, first_page: Vec<T>) -> Self {
        let mut loader = Self::new(policy);
        loader.append(Page {
            index: 1,
            items: first_page,
        });
        log::debug!("Loader hydrated with {} items", loader.len());
        loader
    }

    pub fn state(&self) -> &FetchState<E> {
        &self.state
    }

    pub fn has_more(&self) -> bool {
        !matches!(self.state, FetchState::Settled)
    }

    pub fn is_fetching(&self) -> bool {
        self.state.is_fetching()
    }

    pub fn error(&self) -> Option<&E> {
        match &self.state {
            FetchState::Error(e) => Some(e),
            _ => None,
        }
    }

    pub fn pages(&self) -> &[Page<T>] {
        &self.pages
    }

    /// All items across pages, in fetch order
    pub fn items(&self) -> impl Iterator<Item = &T> + '_ {
        self.pages.iter().flat_map(|page| page.items.iter())
    }

    pub fn len(&self) -> usize {
        self.pages.iter().map(|page| page.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reserve the next page. Returns `None` while a fetch is in flight or once settled.
    pub fn begin_fetch_next(&mut self) -> Option<PageRequest> {
        match self.state {
            FetchState::Loading | FetchState::LoadingMore | FetchState::Settled => None,
            FetchState::Idle | FetchState::HasMore | FetchState::Error(_) => Some(self.start()),
        }
    }

    /// Reserve the page that last failed. Returns `None` unless in the error state.
    pub fn begin_retry(&mut self) -> Option<PageRequest> {
        match self.state {
            FetchState::Error(_) => Some(self.start()),
            _ => None,
        }
    }

    /// Apply the result of a fetch started with `begin_fetch_next` / `begin_retry`
    pub fn complete(&mut self, request: PageRequest, result: Result<Vec<T>, E>) -> Completion {
        if self.in_flight != Some(request) {
            log::debug!("Discarding stale result for page {}", request.page);
            return Completion::Discarded;
        }
        self.in_flight = None;

        match result {
            Ok(items) => {
                self.append(Page {
                    index: request.page,
                    items,
                });
                Completion::Appended
            }
            Err(e) => {
                log::warn!("Fetching page {} failed", request.page);
                self.state = FetchState::Error(e);
                Completion::Failed
            }
        }
    }

    /// Fetch the next page from `source`. No-op while fetching or once settled.
    pub async fn fetch_next<S>(&mut self, source: &S) -> Option<Completion>
    where
        S: PageSource<Item = T, Error = E>,
    {
        let request = self.begin_fetch_next()?;
        let result = source.fetch_page(request.page).await;
        Some(self.complete(request, result))
    }

    /// Re-fetch the page that failed. No-op unless in the error state.
    pub async fn retry<S>(&mut self, source: &S) -> Option<Completion>
    where
        S: PageSource<Item = T, Error = E>,
    {
        let request = self.begin_retry()?;
        let result = source.fetch_page(request.page).await;
        Some(self.complete(request, result))
    }

    fn start(&mut self) -> PageRequest {
        let request = PageRequest {
            page: self.pages.len() as u32 + 1,
        };
        self.state = if self.pages.is_empty() {
            FetchState::Loading
        } else {
            FetchState::LoadingMore
        };
        self.in_flight = Some(request);
        log::debug!("Requesting page {}", request.page);
        request
    }

    fn append(&mut self, page: Page<T>) {
        let last_len = page.items.len();
        self.pages.push(page);

        self.state = if self.policy.has_next(last_len, self.pages.len()) {
            FetchState::HasMore
        } else {
            log::info!(
                "Listing settled after {} page(s), {} items",
                self.pages.len(),
                self.len()
            );
            FetchState::Settled
        };
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
