use crate::error::LoaderError;

/// Page size RAWG listings are requested with
pub const DEFAULT_PAGE_SIZE: u32 = 40;

/// How many items a page holds and how many pages a listing may grow to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationPolicy {
    page_size: u32,
    max_pages: Option<u32>,
}

impl PaginationPolicy {
    /// `max_pages = None` means only a short page ends the listing
    pub fn new(page_size: u32, max_pages: Option<u32>) -> Result<Self, LoaderError> {
        if page_size == 0 {
            return Err(LoaderError::InvalidPolicy("page_size must be greater than zero"));
        }
        if max_pages == Some(0) {
            return Err(LoaderError::InvalidPolicy("max_pages must be greater than zero"));
        }
        Ok(Self {
            page_size,
            max_pages,
        })
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn max_pages(&self) -> Option<u32> {
        self.max_pages
    }

    /// Decide whether another page may follow.
    ///
    /// `last_len` is the item count of the page that just arrived and
    /// `pages_fetched` includes that page.
    pub fn has_next(&self, last_len: usize, pages_fetched: usize) -> bool {
        if last_len < self.page_size as usize {
            return false;
        }
        match self.max_pages {
            Some(cap) => pages_fetched < cap as usize,
            None => true,
        }
    }
}
