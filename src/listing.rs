//! Per-listing configuration
//!
//! Every listing shares the same loader; they only differ in endpoint, item
//! type and page cap.

use crate::api::RawgClient;
use crate::error::{ApiError, ApiResult};
use crate::loader::{PageSource, PaginationPolicy, DEFAULT_PAGE_SIZE};
use crate::models::{CatalogEntry, Game};
use serde::de::DeserializeOwned;
use std::future::Future;
use std::marker::PhantomData;

/// Games and developers stop after this many pages
pub const LISTING_PAGE_CAP: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Listing {
    /// Most recently added games, shown as a single strip on the home screen
    Trending,
    Games,
    Developers,
    Tags,
}

impl Listing {
    pub const ALL: [Listing; 4] = [
        Listing::Trending,
        Listing::Games,
        Listing::Developers,
        Listing::Tags,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Listing::Trending => "Trending",
            Listing::Games => "Games",
            Listing::Developers => "Developers",
            Listing::Tags => "Tags",
        }
    }

    pub fn endpoint(&self) -> &'static str {
        match self {
            Listing::Trending | Listing::Games => "games",
            Listing::Developers => "developers",
            Listing::Tags => "tags",
        }
    }

    /// Extra query parameters sent with every page request
    pub fn query(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Listing::Trending => &[("ordering", "-added")],
            _ => &[],
        }
    }

    pub fn max_pages(&self) -> Option<u32> {
        match self {
            Listing::Trending => Some(1),
            Listing::Games | Listing::Developers => Some(LISTING_PAGE_CAP),
            Listing::Tags => None,
        }
    }

    pub fn policy(&self) -> PaginationPolicy {
        PaginationPolicy::new(DEFAULT_PAGE_SIZE, self.max_pages())
            .expect("static listing policy is valid")
    }

    /// Bind a client to this listing so a loader can pull pages from it
    pub fn source<T>(self, client: RawgClient) -> RawgPageSource<T> {
        RawgPageSource {
            client,
            listing: self,
            _item: PhantomData,
        }
    }
}

/// [`PageSource`] backed by a RAWG listing endpoint
#[derive(Debug, Clone)]
pub struct RawgPageSource<T> {
    client: RawgClient,
    listing: Listing,
    _item: PhantomData<fn() -> T>,
}

impl<T> RawgPageSource<T>
where
    T: DeserializeOwned + Send + 'static,
{
    /// Owned future so it can be spawned onto a runtime
    pub fn fetch_owned(&self, page: u32) -> impl Future<Output = ApiResult<Vec<T>>> + Send + 'static {
        let client = self.client.clone();
        let listing = self.listing;
        async move {
            let response = client
                .fetch_list::<T>(
                    listing.endpoint(),
                    page,
                    listing.policy().page_size(),
                    listing.query(),
                )
                .await?;
            log::info!(
                "Fetched {} page {} ({} items)",
                listing.title(),
                page,
                response.results.len()
            );
            Ok(response.results)
        }
    }
}

impl<T> PageSource for RawgPageSource<T>
where
    T: DeserializeOwned + Send + 'static,
{
    type Item = T;
    type Error = ApiError;

    fn fetch_page(&self, page: u32) -> impl Future<Output = ApiResult<Vec<T>>> + Send {
        self.fetch_owned(page)
    }
}

/// First pages fetched before the UI opens
#[derive(Debug, Default, Clone)]
pub struct Hydration {
    pub trending: Option<Vec<Game>>,
    pub games: Option<Vec<Game>>,
    pub developers: Option<Vec<CatalogEntry>>,
    pub tags: Option<Vec<CatalogEntry>>,
}

impl Hydration {
    pub fn is_empty(&self) -> bool {
        self.trending.is_none()
            && self.games.is_none()
            && self.developers.is_none()
            && self.tags.is_none()
    }
}

/// Fetch page 1 of every listing concurrently.
///
/// A listing whose prefetch fails is left out; its screen loads page 1 itself.
pub async fn prefetch_first_pages(client: &RawgClient) -> Hydration {
    let trending = Listing::Trending.source::<Game>(client.clone());
    let games = Listing::Games.source::<Game>(client.clone());
    let developers = Listing::Developers.source::<CatalogEntry>(client.clone());
    let tags = Listing::Tags.source::<CatalogEntry>(client.clone());

    let (trending, games, developers, tags) = tokio::join!(
        trending.fetch_page(1),
        games.fetch_page(1),
        developers.fetch_page(1),
        tags.fetch_page(1),
    );

    Hydration {
        trending: keep(Listing::Trending, trending),
        games: keep(Listing::Games, games),
        developers: keep(Listing::Developers, developers),
        tags: keep(Listing::Tags, tags),
    }
}

fn keep<T>(listing: Listing, result: ApiResult<Vec<T>>) -> Option<Vec<T>> {
    match result {
        Ok(items) => Some(items),
        Err(e) => {
            log::warn!("Prefetch of {} failed: {}", listing.title(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caps_per_listing() {
        assert_eq!(Listing::Games.max_pages(), Some(10));
        assert_eq!(Listing::Developers.max_pages(), Some(10));
        assert_eq!(Listing::Tags.max_pages(), None);
        assert_eq!(Listing::Trending.max_pages(), Some(1));
    }

    #[test]
    fn test_all_listings_use_forty_per_page() {
        for listing in Listing::ALL {
            assert_eq!(listing.policy().page_size(), 40);
        }
    }

    #[test]
    fn test_trending_orders_by_added() {
        assert_eq!(Listing::Trending.endpoint(), "games");
        assert_eq!(Listing::Trending.query(), &[("ordering", "-added")]);
        assert!(Listing::Games.query().is_empty());
    }

    #[test]
    fn test_hydration_default_is_empty() {
        assert!(Hydration::default().is_empty());
        let hydration = Hydration {
            tags: Some(Vec::new()),
            ..Default::default()
        };
        assert!(!hydration.is_empty());
    }
}
