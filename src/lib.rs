//! Gamers Era - game catalog browser for the RAWG API
//!
//! Lists games, developers and tags as cards with infinite scroll. The
//! pagination logic lives in [`loader`] and knows nothing about HTTP or the
//! UI; [`listing`] binds it to RAWG endpoints and [`ui`] renders it.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod listing;
pub mod loader;
pub mod models;
pub mod ui;

// Re-export commonly used items
pub use api::RawgClient;
pub use cache::ImageCache;
pub use config::RawgConfig;
pub use error::{ApiError, ApiResult, ConfigError, LoaderError};
pub use listing::{prefetch_first_pages, Hydration, Listing, RawgPageSource};
pub use loader::{
    Completion, FetchState, FnPageSource, Page, PageLoader, PageRequest, PageSource,
    PaginationPolicy, SentinelTrigger, TriggerMode,
};
pub use models::{CatalogEntry, Game, Keyed, ListResponse};
