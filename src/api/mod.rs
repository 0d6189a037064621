//! API client for the RAWG game database

pub mod rawg;

pub use rawg::RawgClient;
