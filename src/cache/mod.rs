//! Caching layer for card images

pub mod image_cache;

pub use image_cache::{fetch_image_cached, thumbnail_url, ImageCache};
