use serde::{Deserialize, Serialize};

/// Anything that can be rendered in a listing needs a stable identity key
pub trait Keyed {
    fn key(&self) -> &str;

    /// Background image shown on the card, if any
    fn image_url(&self) -> Option<&str> {
        None
    }
}

/// Envelope returned by every RAWG listing endpoint
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ListResponse<T> {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

/// RAWG error body, e.g. `{"detail": "Invalid page."}`
#[derive(Debug, Deserialize)]
pub struct RawgErrorBody {
    pub detail: String,
}

/// Small reference to a named object (genre, platform, ...)
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct NamedRef {
    pub id: u64,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PlatformEntry {
    pub platform: NamedRef,
}

/// A game from `/games`
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Game {
    pub id: u64,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub released: Option<String>,
    #[serde(default)]
    pub background_image: Option<String>,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub metacritic: Option<u32>,
    #[serde(default)]
    pub genres: Vec<NamedRef>,
    /// RAWG sends `null` for some unreleased titles
    #[serde(default, deserialize_with = "null_as_empty")]
    pub platforms: Vec<PlatformEntry>,
}

impl Game {
    /// Comma separated genre names for the card subtitle
    pub fn genre_names(&self) -> String {
        self.genres
            .iter()
            .map(|g| g.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Keyed for Game {
    fn key(&self) -> &str {
        &self.slug
    }

    fn image_url(&self) -> Option<&str> {
        self.background_image.as_deref()
    }
}

/// A developer or tag from `/developers` and `/tags`
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CatalogEntry {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub games_count: u64,
    #[serde(default)]
    pub image_background: Option<String>,
}

impl Keyed for CatalogEntry {
    fn key(&self) -> &str {
        &self.slug
    }

    fn image_url(&self) -> Option<&str> {
        self.image_background.as_deref()
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
