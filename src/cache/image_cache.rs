use crate::api::RawgClient;
use crate::error::ApiResult;
use std::path::{Path, PathBuf};

/// Persistent cache for card background images
/// Stores images as files in the cache directory, named after their URL
#[derive(Debug, Clone)]
pub struct ImageCache {
    cache_dir: PathBuf,
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageCache {
    /// Create a new image cache under the user cache directory
    pub fn new() -> Self {
        let cache_dir = dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gamers_era")
            .join("images");

        Self::at(cache_dir)
    }

    /// Create an image cache rooted at `cache_dir`
    pub fn at(cache_dir: PathBuf) -> Self {
        if let Err(e) = std::fs::create_dir_all(&cache_dir) {
            log::warn!("Failed to create image cache directory: {}", e);
        }

        log::info!("Image cache directory: {:?}", cache_dir);
        Self { cache_dir }
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Flatten a URL into a file name: scheme dropped, separators replaced
    fn filename(url: &str) -> String {
        let trimmed = url
            .trim_start_matches("https://")
            .trim_start_matches("http://");
        trimmed
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '-' { c } else { '_' })
            .collect()
    }

    fn path(&self, url: &str) -> PathBuf {
        self.cache_dir.join(Self::filename(url))
    }

    pub fn contains(&self, url: &str) -> bool {
        self.path(url).exists()
    }

    pub fn get(&self, url: &str) -> Option<Vec<u8>> {
        match std::fs::read(self.path(url)) {
            Ok(bytes) => {
                log::debug!("Image cache hit for {}", url);
                Some(bytes)
            }
            Err(_) => None,
        }
    }

    /// Async variant of [`get`](Self::get) for use on the runtime
    pub async fn load(&self, url: &str) -> Option<Vec<u8>> {
        match tokio::fs::read(self.path(url)).await {
            Ok(bytes) => {
                log::debug!("Image cache hit for {}", url);
                Some(bytes)
            }
            Err(_) => None,
        }
    }

    /// Async variant of [`insert`](Self::insert) for use on the runtime
    pub async fn store(&self, url: &str, bytes: &[u8]) {
        if let Err(e) = tokio::fs::write(self.path(url), bytes).await {
            log::warn!("Failed to cache image: {}", e);
        } else {
            log::debug!("Cached image for {}", url);
        }
    }

    pub fn insert(&self, url: &str, bytes: &[u8]) {
        if let Err(e) = std::fs::write(self.path(url), bytes) {
            log::warn!("Failed to cache image: {}", e);
        } else {
            log::debug!("Cached image for {}", url);
        }
    }
}

/// RAWG serves resized copies under `/media/crop/W/H/`; cards only need a small one
pub fn thumbnail_url(url: &str) -> String {
    if url.contains("/media/crop/") || url.contains("/media/resize/") {
        return url.to_string();
    }
    url.replacen("/media/", "/media/crop/600/400/", 1)
}

/// Fetch an image, checking cache first
pub async fn fetch_image_cached(
    cache: &ImageCache,
    client: &RawgClient,
    url: &str,
) -> ApiResult<Vec<u8>> {
    if let Some(bytes) = cache.load(url).await {
        return Ok(bytes);
    }

    log::info!("Image cache miss for {}, fetching", url);
    let bytes = client.fetch_image(url).await?;
    cache.store(url, &bytes).await;

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RawgConfig;
    use tempfile::TempDir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const URL: &str = "https://media.rawg.io/media/games/456/456dea5e.jpg";

    fn create_test_cache() -> (ImageCache, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let cache = ImageCache::at(temp_dir.path().to_path_buf());
        (cache, temp_dir)
    }

    #[test]
    fn test_filename_format() {
        assert_eq!(
            ImageCache::filename(URL),
            "media.rawg.io_media_games_456_456dea5e.jpg"
        );
        assert_eq!(ImageCache::filename("http://a/b?c=d"), "a_b_c_d");
    }

    #[test]
    fn test_get_nonexistent_returns_none() {
        let (cache, _temp_dir) = create_test_cache();
        assert!(cache.get(URL).is_none());
        assert!(!cache.contains(URL));
    }

    #[test]
    fn test_insert_and_get() {
        let (cache, _temp_dir) = create_test_cache();
        let test_data = vec![0xFF, 0xD8, 0xFF];

        cache.insert(URL, &test_data);

        assert!(cache.contains(URL));
        assert_eq!(cache.get(URL).unwrap(), test_data);
    }

    #[test]
    fn test_insert_overwrites_existing() {
        let (cache, _temp_dir) = create_test_cache();

        cache.insert(URL, &[1, 2, 3]);
        cache.insert(URL, &[4, 5, 6, 7]);

        assert_eq!(cache.get(URL).unwrap(), vec![4, 5, 6, 7]);
    }

    #[test]
    fn test_files_persist_on_disk() {
        let temp_dir = TempDir::new().unwrap();
        let cache_dir = temp_dir.path().to_path_buf();

        ImageCache::at(cache_dir.clone()).insert(URL, &[10, 20, 30]);

        let reopened = ImageCache::at(cache_dir);
        assert_eq!(reopened.get(URL).unwrap(), vec![10, 20, 30]);
    }

    #[test]
    fn test_thumbnail_url() {
        assert_eq!(
            thumbnail_url(URL),
            "https://media.rawg.io/media/crop/600/400/games/456/456dea5e.jpg"
        );
        let already = "https://media.rawg.io/media/crop/600/400/games/x.jpg";
        assert_eq!(thumbnail_url(already), already);
        assert_eq!(thumbnail_url("https://example.com/x.jpg"), "https://example.com/x.jpg");
    }

    #[tokio::test]
    async fn test_fetch_image_cached_hits_network_once() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/media/bg.jpg"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![1, 2, 3]))
            .expect(1)
            .mount(&mock_server)
            .await;

        let (cache, _temp_dir) = create_test_cache();
        let config = RawgConfig::with_base_url("key", mock_server.uri()).unwrap();
        let client = RawgClient::new(config).unwrap();
        let url = format!("{}/media/bg.jpg", mock_server.uri());

        let first = fetch_image_cached(&cache, &client, &url).await.unwrap();
        let second = fetch_image_cached(&cache, &client, &url).await.unwrap();

        assert_eq!(first, vec![1, 2, 3]);
        assert_eq!(second, first);
    }

    #[tokio::test]
    async fn test_async_store_and_load_share_files() {
        let (cache, _temp_dir) = create_test_cache();

        assert!(cache.load(URL).await.is_none());
        cache.store(URL, &[7, 8, 9]).await;

        assert_eq!(cache.load(URL).await, Some(vec![7, 8, 9]));
        assert_eq!(cache.get(URL).unwrap(), vec![7, 8, 9]);

        cache.insert(URL, &[1]);
        assert_eq!(cache.load(URL).await, Some(vec![1]));
    }
}
