use crate::config::RawgConfig;
use crate::error::{ApiError, ApiResult, ConfigError};
use crate::models::{ListResponse, RawgErrorBody};
use reqwest::Client;
use serde::de::DeserializeOwned;

const USER_AGENT: &str = "Gamers-Era/1.0";

/// RAWG API client. Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct RawgClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RawgClient {
    pub fn new(config: RawgConfig) -> Result<Self, ConfigError> {
        log::info!("Creating RAWG API client for {}", config.base_url);
        log::debug!("API key length: {}", config.api_key.len());

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(Self {
            client,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }

    /// Fetch one page of a listing endpoint (`/games`, `/developers`, `/tags`, ...)
    ///
    /// `page` is 1-based. `extra` is appended to the query string verbatim as
    /// key/value pairs, e.g. `[("ordering", "-added")]`.
    pub async fn fetch_list<T>(
        &self,
        endpoint: &str,
        page: u32,
        page_size: u32,
        extra: &[(&str, &str)],
    ) -> ApiResult<ListResponse<T>>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'));
        log::debug!("Fetching {} page {} (page_size {})", url, page, page_size);

        let page = page.to_string();
        let page_size = page_size.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[
                ("page", page.as_str()),
                ("page_size", page_size.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .query(extra)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            log::warn!("RAWG returned {} for {}", status, url);
            return Err(match serde_json::from_str::<RawgErrorBody>(&body) {
                Ok(error) => ApiError::ApiResponse {
                    status,
                    detail: error.detail,
                },
                Err(_) => ApiError::HttpStatus(status),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch raw bytes (card background images)
    pub async fn fetch_image(&self, url: &str) -> ApiResult<Vec<u8>> {
        log::debug!("Fetching image: {}", url);

        let response = self.client.get(url).send().await?;

        if response.status().is_success() {
            Ok(response.bytes().await?.to_vec())
        } else {
            Err(ApiError::HttpStatus(response.status()))
        }
    }
}

#[cfg(test)]
#[path = "rawg_tests.rs"]
mod tests;
