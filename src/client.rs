use reqwest::Client;

use crate::{
    config::AppConfig,
    errors::{AppError, AppResult},
    feed::{parse_feed, read_endpoint, unwrap_jsonp},
    models::FeedPage,
};

/// HTTP access to a blog's read API and its photo hosts.
pub struct TumblrClient {
    client: Client,
}

impl TumblrClient {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| AppError::invalid_config("http client", &e.to_string()))?;

        Ok(Self { client })
    }

    /// Fetches one page of the read API and returns the bare JSON text.
    pub async fn fetch_json(&self, base_url: &str, page: u32, quiet: bool) -> AppResult<String> {
        let endpoint = read_endpoint(base_url, page);
        if !quiet {
            println!("REST Request url:  {endpoint}");
        }
        log::debug!("Requesting feed page {page} from {endpoint}");

        let body = self.get(&endpoint).await?.text().await;
        let body = body.map_err(|e| AppError::response_body(&endpoint, e))?;

        Ok(unwrap_jsonp(&body))
    }

    pub async fn fetch_page(&self, base_url: &str, page: u32, quiet: bool) -> AppResult<FeedPage> {
        let json = self.fetch_json(base_url, page, quiet).await?;
        Ok(parse_feed(&json))
    }

    /// Downloads a complete response body, e.g. a photo.
    pub async fn fetch_bytes(&self, url: &str) -> AppResult<Vec<u8>> {
        let body = self.get(url).await?.bytes().await;
        let body = body.map_err(|e| AppError::response_body(url, e))?;
        Ok(body.to_vec())
    }

    async fn get(&self, url: &str) -> AppResult<reqwest::Response> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::request(url, e))?;

        if !response.status().is_success() {
            log::warn!(
                "Got non-success response for {}: {}",
                url,
                response.status()
            );
        }
        Ok(response)
    }
}
