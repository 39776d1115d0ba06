//! HTTP image fetching for post attachments.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error, instrument};
use warble_error::{FetchError, FetchErrorKind, FetchResult};
use warble_interface::{FetchedImage, ImageFetcher};

// Some image hosts refuse requests that carry no browser-like user agent.
const IMAGE_FETCH_USER_AGENT: &str = "Mozilla";

/// [`ImageFetcher`] backed by a shared [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct ReqwestImageFetcher {
    client: Client,
}

impl ReqwestImageFetcher {
    /// Creates a fetcher with a fresh connection pool.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for ReqwestImageFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageFetcher for ReqwestImageFetcher {
    #[instrument(skip(self))]
    async fn fetch(&self, url: &str) -> FetchResult<FetchedImage> {
        let response = self
            .client
            .get(url)
            .header("User-Agent", IMAGE_FETCH_USER_AGENT)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to request image");
                FetchError::new(FetchErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        let status = response.status();
        if !status.is_success() {
            error!(status = %status, "Image host returned an error");
            return Err(FetchError::new(FetchErrorKind::Http(format!(
                "{} returned status {}",
                url, status
            ))));
        }

        let bytes = response.bytes().await.map_err(|e| {
            error!(error = ?e, "Failed to read image body");
            FetchError::new(FetchErrorKind::Http(format!(
                "Failed to read image body: {}",
                e
            )))
        })?;

        if bytes.len() >= self.max_image_bytes() {
            debug!(size = bytes.len(), "Rejecting oversized image");
            return Err(FetchError::new(FetchErrorKind::TooLarge(bytes.len())));
        }

        debug!(size = bytes.len(), "Fetched image");
        Ok(FetchedImage::new(url.to_string(), bytes.to_vec()))
    }
}
