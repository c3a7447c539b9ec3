use crate::error::{ServiceError, ServiceResult};
use crate::fetch::traits::ImageFetcher;
use async_trait::async_trait;
use std::time::Duration;

/// Real fetcher implementation using reqwest
pub struct HttpImageFetcher {
    client: reqwest::Client,
}

impl HttpImageFetcher {
    /// Create a fetcher whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> ServiceResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ServiceError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl ImageFetcher for HttpImageFetcher {
    async fn fetch(&self, url: &str) -> ServiceResult<Vec<u8>> {
        tracing::debug!("Fetching reference image from {}", url);

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(ServiceError::Internal(format!(
                "Failed to fetch image: {} returned {}",
                url,
                response.status()
            )));
        }

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}
