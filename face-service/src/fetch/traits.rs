use crate::error::ServiceResult;
use async_trait::async_trait;

/// Abstraction for downloading reference images to enable testing with mocks
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    /// Download the image behind an http(s) URL and return its raw bytes
    async fn fetch(&self, url: &str) -> ServiceResult<Vec<u8>>;
}
