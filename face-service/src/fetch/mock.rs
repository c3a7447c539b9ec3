use crate::error::{ServiceError, ServiceResult};
use crate::fetch::traits::ImageFetcher;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock implementation of ImageFetcher for unit testing
#[derive(Clone, Default)]
pub struct MockImageFetcher {
    images: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    fallback: Option<Vec<u8>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockImageFetcher {
    /// Create a new mock with no images; every fetch fails
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that serves `bytes` for any URL it has no entry for
    pub fn with_fallback(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            fallback: Some(bytes.into()),
            ..Self::default()
        }
    }

    /// Register the bytes served for a URL
    pub fn add_image(&self, url: &str, bytes: impl Into<Vec<u8>>) {
        self.images
            .lock()
            .unwrap()
            .insert(url.to_string(), bytes.into());
    }

    /// URLs requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageFetcher for MockImageFetcher {
    async fn fetch(&self, url: &str) -> ServiceResult<Vec<u8>> {
        self.requests.lock().unwrap().push(url.to_string());

        let images = self.images.lock().unwrap();
        images
            .get(url)
            .or(self.fallback.as_ref())
            .cloned()
            .ok_or_else(|| {
                ServiceError::Internal(format!("Failed to fetch image: {} returned 404", url))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_serves_registered_image() {
        let fetcher = MockImageFetcher::new();
        fetcher.add_image("https://example.com/a.jpg", b"face a".to_vec());

        let bytes = fetcher.fetch("https://example.com/a.jpg").await.unwrap();

        assert_eq!(bytes, b"face a");
        assert_eq!(fetcher.requests(), vec!["https://example.com/a.jpg"]);
    }

    #[tokio::test]
    async fn test_mock_unknown_url_fails() {
        let fetcher = MockImageFetcher::new();

        let err = fetcher.fetch("https://example.com/missing.jpg").await.unwrap_err();
        assert!(matches!(err, ServiceError::Internal(_)));
    }

    #[tokio::test]
    async fn test_mock_fallback() {
        let fetcher = MockImageFetcher::with_fallback(b"any".to_vec());
        fetcher.add_image("https://example.com/a.jpg", b"specific".to_vec());

        assert_eq!(
            fetcher.fetch("https://example.com/a.jpg").await.unwrap(),
            b"specific"
        );
        assert_eq!(
            fetcher.fetch("http://example.com/other.jpg").await.unwrap(),
            b"any"
        );
    }
}
