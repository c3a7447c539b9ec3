use anyhow::{Context, Result};
use axum::Router;
use base64::{engine::general_purpose, Engine as _};
/// Test utilities for integration tests
/// Runs a router on a real socket and provides request fixtures
use std::net::SocketAddr;
use std::time::Duration;
use tokio::task::JoinHandle;

pub const SAMPLE_IMAGE_URL: &str = "https://example.com/image.jpg";

/// Test fixture that serves a router on an ephemeral localhost port
///
/// The server task is aborted when the fixture is dropped.
pub struct TestServer {
    addr: SocketAddr,
    client: reqwest::Client,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Bind 127.0.0.1:0 and start serving `app` in the background
    pub async fn spawn(app: Router) -> Result<Self> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .context("Failed to bind test listener")?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Test server exited: {}", e);
            }
        });

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            addr,
            client,
            handle,
        })
    }

    /// Absolute URL for a path on this server
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get(&self, path: &str) -> Result<reqwest::Response> {
        self.client
            .get(self.url(path))
            .send()
            .await
            .context(format!("GET {} failed", path))
    }

    pub async fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<reqwest::Response> {
        self.client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .context(format!("POST {} failed", path))
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Base64-encode raw bytes the way clients send `base64Image`
pub fn encode_image(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

/// A compare body pointing at `SAMPLE_IMAGE_URL`
pub fn compare_body(image_bytes: &[u8]) -> serde_json::Value {
    serde_json::json!({
        "imageUrl": SAMPLE_IMAGE_URL,
        "base64Image": encode_image(image_bytes),
    })
}

/// Read a response body as JSON, keeping the status
pub async fn json_response(response: reqwest::Response) -> Result<(u16, serde_json::Value)> {
    let status = response.status().as_u16();
    let body = response
        .json()
        .await
        .context("Response body was not JSON")?;
    Ok((status, body))
}
