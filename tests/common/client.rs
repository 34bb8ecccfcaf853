//! HTTP client testing utilities
//!
//! This module provides the TestClient struct, which fetches responses from
//! the live test server and converts them for assertions.

use std::time::Duration;

use hakiki::{Expect, RawResponse, RecordingReporter, Response};
use reqwest::Client;

/// HTTP testing client wrapper
pub struct TestClient {
    pub client: Client,
}

impl TestClient {
    /// Create a new test client
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        TestClient { client }
    }

    /// Perform a GET request and buffer the response
    pub async fn get(&self, url: &str) -> Result<RawResponse, Box<dyn std::error::Error>> {
        let response = self.client.get(url).send().await?;
        Ok(RawResponse::from_reqwest(response).await?)
    }

    /// Perform a HEAD request and buffer the response
    pub async fn head(&self, url: &str) -> Result<RawResponse, Box<dyn std::error::Error>> {
        let response = self.client.head(url).send().await?;
        Ok(RawResponse::from_reqwest(response).await?)
    }

    /// GET `url` and wrap it for assertions against a recording reporter
    pub async fn expect_get(
        &self,
        url: &str,
    ) -> Result<(Response, RecordingReporter), Box<dyn std::error::Error>> {
        let reporter = RecordingReporter::new();
        let raw = self.get(url).await?;
        Ok((Expect::new(reporter.clone()).response(raw), reporter))
    }
}

impl Default for TestClient {
    fn default() -> Self {
        Self::new()
    }
}
