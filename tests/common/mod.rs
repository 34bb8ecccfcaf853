//! Common test utilities for hakiki integration tests
//!
//! This module provides shared functionality for building responses and
//! running a live HTTP server, organized into focused sub-modules.

#![allow(dead_code)] // Test utilities will be used by integration tests
#![allow(unused_imports)] // Some re-exports may not be used in all test modules

// Sub-modules
pub mod client;
pub mod fixtures;
pub mod network;
pub mod server;

// Re-export commonly used types and functions for convenience
pub use client::TestClient;
pub use fixtures::{init_logging, ResponseFixture};
pub use network::NetworkTestHelper;
pub use server::TestServer;

// Re-export external types that are commonly used in tests
pub use serde_json::json;

/// Everything a test module usually needs in one import
pub mod prelude {
    pub use super::client::TestClient;
    pub use super::fixtures::{init_logging, ResponseFixture};
    pub use super::server::TestServer;
    pub use serde_json::json;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_port_availability() {
        let port = NetworkTestHelper::get_available_port_from(3200).unwrap();
        assert!(port >= 3200);
    }

    #[test]
    fn test_fixture_builder() {
        let fixture = ResponseFixture::new()
            .header("Content-Type", "text/plain")
            .body("hello");

        assert_eq!(fixture.headers.len(), 1);
        assert_eq!(fixture.body, Some("hello"));
    }
}
