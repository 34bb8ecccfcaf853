//! Test server management utilities
//!
//! This module provides the TestServer struct, an in-process actix-web server
//! with a fixed set of routes covering the content types hakiki decodes.

use std::time::Duration;

use actix_web::dev::ServerHandle;
use actix_web::{web, App, HttpResponse, HttpServer};
use reqwest::Client;
use tokio::time::{sleep, timeout};

use super::network::NetworkTestHelper;

/// Test server configuration and lifecycle management
pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    handle: ServerHandle,
}

async fn json_route() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/json")
        .body(r#"{"key": "value", "items": [1, 2, 3]}"#)
}

async fn text_route() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .insert_header(("X-Request-Kind", "text"))
        .body("hello, world!")
}

async fn latin1_route() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=iso-8859-1")
        .body(vec![0x63, 0x61, 0x66, 0xe9])
}

async fn bad_charset_route() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/json; charset=bad")
        .body(r#"{"key": "value"}"#)
}

async fn empty_route() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

async fn health_route() -> HttpResponse {
    HttpResponse::Ok().finish()
}

impl TestServer {
    /// Start a new test server on an available port
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let port = NetworkTestHelper::next_port()?;

        let server = HttpServer::new(|| {
            App::new()
                .route("/health", web::get().to(health_route))
                .route("/json", web::get().to(json_route))
                .route("/text", web::get().to(text_route))
                .route("/latin1", web::get().to(latin1_route))
                .route("/bad-charset", web::get().to(bad_charset_route))
                .route("/empty", web::get().to(empty_route))
        })
        .workers(1)
        .bind(("127.0.0.1", port))?
        .run();

        let handle = server.handle();
        tokio::spawn(server);

        let base_url = format!("http://127.0.0.1:{}", port);
        wait_for_server_ready(&base_url).await?;

        Ok(TestServer {
            port,
            base_url,
            handle,
        })
    }

    /// Get the server's base URL
    pub fn url(&self) -> &str {
        &self.base_url
    }

    /// Get a URL for a specific path
    pub fn url_for(&self, path: &str) -> String {
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        // The stop command is sent eagerly; completion is not awaited.
        let _ = self.handle.stop(false);
    }
}

/// Wait for server to be ready by polling the health endpoint
async fn wait_for_server_ready(base_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let client = Client::new();
    let health_url = format!("{}/health", base_url);
    let max_attempts = 50;
    let delay = Duration::from_millis(100);

    for _ in 0..max_attempts {
        match timeout(Duration::from_secs(5), client.get(&health_url).send()).await {
            Ok(Ok(_)) => return Ok(()),
            _ => sleep(delay).await,
        }
    }

    Err(format!("Server at {} did not become ready in time", base_url).into())
}
