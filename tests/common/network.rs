//! Network testing utilities
//!
//! This module provides port selection for the live test server.

use std::sync::atomic::{AtomicU16, Ordering};

/// Global port counter to avoid port conflicts in parallel tests
static PORT_COUNTER: AtomicU16 = AtomicU16::new(3300);

/// Network testing helpers
pub struct NetworkTestHelper;

impl NetworkTestHelper {
    /// Check if a port is available
    pub fn is_port_available(port: u16) -> bool {
        port_check::is_local_port_free(port)
    }

    /// Get the next available port starting from a base port
    pub fn get_available_port_from(start_port: u16) -> Result<u16, Box<dyn std::error::Error>> {
        for port in start_port..=65535 {
            if Self::is_port_available(port) {
                return Ok(port);
            }
        }
        Err("No available ports found".into())
    }

    /// Hand out a fresh port, skipping ones other tests may have claimed
    pub fn next_port() -> Result<u16, Box<dyn std::error::Error>> {
        let start = PORT_COUNTER.fetch_add(10, Ordering::SeqCst);
        Self::get_available_port_from(start)
    }
}
