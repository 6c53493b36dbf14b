//! Fetch Error Types

use thiserror::Error;

/// Errors while retrieving an alert batch
#[derive(Error, Debug)]
pub enum FetchError {
    /// Network-level failure (DNS, connect, timeout)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Endpoint answered with a non-success status
    #[error("Endpoint returned HTTP {0}")]
    Status(u16),

    /// Response body was not a decodable alert batch
    #[error("Decode error: {0}")]
    Decode(String),
}
