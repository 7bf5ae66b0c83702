//! Error types for the dashboard client

use thiserror::Error;

/// Main error type for the client
#[derive(Error, Debug, Clone)]
pub enum ClientError {
    #[error("Connection error: {0}")]
    Connection(#[from] ConnectionError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Connection-specific errors
#[derive(Error, Debug, Clone)]
pub enum ConnectionError {
    #[error("Failed to establish connection: {0}")]
    EstablishmentFailed(String),

    #[error("Connection lost: {0}")]
    ConnectionLost(String),

    #[error("Timeout occurred: {0}")]
    Timeout(String),
}

/// Parsing-specific errors.
///
/// An empty book side or a missing spread side is not an error anywhere in
/// this crate; these variants cover only malformed wire input.
#[derive(Error, Debug, Clone)]
pub enum ParseError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Unknown message type: {0}")]
    UnknownMessageType(String),

    #[error("Malformed content: {0}")]
    MalformedContent(String),
}
