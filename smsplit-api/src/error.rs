//! API error types

use smsplit_core::SegmentError;
use std::string::FromUtf8Error;
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Message is empty or whitespace-only
    #[error("{0}")]
    EmptyMessage(#[from] SegmentError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 conversion error
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Whether this error is the empty-message validation failure
    pub fn is_empty_message(&self) -> bool {
        matches!(self, ApiError::EmptyMessage(SegmentError::EmptyInput))
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
