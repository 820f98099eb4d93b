//! Core error types (deterministic only)

use thiserror::Error;

/// Segmentation errors
///
/// Content shape never fails segmentation; the only rejected input is a
/// message with nothing left after trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SegmentError {
    /// Message is empty or whitespace-only
    #[error("Message cannot be empty")]
    EmptyInput,
}

/// Error returned when a textual option name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseOptionError {
    /// Option family being parsed, e.g. "sizing"
    pub kind: &'static str,
    /// The rejected input
    pub value: String,
    /// Comma-separated list of accepted names
    pub expected: &'static str,
}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, SegmentError>;
