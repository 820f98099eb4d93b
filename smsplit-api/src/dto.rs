//! Data Transfer Objects for API

use crate::error::{ApiError, Result};
use smsplit_core::{Part, Segmentation};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Message source
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    /// Raw text string
    Text(String),
    /// File path
    File(PathBuf),
    /// Raw bytes (UTF-8)
    Bytes(Vec<u8>),
    /// Reader (not serializable)
    #[cfg_attr(feature = "serde", serde(skip))]
    Reader(Box<dyn Read + Send>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<dyn Read>").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the message text from the input
    pub fn read_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => fs::read_to_string(&path).map_err(ApiError::Io),
            Input::Bytes(bytes) => String::from_utf8(bytes).map_err(ApiError::Utf8),
            Input::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader.read_to_end(&mut buffer).map_err(ApiError::Io)?;
                String::from_utf8(buffer).map_err(ApiError::Utf8)
            }
        }
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Text(text.to_string())
    }
}

impl From<PathBuf> for Input {
    fn from(path: PathBuf) -> Self {
        Input::File(path)
    }
}

/// One finished part
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartDto {
    /// 1-based position
    pub index: usize,
    /// Total number of parts
    pub total: usize,
    /// Content without the suffix
    pub content: String,
    /// Finished text to transmit (content + suffix)
    pub text: String,
    /// Length of `text` in characters
    pub length: usize,
    /// Whether `text` is longer than the budget
    pub overflows: bool,
}

impl PartDto {
    fn from_part(part: Part, budget: usize) -> Self {
        let length = part.char_len();
        Self {
            index: part.index(),
            total: part.total(),
            text: part.to_string(),
            content: part.content().to_string(),
            length,
            overflows: length > budget,
        }
    }
}

/// Segmentation metadata
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Character budget per part
    pub budget: usize,
    /// Number of parts produced
    pub total_parts: usize,
    /// Part count the content budget was sized for
    pub estimated_parts: usize,
    /// Content characters available per part during packing
    pub content_budget: usize,
    /// Characters in the original message
    pub message_chars: usize,
    /// Sizing strategy name
    pub sizing: String,
}

/// Complete output with parts and metadata
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    /// Parts in transmission order
    pub parts: Vec<PartDto>,
    /// Segmentation metadata
    pub metadata: Metadata,
}

impl Output {
    pub(crate) fn from_segmentation(
        segmentation: Segmentation,
        message_chars: usize,
        sizing: &str,
    ) -> Self {
        let budget = segmentation.budget();
        let metadata = Metadata {
            budget,
            total_parts: segmentation.len(),
            estimated_parts: segmentation.estimated_total(),
            content_budget: segmentation.content_budget(),
            message_chars,
            sizing: sizing.to_string(),
        };

        let parts = segmentation
            .into_iter()
            .map(|part| PartDto::from_part(part, budget))
            .collect();

        Self { parts, metadata }
    }

    /// Number of parts
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether there are no parts
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Finished part strings in order
    pub fn texts(&self) -> Vec<String> {
        self.parts.iter().map(|part| part.text.clone()).collect()
    }

    /// Reduce to the `{"parts": [...]}` response shape
    pub fn into_response(self) -> SmsResponse {
        SmsResponse {
            parts: self.parts.into_iter().map(|part| part.text).collect(),
        }
    }
}

/// Plain list of finished parts
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmsResponse {
    /// Finished part strings in order
    pub parts: Vec<String>,
}
