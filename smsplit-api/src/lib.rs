//! Public API for smsplit message segmentation
//!
//! This crate provides a stable interface for splitting messages into
//! SMS-sized parts that hides the segmentation internals.
//!
//! ```rust
//! use smsplit_api::{split_text, MessageSplitter, Config, Input};
//!
//! let output = split_text("Hello   from   smsplit").unwrap();
//! assert_eq!(output.texts(), vec!["Hello from smsplit ... - Part 1 of 1"]);
//!
//! let splitter = MessageSplitter::with_config(Config::builder().budget(70).build().unwrap());
//! let output = splitter.split(Input::from_text("short")).unwrap();
//! assert_eq!(output.metadata.budget, 70);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use smsplit_core::Segmenter;

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dto::{Input, Metadata, Output, PartDto, SmsResponse};
pub use error::{ApiError, Result};
pub use smsplit_core::{OversizePolicy, SuffixSizing, DEFAULT_BUDGET};

/// Main entry point for message splitting
///
/// Cheap to clone and safe to share between threads.
#[derive(Debug, Clone)]
pub struct MessageSplitter {
    segmenter: Segmenter,
    config: Config,
}

impl MessageSplitter {
    /// Create a splitter with the default configuration (160 characters)
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a splitter with a custom configuration
    pub fn with_config(config: Config) -> Self {
        Self {
            segmenter: config.segmenter(),
            config,
        }
    }

    /// Split the message read from `input`
    ///
    /// Each produced part is logged at info level.
    pub fn split(&self, input: Input) -> Result<Output> {
        let text = input.read_text()?;
        let message_chars = text.chars().count();

        let segmentation = self.segmenter.segment(&text)?;
        let output =
            Output::from_segmentation(segmentation, message_chars, self.config.sizing.as_str());

        for part in &output.parts {
            log::info!("SMS part: {}", part.text);
        }
        log::info!(
            "Split {} characters into {} part(s) (budget {}, sized for {})",
            message_chars,
            output.metadata.total_parts,
            output.metadata.budget,
            output.metadata.estimated_parts
        );
        let overflowing = output.parts.iter().filter(|part| part.overflows).count();
        if overflowing > 0 {
            log::warn!(
                "{} part(s) exceed the {}-character budget",
                overflowing,
                output.metadata.budget
            );
        }

        Ok(output)
    }

    /// Split text directly (convenience method)
    pub fn split_text(&self, text: &str) -> Result<Output> {
        self.split(Input::from_text(text))
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for MessageSplitter {
    fn default() -> Self {
        Self::new()
    }
}

// Convenience functions

/// Split text with the default configuration
pub fn split_text(text: &str) -> Result<Output> {
    MessageSplitter::new().split(Input::from_text(text))
}

/// Split text with a custom budget
pub fn split_text_with_budget(text: &str, budget: usize) -> Result<Output> {
    let config = Config::builder().budget(budget).build()?;
    MessageSplitter::with_config(config).split(Input::from_text(text))
}

/// Split the contents of a file with the default configuration
pub fn split_file<P: AsRef<std::path::Path>>(path: P) -> Result<Output> {
    MessageSplitter::new().split(Input::from_file(path.as_ref().to_path_buf()))
}
