//! Output formatting module

use anyhow::Result;
use smsplit_api::Output;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format the parts of one message; `source` names where it came from
    fn format_message(&mut self, source: &str, output: &Output) -> Result<()>;

    /// Finalize output (e.g., write the collected JSON document)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
