//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use smsplit_api::{Output, SmsResponse};
use std::io::Write;

/// JSON formatter
///
/// A single message is written as `{"parts": [...]}`. Several messages are
/// written as an array of [`MessageParts`] so each keeps its source.
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    messages: Vec<MessageParts>,
}

/// Parts of one message in multi-message output
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageParts {
    /// File path, `<args>` or `<stdin>`
    pub source: String,
    /// Finished part strings in order
    pub parts: Vec<String>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            messages: Vec::new(),
        }
    }

    fn write_value<T: Serialize>(&mut self, value: &T) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, value)?;
        } else {
            serde_json::to_writer(&mut self.writer, value)?;
        }
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_message(&mut self, source: &str, output: &Output) -> Result<()> {
        self.messages.push(MessageParts {
            source: source.to_string(),
            parts: output.texts(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let mut messages = std::mem::take(&mut self.messages);
        if messages.len() == 1 {
            let parts = messages.remove(0).parts;
            self.write_value(&SmsResponse { parts })?;
        } else {
            self.write_value(&messages)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
