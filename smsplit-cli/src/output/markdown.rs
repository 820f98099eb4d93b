//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use smsplit_api::Output;
use std::io::Write;

/// Markdown formatter - outputs parts as a numbered list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    messages: usize,
    part_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            messages: 0,
            part_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_message(&mut self, source: &str, output: &Output) -> Result<()> {
        if self.messages > 0 {
            writeln!(self.writer)?;
        }
        self.messages += 1;

        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;
        for part in &output.parts {
            writeln!(self.writer, "{}. {}", part.index, part.text)?;
        }
        self.part_count += output.len();
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total parts: {}*", self.part_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smsplit_api::split_text_with_budget;

    #[test]
    fn test_numbered_list_with_total() {
        let output = split_text_with_budget("one two", 1).unwrap();
        let mut buffer = Vec::new();
        {
            let mut formatter = MarkdownFormatter::new(&mut buffer);
            formatter.format_message("<args>", &output).unwrap();
            formatter.finish().unwrap();
        }

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "## <args>\n\n1. one ... - Part 1 of 2\n2. two ... - Part 2 of 2\n\n---\n*Total parts: 2*\n"
        );
    }
}
