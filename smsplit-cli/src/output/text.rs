//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use smsplit_api::Output;
use std::io::Write;

/// Plain text formatter - outputs one part per line
///
/// Messages after the first are preceded by a blank line.
pub struct TextFormatter<W: Write> {
    writer: W,
    messages: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            messages: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_message(&mut self, _source: &str, output: &Output) -> Result<()> {
        if self.messages > 0 {
            writeln!(self.writer)?;
        }
        self.messages += 1;

        for part in &output.parts {
            writeln!(self.writer, "{}", part.text)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smsplit_api::split_text_with_budget;

    #[test]
    fn test_one_part_per_line() {
        let output = split_text_with_budget("one two", 1).unwrap();
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer);
            formatter.format_message("<args>", &output).unwrap();
            formatter.finish().unwrap();
        }

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "one ... - Part 1 of 2\ntwo ... - Part 2 of 2\n"
        );
    }

    #[test]
    fn test_blank_line_between_messages() {
        let first = split_text_with_budget("first", 160).unwrap();
        let second = split_text_with_budget("second", 160).unwrap();
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer);
            formatter.format_message("a.txt", &first).unwrap();
            formatter.format_message("b.txt", &second).unwrap();
            formatter.finish().unwrap();
        }

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "first ... - Part 1 of 1\n\nsecond ... - Part 1 of 1\n"
        );
    }
}
