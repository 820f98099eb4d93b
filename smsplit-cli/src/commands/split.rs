//! Split command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use smsplit_api::{Config, MessageSplitter, Output, OversizePolicy, SuffixSizing};
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Message text; words are joined with single spaces (default: read stdin)
    #[arg(value_name = "MESSAGE", conflicts_with = "input")]
    pub message: Vec<String>,

    /// Input files or patterns (supports glob); each file is one message
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config file, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Characters per part, suffix included (default: 160)
    #[arg(short, long, value_name = "CHARS")]
    pub budget: Option<usize>,

    /// Re-pack until the real part count's suffix fits the budget
    #[arg(long)]
    pub exact: bool,

    /// Slice words longer than a part instead of letting the part overflow
    #[arg(long)]
    pub split_long_words: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Split multiple files concurrently
    #[arg(short, long)]
    pub parallel: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One part per line
    Text,
    /// JSON object with a `parts` array
    Json,
    /// Markdown numbered list
    Markdown,
}

impl OutputFormat {
    /// Name accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// One-line description for `list formats`
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "one part per line, blank line between messages",
            OutputFormat::Json => "{\"parts\": [...]} per message",
            OutputFormat::Markdown => "numbered list of parts with a total",
        }
    }
}

/// A message to split and where it came from
#[derive(Debug, Clone)]
pub struct Message {
    /// File path, `<args>` or `<stdin>`
    pub source: String,
    /// Raw message text
    pub text: String,
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting message splitting");
        log::debug!("Arguments: {:?}", self);

        let file_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let config = self.build_config(&file_config)?;
        let format = match self.format {
            Some(format) => format,
            None => file_config.default_format()?,
        };
        log::debug!("Using {:?} with {:?} output", config, format);

        let messages = self.collect_messages()?;
        let splitter = MessageSplitter::with_config(config);
        let results = self.split_all(&splitter, &messages)?;

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        let mut formatter = create_formatter(format, writer, file_config.output.pretty_json);

        for (message, output) in messages.iter().zip(&results) {
            formatter.format_message(&message.source, output)?;
        }
        formatter.finish()?;

        Ok(())
    }

    /// Merge config file values with command-line overrides
    ///
    /// Flags replace file values before the merged settings are validated.
    pub fn build_config(&self, file_config: &CliConfig) -> Result<Config> {
        let seg = &file_config.segmentation;

        let budget = self.budget.unwrap_or(seg.budget);
        if budget == 0 {
            return Err(CliError::ConfigError("Budget must be greater than 0".to_string()).into());
        }

        let sizing = if self.exact {
            SuffixSizing::Exact
        } else {
            seg.sizing
                .parse()
                .map_err(|e| CliError::ConfigError(format!("{e}")))?
        };
        let oversize = if self.split_long_words {
            OversizePolicy::Split
        } else {
            seg.oversize
                .parse()
                .map_err(|e| CliError::ConfigError(format!("{e}")))?
        };

        Config::builder()
            .budget(budget)
            .sizing(sizing)
            .oversize(oversize)
            .build()
            .context("Invalid segmentation settings")
    }

    /// Gather messages from files, positional arguments or stdin
    pub fn collect_messages(&self) -> Result<Vec<Message>> {
        if !self.input.is_empty() {
            let files = resolve_patterns(&self.input)?;
            log::info!("Found {} file(s) to split", files.len());

            return files
                .iter()
                .map(|path| -> Result<Message> {
                    if let Ok(size) = FileReader::file_size(path) {
                        log::debug!("Reading {} ({} bytes)", path.display(), size);
                    }
                    Ok(Message {
                        source: path.display().to_string(),
                        text: FileReader::read_text(path)?,
                    })
                })
                .collect();
        }

        if !self.message.is_empty() {
            return Ok(vec![Message {
                source: "<args>".to_string(),
                text: self.message.join(" "),
            }]);
        }

        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read message from stdin")?;
        Ok(vec![Message {
            source: "<stdin>".to_string(),
            text,
        }])
    }

    /// Split every message, in parallel when requested
    fn split_all(&self, splitter: &MessageSplitter, messages: &[Message]) -> Result<Vec<Output>> {
        let mut progress = ProgressReporter::new(self.quiet || messages.len() < 2);
        progress.init_files(messages.len() as u64);

        let split_one = |message: &Message| -> Result<Output> {
            let output = splitter
                .split_text(&message.text)
                .map_err(|e| CliError::SplitError(format!("{}: {e}", message.source)))?;
            progress.file_completed(&message.source);
            Ok(output)
        };

        let results = if self.parallel && messages.len() > 1 {
            log::debug!("Splitting {} messages in parallel", messages.len());
            messages.par_iter().map(split_one).collect()
        } else {
            messages.iter().map(split_one).collect()
        };

        progress.finish();
        results
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when commands run in-process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send + Sync>,
    pretty_json: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}
