//! Configuration module

use crate::commands::split::OutputFormat;
use crate::error::CliError;
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use smsplit_api::{Config, OversizePolicy, SuffixSizing, DEFAULT_BUDGET};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Segmentation configuration
    #[serde(default)]
    pub segmentation: SegmentationConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Segmentation-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct SegmentationConfig {
    /// Characters per part, suffix included
    pub budget: usize,

    /// Suffix sizing strategy ("estimated" or "exact")
    pub sizing: String,

    /// Overlong word policy ("keep" or "split")
    pub oversize: String,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            budget: DEFAULT_BUDGET,
            sizing: SuffixSizing::default().as_str().to_string(),
            oversize: OversizePolicy::default().as_str().to_string(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Convert to the API configuration, validating every value
    pub fn to_api_config(&self) -> Result<Config> {
        let seg = &self.segmentation;
        if seg.budget == 0 {
            return Err(CliError::ConfigError("Budget must be greater than 0".to_string()).into());
        }

        let sizing: SuffixSizing = seg
            .sizing
            .parse()
            .map_err(|e| CliError::ConfigError(format!("{e}")))?;
        let oversize: OversizePolicy = seg
            .oversize
            .parse()
            .map_err(|e| CliError::ConfigError(format!("{e}")))?;

        Config::builder()
            .budget(seg.budget)
            .sizing(sizing)
            .oversize(oversize)
            .build()
            .context("Invalid segmentation settings")
    }

    /// Default output format named in the file
    pub fn default_format(&self) -> Result<OutputFormat> {
        OutputFormat::from_str(&self.output.default_format, true).map_err(|_| {
            CliError::ConfigError(format!(
                "unknown output format '{}'",
                self.output.default_format
            ))
            .into()
        })
    }
}
