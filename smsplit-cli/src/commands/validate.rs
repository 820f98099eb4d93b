//! Validate command implementation

use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        let checked = CliConfig::load(&self.config).and_then(|file_config| {
            let config = file_config.to_api_config()?;
            let format = file_config.default_format()?;
            Ok((config, format))
        });

        match checked {
            Ok((config, format)) => {
                println!("✓ Configuration is valid!");
                println!("  Budget: {}", config.budget());
                println!("  Sizing: {}", config.sizing().as_str());
                println!("  Long words: {}", config.oversize().as_str());
                println!("  Output format: {}", format.name());
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {:#}", e))
            }
        }
    }
}
