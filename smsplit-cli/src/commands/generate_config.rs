//! Generate config command implementation

use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template()?;

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the budget and strategies for your gateway");
        println!("2. Validate your configuration:");
        println!("   smsplit validate -c {}", self.output.display());
        println!("3. Use it for splitting:");
        println!(
            "   smsplit split -i message.txt -c {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content from the defaults
    fn generate_template(&self) -> Result<String> {
        let defaults = toml::to_string(&CliConfig::default())
            .context("Failed to serialize default configuration")?;

        Ok(format!(
            r#"# smsplit configuration
#
# [segmentation]
# budget   - characters per part, " ... - Part i of N" suffix included
# sizing   - "estimated" sizes parts once from the message length,
#            "exact" re-packs until the real part count's suffix fits
# oversize - "keep" leaves words longer than a part whole,
#            "split" slices them so every part fits
#
# [output]
# default_format - "text", "json" or "markdown"
# pretty_json    - indent JSON output

{defaults}"#
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_generate_config_args_debug() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("smsplit.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("GenerateConfigArgs"));
        assert!(debug_str.contains("smsplit.toml"));
    }

    #[test]
    fn test_generate_template() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("smsplit.toml"),
        };

        let template = args.generate_template().unwrap();
        assert!(template.contains("[segmentation]"));
        assert!(template.contains("budget = 160"));
        assert!(template.contains("sizing = \"estimated\""));
        assert!(template.contains("[output]"));
    }

    #[test]
    fn test_execute_writes_loadable_config() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("smsplit.toml");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
        };

        assert!(args.execute().is_ok());
        let loaded = CliConfig::load(&output_path).unwrap();
        assert_eq!(loaded, CliConfig::default());
    }
}
