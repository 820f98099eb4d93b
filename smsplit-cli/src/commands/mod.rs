//! CLI command implementations

use anyhow::Result;
use clap::{Subcommand, ValueEnum};

pub mod generate_config;
pub mod split;
pub mod validate;

use split::OutputFormat;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split messages into SMS-sized parts
    Split(split::SplitArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Generate a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Validate a configuration file
    Validate(validate::ValidateArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List suffix sizing strategies and long-word policies
    Strategies,
}

/// Execute a list subcommand
pub fn list(subcommand: ListCommands) -> Result<()> {
    match subcommand {
        ListCommands::Formats => {
            println!("Available output formats:");
            for format in OutputFormat::value_variants() {
                println!("  {:<10} {}", format.name(), format.description());
            }
        }
        ListCommands::Strategies => {
            println!("Suffix sizing (--exact, config key `sizing`):");
            println!("  {:<10} size parts once from a length-based estimate (default)", "estimated");
            println!("  {:<10} re-pack until the real part count's suffix fits", "exact");
            println!();
            println!("Long words (--split-long-words, config key `oversize`):");
            println!("  {:<10} keep overlong words whole in their own part (default)", "keep");
            println!("  {:<10} slice overlong words so every part fits", "split");
        }
    }
    Ok(())
}
