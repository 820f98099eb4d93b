//! smsplit command-line entry point

use clap::Parser;
use smsplit_cli::commands::{self, Commands};

/// Split messages into SMS-sized parts labelled "Part i of N"
#[derive(Debug, Parser)]
#[command(name = "smsplit", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Split(args) => args.execute(),
        Commands::List { subcommand } => commands::list(subcommand),
        Commands::GenerateConfig(args) => args.execute(),
        Commands::Validate(args) => args.execute(),
    }
}
