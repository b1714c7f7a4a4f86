//! `silben` command-line entry point

use clap::{crate_version, Parser};
use silben_cli::commands::{Commands, ListCommands};

/// Split German words into syllables
#[derive(Debug, Parser)]
#[command(name = "silben", version = crate_version!(), about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Split(args) => args.execute(),
        Commands::Quiz(args) => args.execute(),
        Commands::Validate(args) => args.execute(),
        Commands::GenerateConfig(args) => args.execute(),
        Commands::List { subcommand } => {
            match subcommand {
                ListCommands::Alphabets => silben_cli::commands::list_alphabets(),
                ListCommands::Formats => silben_cli::commands::list_formats(),
            }
            Ok(())
        }
    }
}
