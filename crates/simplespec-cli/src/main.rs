//! SimpleSpec CLI
//!
//! Command-line interface for the simple spec language

use clap::{Parser, Subcommand};
use simplespec_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "simplespec")]
#[command(about = "SimpleSpec - enum constraints in a simple spec language", long_about = None)]
struct Cli {
    #[command(flatten)]
    tokens: commands::TokenArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Decode a spec file and print the resulting keys
    Decode(commands::decode::DecodeArgs),
    /// Rewrite the enum lines of a spec file in normalized form
    Fmt(commands::fmt::FmtArgs),
    /// Validate the configured tokens
    CheckConfig,
}

fn main() {
    init(Profile::Development);

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Decode(args) => commands::decode::execute(&cli.tokens, args),
        Commands::Fmt(args) => commands::fmt::execute(&cli.tokens, args),
        Commands::CheckConfig => commands::check::execute(&cli.tokens),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
