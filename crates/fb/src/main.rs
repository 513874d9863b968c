//! FizzBuzz newsletter CLI.
//!
//! Provides commands for:
//! - `expand`: Expand shorthand tags in a document
//! - `assemble`: Build the newsletter from raw generator output and the template

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{AssembleArgs, ExpandArgs};
use output::Output;

/// FizzBuzz newsletter tools.
#[derive(Parser)]
#[command(name = "fb", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand shorthand tags into MJML.
    Expand(ExpandArgs),
    /// Assemble a raw output file with the newsletter template.
    Assemble(AssembleArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = match &cli.command {
        Commands::Expand(args) => args.verbose,
        Commands::Assemble(args) => args.verbose,
    };

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Expand(args) => args.execute(),
        Commands::Assemble(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
