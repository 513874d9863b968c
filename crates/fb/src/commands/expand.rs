//! `fb expand` command implementation.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use fb_config::Config;
use fb_markup::Pipeline;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the expand command.
#[derive(Args)]
pub(crate) struct ExpandArgs {
    /// Input document (default: stdin).
    input: Option<PathBuf>,

    /// Write the result to this file (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover fizzbuzz.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl ExpandArgs {
    /// Execute the expand command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or file I/O fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(self.config.as_deref(), None)?;
        let pipeline = Pipeline::with_palette(config.palette());

        let input = read_input(self.input.as_deref())?;
        let rendered = pipeline.render(&input);

        match &self.output {
            Some(path) => {
                std::fs::write(path, &rendered.markup)?;
                output.success(&format!("Wrote {}", path.display()));
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(rendered.markup.as_bytes())?;
                stdout.flush()?;
            }
        }

        output.warnings(&rendered.warnings);
        Ok(())
    }
}

fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) => {
            if !path.is_file() {
                return Err(CliError::Validation(format!(
                    "Input file not found: {}",
                    path.display()
                )));
            }
            Ok(std::fs::read_to_string(path)?)
        }
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
