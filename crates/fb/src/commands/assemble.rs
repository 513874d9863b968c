//! `fb assemble` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use fb_assemble::Assembler;
use fb_config::{CliSettings, Config};
use fb_markup::Pipeline;

use crate::error::CliError;
use crate::output::Output;

const RAW_PREFIX: &str = "fizz_raw_";
const EMAIL_PREFIX: &str = "fizz_email_";

/// Arguments for the assemble command.
#[derive(Args)]
pub(crate) struct AssembleArgs {
    /// Raw generator output (default: latest fizz_raw_*.html in the output directory).
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Newsletter template (overrides config).
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Output directory (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover fizzbuzz.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl AssembleArgs {
    /// Execute the assemble command.
    ///
    /// # Errors
    ///
    /// Returns an error if inputs are missing, blocks cannot be found, or
    /// file I/O fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            template: self.template,
            output_dir: self.output_dir,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let paths = &config.paths_resolved;

        let raw_path = match self.file {
            Some(path) => path,
            None => find_latest_raw(&paths.output_dir)?,
        };
        if !raw_path.is_file() {
            return Err(CliError::Validation(format!(
                "Raw file not found: {}",
                raw_path.display()
            )));
        }
        if !paths.template.is_file() {
            return Err(CliError::Validation(format!(
                "Template not found: {}",
                paths.template.display()
            )));
        }

        output.info(&format!("Raw input:  {}", file_name(&raw_path)));
        output.info(&format!("Template:   {}", file_name(&paths.template)));

        let raw = std::fs::read_to_string(&raw_path)?;
        let template = std::fs::read_to_string(&paths.template)?;

        let assembler = Assembler::new(Pipeline::with_palette(config.palette()));
        let assembled = assembler.assemble(&raw, &template)?;

        std::fs::create_dir_all(&paths.output_dir)?;
        let output_path = paths.output_dir.join(email_file_name(&raw_path));
        std::fs::write(&output_path, &assembled.html)?;
        tracing::info!(path = %output_path.display(), "Wrote assembled newsletter");

        output.success("[Assembly OK]");
        output.info(&format!("Output:     {}", output_path.display()));
        output.info(&format!(
            "Chars:      {}",
            group_thousands(assembled.html.chars().count())
        ));
        output.warnings(&assembled.warnings);

        Ok(())
    }
}

/// Lexicographically latest `fizz_raw_*.html` in `dir`.
fn find_latest_raw(dir: &Path) -> Result<PathBuf, CliError> {
    let pattern = format!(
        "{}/{RAW_PREFIX}*.html",
        glob::Pattern::escape(&dir.to_string_lossy())
    );
    let mut files: Vec<PathBuf> = glob::glob(&pattern)?.filter_map(Result::ok).collect();
    files.sort();

    files.pop().ok_or_else(|| {
        CliError::Validation(format!(
            "No {RAW_PREFIX}*.html files found in {}",
            dir.display()
        ))
    })
}

/// Output file name for a raw file: `fizz_raw_X` becomes `fizz_email_X`.
///
/// Names without the raw prefix get the email prefix prepended, so the raw
/// file is never overwritten.
fn email_file_name(raw_path: &Path) -> String {
    let name = file_name(raw_path);
    match name.strip_prefix(RAW_PREFIX) {
        Some(rest) => format!("{EMAIL_PREFIX}{rest}"),
        None => format!("{EMAIL_PREFIX}{name}"),
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Format a count with comma thousands separators.
fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_email_file_name() {
        assert_eq!(
            email_file_name(Path::new("/out/fizz_raw_20260228_153608.html")),
            "fizz_email_20260228_153608.html"
        );
        assert_eq!(
            email_file_name(Path::new("draft.html")),
            "fizz_email_draft.html"
        );
    }

    #[test]
    fn test_find_latest_raw() {
        let dir = tempfile::tempdir().unwrap();
        for name in [
            "fizz_raw_20260227_090000.html",
            "fizz_raw_20260228_153608.html",
            "fizz_email_20260301_000000.html",
            "fizz_raw_20260226_120000.txt",
        ] {
            std::fs::write(dir.path().join(name), "").unwrap();
        }

        let latest = find_latest_raw(dir.path()).unwrap();
        assert_eq!(latest, dir.path().join("fizz_raw_20260228_153608.html"));
    }

    #[test]
    fn test_find_latest_raw_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        let err = find_latest_raw(dir.path()).unwrap_err();
        assert!(err.to_string().contains("No fizz_raw_*.html files found"));
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(48_213), "48,213");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }
}
