pub mod report;

use crate::api::MetadataExtractor;
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use log::{debug, info};
use report::{ErrorReport, TextReport};
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

pub const NO_FILE_PATH: &str = "No file path provided";
pub const FILE_NOT_FOUND: &str = "File not found";

/// Command-line arguments for dcmmeta
#[derive(Parser, Debug)]
#[command(name = "dcmmeta")]
#[command(about = "DICOM metadata extraction tool")]
#[command(version)]
pub struct Cli {
    /// Path to DICOM file
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Further positional arguments are ignored
    #[arg(value_name = "EXTRA", hide = true)]
    pub extra: Vec<OsString>,

    /// Output format
    #[arg(short, long, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// JSON object with two-space indentation
    Json,
    /// Human-readable text format
    Text,
}

/// Runs one invocation, writing results to `out` and failures to `err`
///
/// Returns the process exit code. Only I/O errors on the output streams
/// themselves are propagated.
pub fn run<O: Write, E: Write>(cli: &Cli, out: &mut O, err: &mut E) -> io::Result<i32> {
    let Some(path) = cli.file.as_deref() else {
        ErrorReport::new(NO_FILE_PATH).write_to(err)?;
        return Ok(EXIT_FAILURE);
    };

    if !path.exists() {
        debug!("{} does not exist", path.display());
        ErrorReport::new(FILE_NOT_FOUND).write_to(err)?;
        return Ok(EXIT_FAILURE);
    }

    info!("Processing file: {}", path.display());

    match MetadataExtractor::extract(path) {
        Ok(record) => {
            match cli.format {
                OutputFormat::Json => writeln!(out, "{}", record.to_json_pretty()?)?,
                OutputFormat::Text => write!(out, "{}", TextReport::new(&record))?,
            }
            out.flush()?;
            Ok(EXIT_SUCCESS)
        }
        Err(e) => {
            debug!("Extraction failed for {}: {:?}", path.display(), e);
            ErrorReport::for_file(e.to_string(), path).write_to(err)?;
            Ok(EXIT_FAILURE)
        }
    }
}

/// Handles an argument parsing failure
///
/// Help and version requests print as usual and succeed; every other
/// parsing error is reported as JSON on `err` and fails.
pub fn report_usage_error<E: Write>(error: &clap::Error, err: &mut E) -> io::Result<i32> {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            error.print()?;
            Ok(EXIT_SUCCESS)
        }
        _ => {
            let rendered = error.to_string();
            let message = rendered
                .lines()
                .next()
                .unwrap_or_default()
                .trim_start_matches("error: ")
                .to_string();
            ErrorReport::new(message).write_to(err)?;
            Ok(EXIT_FAILURE)
        }
    }
}
