use clap::Parser;
use dcmmeta_core::cli::{self, Cli, EXIT_FAILURE};
use std::io;
use std::process;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = cli::report_usage_error(&e, &mut io::stderr()).unwrap_or(EXIT_FAILURE);
            process::exit(code);
        }
    };

    // Setup logging
    setup_logging(cli.verbose);

    let code = cli::run(&cli, &mut io::stdout().lock(), &mut io::stderr().lock())
        .unwrap_or(EXIT_FAILURE);
    process::exit(code);
}

/// Stderr carries the JSON error contract, so only warnings and above are
/// logged unless `--verbose` is given.
fn setup_logging(verbose: bool) {
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Warn)
            .init();
    }
}
