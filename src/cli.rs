//! Command line entry point: arguments in, extracted lines on stdout.

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};

use crate::config::{Args, Config};
use crate::error::ExtractionFailure;
use crate::output::write_lines;
use crate::source::read_source;

/// Run the command line program
///
/// Extraction failures are reported on stdout as `Error: <description>`
/// and are not errors of the program itself.
pub fn run() -> Result<()> {
    let args = Args::parse();
    // Without a document there is nothing to report, not even config errors
    if args.path.is_none() {
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match Config::from_args(args) {
        Ok(config) => {
            init_logging(&config.log_level);
            if let Some(file) = &config.config_file {
                log::debug!("using config file {}", file.display());
            }
            extract(&config, &mut out)?;
        }
        Err(failure) => report(&mut out, &failure)?,
    }

    out.flush()?;
    Ok(())
}

/// Extract the configured document into `out`
pub fn extract<W: Write>(config: &Config, out: &mut W) -> io::Result<()> {
    let Some(path) = &config.path else {
        log::debug!("no input path given, nothing to do");
        return Ok(());
    };

    match read_source(path) {
        Ok(source) => {
            let lines = config.decoder().decode(&source);
            let count = write_lines(out, lines, config.format)?;
            log::info!("extracted {} lines from {}", count, path.display());
            Ok(())
        }
        Err(failure) => report(out, &failure),
    }
}

fn report<W: Write>(out: &mut W, failure: &ExtractionFailure) -> io::Result<()> {
    log::debug!("extraction failed for {}", failure.path().display());
    writeln!(out, "Error: {}", failure)
}

/// `RUST_LOG` takes precedence over the configured level
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    if let Err(e) = env_logger::Builder::from_env(env).try_init() {
        eprintln!("logger already initialized: {}", e);
    }
}
