//! Configuration management for rtf-extract.
//!
//! Handles:
//! - Command-line argument parsing
//! - Optional TOML config file
//! - Merging both into one `Config`

use clap::Parser;
use serde::Deserialize;
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::decoder::{DEFAULT_MIN_LENGTH, Decoder, Strategy};
use crate::error::ExtractionFailure;
use crate::output::OutputFormat;

/// Config file looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = ".rtf-extract.toml";

/// Command-line arguments for rtf-extract
#[derive(Debug, Default, Parser)]
#[command(name = "rtf-extract")]
#[command(about = "Extract plain text lines from RTF documents")]
#[command(version)]
pub struct Args {
    /// RTF document to read. Nothing happens without one.
    pub path: Option<PathBuf>,

    /// Extra positional arguments after the document, ignored
    #[arg(hide = true)]
    pub ignored: Vec<OsString>,

    /// Decoding strategy
    #[arg(long, value_enum)]
    pub strategy: Option<Strategy>,

    /// Drop lines whose trimmed length is at most this many characters
    #[arg(long)]
    pub min_length: Option<usize>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Config file to use instead of the default locations
    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    /// Log level
    #[arg(long, help = "Log level (trace, debug, info, warn, error)")]
    pub log_level: Option<String>,
}

/// Settings read from a TOML config file
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub strategy: Option<Strategy>,
    pub min_length: Option<usize>,
    pub format: Option<OutputFormat>,
    pub log_level: Option<String>,
}

impl FileConfig {
    /// Parse a config file, `Ok(None)` if it does not exist
    pub fn load(path: &Path) -> Result<Option<Self>, ExtractionFailure> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ExtractionFailure::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let parsed = toml::from_str(&content).map_err(|e| ExtractionFailure::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        log::debug!("loaded config from {}", path.display());
        Ok(Some(parsed))
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Document to extract, if any
    pub path: Option<PathBuf>,
    pub strategy: Strategy,
    pub min_length: usize,
    pub format: OutputFormat,
    pub log_level: String,
    /// Config file that was applied
    pub config_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: None,
            strategy: Strategy::default(),
            min_length: DEFAULT_MIN_LENGTH,
            format: OutputFormat::default(),
            log_level: "warn".to_string(),
            config_file: None,
        }
    }
}

impl Config {
    /// Create configuration from parsed command-line arguments
    pub fn from_args(args: Args) -> Result<Self, ExtractionFailure> {
        let (config_file, file_config) = match &args.config {
            // An explicit file must exist
            Some(path) => match FileConfig::load(path)? {
                Some(file_config) => (Some(path.clone()), file_config),
                None => {
                    return Err(ExtractionFailure::Read {
                        path: path.clone(),
                        source: std::io::Error::new(ErrorKind::NotFound, "config file not found"),
                    });
                }
            },
            None => Self::discover()?,
        };

        Ok(Self::merge(args, file_config, config_file))
    }

    /// Look for a config file in the default locations
    fn discover() -> Result<(Option<PathBuf>, FileConfig), ExtractionFailure> {
        let mut candidates = vec![PathBuf::from(PROJECT_CONFIG_FILE)];
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join("rtf-extract").join("config.toml"));
        }

        for candidate in candidates {
            if let Some(file_config) = FileConfig::load(&candidate)? {
                return Ok((Some(candidate), file_config));
            }
        }
        Ok((None, FileConfig::default()))
    }

    /// Command-line values win over file values, which win over defaults
    pub fn merge(args: Args, file: FileConfig, config_file: Option<PathBuf>) -> Self {
        let defaults = Config::default();
        Config {
            path: args.path,
            strategy: args.strategy.or(file.strategy).unwrap_or(defaults.strategy),
            min_length: args
                .min_length
                .or(file.min_length)
                .unwrap_or(defaults.min_length),
            format: args.format.or(file.format).unwrap_or(defaults.format),
            log_level: args
                .log_level
                .or(file.log_level)
                .unwrap_or(defaults.log_level),
            config_file,
        }
    }

    /// Build the decoder these settings describe
    pub fn decoder(&self) -> Decoder {
        Decoder::new()
            .with_strategy(self.strategy)
            .min_length(self.min_length)
    }
}
