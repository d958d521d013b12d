//! RTF Text Extraction
//!
//! Pulls human-readable plain text out of Rich Text Format documents.
//!
//! This library provides:
//! - Markup stripping (control words, groups, hex escapes)
//! - Two decoding strategies: pattern substitution and a token scan
//! - File reading and output formatting for the `rtf-extract` binary
//! - Configuration management

pub mod cli;
pub mod config;
pub mod decoder;
pub mod error;
pub mod output;
pub mod source;

// Re-exports for clean public API
pub use config::Config;
pub use decoder::{Decoder, ExtractedLines, Strategy};
pub use error::ExtractionFailure;
pub use output::OutputFormat;
pub use source::read_source;
