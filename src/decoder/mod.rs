//! RTF Decoder
//!
//! Strips markup from RTF source and yields the readable lines.
//! Two strategies produce the cleaned text; line splitting and
//! filtering are shared.

pub mod lexer;
pub mod scan;
pub mod substitute;

pub use lexer::{tokenize, Token, TokenKind};

use serde::Deserialize;

/// Lines whose trimmed length does not exceed this are dropped
pub const DEFAULT_MIN_LENGTH: usize = 5;

/// How the markup is removed before splitting into lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Regex substitution passes. Escaped braces and backslashes are left alone.
    #[default]
    Substitute,
    /// Single forward token scan. Unescapes `\{`, `\}` and `\\`.
    Scan,
}

/// Stateless RTF-to-text decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoder {
    strategy: Strategy,
    min_length: usize,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder {
    pub fn new() -> Self {
        Self {
            strategy: Strategy::default(),
            min_length: DEFAULT_MIN_LENGTH,
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Only lines longer than `min_length` characters (after trimming) are kept
    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Remove all markup, keeping line structure intact
    pub fn clean(&self, source: &str) -> String {
        match self.strategy {
            Strategy::Substitute => substitute::clean(source),
            Strategy::Scan => scan::render(&tokenize(source)),
        }
    }

    /// Decode `source` into a lazy sequence of extracted lines
    pub fn decode(&self, source: &str) -> ExtractedLines {
        let text = self.clean(source);
        log::debug!(
            "cleaned {} bytes of RTF into {} bytes using {:?}",
            source.len(),
            text.len(),
            self.strategy
        );
        ExtractedLines::new(text, self.min_length)
    }
}

/// Extracted lines of one decoded document, in source order.
///
/// Owns the cleaned text and walks it one line at a time. Lines end at
/// `\n`, `\r\n` or a lone `\r`.
/// Single pass only: decode again for a fresh sequence.
#[derive(Debug, Clone)]
pub struct ExtractedLines {
    text: String,
    offset: usize,
    finished: bool,
    min_length: usize,
}

impl ExtractedLines {
    fn new(text: String, min_length: usize) -> Self {
        Self {
            text,
            offset: 0,
            finished: false,
            min_length,
        }
    }

    fn next_segment(&mut self) -> Option<&str> {
        if self.finished {
            return None;
        }
        let rest = &self.text[self.offset..];
        match rest.find(['\n', '\r']) {
            Some(idx) => {
                let start = self.offset;
                // `\r\n` is one break, a lone `\r` is a break of its own
                let break_len = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
                self.offset += idx + break_len;
                Some(&self.text[start..start + idx])
            }
            None => {
                self.finished = true;
                Some(rest)
            }
        }
    }
}

impl Iterator for ExtractedLines {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let min_length = self.min_length;
        while let Some(segment) = self.next_segment() {
            if let Some(line) = keep_line(segment, min_length) {
                return Some(line.to_string());
            }
        }
        None
    }
}

/// Trim a candidate line and keep it only if it is long enough
pub fn keep_line(candidate: &str, min_length: usize) -> Option<&str> {
    let trimmed = candidate.trim();
    (trimmed.chars().count() > min_length).then_some(trimmed)
}
