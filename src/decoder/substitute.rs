//! Pattern-substitution pass
//!
//! Three regex passes, applied in order: control words, braces, hex escapes.
//! Escaped literals (`\{`, `\}`, `\\`) get no special treatment here, so the
//! backslash survives and the brace is dropped with all the others.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// `\` + lowercase alphanumeric name, plus one delimiting space if present
static CONTROL_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\[a-z0-9]+ ?").expect("control word pattern"));

static BRACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[{}]").expect("brace pattern"));

static HEX_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\'([0-9a-fA-F]{2})").expect("hex escape pattern"));

/// Strip markup from `source`, keeping newlines
pub fn clean(source: &str) -> String {
    let text = CONTROL_WORD.replace_all(source, " ");
    let text = BRACES.replace_all(&text, "");
    HEX_ESCAPE
        .replace_all(&text, |caps: &Captures| decode_hex(&caps[1]))
        .into_owned()
}

/// Character for a two-digit hex code, or empty if it does not parse
pub fn decode_hex(digits: &str) -> String {
    match u8::from_str_radix(digits, 16) {
        Ok(byte) => char::from(byte).to_string(),
        Err(_) => String::new(),
    }
}
