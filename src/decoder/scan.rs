//! Token scan rendering
//!
//! Turns lexer tokens back into plain text.

use crate::decoder::lexer::{Token, TokenKind};
use crate::decoder::substitute::decode_hex;

/// Render tokens to plain text, keeping newlines
pub fn render(tokens: &[Token]) -> String {
    let mut text = String::new();

    for token in tokens {
        match token.kind {
            TokenKind::ControlWord => text.push(' '),
            TokenKind::Escaped => text.push_str(&token.text[1..]),
            TokenKind::Hex => text.push_str(&decode_hex(&token.text[2..])),
            TokenKind::GroupStart | TokenKind::GroupEnd => {}
            TokenKind::Text => text.push_str(&token.text),
        }
    }

    text
}
