//! RTF Lexer
//!
//! Single forward pass over RTF source producing a flat token list.
//! No group tracking and no position tracking beyond what each token needs.

/// Token types in RTF source
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    /// Control word like `\par` or `\fs24`, including its delimiting space
    ControlWord,
    /// Escaped literal: `\{`, `\}` or `\\`
    Escaped,
    /// Hex escape like `\'e9`
    Hex,
    /// `{`
    GroupStart,
    /// `}`
    GroupEnd,
    /// Anything else, newlines included
    Text,
}

/// A token with its source text
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    fn new(kind: TokenKind, text: &str) -> Self {
        Self {
            kind,
            text: text.to_string(),
        }
    }
}

/// Tokenize RTF source
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = source.char_indices().peekable();
    let mut text_start: Option<usize> = None;

    while let Some((start_idx, ch)) = chars.next() {
        let token = match ch {
            '{' => Some(Token::new(TokenKind::GroupStart, "{")),
            '}' => Some(Token::new(TokenKind::GroupEnd, "}")),
            '\\' => match chars.peek().map(|&(_, next)| next) {
                Some('{' | '}' | '\\') => {
                    chars.next();
                    Some(Token::new(TokenKind::Escaped, &source[start_idx..start_idx + 2]))
                }
                Some(c) if is_control_char(c) => {
                    let mut end_idx = start_idx + 1;
                    while let Some(&(idx, next_ch)) = chars.peek() {
                        if is_control_char(next_ch) {
                            end_idx = idx + next_ch.len_utf8();
                            chars.next();
                        } else {
                            break;
                        }
                    }
                    // One space delimits the word and belongs to it
                    if let Some(&(idx, ' ')) = chars.peek() {
                        end_idx = idx + 1;
                        chars.next();
                    }
                    Some(Token::new(TokenKind::ControlWord, &source[start_idx..end_idx]))
                }
                Some('\'') => {
                    let hex = source.get(start_idx + 2..start_idx + 4);
                    match hex {
                        Some(digits) if digits.chars().all(|c| c.is_ascii_hexdigit()) => {
                            // quote plus two ASCII digits
                            chars.next();
                            chars.next();
                            chars.next();
                            Some(Token::new(TokenKind::Hex, &source[start_idx..start_idx + 4]))
                        }
                        // Lone backslash: left in the text
                        _ => None,
                    }
                }
                _ => None,
            },
            _ => None,
        };

        match token {
            Some(token) => {
                if let Some(text_idx) = text_start.take() {
                    tokens.push(Token::new(TokenKind::Text, &source[text_idx..start_idx]));
                }
                tokens.push(token);
            }
            None => {
                text_start.get_or_insert(start_idx);
            }
        }
    }

    if let Some(text_idx) = text_start {
        tokens.push(Token::new(TokenKind::Text, &source[text_idx..]));
    }

    tokens
}

/// Characters allowed in a control word name
fn is_control_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_tokenize_simple_document() {
        let tokens = tokenize(r"{\rtf1 Hello}");

        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::GroupStart,
                TokenKind::ControlWord,
                TokenKind::Text,
                TokenKind::GroupEnd
            ]
        );
        assert_eq!(tokens[1].text, r"\rtf1 ");
        assert_eq!(tokens[2].text, "Hello");
    }

    #[test]
    fn test_control_word_stops_at_non_alphanumeric() {
        let tokens = tokenize(r"\b\i0;x");

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, r"\b");
        assert_eq!(tokens[1].text, r"\i0");
        assert_eq!(tokens[2].kind, TokenKind::Text);
        assert_eq!(tokens[2].text, ";x");
    }

    #[test]
    fn test_control_word_takes_one_space() {
        let tokens = tokenize(r"\par  x");

        assert_eq!(tokens[0].text, r"\par ");
        assert_eq!(tokens[1].text, " x");
    }

    #[test]
    fn test_escaped_literals() {
        let tokens = tokenize(r"\{\}\\");

        assert_eq!(kinds(&tokens), vec![TokenKind::Escaped; 3]);
        assert_eq!(tokens[2].text, r"\\");
    }

    #[test]
    fn test_hex_escape() {
        let tokens = tokenize(r"Hi\'41Bye");

        assert_eq!(
            kinds(&tokens),
            vec![TokenKind::Text, TokenKind::Hex, TokenKind::Text]
        );
        assert_eq!(tokens[1].text, r"\'41");
    }

    #[test]
    fn test_incomplete_hex_escape_is_text() {
        let tokens = tokenize(r"a\'4");

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Text);
        assert_eq!(tokens[0].text, r"a\'4");
    }

    #[test]
    fn test_other_control_symbols_are_text() {
        let tokens = tokenize(r"a\~b\-c");

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, r"a\~b\-c");
    }

    #[test]
    fn test_non_ascii_text() {
        let tokens = tokenize("{café}");

        assert_eq!(tokens[1].kind, TokenKind::Text);
        assert_eq!(tokens[1].text, "café");
    }

    #[test]
    fn test_trailing_backslash() {
        let tokens = tokenize("end\\");

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "end\\");
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
    }
}
