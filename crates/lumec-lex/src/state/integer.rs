//! Integer literal state.

use super::{LexerState, Step};
use crate::error::{LexError, LexErrorKind, LexResult};
use crate::token::Token;

/// Handles one character while inside an integer literal.
///
/// The lexeme keeps base prefixes and underscores. Letters are accepted
/// freely while scanning (hex digits, stray suffixes); invalid characters
/// are caught when the lexeme is converted into a token. Prefix casing and
/// unknown prefix letters are rejected right here, while the lexeme is
/// still just `0`, so the diagnostic lands on the prefix itself.
pub(crate) fn handle(c: char, lexeme: String) -> LexResult<Step> {
    if lexeme == "0" && c.is_alphabetic() {
        match c {
            'X' => {
                return Err(LexError::new(
                    LexErrorKind::UppercaseIntegerPrefix,
                    "hexadecimal literals must start with '0x', not '0X'",
                ))
            }
            'O' => {
                return Err(LexError::new(
                    LexErrorKind::UppercaseIntegerPrefix,
                    "octal literals must start with '0o', not '0O'",
                ))
            }
            'B' => {
                return Err(LexError::new(
                    LexErrorKind::UppercaseIntegerPrefix,
                    "binary literals must start with '0b', not '0B'",
                ))
            }
            'x' | 'o' | 'b' => {}
            _ => {
                return Err(LexError::new(
                    LexErrorKind::InvalidIntegerPrefix,
                    format!("invalid integer literal prefix '0{c}'"),
                ))
            }
        }
    }

    if c.is_numeric() || c.is_alphabetic() || c == '_' {
        let mut lexeme = lexeme;
        lexeme.push(c);
        return Ok(Step::advance(LexerState::IntegerLiteral, lexeme));
    }

    // The character is not part of the literal: convert what we have and
    // hand the character back to the driver to start the next token.
    let token = Token::integer(&lexeme)?;
    Ok(Step::emit_and_retry(token, c))
}
