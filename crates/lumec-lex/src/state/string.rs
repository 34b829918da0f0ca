//! String literal state.

use super::{LexerState, Step};
use crate::error::LexResult;
use crate::token::Token;

/// True if the body ends in an odd run of backslashes, i.e. the next
/// character is escaped.
fn in_escaped_mode(body: &str) -> bool {
    let mut escaped = false;
    for c in body.chars() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        }
    }
    escaped
}

/// Handles one character while inside a string literal.
///
/// The lexeme holds the body between the quotes, backslashes still raw.
/// An unescaped closing quote finishes the token, resolving escapes on the
/// way; everything else (including an escaped quote) is appended.
pub(crate) fn handle(c: char, lexeme: String) -> LexResult<Step> {
    if c == '"' && !in_escaped_mode(&lexeme) {
        return Ok(Step::emit(Token::string(&lexeme)?));
    }
    let mut lexeme = lexeme;
    lexeme.push(c);
    Ok(Step::advance(LexerState::StringLiteral, lexeme))
}
