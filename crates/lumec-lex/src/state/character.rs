//! Character literal state.

use super::{LexerState, Step};
use crate::error::{LexError, LexErrorKind, LexResult};
use crate::token::Token;

/// Handles one character while inside a character literal.
///
/// The lexeme holds the body between the quotes. A body is at most one
/// character, or two when the first is a backslash; the closing quote is
/// only accepted in those positions. Anything longer fails immediately
/// rather than waiting for a quote that cannot make the literal valid.
pub(crate) fn handle(c: char, lexeme: String) -> LexResult<Step> {
    let len = lexeme.chars().count();

    if len == 0 || lexeme == "\\" {
        let mut lexeme = lexeme;
        lexeme.push(c);
        return Ok(Step::advance(LexerState::CharacterLiteral, lexeme));
    }

    if c == '\'' && (len == 1 || (len == 2 && lexeme.starts_with('\\'))) {
        return Ok(Step::emit(Token::character(&lexeme)?));
    }

    Err(LexError::new(
        LexErrorKind::InvalidCharacterLiteral,
        "character literal too long",
    )
    .with_offset(len + 1))
}
