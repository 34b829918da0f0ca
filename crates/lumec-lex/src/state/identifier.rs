//! Identifier and keyword state.

use super::Step;
use crate::error::LexResult;
use crate::table::OperatorTable;
use crate::token::Token;

/// Handles one character while inside an identifier.
///
/// Identifier characters keep accumulating; the first character that is
/// not one finishes the token. Reserved words are only recognized here,
/// by exact lookup against the table, so an identifier that merely starts
/// like a keyword (`iffy`, `lettuce`) stays an identifier.
pub(crate) fn handle(table: &OperatorTable, c: char, lexeme: String) -> LexResult<Step> {
    if c.is_alphabetic() || c.is_numeric() || c == '_' {
        let mut lexeme = lexeme;
        lexeme.push(c);
        return Ok(Step::advance(super::LexerState::Identifier, lexeme));
    }

    let token = match table.token_from(&lexeme) {
        Some(keyword) => keyword,
        None => Token::identifier(&lexeme),
    };
    Ok(Step::emit_and_retry(token, c))
}
