//! The quiescent state between tokens.

use super::{LexerState, Step};

/// Classifies `c` and opens the state for the token it starts.
///
/// This handler is total: it never fails and never finishes a token. The
/// driver relies on that when it re-dispatches a retry character here, so
/// the retry can only ever seed the next token, not complete one.
pub(crate) fn handle(c: char) -> Step {
    if c.is_numeric() {
        Step::advance(LexerState::IntegerLiteral, c.to_string())
    } else if c == '"' {
        Step::advance(LexerState::StringLiteral, String::new())
    } else if c == '\'' {
        Step::advance(LexerState::CharacterLiteral, String::new())
    } else if c.is_alphabetic() || c == '_' {
        Step::advance(LexerState::Identifier, c.to_string())
    } else if c.is_whitespace() {
        Step::advance(LexerState::None, String::new())
    } else {
        // Anything else is a candidate operator character; the operator
        // state decides on the next dispatch whether it begins a real
        // table entry.
        Step::advance(LexerState::Operator, c.to_string())
    }
}
