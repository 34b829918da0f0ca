//! Lexer states and their transition handlers.
//!
//! This module organizes the scanning state machine into one focused file
//! per state:
//! - `none` - quiescent state between tokens; decides what the next
//!   character starts
//! - `integer` - integer literals (base prefixes, underscores)
//! - `string` - string literal bodies
//! - `character` - character literal bodies
//! - `operator` - operators and punctuation via prefix narrowing
//! - `identifier` - identifiers and keywords
//!
//! Each handler is a pure function from `(character, in-progress lexeme)`
//! to a [`Step`]. A handler never consumes input it does not own: when a
//! character terminates the token being built, the finished token travels
//! back in the step together with that character as a `retry`, and the
//! driver re-dispatches it through the `none` handler to seed the next
//! token. Handlers never recurse into each other.

pub(crate) mod character;
pub(crate) mod identifier;
pub(crate) mod integer;
pub(crate) mod none;
pub(crate) mod operator;
pub(crate) mod string;

use crate::error::LexResult;
use crate::table::OperatorTable;
use crate::token::Token;

/// The states of the scanning state machine.
///
/// Exactly one is active at any instant. `None` is both the initial state
/// and the quiescent state between tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexerState {
    /// Between tokens.
    None,
    /// Inside an integer literal.
    IntegerLiteral,
    /// Inside a string literal (between the quotes).
    StringLiteral,
    /// Inside a character literal (between the quotes).
    CharacterLiteral,
    /// Inside an operator lexeme.
    Operator,
    /// Inside an identifier or keyword.
    Identifier,
}

/// The outcome of dispatching one character to a state handler.
#[derive(Debug)]
pub(crate) struct Step {
    /// State to continue in.
    pub state: LexerState,
    /// Token finished by this character, if any.
    pub token: Option<Token>,
    /// The in-progress lexeme carried into the next dispatch.
    pub lexeme: String,
    /// A character the handler did not consume. The driver re-dispatches
    /// it through the `none` handler, which never emits a token itself.
    pub retry: Option<char>,
}

impl Step {
    /// Continue scanning in `state` with the grown lexeme.
    fn advance(state: LexerState, lexeme: String) -> Self {
        Self {
            state,
            token: None,
            lexeme,
            retry: None,
        }
    }

    /// Finish `token`; the terminating character was consumed.
    fn emit(token: Token) -> Self {
        Self {
            state: LexerState::None,
            token: Some(token),
            lexeme: String::new(),
            retry: None,
        }
    }

    /// Finish `token`; the terminating character still needs dispatching.
    fn emit_and_retry(token: Token, retry: char) -> Self {
        Self {
            state: LexerState::None,
            token: Some(token),
            lexeme: String::new(),
            retry: Some(retry),
        }
    }
}

/// Dispatches one character to the handler for the current state.
pub(crate) fn dispatch(
    table: &OperatorTable,
    state: LexerState,
    c: char,
    lexeme: String,
) -> LexResult<Step> {
    match state {
        LexerState::None => Ok(none::handle(c)),
        LexerState::IntegerLiteral => integer::handle(c, lexeme),
        LexerState::StringLiteral => string::handle(c, lexeme),
        LexerState::CharacterLiteral => character::handle(c, lexeme),
        LexerState::Operator => operator::handle(table, c, lexeme),
        LexerState::Identifier => identifier::handle(table, c, lexeme),
    }
}
