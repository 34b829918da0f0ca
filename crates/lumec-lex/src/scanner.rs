//! The scanner driver.
//!
//! The driver owns everything the state handlers do not: walking the
//! source a character at a time, tracking line and column, snapshotting
//! the position where the current token began, re-dispatching retry
//! characters, flushing at line ends, and reporting errors. The handlers
//! themselves stay pure functions over `(character, lexeme)`.

use lumec_util::{Diagnostic, SourcePosition};

use crate::error::{LexError, LexErrorKind};
use crate::state::{self, LexerState};
use crate::table::OperatorTable;
use crate::token::Token;

/// A character-level scanner for Lume source text.
///
/// The scanner holds only the immutable operator table; all per-scan
/// state lives on the stack of [`scan`](Scanner::scan), so one scanner
/// can be shared freely, including across threads.
///
/// # Example
///
/// ```
/// use lumec_lex::{Scanner, Token};
///
/// let scanner = Scanner::new();
/// let tokens = scanner.scan("let x = 42", "demo.lm").unwrap();
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(
///     tokens[3],
///     Token::IntegerLiteral {
///         lexeme: "42".to_owned(),
///         value: 42,
///     }
/// );
/// ```
pub struct Scanner {
    table: OperatorTable,
}

impl Scanner {
    /// Creates a scanner with the standard operator and keyword table.
    pub fn new() -> Self {
        Self {
            table: OperatorTable::new(),
        }
    }

    /// Scans `source` into its token sequence.
    ///
    /// `filename` only labels positions in diagnostics; no file is read.
    /// Scanning is fail-fast: the first error is rendered to stderr with
    /// the offending line and a caret, then returned. Tokens already
    /// produced are dropped with the error.
    pub fn scan(&self, source: &str, filename: &str) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        let mut state = LexerState::None;
        let mut lexeme = String::new();
        let mut position = SourcePosition::start(filename);
        let mut token_start = position.clone();

        for line in source.lines() {
            for c in line.chars() {
                if state == LexerState::None {
                    token_start = position.clone();
                }

                let step = match state::dispatch(&self.table, state, c, lexeme) {
                    Ok(step) => step,
                    Err(err) => {
                        report(&token_start, &err, line);
                        return Err(err);
                    }
                };
                state = step.state;
                lexeme = step.lexeme;
                if let Some(token) = step.token {
                    tokens.push(token);
                }

                if let Some(retry) = step.retry {
                    // The terminating character starts the next token at
                    // the column it actually occupies.
                    token_start = position.clone();
                    let step = state::none::handle(retry);
                    debug_assert!(step.token.is_none() && step.retry.is_none());
                    state = step.state;
                    lexeme = step.lexeme;
                }

                position = position.advanced();
            }

            match state {
                LexerState::StringLiteral | LexerState::CharacterLiteral => {
                    let what = if state == LexerState::StringLiteral {
                        "unterminated string literal"
                    } else {
                        "unterminated character literal"
                    };
                    let err = LexError::new(LexErrorKind::UnterminatedLiteral, what)
                        .with_offset((position.column - token_start.column) as usize);
                    report(&token_start, &err, line);
                    return Err(err);
                }
                LexerState::None => {}
                _ => {
                    // Flush the in-progress token with a synthetic blank
                    // that is never part of the input.
                    let step = match state::dispatch(&self.table, state, ' ', lexeme) {
                        Ok(step) => step,
                        Err(err) => {
                            report(&token_start, &err, line);
                            return Err(err);
                        }
                    };
                    if let Some(token) = step.token {
                        tokens.push(token);
                    }
                    state = LexerState::None;
                    lexeme = String::new();
                }
            }

            position = position.next_line();
        }

        Ok(tokens)
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Scans `source` with a freshly built table.
///
/// Convenience wrapper over [`Scanner::scan`] for one-off scans.
pub fn scan(source: &str, filename: &str) -> Result<Vec<Token>, LexError> {
    Scanner::new().scan(source, filename)
}

fn report(token_start: &SourcePosition, err: &LexError, line: &str) {
    Diagnostic::new(token_start.clone(), err.to_string())
        .with_offset(err.column_offset)
        .emit(line);
}
