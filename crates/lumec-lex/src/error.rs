//! Lexical error types.
//!
//! Every failure the scanner can hit is fatal to the current scan: there is
//! no recovery or resynchronization. Errors carry a closed [`LexErrorKind`]
//! so callers can branch without string matching, a human-readable reason,
//! and a column offset relative to the start of the offending token so the
//! diagnostic caret can point at the exact bad character.

use thiserror::Error;

/// The closed set of ways a scan can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// A decimal literal longer than one character starts with `0`.
    InvalidLeadingZero,
    /// A character outside the base's digit alphabet inside a literal.
    InvalidIntegerLiteral,
    /// A character literal holding more or less than one character.
    InvalidCharacterLiteral,
    /// An unknown escape letter, or a trailing unresolved backslash.
    InvalidEscapeCharacter,
    /// Accumulation exceeded the unsigned 64-bit range.
    IntegerOverflow,
    /// Operator text that matches no table entry.
    InvalidOperator,
    /// A base prefix (`0x`, `0o`, `0b`) with no digits after it.
    IntegerPrefixWithoutDigits,
    /// An uppercase base prefix (`0X`, `0O`, `0B`).
    UppercaseIntegerPrefix,
    /// A base prefix letter other than `x`, `o`, or `b`.
    InvalidIntegerPrefix,
    /// A string or character literal still open at end of line or input.
    UnterminatedLiteral,
}

/// A fatal lexical error.
///
/// Created at the point of detection and propagated straight to the caller.
/// `column_offset` is measured from the first character of the token being
/// scanned; it defaults to 0 (caret on the token start) and is only nonzero
/// when a specific character inside the token is at fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct LexError {
    /// What went wrong, as a matchable tag.
    pub kind: LexErrorKind,
    /// Human-readable explanation.
    pub reason: String,
    /// Caret offset in columns from the token start.
    pub column_offset: usize,
}

impl LexError {
    /// Creates an error with the caret at the token start.
    pub fn new(kind: LexErrorKind, reason: impl Into<String>) -> Self {
        Self {
            kind,
            reason: reason.into(),
            column_offset: 0,
        }
    }

    /// Moves the caret `offset` columns into the token.
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.column_offset = offset;
        self
    }
}

/// Result alias used throughout the lexer.
pub type LexResult<T> = Result<T, LexError>;
