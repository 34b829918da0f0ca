//! Diagnostic rendering.
//!
//! This module turns a captured error and the position where the offending
//! token began into a human-readable report: a `file:line:column` header,
//! the full source line, and a caret under the offending character.
//!
//! Rendering is presentation only. It makes no control-flow decisions and
//! is invoked as a side effect by whoever detects the error.

use crate::position::SourcePosition;

/// A diagnostic message anchored at a source position.
///
/// The caret is placed at `position.column + column_offset`, which lets a
/// multi-character token point at the exact character inside it that went
/// wrong (e.g. the bad digit of an integer literal) rather than at the
/// token's first character.
///
/// # Example
///
/// ```
/// use lumec_util::{Diagnostic, SourcePosition};
///
/// let pos = SourcePosition::start("demo.lm");
/// let report = Diagnostic::new(pos, "invalid character 'Z' in integer literal")
///     .with_offset(3)
///     .render("123Z456");
/// assert_eq!(
///     report,
///     "demo.lm:1:1: error: invalid character 'Z' in integer literal\n123Z456\n   ^"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Position where the offending token began.
    pub position: SourcePosition,
    /// Human-readable reason.
    pub message: String,
    /// Caret offset in columns relative to `position`.
    pub column_offset: usize,
}

impl Diagnostic {
    /// Creates a diagnostic with the caret at the token start.
    pub fn new(position: SourcePosition, message: impl Into<String>) -> Self {
        Self {
            position,
            message: message.into(),
            column_offset: 0,
        }
    }

    /// Moves the caret `offset` columns to the right of the token start.
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.column_offset = offset;
        self
    }

    /// Renders the report: header line, source line, caret line.
    pub fn render(&self, source_line: &str) -> String {
        let caret = (self.position.column as usize).saturating_sub(1) + self.column_offset;
        format!(
            "{}: error: {}\n{}\n{}^",
            self.position,
            self.message,
            source_line,
            " ".repeat(caret)
        )
    }

    /// Renders the report and writes it to stderr.
    pub fn emit(&self, source_line: &str) {
        eprintln!("{}", self.render(source_line));
    }
}
