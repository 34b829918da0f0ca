//! Source position tracking.
//!
//! This module provides the [`SourcePosition`] type used for error reporting.
//! Positions are immutable: advancing produces a new value rather than
//! mutating in place, so a snapshot taken at the start of a token stays
//! valid while the scanner moves on.

use std::fmt;
use std::sync::Arc;

/// A position in a source file.
///
/// Line and column are 1-based and always at least 1. The file label is
/// shared via `Arc` so positions stay cheap to clone while still carrying
/// the name of the file they point into.
///
/// # Example
///
/// ```
/// use lumec_util::SourcePosition;
///
/// let pos = SourcePosition::start("main.lm");
/// assert_eq!(pos.line, 1);
/// assert_eq!(pos.column, 1);
///
/// let pos = pos.advanced();
/// assert_eq!(pos.column, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePosition {
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based, in characters).
    pub column: u32,
    /// Display label of the source file.
    pub file: Arc<str>,
}

impl SourcePosition {
    /// Creates a position at the start of the given file (line 1, column 1).
    pub fn start(file: impl Into<Arc<str>>) -> Self {
        Self {
            line: 1,
            column: 1,
            file: file.into(),
        }
    }

    /// Returns the position one column to the right.
    pub fn advanced(&self) -> Self {
        Self {
            line: self.line,
            column: self.column + 1,
            file: Arc::clone(&self.file),
        }
    }

    /// Returns the position at the start of the next line.
    pub fn next_line(&self) -> Self {
        Self {
            line: self.line + 1,
            column: 1,
            file: Arc::clone(&self.file),
        }
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_is_one_based() {
        let pos = SourcePosition::start("test.lm");
        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 1);
    }

    #[test]
    fn test_advanced_moves_column() {
        let pos = SourcePosition::start("test.lm").advanced().advanced();
        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 3);
    }

    #[test]
    fn test_next_line_resets_column() {
        let pos = SourcePosition::start("test.lm").advanced().next_line();
        assert_eq!(pos.line, 2);
        assert_eq!(pos.column, 1);
    }

    #[test]
    fn test_advance_does_not_mutate() {
        let pos = SourcePosition::start("test.lm");
        let _ = pos.advanced();
        assert_eq!(pos.column, 1);
    }

    #[test]
    fn test_display() {
        let pos = SourcePosition::start("src/main.lm").advanced();
        assert_eq!(pos.to_string(), "src/main.lm:1:2");
    }
}
