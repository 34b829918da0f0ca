//! lumec-lex - Lexical Analyzer for the Lume Programming Language
//!
//! This crate provides a complete scanner (tokenizer) for the Lume
//! programming language. It transforms source code into a sequence of
//! tokens that can be consumed by the parser.
//!
//! # Overview
//!
//! Scanning is a character-level finite state machine. Each character is
//! dispatched to a handler for the current state; the handler either grows
//! the in-progress lexeme, finishes a token, or rejects the input with a
//! typed error. A character that terminates a token is never dropped: it
//! travels back to the driver and seeds the next token, so adjacent tokens
//! need no separating whitespace.
//!
//! # Example Usage
//!
//! ```
//! use lumec_lex::{scan, Token};
//!
//! let tokens = scan("var x = 42", "demo.lm").unwrap();
//! assert_eq!(tokens.len(), 4);
//! assert_eq!(
//!     tokens[1],
//!     Token::Identifier {
//!         lexeme: "x".to_owned()
//!     }
//! );
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`table`] - The operator and keyword table
//! - [`literal`] - Integer decoding and escape resolution
//! - [`state`] - The state machine and its per-state handlers
//! - [`scanner`] - The driver that walks the source
//! - [`error`] - Typed scanning errors
//!
//! # Token Categories
//!
//! - **Identifiers**: `[a-zA-Z_][a-zA-Z0-9_]*`, minus the reserved words
//! - **Integer literals**: `42`, `0xff`, `0o777`, `0b1010`, `1_000_000`
//! - **String literals**: `"hello\n"` with `\n \t \r \" \' \\` escapes
//! - **Character literals**: `'x'`, `'\t'`
//! - **Operators**: arithmetic, bitwise, overflow-checked (`&+`),
//!   compound assignment, comparison, ranges (`...`, `..=`, `..<`),
//!   brackets and punctuation
//! - **Keywords**: `var`, `let`, `if`, `else`, `func`, `switch`, `case`,
//!   `default`, `fallthrough`, `struct`, `class`, `true`, `false`, `nil`.
//!   Type names such as `Int` are ordinary identifiers, not reserved words
//!
//! Scanning is fail-fast: the first lexical error is reported to stderr
//! with the offending line and a caret, and returned as a [`LexError`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod literal;
pub mod scanner;
pub mod state;
pub mod table;
pub mod token;

pub use error::{LexError, LexErrorKind, LexResult};
pub use scanner::{scan, Scanner};
pub use state::LexerState;
pub use table::OperatorTable;
pub use token::{OperatorKind, Token};

#[cfg(test)]
mod edge_cases;

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to collect all tokens from source.
    fn lex_all(source: &str) -> Vec<Token> {
        scan(source, "test.lm").unwrap()
    }

    #[test]
    fn test_declaration_program() {
        let source = "var greeting: String = \"Hello, Lume!\"";
        let tokens = lex_all(source);

        assert!(tokens.contains(&Token::Operator {
            kind: OperatorKind::Var,
            lexeme: "var",
        }));
        assert!(tokens.contains(&Token::Identifier {
            lexeme: "greeting".to_owned()
        }));
        assert!(tokens.contains(&Token::StringLiteral {
            value: "Hello, Lume!".to_owned()
        }));
    }

    #[test]
    fn test_type_names_are_plain_identifiers() {
        // Only the 14 reserved words are keywords; built-in type names
        // come out as identifiers.
        for name in ["Int", "String", "Char", "Bool", "Void"] {
            let tokens = lex_all(name);
            assert_eq!(
                tokens,
                vec![Token::Identifier {
                    lexeme: name.to_owned()
                }],
                "{name} should lex as an identifier"
            );
        }
    }

    #[test]
    fn test_function_program() {
        let source = "func add(a: Int, b: Int) -> Int {\n    a + b\n}";
        let tokens = lex_all(source);

        assert!(tokens.contains(&Token::Operator {
            kind: OperatorKind::Func,
            lexeme: "func",
        }));
        assert!(tokens.contains(&Token::Operator {
            kind: OperatorKind::RightArrow,
            lexeme: "->",
        }));
        assert!(tokens.contains(&Token::Operator {
            kind: OperatorKind::Plus,
            lexeme: "+",
        }));
        assert!(tokens.contains(&Token::Operator {
            kind: OperatorKind::LeftCurlyBracket,
            lexeme: "{",
        }));
    }

    #[test]
    fn test_switch_program() {
        let source = "switch n {\ncase 0:\n    fallthrough\ndefault:\n    x = nil\n}";
        let tokens = lex_all(source);

        assert!(tokens.contains(&Token::Operator {
            kind: OperatorKind::Switch,
            lexeme: "switch",
        }));
        assert!(tokens.contains(&Token::Operator {
            kind: OperatorKind::Case,
            lexeme: "case",
        }));
        assert!(tokens.contains(&Token::Operator {
            kind: OperatorKind::Fallthrough,
            lexeme: "fallthrough",
        }));
        assert!(tokens.contains(&Token::Operator {
            kind: OperatorKind::Nil,
            lexeme: "nil",
        }));
    }

    #[test]
    fn test_all_integer_bases() {
        let tokens = lex_all("42 0xff 0o777 0b1010 1_000_000");
        let values: Vec<u64> = tokens
            .iter()
            .map(|t| match t {
                Token::IntegerLiteral { value, .. } => *value,
                other => panic!("expected integer literal, got {other:?}"),
            })
            .collect();
        assert_eq!(values, vec![42, 255, 511, 10, 1_000_000]);
    }

    #[test]
    fn test_overflow_checked_operators() {
        let tokens = lex_all("a &+ b &- c &* d &+= e");
        assert!(tokens.contains(&Token::Operator {
            kind: OperatorKind::OverflowPlus,
            lexeme: "&+",
        }));
        assert!(tokens.contains(&Token::Operator {
            kind: OperatorKind::OverflowMinus,
            lexeme: "&-",
        }));
        assert!(tokens.contains(&Token::Operator {
            kind: OperatorKind::OverflowMultiply,
            lexeme: "&*",
        }));
        assert!(tokens.contains(&Token::Operator {
            kind: OperatorKind::OverflowPlusEquals,
            lexeme: "&+=",
        }));
    }

    #[test]
    fn test_dense_expression_needs_no_whitespace() {
        let tokens = lex_all("if(x<=y){z=x??y}");
        assert_eq!(tokens.len(), 13);
        assert_eq!(
            tokens[0],
            Token::Operator {
                kind: OperatorKind::If,
                lexeme: "if",
            }
        );
        assert!(tokens.contains(&Token::Operator {
            kind: OperatorKind::LessOrEqual,
            lexeme: "<=",
        }));
        assert!(tokens.contains(&Token::Operator {
            kind: OperatorKind::DoubleQuestionMark,
            lexeme: "??",
        }));
    }

    #[test]
    fn test_token_display_rescans_to_same_tokens() {
        let source = "func f(s: String) -> Char { s ..< 'q' \"a\\tb\" }";
        let tokens = lex_all(source);
        let rendered = tokens
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(lex_all(&rendered), tokens);
    }

    #[test]
    fn test_error_carries_kind_and_offset() {
        let err = scan("n = 0x12G4", "test.lm").unwrap_err();
        assert_eq!(err.kind, LexErrorKind::InvalidIntegerLiteral);
        assert_eq!(err.column_offset, 4);
    }
}
