//! Token type definitions.
//!
//! A [`Token`] is only ever constructed from a lexeme that has already
//! passed all literal-specific validation; the fallible constructors here
//! return a typed [`LexError`](crate::error::LexError) instead of ever
//! producing a partially-built token.

use std::fmt;

use crate::error::{LexError, LexErrorKind, LexResult};
use crate::literal;

/// Operator and keyword tags.
///
/// One variant per entry of the operator/keyword table: punctuation,
/// arithmetic, bitwise, overflow-checked and assignment operators,
/// comparisons, brackets, ranges, and the reserved words of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%`
    Modulo,
    /// `&`
    BitwiseAnd,
    /// `|`
    BitwiseOr,
    /// `^`
    BitwiseXor,
    /// `<<`
    ShiftLeft,
    /// `>>`
    ShiftRight,
    /// `+=`
    PlusEquals,
    /// `-=`
    MinusEquals,
    /// `*=`
    MultiplyEquals,
    /// `/=`
    DivideEquals,
    /// `%=`
    ModuloEquals,
    /// `&=`
    BitwiseAndEquals,
    /// `|=`
    BitwiseOrEquals,
    /// `^=`
    BitwiseXorEquals,
    /// `<<=`
    ShiftLeftEquals,
    /// `>>=`
    ShiftRightEquals,
    /// `&+`
    OverflowPlus,
    /// `&-`
    OverflowMinus,
    /// `&*`
    OverflowMultiply,
    /// `&+=`
    OverflowPlusEquals,
    /// `&-=`
    OverflowMinusEquals,
    /// `&*=`
    OverflowMultiplyEquals,
    /// `!`
    ExclamationMark,
    /// `?`
    QuestionMark,
    /// `??`
    DoubleQuestionMark,
    /// `;`
    Semicolon,
    /// `&&`
    LogicalAnd,
    /// `||`
    LogicalOr,
    /// `~`
    Tilde,
    /// `.`
    Dot,
    /// `...`
    Ellipsis,
    /// `..=`
    InclusiveRange,
    /// `..<`
    ExclusiveRange,
    /// `++`
    Increment,
    /// `--`
    Decrement,
    /// `=`
    Equals,
    /// `==`
    DoubleEquals,
    /// `!=`
    NotEquals,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessOrEqual,
    /// `>=`
    GreaterOrEqual,
    /// `(`
    LeftBracket,
    /// `)`
    RightBracket,
    /// `[`
    LeftSquareBracket,
    /// `]`
    RightSquareBracket,
    /// `{`
    LeftCurlyBracket,
    /// `}`
    RightCurlyBracket,
    /// `<-`
    LeftArrow,
    /// `->`
    RightArrow,

    /// `var`
    Var,
    /// `let`
    Let,
    /// `if`
    If,
    /// `func`
    Func,
    /// `switch`
    Switch,
    /// `case`
    Case,
    /// `true`
    True,
    /// `false`
    False,
    /// `nil`
    Nil,
    /// `default`
    Default,
    /// `fallthrough`
    Fallthrough,
    /// `struct`
    Struct,
    /// `class`
    Class,
    /// `else`
    Else,
}

/// A lexical token.
///
/// The scanner produces an immutable sequence of these. The enum is closed:
/// consumers match exhaustively, so adding a kind is a compile-time event
/// everywhere.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A name that is not a reserved word.
    Identifier {
        /// The identifier text as written.
        lexeme: String,
    },
    /// An unsigned integer literal.
    IntegerLiteral {
        /// The literal as written, including any base prefix and underscores.
        lexeme: String,
        /// The decoded value.
        value: u64,
    },
    /// A string literal, quotes stripped and escapes resolved.
    StringLiteral {
        /// The resolved text.
        value: String,
    },
    /// A character literal, quotes stripped and escape resolved.
    CharacterLiteral {
        /// The resolved character.
        value: char,
    },
    /// An operator or reserved word.
    Operator {
        /// The table tag.
        kind: OperatorKind,
        /// The canonical spelling from the table.
        lexeme: &'static str,
    },
}

impl Token {
    /// Wraps identifier text. Identifiers need no validation beyond the
    /// character classes the scanner already enforced.
    pub fn identifier(lexeme: impl Into<String>) -> Self {
        Token::Identifier {
            lexeme: lexeme.into(),
        }
    }

    /// Decodes an integer literal lexeme (prefix and underscores included).
    pub fn integer(lexeme: &str) -> LexResult<Self> {
        let value = literal::decode_integer(lexeme)?;
        Ok(Token::IntegerLiteral {
            lexeme: lexeme.to_owned(),
            value,
        })
    }

    /// Resolves the escapes of a string literal body (quotes already
    /// stripped, backslashes still present).
    pub fn string(raw: &str) -> LexResult<Self> {
        // Offsets inside the body are one column right of the opening quote.
        let value = literal::resolve_escapes(raw).map_err(|e| {
            let offset = e.column_offset + 1;
            e.with_offset(offset)
        })?;
        Ok(Token::StringLiteral { value })
    }

    /// Resolves a character literal body and enforces that it holds exactly
    /// one character once escapes are resolved.
    pub fn character(raw: &str) -> LexResult<Self> {
        let resolved = literal::resolve_escapes(raw).map_err(|e| {
            let offset = e.column_offset + 1;
            e.with_offset(offset)
        })?;
        let mut chars = resolved.chars();
        match (chars.next(), chars.next()) {
            (Some(value), None) => Ok(Token::CharacterLiteral { value }),
            _ => Err(LexError::new(
                LexErrorKind::InvalidCharacterLiteral,
                "character literal must contain exactly one character",
            )),
        }
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, c: char, quote: char) -> fmt::Result {
    match c {
        '\n' => f.write_str("\\n"),
        '\t' => f.write_str("\\t"),
        '\r' => f.write_str("\\r"),
        '\\' => f.write_str("\\\\"),
        c if c == quote => write!(f, "\\{quote}"),
        c => write!(f, "{c}"),
    }
}

/// Displays the token in source form: literals are re-quoted and
/// re-escaped, operators use their canonical spelling. Re-scanning the
/// display of a token sequence (space-separated) reproduces an equivalent
/// sequence.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Identifier { lexeme } => f.write_str(lexeme),
            Token::IntegerLiteral { lexeme, .. } => f.write_str(lexeme),
            Token::StringLiteral { value } => {
                f.write_str("\"")?;
                for c in value.chars() {
                    write_escaped(f, c, '"')?;
                }
                f.write_str("\"")
            }
            Token::CharacterLiteral { value } => {
                f.write_str("'")?;
                write_escaped(f, *value, '\'')?;
                f.write_str("'")
            }
            Token::Operator { lexeme, .. } => f.write_str(lexeme),
        }
    }
}
