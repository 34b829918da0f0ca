//! The operator and keyword table.
//!
//! A static, bidirectional mapping between lexeme text and [`OperatorKind`]
//! tags, plus the prefix queries the operator state uses to implement
//! longest-match recognition. Operators are recognized by incremental
//! prefix narrowing over the entry list rather than a precomputed trie;
//! the table is small enough that a linear filter per character is fine.
//!
//! The table is constructed explicitly and never mutated afterwards, so a
//! single instance can serve any number of concurrent scans.

use rustc_hash::FxHashMap;

use crate::token::{OperatorKind, Token};

/// Every operator and reserved word of the language, paired with its tag.
const ENTRIES: &[(&str, OperatorKind)] = &[
    ("+", OperatorKind::Plus),
    ("-", OperatorKind::Minus),
    ("*", OperatorKind::Multiply),
    ("/", OperatorKind::Divide),
    ("%", OperatorKind::Modulo),
    ("&", OperatorKind::BitwiseAnd),
    ("|", OperatorKind::BitwiseOr),
    ("^", OperatorKind::BitwiseXor),
    ("<<", OperatorKind::ShiftLeft),
    (">>", OperatorKind::ShiftRight),
    ("+=", OperatorKind::PlusEquals),
    ("-=", OperatorKind::MinusEquals),
    ("*=", OperatorKind::MultiplyEquals),
    ("/=", OperatorKind::DivideEquals),
    ("%=", OperatorKind::ModuloEquals),
    ("&=", OperatorKind::BitwiseAndEquals),
    ("|=", OperatorKind::BitwiseOrEquals),
    ("^=", OperatorKind::BitwiseXorEquals),
    ("<<=", OperatorKind::ShiftLeftEquals),
    (">>=", OperatorKind::ShiftRightEquals),
    ("&+", OperatorKind::OverflowPlus),
    ("&-", OperatorKind::OverflowMinus),
    ("&*", OperatorKind::OverflowMultiply),
    ("&+=", OperatorKind::OverflowPlusEquals),
    ("&-=", OperatorKind::OverflowMinusEquals),
    ("&*=", OperatorKind::OverflowMultiplyEquals),
    ("!", OperatorKind::ExclamationMark),
    ("?", OperatorKind::QuestionMark),
    ("??", OperatorKind::DoubleQuestionMark),
    (";", OperatorKind::Semicolon),
    ("&&", OperatorKind::LogicalAnd),
    ("||", OperatorKind::LogicalOr),
    ("~", OperatorKind::Tilde),
    (".", OperatorKind::Dot),
    ("...", OperatorKind::Ellipsis),
    ("..=", OperatorKind::InclusiveRange),
    ("..<", OperatorKind::ExclusiveRange),
    ("++", OperatorKind::Increment),
    ("--", OperatorKind::Decrement),
    ("=", OperatorKind::Equals),
    ("==", OperatorKind::DoubleEquals),
    ("!=", OperatorKind::NotEquals),
    (":", OperatorKind::Colon),
    (",", OperatorKind::Comma),
    ("<", OperatorKind::Less),
    (">", OperatorKind::Greater),
    ("<=", OperatorKind::LessOrEqual),
    (">=", OperatorKind::GreaterOrEqual),
    ("(", OperatorKind::LeftBracket),
    (")", OperatorKind::RightBracket),
    ("[", OperatorKind::LeftSquareBracket),
    ("]", OperatorKind::RightSquareBracket),
    ("{", OperatorKind::LeftCurlyBracket),
    ("}", OperatorKind::RightCurlyBracket),
    ("<-", OperatorKind::LeftArrow),
    ("->", OperatorKind::RightArrow),
    ("var", OperatorKind::Var),
    ("let", OperatorKind::Let),
    ("if", OperatorKind::If),
    ("func", OperatorKind::Func),
    ("switch", OperatorKind::Switch),
    ("case", OperatorKind::Case),
    ("true", OperatorKind::True),
    ("false", OperatorKind::False),
    ("nil", OperatorKind::Nil),
    ("default", OperatorKind::Default),
    ("fallthrough", OperatorKind::Fallthrough),
    ("struct", OperatorKind::Struct),
    ("class", OperatorKind::Class),
    ("else", OperatorKind::Else),
];

/// Immutable lookup table for operators and keywords.
///
/// Built once (typically per [`Scanner`](crate::scanner::Scanner)) and
/// read-only afterwards. Exact and reverse lookups go through hash maps;
/// the prefix queries scan the entry list.
pub struct OperatorTable {
    exact: FxHashMap<&'static str, OperatorKind>,
    canonical: FxHashMap<OperatorKind, &'static str>,
}

impl OperatorTable {
    /// Builds the table from the static entry list.
    pub fn new() -> Self {
        let mut exact = FxHashMap::default();
        let mut canonical = FxHashMap::default();
        for &(lexeme, kind) in ENTRIES {
            exact.insert(lexeme, kind);
            canonical.insert(kind, lexeme);
        }
        Self { exact, canonical }
    }

    /// True if some table entry starts with `text` (including `text`
    /// itself). The operator state keeps extending its lexeme while this
    /// holds.
    pub fn is_prefix_of_any(&self, text: &str) -> bool {
        ENTRIES.iter().any(|(lexeme, _)| lexeme.starts_with(text))
    }

    /// True if exactly one table entry starts with `text`. At that point
    /// the lexeme cannot be extended into anything else, so the operator
    /// state emits immediately (eager longest match).
    pub fn is_unique_match(&self, text: &str) -> bool {
        ENTRIES
            .iter()
            .filter(|(lexeme, _)| lexeme.starts_with(text))
            .count()
            == 1
    }

    /// Exact membership test.
    pub fn is_token(&self, text: &str) -> bool {
        self.exact.contains_key(text)
    }

    /// Looks up the tag for an exact lexeme.
    pub fn kind_of(&self, text: &str) -> Option<OperatorKind> {
        self.exact.get(text).copied()
    }

    /// Reverse lookup: the canonical spelling of a tag.
    pub fn lexeme_of(&self, kind: OperatorKind) -> Option<&'static str> {
        self.canonical.get(&kind).copied()
    }

    /// Builds an operator token from an exact lexeme.
    pub fn token_from(&self, text: &str) -> Option<Token> {
        let (lexeme, kind) = self.exact.get_key_value(text)?;
        Some(Token::Operator {
            kind: *kind,
            lexeme,
        })
    }

    /// Builds an operator token from a resolved tag.
    pub fn token_for(&self, kind: OperatorKind) -> Option<Token> {
        self.lexeme_of(kind).map(|lexeme| Token::Operator { kind, lexeme })
    }
}

impl Default for OperatorTable {
    fn default() -> Self {
        Self::new()
    }
}
