//! Operator state.

use super::Step;
use crate::error::{LexError, LexErrorKind, LexResult};
use crate::table::OperatorTable;

/// Handles one character while inside an operator lexeme.
///
/// Longest-match recognition by prefix narrowing: the candidate lexeme
/// grows while more than one table entry still starts with it. When the
/// candidate narrows to exactly one entry, that operator is emitted and
/// the terminating character was consumed. When extending would leave no
/// entry, the current lexeme is emitted (if it is an entry itself) and
/// the character comes back as a retry.
pub(crate) fn handle(table: &OperatorTable, c: char, lexeme: String) -> LexResult<Step> {
    if !table.is_prefix_of_any(&lexeme) {
        return Err(LexError::new(
            LexErrorKind::InvalidOperator,
            format!("operator beginning with '{lexeme}' is invalid"),
        ));
    }

    let mut candidate = lexeme.clone();
    candidate.push(c);

    if table.is_unique_match(&candidate) {
        // A unique prefix is always a full entry in this table; no entry
        // is a strict prefix of exactly one other.
        let token = table.token_from(&candidate).ok_or_else(|| {
            LexError::new(
                LexErrorKind::InvalidOperator,
                format!("operator '{candidate}' is invalid"),
            )
        })?;
        return Ok(Step::emit(token));
    }

    if !table.is_prefix_of_any(&candidate) {
        // The candidate is dead; fall back to the longest entry we have.
        let token = table.token_from(&lexeme).ok_or_else(|| {
            LexError::new(
                LexErrorKind::InvalidOperator,
                format!("operator '{lexeme}' is invalid"),
            )
        })?;
        return Ok(Step::emit_and_retry(token, c));
    }

    Ok(Step::advance(super::LexerState::Operator, candidate))
}
