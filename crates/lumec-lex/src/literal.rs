//! Literal converters.
//!
//! Integer-base decoding with overflow detection, and escape-sequence
//! resolution for string and character literal bodies. Both report the
//! offending character via a column offset so diagnostics can point at it.

use crate::error::{LexError, LexErrorKind, LexResult};

/// Digit alphabet; the first `base` entries are the digits of that base.
const DIGITS: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F',
];

fn digit_value(c: char, base: u64) -> Option<u64> {
    let upper = c.to_ascii_uppercase();
    DIGITS[..base as usize]
        .iter()
        .position(|&d| d == upper)
        .map(|i| i as u64)
}

/// Decodes an integer literal into an unsigned 64-bit value.
///
/// The lexeme may carry a two-character base prefix (`0x`, `0o`, `0b`) and
/// underscores as digit separators. Decimal literals longer than one
/// character may not start with `0`; prefixed literals must have at least
/// one digit after the prefix. Accumulation is overflow-checked at every
/// step, so a literal past `u64::MAX` fails instead of wrapping.
///
/// On an invalid digit the error's column offset points at that character
/// within the literal (starting at 0 for decimal, 2 for prefixed bases,
/// counting skipped underscores).
pub fn decode_integer(lexeme: &str) -> LexResult<u64> {
    let (base, digits, prefix_len) = if let Some(rest) = lexeme.strip_prefix("0x") {
        (16, rest, 2)
    } else if let Some(rest) = lexeme.strip_prefix("0o") {
        (8, rest, 2)
    } else if let Some(rest) = lexeme.strip_prefix("0b") {
        (2, rest, 2)
    } else {
        (10, lexeme, 0)
    };

    if base == 10 && digits.len() > 1 && digits.starts_with('0') {
        return Err(LexError::new(
            LexErrorKind::InvalidLeadingZero,
            "decimal literals cannot start with a leading zero; use the '0o' prefix for octal literals",
        ));
    }

    if digits.is_empty() {
        // Caret lands just past the prefix, where the digits should be.
        return Err(LexError::new(
            LexErrorKind::IntegerPrefixWithoutDigits,
            format!("expected digits after the '{}' prefix", &lexeme[..prefix_len]),
        )
        .with_offset(prefix_len));
    }

    let mut value: u64 = 0;
    for (index, c) in digits.chars().enumerate() {
        if c == '_' {
            continue;
        }
        let overflow = || {
            LexError::new(
                LexErrorKind::IntegerOverflow,
                format!("integer literal '{lexeme}' exceeds the range of a 64-bit value"),
            )
        };
        value = value.checked_mul(base).ok_or_else(overflow)?;
        let digit = digit_value(c, base).ok_or_else(|| {
            LexError::new(
                LexErrorKind::InvalidIntegerLiteral,
                format!("invalid character '{c}' in integer literal"),
            )
            .with_offset(prefix_len + index)
        })?;
        value = value.checked_add(digit).ok_or_else(overflow)?;
    }

    Ok(value)
}

/// Resolves backslash escapes in a literal body (quotes already stripped).
///
/// Recognized escapes: `\n`, `\t`, `\r`, `\"`, `\'`, `\\`. Anything else
/// after a backslash fails with the offset of the bad character; a
/// backslash left dangling at the end of the body fails as an unterminated
/// escape.
pub fn resolve_escapes(raw: &str) -> LexResult<String> {
    let mut resolved = String::with_capacity(raw.len());
    let mut escaped = false;
    for (index, c) in raw.chars().enumerate() {
        if escaped {
            escaped = false;
            let substitute = match c {
                'n' => '\n',
                't' => '\t',
                'r' => '\r',
                '"' => '"',
                '\'' => '\'',
                '\\' => '\\',
                _ => {
                    return Err(LexError::new(
                        LexErrorKind::InvalidEscapeCharacter,
                        format!("invalid escape sequence '\\{c}'"),
                    )
                    .with_offset(index));
                }
            };
            resolved.push(substitute);
        } else if c == '\\' {
            escaped = true;
        } else {
            resolved.push(c);
        }
    }
    if escaped {
        return Err(LexError::new(
            LexErrorKind::InvalidEscapeCharacter,
            "unterminated escape sequence at end of literal",
        )
        .with_offset(raw.chars().count()));
    }
    Ok(resolved)
}
