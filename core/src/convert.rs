//! Scalar parsers shared by every typed accessor.
//!
//! Each parser turns one payload segment into a typed value or a
//! [`ValueError`] describing exactly what was wrong with the text. Integer
//! parsing is a single parametric function instantiated per width rather
//! than one hand-written parser per width.

use std::num::IntErrorKind;
use std::time::Duration;

use chrono::NaiveDateTime;

use crate::ValueError;

/// Parses a boolean token.
///
/// Accepts `1`/`0` and case-insensitive `t`/`f`/`true`/`false`.
pub(crate) fn parse_bool(token: &str) -> Result<bool, ValueError> {
    if token == "1" || token.eq_ignore_ascii_case("t") || token.eq_ignore_ascii_case("true") {
        return Ok(true);
    }
    if token == "0" || token.eq_ignore_ascii_case("f") || token.eq_ignore_ascii_case("false") {
        return Ok(false);
    }
    Err(ValueError::InvalidBool(token.to_string()))
}

/// Parses a signed integer of any width up to 64 bits.
///
/// Accepts an optional sign, then a `0x`/`0o`/`0b` radix prefix or plain
/// decimal digits. The text is first parsed through `i64`, then narrowed to
/// the target type; either step failing on range produces an
/// [`ValueError::IntOverflow`] naming `bits`.
pub(crate) fn parse_int<T: TryFrom<i64>>(token: &str, bits: u32) -> Result<T, ValueError> {
    let (sign, body) = match token.as_bytes().first() {
        Some(b'-') => ("-", &token[1..]),
        Some(b'+') => ("", &token[1..]),
        _ => ("", token),
    };
    let (radix, digits) = match body.get(..2) {
        Some("0x" | "0X") => (16, &body[2..]),
        Some("0o" | "0O") => (8, &body[2..]),
        Some("0b" | "0B") => (2, &body[2..]),
        _ => (10, body),
    };
    if digits.is_empty() {
        return Err(ValueError::InvalidInt(token.to_string()));
    }

    let wide = i64::from_str_radix(&format!("{sign}{digits}"), radix).map_err(|err| {
        match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ValueError::IntOverflow {
                token: token.to_string(),
                bits: 64,
            },
            _ => ValueError::InvalidInt(token.to_string()),
        }
    })?;

    T::try_from(wide).map_err(|_| ValueError::IntOverflow {
        token: token.to_string(),
        bits,
    })
}

/// Parses a magnitude+unit duration such as `3s`, `1m`, or `1h 30m`.
pub(crate) fn parse_duration(token: &str) -> Result<Duration, ValueError> {
    humantime::parse_duration(token).map_err(|err| ValueError::InvalidDuration {
        token: token.to_string(),
        reason: err.to_string(),
    })
}

/// Parses a datetime against a caller-supplied strftime format.
pub(crate) fn parse_datetime(token: &str, format: &str) -> Result<NaiveDateTime, ValueError> {
    NaiveDateTime::parse_from_str(token, format).map_err(|err| ValueError::InvalidDateTime {
        token: token.to_string(),
        format: format.to_string(),
        reason: err.to_string(),
    })
}
