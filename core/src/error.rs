//! Extraction and conversion errors.
//!
//! Every error here is a recoverable value returned from a typed accessor;
//! nothing in this crate panics on malformed input. The `must_*` accessor
//! variants discard these errors entirely and fall back to the type's zero
//! value.

use thiserror::Error;

/// Errors produced by typed extraction from a [`Value`](crate::Value).
///
/// The `Display` impl provides a human-readable message naming the offending
/// token and, where relevant, the flag or target type involved.
///
/// # Examples
///
/// ```
/// use argview_core::{Value, ValueError};
///
/// let err = Value::new("abc").i32(None).unwrap_err();
/// assert_eq!(err, ValueError::InvalidInt("abc".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// The value was built from a literal payload (no flag key) and the
    /// payload is empty, with no default supplied.
    #[error("invalid value: empty")]
    Empty,
    /// The flag was looked up by key but carried no payload, and no default
    /// was supplied. Carries the normalized key (leading dashes stripped).
    #[error("no value supplied for flag `{0}`")]
    Missing(String),
    /// The payload is not a recognized boolean token.
    #[error("invalid boolean `{0}`")]
    InvalidBool(String),
    /// The payload is not a valid integer in any supported radix.
    #[error("invalid integer `{0}`")]
    InvalidInt(String),
    /// The payload is a well-formed integer but exceeds the target width.
    #[error("integer `{token}` overflows the {bits}-bit signed range")]
    IntOverflow {
        /// The offending payload text.
        token: String,
        /// Bit width of the requested integer type.
        bits: u32,
    },
    /// The payload is not a valid duration (e.g., `3s`, `1m`, `1h 30m`).
    #[error("invalid duration `{token}`: {reason}")]
    InvalidDuration {
        /// The offending payload text.
        token: String,
        /// Parser-supplied failure detail.
        reason: String,
    },
    /// The payload does not match the caller-supplied datetime format.
    #[error("datetime `{token}` does not match format `{format}`: {reason}")]
    InvalidDateTime {
        /// The offending payload text.
        token: String,
        /// The strftime format the payload was parsed against.
        format: String,
        /// Parser-supplied failure detail.
        reason: String,
    },
}
