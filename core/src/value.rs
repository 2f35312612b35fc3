//! Typed, read-only view over one flag lookup.
//!
//! A [`Value`] wraps the raw payload recorded for a flag (or the absent
//! state when the flag was never seen) and converts it on demand into
//! booleans, signed integers, strings, durations, datetimes, and sequences
//! thereof. Every conversion is a pure function of the value's state plus
//! the caller-supplied default or options; nothing here mutates the table
//! the value came from.
//!
//! Each accessor comes in two forms: an error-returning form, and a
//! `must_*` form that discards the error and yields the type's zero value
//! instead. Choosing `must_*` means a genuine parse error cannot be told
//! apart from an unset flag; that information loss is the documented price
//! of skipping the check.

use std::time::Duration;

use chrono::NaiveDateTime;

use crate::convert::{parse_bool, parse_datetime, parse_duration, parse_int};
use crate::{SliceOptions, ValueError};

/// A read-only view over one flag lookup result.
///
/// Obtained from [`ArgTable::get`](crate::ArgTable::get) /
/// [`Args::fetch`](crate::Args::fetch), or built directly from a literal
/// payload with [`Value::new`]. The default value is the absent state: no
/// key, no payload.
///
/// # Examples
///
/// ```
/// use argview_core::Value;
///
/// assert_eq!(Value::new("123").i64(None), Ok(123));
/// assert_eq!(Value::new("on").string(None).unwrap(), "on");
///
/// // Absent or empty values fall back to the supplied default.
/// assert_eq!(Value::default().i64(Some(7)), Ok(7));
///
/// // Without a default, extraction reports the failure as a value.
/// assert!(Value::default().i64(None).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Value {
    raw_key: String,
    payload: String,
}

impl Value {
    /// Creates a value from a literal payload, with no originating flag key.
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            raw_key: String::new(),
            payload: payload.into(),
        }
    }

    /// Creates a value carrying the raw flag key it was looked up under.
    pub(crate) fn keyed(raw_key: String, payload: String) -> Self {
        Self { raw_key, payload }
    }

    /// The originating normalized key (leading dashes stripped), or `""`
    /// when the value was built from a literal payload or an absent lookup.
    pub fn key(&self) -> &str {
        self.raw_key.trim_start_matches('-')
    }

    /// The originating flag key exactly as written, dashes included.
    pub fn raw_key(&self) -> &str {
        &self.raw_key
    }

    /// The raw payload text, possibly empty.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Returns whether this value came from a recorded flag or carries a
    /// literal payload, as opposed to the absent state.
    pub fn is_present(&self) -> bool {
        !self.raw_key.is_empty() || !self.payload.is_empty()
    }

    /// Shared default/error policy for scalar extraction.
    fn extract<T>(
        &self,
        default: Option<T>,
        parse: impl FnOnce(&str) -> Result<T, ValueError>,
    ) -> Result<T, ValueError> {
        if self.payload.is_empty() {
            return match default {
                Some(value) => Ok(value),
                None if self.raw_key.is_empty() => Err(ValueError::Empty),
                None => Err(ValueError::Missing(self.key().to_string())),
            };
        }
        parse(&self.payload)
    }

    /// Shared policy for sequence extraction: empty payload resolves through
    /// the options default, a non-empty payload is split and parsed segment
    /// by segment. Empty segments contribute `empty_segment` when one is
    /// given and are skipped otherwise; any segment failure aborts with no
    /// partial result.
    fn extract_slice<T: Clone>(
        &self,
        opts: SliceOptions<T>,
        empty_segment: Option<T>,
        parse: impl Fn(&str) -> Result<T, ValueError>,
    ) -> Result<Vec<T>, ValueError> {
        self.extract(opts.default, |payload| {
            let mut out = Vec::new();
            for segment in payload.split(opts.delimiter.as_str()) {
                if segment.is_empty() {
                    if let Some(fill) = &empty_segment {
                        out.push(fill.clone());
                    }
                    continue;
                }
                out.push(parse(segment)?);
            }
            Ok(out)
        })
    }

    /// Returns the payload as a string.
    ///
    /// # Examples
    ///
    /// ```
    /// use argview_core::Value;
    ///
    /// assert_eq!(Value::new("text").string(None).unwrap(), "text");
    /// assert_eq!(Value::new("").string(Some("fallback")).unwrap(), "fallback");
    /// assert!(Value::new("").string(None).is_err());
    /// ```
    pub fn string(&self, default: Option<&str>) -> Result<String, ValueError> {
        self.extract(default.map(str::to_string), |payload| {
            Ok(payload.to_string())
        })
    }

    /// Like [`string`](Self::string), but yields `""` on any failure.
    pub fn must_string(&self, default: Option<&str>) -> String {
        self.string(default).unwrap_or_default()
    }

    /// Splits the payload into string segments.
    ///
    /// Strings need no parsing, so segments — including empty ones — are
    /// returned exactly as split; the only error path is a missing payload
    /// with no default sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use argview_core::{SliceOptions, Value};
    ///
    /// let slice = Value::new("A,B,C,D").string_slice(SliceOptions::new()).unwrap();
    /// assert_eq!(slice, vec!["A", "B", "C", "D"]);
    ///
    /// let slice = Value::new("A,,B").string_slice(SliceOptions::new()).unwrap();
    /// assert_eq!(slice, vec!["A", "", "B"]);
    /// ```
    pub fn string_slice(&self, opts: SliceOptions<String>) -> Result<Vec<String>, ValueError> {
        self.extract(opts.default, |payload| {
            Ok(payload
                .split(opts.delimiter.as_str())
                .map(str::to_string)
                .collect())
        })
    }

    /// Like [`string_slice`](Self::string_slice), but yields an empty vector
    /// on any failure.
    pub fn must_string_slice(&self, opts: SliceOptions<String>) -> Vec<String> {
        self.string_slice(opts).unwrap_or_default()
    }

    /// Returns the payload as a boolean.
    ///
    /// Accepts `1`/`0` and case-insensitive `t`/`f`/`true`/`false`. A bare
    /// flag (empty payload, no default) reads as `true`: presence means
    /// enabled.
    ///
    /// # Examples
    ///
    /// ```
    /// use argview_core::Value;
    ///
    /// assert_eq!(Value::new("false").bool(None), Ok(false));
    /// assert_eq!(Value::new("").bool(None), Ok(true));
    /// assert_eq!(Value::new("").bool(Some(false)), Ok(false));
    /// assert!(Value::new("abc").bool(None).is_err());
    /// ```
    pub fn bool(&self, default: Option<bool>) -> Result<bool, ValueError> {
        self.extract(default.or(Some(true)), parse_bool)
    }

    /// Like [`bool`](Self::bool), but yields `false` on any failure.
    pub fn must_bool(&self, default: Option<bool>) -> bool {
        self.bool(default).unwrap_or_default()
    }

    /// Splits the payload into booleans.
    ///
    /// Empty segments read as `true`, mirroring the bare-flag rule for the
    /// scalar accessor.
    pub fn bool_slice(&self, opts: SliceOptions<bool>) -> Result<Vec<bool>, ValueError> {
        self.extract_slice(opts, Some(true), parse_bool)
    }

    /// Like [`bool_slice`](Self::bool_slice), but yields an empty vector on
    /// any failure.
    pub fn must_bool_slice(&self, opts: SliceOptions<bool>) -> Vec<bool> {
        self.bool_slice(opts).unwrap_or_default()
    }

    /// Returns the payload as an `i8`. Accepts decimal or `0x`/`0o`/`0b`
    /// forms; out-of-range values report an 8-bit overflow.
    pub fn i8(&self, default: Option<i8>) -> Result<i8, ValueError> {
        self.extract(default, |token| parse_int(token, 8))
    }

    /// Like [`i8`](Self::i8), but yields `0` on any failure.
    pub fn must_i8(&self, default: Option<i8>) -> i8 {
        self.i8(default).unwrap_or_default()
    }

    /// Splits the payload into `i8` segments.
    pub fn i8_slice(&self, opts: SliceOptions<i8>) -> Result<Vec<i8>, ValueError> {
        self.extract_slice(opts, None, |token| parse_int(token, 8))
    }

    /// Like [`i8_slice`](Self::i8_slice), but yields an empty vector on any
    /// failure.
    pub fn must_i8_slice(&self, opts: SliceOptions<i8>) -> Vec<i8> {
        self.i8_slice(opts).unwrap_or_default()
    }

    /// Returns the payload as an `i16`.
    pub fn i16(&self, default: Option<i16>) -> Result<i16, ValueError> {
        self.extract(default, |token| parse_int(token, 16))
    }

    /// Like [`i16`](Self::i16), but yields `0` on any failure.
    pub fn must_i16(&self, default: Option<i16>) -> i16 {
        self.i16(default).unwrap_or_default()
    }

    /// Splits the payload into `i16` segments.
    pub fn i16_slice(&self, opts: SliceOptions<i16>) -> Result<Vec<i16>, ValueError> {
        self.extract_slice(opts, None, |token| parse_int(token, 16))
    }

    /// Like [`i16_slice`](Self::i16_slice), but yields an empty vector on
    /// any failure.
    pub fn must_i16_slice(&self, opts: SliceOptions<i16>) -> Vec<i16> {
        self.i16_slice(opts).unwrap_or_default()
    }

    /// Returns the payload as an `i32`.
    pub fn i32(&self, default: Option<i32>) -> Result<i32, ValueError> {
        self.extract(default, |token| parse_int(token, 32))
    }

    /// Like [`i32`](Self::i32), but yields `0` on any failure.
    pub fn must_i32(&self, default: Option<i32>) -> i32 {
        self.i32(default).unwrap_or_default()
    }

    /// Splits the payload into `i32` segments.
    pub fn i32_slice(&self, opts: SliceOptions<i32>) -> Result<Vec<i32>, ValueError> {
        self.extract_slice(opts, None, |token| parse_int(token, 32))
    }

    /// Like [`i32_slice`](Self::i32_slice), but yields an empty vector on
    /// any failure.
    pub fn must_i32_slice(&self, opts: SliceOptions<i32>) -> Vec<i32> {
        self.i32_slice(opts).unwrap_or_default()
    }

    /// Returns the payload as an `i64`.
    ///
    /// # Examples
    ///
    /// ```
    /// use argview_core::Value;
    ///
    /// assert_eq!(Value::new("123").i64(None), Ok(123));
    /// assert_eq!(Value::new("0xff").i64(None), Ok(255));
    /// assert_eq!(Value::new("").i64(Some(7)), Ok(7));
    /// assert!(Value::new("a").i64(None).is_err());
    /// ```
    pub fn i64(&self, default: Option<i64>) -> Result<i64, ValueError> {
        self.extract(default, |token| parse_int(token, 64))
    }

    /// Like [`i64`](Self::i64), but yields `0` on any failure.
    pub fn must_i64(&self, default: Option<i64>) -> i64 {
        self.i64(default).unwrap_or_default()
    }

    /// Splits the payload into `i64` segments.
    ///
    /// # Examples
    ///
    /// ```
    /// use argview_core::{SliceOptions, Value};
    ///
    /// let slice = Value::new("1,2,3").i64_slice(SliceOptions::new()).unwrap();
    /// assert_eq!(slice, vec![1, 2, 3]);
    ///
    /// // One bad segment fails the whole slice.
    /// assert!(Value::new("0,7,a,b").i64_slice(SliceOptions::new()).is_err());
    /// ```
    pub fn i64_slice(&self, opts: SliceOptions<i64>) -> Result<Vec<i64>, ValueError> {
        self.extract_slice(opts, None, |token| parse_int(token, 64))
    }

    /// Like [`i64_slice`](Self::i64_slice), but yields an empty vector on
    /// any failure.
    pub fn must_i64_slice(&self, opts: SliceOptions<i64>) -> Vec<i64> {
        self.i64_slice(opts).unwrap_or_default()
    }

    /// Returns the payload as a [`Duration`], parsed from a magnitude+unit
    /// grammar such as `3s`, `1m`, or `1h 30m`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use argview_core::Value;
    ///
    /// assert_eq!(Value::new("3s").duration(None), Ok(Duration::from_secs(3)));
    /// assert_eq!(
    ///     Value::new("").duration(Some(Duration::from_secs(1))),
    ///     Ok(Duration::from_secs(1))
    /// );
    /// ```
    pub fn duration(&self, default: Option<Duration>) -> Result<Duration, ValueError> {
        self.extract(default, parse_duration)
    }

    /// Like [`duration`](Self::duration), but yields a zero duration on any
    /// failure.
    pub fn must_duration(&self, default: Option<Duration>) -> Duration {
        self.duration(default).unwrap_or_default()
    }

    /// Splits the payload into [`Duration`] segments.
    pub fn duration_slice(&self, opts: SliceOptions<Duration>) -> Result<Vec<Duration>, ValueError> {
        self.extract_slice(opts, None, parse_duration)
    }

    /// Like [`duration_slice`](Self::duration_slice), but yields an empty
    /// vector on any failure.
    pub fn must_duration_slice(&self, opts: SliceOptions<Duration>) -> Vec<Duration> {
        self.duration_slice(opts).unwrap_or_default()
    }

    /// Returns the payload as a [`NaiveDateTime`] parsed against a
    /// caller-supplied strftime format.
    ///
    /// The format is a required parameter — there is no universal default
    /// datetime layout.
    ///
    /// # Examples
    ///
    /// ```
    /// use argview_core::Value;
    ///
    /// let dt = Value::new("2026-02-07 10:30")
    ///     .datetime("%Y-%m-%d %H:%M", None)
    ///     .unwrap();
    /// assert_eq!(dt.format("%H:%M").to_string(), "10:30");
    /// ```
    pub fn datetime(
        &self,
        format: &str,
        default: Option<NaiveDateTime>,
    ) -> Result<NaiveDateTime, ValueError> {
        self.extract(default, |token| parse_datetime(token, format))
    }

    /// Like [`datetime`](Self::datetime), but yields the epoch datetime on
    /// any failure.
    pub fn must_datetime(&self, format: &str, default: Option<NaiveDateTime>) -> NaiveDateTime {
        self.datetime(format, default).unwrap_or_default()
    }

    /// Splits the payload into [`NaiveDateTime`] segments, each parsed
    /// against the same strftime format.
    pub fn datetime_slice(
        &self,
        format: &str,
        opts: SliceOptions<NaiveDateTime>,
    ) -> Result<Vec<NaiveDateTime>, ValueError> {
        self.extract_slice(opts, None, |token| parse_datetime(token, format))
    }

    /// Like [`datetime_slice`](Self::datetime_slice), but yields an empty
    /// vector on any failure.
    pub fn must_datetime_slice(
        &self,
        format: &str,
        opts: SliceOptions<NaiveDateTime>,
    ) -> Vec<NaiveDateTime> {
        self.datetime_slice(format, opts).unwrap_or_default()
    }
}
