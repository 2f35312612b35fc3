//! Typed, lazily scanned access to command-line flag values.
//!
//! This crate scans a raw argument vector for flag-style tokens and exposes
//! each flag's payload through typed accessors:
//!
//! - [`Args`] — context owning an argument list, scanned into a flag table
//!   at most once per generation.
//! - [`ArgTable`] / [`ArgEntry`] — the normalized-key → record mapping
//!   produced by [`scan_args`].
//! - [`Value`] — a read-only view over one lookup, with scalar and sequence
//!   accessors for strings, booleans, signed integers (8/16/32/64-bit),
//!   durations, and datetimes, each in an error-returning and a `must_*`
//!   error-suppressing form.
//! - [`SliceOptions`] — delimiter and default-sequence configuration for
//!   sequence accessors.
//! - [`ValueError`] — the recoverable error taxonomy.
//!
//! Unknown flags are silently absent, not errors; scanning itself cannot
//! fail. Both `--key value` and `--key=value` forms are accepted, and a bare
//! `--key` reads as boolean `true`.
//!
//! # Example
//!
//! ```
//! use argview_core::{Args, SliceOptions};
//!
//! let args = Args::new(
//!     ["prog", "--retries", "3", "--verbose", "--hosts=a,b,c"]
//!         .iter()
//!         .map(|s| s.to_string())
//!         .collect(),
//! );
//!
//! assert_eq!(args.fetch("retries").i32(None), Ok(3));
//! assert_eq!(args.fetch("verbose").bool(None), Ok(true));
//! assert_eq!(
//!     args.fetch("hosts").string_slice(SliceOptions::new()).unwrap(),
//!     vec!["a", "b", "c"]
//! );
//! assert_eq!(args.fetch("timeout").i32(Some(30)), Ok(30));
//! ```

mod args;
mod convert;
mod error;
mod options;
mod scan;
mod value;

pub use args::Args;
pub use error::ValueError;
pub use options::SliceOptions;
pub use scan::{ArgEntry, ArgTable, scan_args};
pub use value::Value;
