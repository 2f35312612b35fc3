//! Argument-vector scanner.
//!
//! Converts an ordered argument list into an [`ArgTable`]: a map from
//! normalized flag key (leading dashes stripped) to the raw key and payload
//! that were seen on the command line. Scanning is a single left-to-right
//! pass and cannot fail — any input list, however malformed, produces some
//! table (possibly empty).
//!
//! Both `--key value` and `--key=value` forms are recognized. A token that
//! does not start with `-` and does not directly follow a bare flag is noise
//! and is skipped; a token that does start with `-` is never consumed as
//! another flag's value, which is what makes two adjacent bare flags each
//! record an empty payload.

use std::collections::HashMap;
use std::collections::hash_map;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Value;

/// One recognized flag: the key exactly as it appeared (dashes included) and
/// its raw payload text, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgEntry {
    /// Flag key as written, e.g. `--verbose` or `-v`.
    pub raw_key: String,
    /// Raw payload text; empty for a bare flag or a `--key=` form.
    pub payload: String,
}

/// Mapping from normalized flag key to the [`ArgEntry`] recorded for it.
///
/// Built once per argument list by [`scan_args`] and read-only thereafter.
/// Lookups never fail: an unknown key yields a [`Value`] in the absent
/// state, not an error.
///
/// # Examples
///
/// ```
/// use argview_core::scan_args;
///
/// let argv: Vec<String> = ["prog", "--port", "8080", "--verbose"]
///     .iter()
///     .map(|s| s.to_string())
///     .collect();
/// let table = scan_args(&argv);
///
/// assert_eq!(table.len(), 2);
/// assert!(table.contains("port"));
/// assert_eq!(table.get("port").payload(), "8080");
/// assert_eq!(table.get("verbose").payload(), "");
/// assert!(!table.get("missing").is_present());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgTable {
    entries: HashMap<String, ArgEntry>,
}

impl ArgTable {
    /// Looks up a flag by normalized key (no leading dashes).
    ///
    /// Always returns a [`Value`]; absence is represented by the value's
    /// absent state rather than an error.
    pub fn get(&self, key: &str) -> Value {
        match self.entries.get(key) {
            Some(entry) => Value::keyed(entry.raw_key.clone(), entry.payload.clone()),
            None => Value::default(),
        }
    }

    /// Returns whether a flag with this normalized key was recorded.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of distinct flags recorded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the table holds no flags at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(normalized key, entry)` pairs in arbitrary order.
    pub fn iter(&self) -> hash_map::Iter<'_, String, ArgEntry> {
        self.entries.iter()
    }
}

/// Scans an argument list into an [`ArgTable`].
///
/// Index 0 is conventionally the program name and is excluded from the
/// scan. Later occurrences of the same key overwrite earlier ones.
///
/// # Examples
///
/// ```
/// use argview_core::scan_args;
///
/// let argv: Vec<String> = ["prog", "--mode=fast", "noise", "--retries", "3"]
///     .iter()
///     .map(|s| s.to_string())
///     .collect();
/// let table = scan_args(&argv);
///
/// assert_eq!(table.get("mode").payload(), "fast");
/// assert_eq!(table.get("retries").payload(), "3");
/// ```
pub fn scan_args(argv: &[String]) -> ArgTable {
    let mut entries = HashMap::new();
    let mut idx = 1;

    while idx < argv.len() {
        let token = &argv[idx];
        idx += 1;

        if !token.starts_with('-') {
            debug!(token = %token, "skipping non-flag token");
            continue;
        }

        // Only the first `=` in the key-bearing token splits key from payload.
        let (raw_key, payload) = match token.split_once('=') {
            Some((key, payload)) => (key.to_string(), payload.to_string()),
            None => match argv.get(idx) {
                // A `-`-prefixed successor is a candidate key, never a payload.
                Some(next) if !next.starts_with('-') => {
                    idx += 1;
                    (token.clone(), next.clone())
                }
                _ => (token.clone(), String::new()),
            },
        };

        let key = raw_key.trim_start_matches('-');
        if key.is_empty() {
            debug!(token = %token, "skipping flag token with empty name");
            continue;
        }

        debug!(key = %key, raw_key = %raw_key, payload = %payload, "recorded flag");
        entries.insert(
            key.to_string(),
            ArgEntry {
                raw_key,
                payload,
            },
        );
    }

    ArgTable { entries }
}
