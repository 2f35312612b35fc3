//! Lazily scanned argument context.
//!
//! [`Args`] owns one argument list and scans it into an [`ArgTable`] at most
//! once, on first lookup. Concurrent first-time callers race to a single
//! scan; every caller observes the one completed table. Replacing the
//! argument list starts a fresh generation, so the next lookup rescans
//! exactly once.
//!
//! This is an explicit context object rather than hidden process-wide
//! state: tests and embedders construct as many independent instances as
//! they need.

use std::sync::{OnceLock, RwLock};

use tracing::debug;

use crate::scan::{ArgTable, scan_args};
use crate::Value;

/// One argument-list generation and its lazily built table.
struct Generation {
    argv: Vec<String>,
    table: OnceLock<ArgTable>,
}

impl Generation {
    fn new(argv: Vec<String>) -> Self {
        Self {
            argv,
            table: OnceLock::new(),
        }
    }
}

/// Argument context: an argument list plus its scan-once flag table.
///
/// # Examples
///
/// ```
/// use argview_core::Args;
///
/// let args = Args::new(
///     ["prog", "--config", "~/config.yaml", "--verbose"]
///         .iter()
///         .map(|s| s.to_string())
///         .collect(),
/// );
///
/// assert_eq!(args.fetch("config").string(None).unwrap(), "~/config.yaml");
/// assert_eq!(args.fetch("verbose").bool(None), Ok(true));
/// assert!(!args.fetch("missing").is_present());
/// ```
pub struct Args {
    state: RwLock<Generation>,
}

impl Args {
    /// Creates a context over an explicitly supplied argument list.
    ///
    /// Index 0 is treated as the program name and excluded from scanning.
    pub fn new(argv: Vec<String>) -> Self {
        Self {
            state: RwLock::new(Generation::new(argv)),
        }
    }

    /// Creates a context over the process's own invocation arguments.
    pub fn from_env() -> Self {
        Self::new(std::env::args().collect())
    }

    /// Looks up a flag by normalized key (no leading dashes).
    ///
    /// The first call on a generation scans the argument list; the scan runs
    /// at most once even under concurrent first-time callers, and every
    /// caller sees the completed table. Absent keys yield a [`Value`] in the
    /// absent state, never an error.
    pub fn fetch(&self, key: &str) -> Value {
        // A poisoned lock means another thread panicked mid-replace;
        // propagating that panic is the only sound continuation.
        let state = self.state.read().expect("argument state lock poisoned");
        let table = state.table.get_or_init(|| {
            debug!(args = state.argv.len(), "scanning argument list");
            scan_args(&state.argv)
        });
        table.get(key)
    }

    /// Replaces the argument list wholesale.
    ///
    /// Invalidates any previously built table: the next [`fetch`](Self::fetch)
    /// triggers exactly one fresh scan of the new list.
    pub fn replace(&self, argv: Vec<String>) {
        let mut state = self.state.write().expect("argument state lock poisoned");
        debug!(args = argv.len(), "replacing argument list");
        *state = Generation::new(argv);
    }

    /// Runs a closure against the current generation's table, scanning
    /// first if needed.
    pub fn with_table<R>(&self, f: impl FnOnce(&ArgTable) -> R) -> R {
        let state = self.state.read().expect("argument state lock poisoned");
        f(state.table.get_or_init(|| scan_args(&state.argv)))
    }
}
