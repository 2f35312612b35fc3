//! Typed flag access example.
//!
//! Demonstrates looking up flags through an `Args` context and extracting
//! scalars, defaults, and delimited sequences.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p argview-demos --example typed_access -- \
//!     --retries 3 --verbose --hosts=a,b,c --wait 3s
//! ```
//!
//! Run without arguments to see the injected sample list instead.

use std::time::Duration;

use argview_core::{Args, SliceOptions};

fn main() {
    let args = if std::env::args().len() > 1 {
        Args::from_env()
    } else {
        // Injected sample list, same shape as a real invocation
        Args::new(
            [
                "typed_access",
                "--retries",
                "3",
                "--verbose",
                "--hosts=a,b,c",
                "--wait",
                "3s",
                "--window",
                "2026-02-07 10:30",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        )
    };

    // Scalars with and without defaults
    println!("retries: {:?}", args.fetch("retries").i32(None));
    println!("timeout (defaulted): {:?}", args.fetch("timeout").i32(Some(30)));

    // A bare flag reads as boolean true
    println!("verbose: {:?}", args.fetch("verbose").bool(None));

    // Sequences with the default delimiter, and a default sequence for an
    // absent flag
    println!(
        "hosts: {:?}",
        args.fetch("hosts").string_slice(SliceOptions::new())
    );
    println!(
        "fallback ports: {:?}",
        args.fetch("ports")
            .i64_slice(SliceOptions::new().with_default(vec![80, 443]))
    );

    // Durations and datetimes
    println!(
        "wait: {:?}",
        args.fetch("wait").duration(Some(Duration::from_secs(1)))
    );
    println!(
        "window: {:?}",
        args.fetch("window").datetime("%Y-%m-%d %H:%M", None)
    );

    // must_* forms trade error detail for a zero-value fallback
    println!("missing (must): {}", args.fetch("missing").must_i64(None));
}
