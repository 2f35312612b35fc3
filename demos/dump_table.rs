//! Flag table dump example.
//!
//! Scans an argument list and prints the resulting flag table as pretty
//! JSON — useful for inspecting exactly how a command line was tokenized.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p argview-demos --example dump_table -- \
//!     --mode=fast noise --retries 3 --verbose
//! ```

use argview_core::scan_args;

fn main() {
    let argv: Vec<String> = std::env::args().collect();
    let argv = if argv.len() > 1 {
        argv
    } else {
        ["dump_table", "--mode=fast", "noise", "--retries", "3", "--verbose"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    };

    let table = scan_args(&argv);
    println!("{} flag(s) recognized", table.len());
    println!("{}", serde_json::to_string_pretty(&table).unwrap());
}
