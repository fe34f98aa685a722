//! Library Circulation CLI
//!
//! Runs a command script through the circulation engine and prints the final
//! state as CSV.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- script.csv > patrons.csv
//! cargo run -- --report items script.csv > items.csv
//! cargo run -- --overdue-penalty 0.25 -v script.csv
//! ```
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (script not found or unreadable, report not writable)

use library_circulation::cli;
use library_circulation::logging::setup_tracing;
use std::process;
use tracing::error;

fn main() {
    let args = cli::parse_args();
    setup_tracing(args.verbose);

    let simulation = args.to_simulation();

    let mut output = std::io::stdout();
    if let Err(e) = simulation.run(&args.input_file, &mut output) {
        error!("{}", e);
        process::exit(1);
    }
}
