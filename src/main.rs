//! steadystate CLI.
//!
//! Thin entry point; parsing and execution live in the library's `cli`
//! module so they stay testable.

use std::process::ExitCode;

use steadystate::cli::{self, args::Args};

fn main() -> ExitCode {
    cli::run(Args::parse())
}
