//! lox-driver - the `loxi` command-line entry point.
//!
//! Everything in this crate sits outside the interpreter core: `Config`
//! reads `std::env::args()`, `session` drives a `lox_vm::Vm` over a file
//! or the REPL, and `main.rs` is the only place in the workspace that
//! flattens errors into process exit codes.

mod config;
mod session;

pub use config::{Config, Mode};
pub use session::{run_file, run_repl};

use lox_util::{ExitStatus, HostError};

/// Runs the CLI to completion given an already-built `Config`, returning
/// the exit status to report. The one place host errors (bad path, stdin
/// failure, oversized file) collapse into `ExitStatus::IoError`/`Usage`.
pub fn run(config: &Config) -> ExitStatus {
    let result = match &config.mode {
        Mode::Repl => run_repl(),
        Mode::Script(path) => run_file(std::path::Path::new(path)),
    };

    match result {
        Ok(status) => status,
        Err(HostError::Usage(message)) => {
            eprintln!("{message}");
            ExitStatus::Usage
        }
        Err(other) => {
            eprintln!("{other}");
            ExitStatus::IoError
        }
    }
}
