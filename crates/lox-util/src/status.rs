//! Process exit codes.
//!
//! Fixed to the BSD `sysexits.h` values conventionally used by Lox
//! tooling, so scripts driving `loxi` get a stable, documented contract
//! instead of a bare 0/1 split.

/// The outcome of one `interpret` call or one driver invocation, translated
/// to a process exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Everything ran to completion without error.
    Ok,
    /// Malformed source: no bytecode was executed.
    CompileError,
    /// A tag mismatch or other fault surfaced while executing bytecode.
    RuntimeError,
    /// Wrong number of command-line arguments.
    Usage,
    /// File I/O or stdin failure.
    IoError,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Ok => 0,
            ExitStatus::Usage => 64,
            ExitStatus::CompileError => 65,
            ExitStatus::IoError => 74,
            ExitStatus::RuntimeError => 70,
        }
    }
}
