//! Host-facing error conditions: everything outside the interpreter core
//! (file access, stdin) that can fail before or around an `interpret` call.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// An error raised by the host environment rather than by compilation or
/// execution of lox source. These map to `ExitStatus::IoError`.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("could not read file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read from stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to write to stdout: {0}")]
    Stdout(#[source] io::Error),

    #[error("usage: {0}")]
    Usage(String),

    #[error("file '{path}' is {size} bytes, over the 1 MiB limit for a script")]
    FileTooLarge { path: PathBuf, size: u64 },

    #[error("file '{path}' is not valid UTF-8")]
    NotUtf8 { path: PathBuf },
}
