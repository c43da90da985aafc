//! lox-util - shared foundation types for the lox pipeline crates.
//!
//! This crate is deliberately small. Each pipeline crate (`lox-lex`,
//! `lox-bytecode`, `lox-compiler`, `lox-vm`) owns its own error reporting for
//! the condition it detects; what they share is the host-facing error type
//! and the process exit codes the driver maps those conditions to.

mod error;
mod status;

pub use error::HostError;
pub use status::ExitStatus;

/// A 1-based source line number.
///
/// Every byte of source belongs to exactly one line; line numbers start at 1
/// and only ever increase as a scan progresses, matching how the scanner and
/// the chunk's parallel line table both count lines.
pub type Line = u32;
