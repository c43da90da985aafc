use std::fmt;

/// Marks that the compiler reported at least one error during a pass.
///
/// Diagnostics themselves are printed inline, as they're found, via
/// `error_at` — this type carries no message so a caller can't be tempted
/// to reformat or re-wrap the already-emitted text.
#[derive(Debug)]
pub struct CompileError;

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "compilation failed")
    }
}

impl std::error::Error for CompileError {}
