//! Running a `Vm` against a file or an interactive prompt.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use lox_util::{ExitStatus, HostError};
use lox_vm::{InterpretResult, Vm};

/// A script longer than this is rejected before it ever reaches the
/// scanner.
const MAX_SCRIPT_BYTES: u64 = 1024 * 1024;

fn map_result(result: InterpretResult) -> ExitStatus {
    match result {
        InterpretResult::Ok => ExitStatus::Ok,
        InterpretResult::CompileError => ExitStatus::CompileError,
        InterpretResult::RuntimeError => ExitStatus::RuntimeError,
    }
}

/// Reads and runs the file at `path` to completion, using one `Vm` for the
/// whole run.
pub fn run_file(path: &Path) -> Result<ExitStatus, HostError> {
    let metadata = fs::metadata(path).map_err(|source| HostError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    if metadata.len() > MAX_SCRIPT_BYTES {
        return Err(HostError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
        });
    }

    let bytes = fs::read(path).map_err(|source| HostError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let source = String::from_utf8(bytes).map_err(|_| HostError::NotUtf8 {
        path: path.to_path_buf(),
    })?;

    let mut vm = Vm::new();
    Ok(map_result(vm.interpret(&source)))
}

/// Runs the interactive prompt: `"> "` on stdout, one `interpret` call per
/// line, until stdin hits EOF. A compile or runtime error on one line is
/// reported and the loop continues — only an I/O failure on stdin itself
/// is fatal. Always exits `Ok` on clean EOF.
pub fn run_repl() -> Result<ExitStatus, HostError> {
    let stdin = io::stdin();
    let mut stdin = stdin.lock();
    let mut stdout = io::stdout();
    let mut vm = Vm::new();
    let mut line = String::new();

    loop {
        write!(stdout, "> ").map_err(HostError::Stdout)?;
        stdout.flush().map_err(HostError::Stdout)?;

        line.clear();
        let bytes_read = stdin.read_line(&mut line).map_err(HostError::Stdin)?;
        if bytes_read == 0 {
            writeln!(stdout).map_err(HostError::Stdout)?;
            return Ok(ExitStatus::Ok);
        }

        // The REPL does not propagate a per-line compile/runtime error as
        // the process exit status: the reference prompt keeps taking input
        // regardless, and only a clean EOF or a host I/O failure ends it.
        vm.interpret(&line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn run_file_reports_ok_for_valid_script() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "print 1 + 2;").unwrap();
        let status = run_file(file.path()).unwrap();
        assert_eq!(status, ExitStatus::Ok);
    }

    #[test]
    fn run_file_reports_compile_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "print 1 +;").unwrap();
        let status = run_file(file.path()).unwrap();
        assert_eq!(status, ExitStatus::CompileError);
    }

    #[test]
    fn run_file_reports_runtime_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "print -\"x\";").unwrap();
        let status = run_file(file.path()).unwrap();
        assert_eq!(status, ExitStatus::RuntimeError);
    }

    #[test]
    fn run_file_missing_path_is_a_host_error() {
        let result = run_file(Path::new("/nonexistent/path/does-not-exist.lox"));
        assert!(matches!(result, Err(HostError::ReadFile { .. })));
    }
}
