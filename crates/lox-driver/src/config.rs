//! Command-line configuration.
//!
//! A plain struct built once from `std::env::args()`, covering the one
//! axis this interpreter's CLI actually has: REPL vs. one script path.
//! There is no config file and no environment variable to read.

use lox_util::HostError;

/// What the driver was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// No path argument: run the interactive prompt.
    Repl,
    /// Exactly one path argument: run that file then exit.
    Script(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
}

impl Config {
    /// Parses `args` (expected to already exclude argv[0]). More than one
    /// argument is a usage error; the reference CLI only ever accepts a
    /// single optional script path.
    pub fn from_args(args: &[String]) -> Result<Config, HostError> {
        match args {
            [] => Ok(Config { mode: Mode::Repl }),
            [path] => Ok(Config {
                mode: Mode::Script(path.clone()),
            }),
            _ => Err(HostError::Usage("Usage: loxi [path]".to_string())),
        }
    }
}
