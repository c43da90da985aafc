//! lox-lex - lexical analysis for the lox bytecode interpreter.
//!
//! The scanner turns source text into a stream of tokens on demand: no
//! allocation, no lookahead beyond a single byte, and every lexeme is a
//! borrowed slice of the original source buffer. `Scanner` is stateless
//! between calls to [`Scanner::scan_token`] beyond the cursor position
//! itself, so re-scanning the same source from a fresh `Scanner` always
//! reproduces the same token sequence.

mod cursor;
mod scanner;
mod token;

pub use scanner::Scanner;
pub use token::{Token, TokenType};
