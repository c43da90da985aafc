//! The scanner: `scan_token` on demand, driven entirely by the compiler.

use crate::cursor::Cursor;
use crate::token::{keyword_for, Token, TokenType};

/// Turns source text into tokens, one at a time, with no lookahead beyond a
/// single byte. Holds no state that survives past the `Scanner` itself, so
/// every `interpret` call constructs a fresh one.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    start: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            start: 0,
        }
    }

    /// Returns the next token. Returns `TokenType::Eof` forever once the
    /// source is exhausted, so callers may loop on `scan_token` without a
    /// separate `is_at_end` check.
    pub fn scan_token(&mut self) -> Token<'a> {
        self.skip_whitespace_and_comments();
        self.start = self.cursor.position();

        if self.cursor.is_at_end() {
            return self.make_token(TokenType::Eof);
        }

        let c = self.cursor.advance();

        if is_alpha(c) {
            return self.identifier();
        }
        if c.is_ascii_digit() {
            return self.number();
        }

        match c {
            b'(' => self.make_token(TokenType::LeftParen),
            b')' => self.make_token(TokenType::RightParen),
            b'{' => self.make_token(TokenType::LeftBrace),
            b'}' => self.make_token(TokenType::RightBrace),
            b';' => self.make_token(TokenType::Semicolon),
            b',' => self.make_token(TokenType::Comma),
            b'.' => self.make_token(TokenType::Dot),
            b'-' => self.make_token(TokenType::Minus),
            b'+' => self.make_token(TokenType::Plus),
            b'/' => self.make_token(TokenType::Slash),
            b'*' => self.make_token(TokenType::Star),
            b'!' => {
                let kind = if self.cursor.match_byte(b'=') {
                    TokenType::BangEqual
                } else {
                    TokenType::Bang
                };
                self.make_token(kind)
            }
            b'=' => {
                let kind = if self.cursor.match_byte(b'=') {
                    TokenType::EqualEqual
                } else {
                    TokenType::Equal
                };
                self.make_token(kind)
            }
            b'<' => {
                let kind = if self.cursor.match_byte(b'=') {
                    TokenType::LessEqual
                } else {
                    TokenType::Less
                };
                self.make_token(kind)
            }
            b'>' => {
                let kind = if self.cursor.match_byte(b'=') {
                    TokenType::GreaterEqual
                } else {
                    TokenType::Greater
                };
                self.make_token(kind)
            }
            b'"' => self.string(),
            _ => Token::error("Unexpected character.", self.cursor.line()),
        }
    }

    fn make_token(&self, kind: TokenType) -> Token<'a> {
        Token::new(kind, self.cursor.slice(self.start), self.cursor.line())
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.cursor.current() {
                b' ' | b'\r' | b'\t' | b'\n' => {
                    self.cursor.advance();
                }
                b'/' if self.cursor.peek(1) == b'/' => {
                    while self.cursor.current() != b'\n' && !self.cursor.is_at_end() {
                        self.cursor.advance();
                    }
                }
                _ => return,
            }
        }
    }

    fn string(&mut self) -> Token<'a> {
        while self.cursor.current() != b'"' && !self.cursor.is_at_end() {
            self.cursor.advance();
        }

        if self.cursor.is_at_end() {
            return Token::error("Unterminated string.", self.cursor.line());
        }

        // Consume the closing quote. The lexeme includes both quotes; the
        // compiler's `string` emitter strips them before interning.
        self.cursor.advance();
        self.make_token(TokenType::String)
    }

    fn number(&mut self) -> Token<'a> {
        while self.cursor.current().is_ascii_digit() {
            self.cursor.advance();
        }

        if self.cursor.current() == b'.' && self.cursor.peek(1).is_ascii_digit() {
            self.cursor.advance();
            while self.cursor.current().is_ascii_digit() {
                self.cursor.advance();
            }
        }

        self.make_token(TokenType::Number)
    }

    fn identifier(&mut self) -> Token<'a> {
        while is_alpha(self.cursor.current()) || self.cursor.current().is_ascii_digit() {
            self.cursor.advance();
        }

        let text = self.cursor.slice(self.start);
        let kind = keyword_for(text).unwrap_or(TokenType::Identifier);
        self.make_token(kind)
    }
}

fn is_alpha(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}
