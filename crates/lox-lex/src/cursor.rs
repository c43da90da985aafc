//! Byte cursor over source text.
//!
//! Bytes rather than `char`s, since this scanner's grammar is ASCII-only —
//! identifiers, numbers, strings, and operators never need a UTF-8 decode
//! step — and line tracking only, since nothing downstream of the scanner
//! uses column numbers.

pub struct Cursor<'a> {
    source: &'a [u8],
    position: usize,
    line: u32,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source: source.as_bytes(),
            position: 0,
            line: 1,
        }
    }

    /// Byte at the cursor, or `\0` at end of input so callers can test
    /// bytes without a separate bounds check.
    #[inline]
    pub fn current(&self) -> u8 {
        self.peek(0)
    }

    #[inline]
    pub fn peek(&self, offset: usize) -> u8 {
        self.source.get(self.position + offset).copied().unwrap_or(0)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    #[inline]
    pub fn advance(&mut self) -> u8 {
        let b = self.current();
        self.position += 1;
        if b == b'\n' {
            self.line += 1;
        }
        b
    }

    pub fn match_byte(&mut self, expected: u8) -> bool {
        if self.current() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn slice(&self, start: usize) -> &'a str {
        std::str::from_utf8(&self.source[start..self.position])
            .expect("source slices stay on UTF-8 boundaries for ASCII-delimited tokens")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_byte_by_byte() {
        let mut c = Cursor::new("ab");
        assert_eq!(c.current(), b'a');
        c.advance();
        assert_eq!(c.current(), b'b');
        c.advance();
        assert!(c.is_at_end());
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn tracks_lines() {
        let mut c = Cursor::new("a\nb\nc");
        assert_eq!(c.line(), 1);
        c.advance();
        c.advance();
        assert_eq!(c.line(), 2);
    }

    #[test]
    fn slices_back_to_start() {
        let mut c = Cursor::new("let x");
        let start = c.position();
        c.advance();
        c.advance();
        c.advance();
        assert_eq!(c.slice(start), "let");
    }
}
