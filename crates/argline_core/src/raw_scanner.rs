//! Hand-written scanner producing `(RawTag, start, len)` triples.
//!
//! The scanner skips leading whitespace itself, so every token it returns is
//! content. It never allocates and never fails: an unterminated quote is a
//! tag, not an error, and unescaping doubled quotes is left to the cooking
//! layer in `argline`.
//!
//! # Quoting
//!
//! A token that starts with `"` runs to the next quote that is not part of
//! a doubled `""` pair. The closing quote ends the token even when
//! non-whitespace follows it; the following characters start the next token.
//! A `"` inside an unquoted token is ordinary content.

use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken, OPTION_MARKER, QUOTE_MARKER};

/// Allocation-free command-line scanner.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Byte offset where the next scan begins.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when only whitespace remains.
    /// Subsequent calls after EOF continue to return `Eof`.
    pub fn next_token(&mut self) -> RawToken {
        self.cursor.eat_whitespace();
        let start = self.cursor.pos();
        if self.cursor.is_eof() {
            return RawToken {
                tag: RawTag::Eof,
                start,
                len: 0,
            };
        }
        match self.cursor.current() {
            QUOTE_MARKER => self.quoted(start),
            OPTION_MARKER => self.word(start, RawTag::Option),
            _ => self.word(start, RawTag::Plain),
        }
    }

    // ─── Unquoted ──────────────────────────────────────────────────────

    fn word(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.eat_until_whitespace();
        RawToken {
            tag,
            start,
            len: self.cursor.pos() - start,
        }
    }

    // ─── Quoted ────────────────────────────────────────────────────────

    fn quoted(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume opening '"'
        loop {
            if !self.cursor.skip_to_quote() {
                return RawToken {
                    tag: RawTag::UnterminatedQuoted,
                    start,
                    len: self.cursor.pos() - start,
                };
            }
            self.cursor.advance(); // consume '"'
            if self.cursor.current() == QUOTE_MARKER {
                // Doubled quote: literal '"', keep going.
                self.cursor.advance();
            } else {
                return RawToken {
                    tag: RawTag::Quoted,
                    start,
                    len: self.cursor.pos() - start,
                };
            }
        }
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        let tok = self.next_token();
        if tok.tag == RawTag::Eof {
            None
        } else {
            Some(tok)
        }
    }
}

/// Convenience function: scan a command line and collect all raw tokens.
///
/// Returns every token except the final `Eof`. For incremental access,
/// construct a `SourceBuffer` + `RawScanner` directly.
pub fn tokenize(source: &str) -> Vec<RawToken> {
    let buf = crate::SourceBuffer::new(source);
    RawScanner::new(buf.cursor()).collect()
}
