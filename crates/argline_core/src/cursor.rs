//! Byte cursor over a sentinel-terminated buffer.
//!
//! The cursor advances through the buffer byte-by-byte. The end of input is
//! detected when the current byte equals the sentinel (`0x00`) and the
//! position has reached the source length. A null byte at `pos < source_len`
//! is ordinary command-line content, not the end of input.
//!
//! Whitespace is classified per Unicode (`char::is_whitespace`), so the
//! cursor decodes a full UTF-8 character whenever the current byte is not
//! ASCII.

/// Byte cursor over a sentinel-terminated buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], so callers can snapshot and restore it freely.
///
/// # Invariant
///
/// `buf[source_len] == 0x00`, and all bytes after `source_len` are `0x00`.
/// Guaranteed by [`SourceBuffer`](crate::SourceBuffer) construction.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of the command-line text (excludes sentinel and padding).
    source_len: u32,
}

/// Size assertion: `&[u8]` = 16, `u32` = 4, `u32` = 4 => 24 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0 over a sentinel-terminated buffer.
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Returns the byte at the current position (`0x00` at end of input).
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Returns the byte one position ahead of current.
    ///
    /// Safe at any position inside the source: the sentinel and padding
    /// guarantee a valid read.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Returns `true` if the cursor has reached the end of input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current() == 0 && self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the command-line text (excludes sentinel and padding).
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Extract a source substring as `&str`.
    ///
    /// `start..end` must fall on character boundaries within the source.
    /// The scanner only produces such boundaries; an invalid range yields
    /// an empty string rather than a panic.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        self.buf
            .get(start as usize..end as usize)
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
            .unwrap_or_default()
    }

    /// Extract a source substring from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// - `0xC0..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF7`: 4 bytes
    /// - Everything else (ASCII, continuation, invalid): 1 byte
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Decode the character at the current position.
    ///
    /// Returns `None` at end of input.
    pub fn current_char(&self) -> Option<char> {
        if self.is_eof() {
            return None;
        }
        let width = Self::utf8_char_width(self.current());
        let end = (self.pos + width).min(self.source_len);
        self.slice(self.pos, end).chars().next()
    }

    /// Advance the cursor past one full UTF-8 character.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.advance_n(width);
    }

    /// Returns `true` if the character at the current position is whitespace.
    ///
    /// ASCII bytes are classified without decoding. The sentinel is not
    /// whitespace, so loops over this predicate stop at end of input.
    #[inline]
    pub fn at_whitespace(&self) -> bool {
        let b = self.current();
        if b.is_ascii() {
            char::from(b).is_whitespace()
        } else {
            self.current_char().is_some_and(char::is_whitespace)
        }
    }

    /// Advance past a run of whitespace characters.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        while self.at_whitespace() {
            self.advance_char();
        }
    }

    /// Advance to the next whitespace character or end of input.
    ///
    /// Interior null bytes are content and do not stop the scan.
    pub fn eat_until_whitespace(&mut self) {
        while !self.is_eof() && !self.at_whitespace() {
            self.advance_char();
        }
    }

    /// Advance to the next `"` byte using SIMD-accelerated search.
    ///
    /// Returns `true` with the cursor on the quote if one was found, or
    /// `false` with the cursor at end of input.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn skip_to_quote(&mut self) -> bool {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        if let Some(offset) = memchr::memchr(crate::QUOTE_MARKER, remaining) {
            self.pos += offset as u32;
            true
        } else {
            self.pos = self.source_len;
            false
        }
    }
}
