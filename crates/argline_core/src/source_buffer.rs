//! Sentinel-terminated source buffer for bounds-check-free scanning.
//!
//! The buffer guarantees a `0x00` sentinel byte after the command-line
//! text, so the cursor can detect the end of input by looking at the current
//! byte instead of comparing against the length on every step. The total
//! size is rounded up to the next 64-byte boundary, which also gives
//! `peek()` safe padding near the end.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Owned, sentinel-terminated copy of a command line.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the command-line text (excludes sentinel and padding).
    source_len: u32,
}

impl SourceBuffer {
    /// Create a new sentinel-terminated buffer from command-line text.
    ///
    /// Text longer than `u32::MAX` bytes is truncated to that length; no
    /// real command line comes close.
    pub fn new(source: &str) -> Self {
        let mut source_bytes = source.as_bytes();
        if u32::try_from(source_bytes.len()).is_err() {
            source_bytes = &source_bytes[..floor_char_boundary(source, u32::MAX as usize)];
        }
        let source_len = source_bytes.len();

        // Round up to next 64-byte boundary (minimum: source + 1 sentinel byte).
        let padded_len = (source_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // Sentinel and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source_bytes);

        Self {
            buf,
            source_len: u32::try_from(source_len).unwrap_or(u32::MAX),
        }
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Returns the command-line text.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }

    /// Returns the full buffer including sentinel and cache-line padding.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Create a [`Cursor`] positioned at `pos`, clamped to the end of input.
    pub fn cursor_at(&self, pos: u32) -> Cursor<'_> {
        let mut cursor = self.cursor();
        cursor.advance_n(pos.min(self.source_len));
        cursor
    }

    /// Length of the command-line text in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the command-line text is empty.
    ///
    /// Whitespace-only text is not empty here; the reader decides whether
    /// any token exists.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}

/// Largest char boundary in `s` that is `<= index`.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    let mut i = index.min(s.len());
    while !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}
