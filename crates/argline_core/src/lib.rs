//! Low-level scanner for raw command-line text.
//!
//! Turns a single command-line string into raw token boundaries:
//! `(tag, start, len)` triples over the source bytes. This crate does not
//! unescape quoted content or track reader state -- those live in the
//! `argline` crate, which "cooks" raw tokens into owned values.
//!
//! # Layers
//!
//! - [`SourceBuffer`]: owns a sentinel-terminated copy of the text.
//! - [`Cursor`]: byte-level navigation over that buffer.
//! - [`RawScanner`]: produces one [`RawToken`] per call.

mod cursor;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use raw_scanner::{tokenize, RawScanner};
pub use source_buffer::SourceBuffer;
pub use tag::{RawTag, RawToken, OPTION_MARKER, QUOTE_MARKER};
