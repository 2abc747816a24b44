//! Raw token tags and the `(tag, start, len)` token triple.

/// Leading byte that marks an unquoted token as an option.
pub const OPTION_MARKER: u8 = b'-';

/// Byte that opens and closes a quoted token. Doubled inside a quoted
/// region it stands for one literal quote.
pub const QUOTE_MARKER: u8 = b'"';

/// Classification of a raw token.
///
/// Quoted variants are never options, whatever their content starts with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawTag {
    /// Unquoted token that does not start with [`OPTION_MARKER`].
    Plain = 0,
    /// Unquoted token starting with [`OPTION_MARKER`] (a lone `-` included).
    Option = 1,
    /// Quoted token with its closing quote.
    Quoted = 2,
    /// Quoted token that ran into end of input. Tolerated, not an error.
    UnterminatedQuoted = 3,
    /// End of input. Always has `len == 0`.
    Eof = 255,
}

impl RawTag {
    /// Returns `true` for [`RawTag::Option`].
    #[inline]
    pub fn is_option(self) -> bool {
        self == Self::Option
    }

    /// Returns `true` for both quoted variants.
    #[inline]
    pub fn is_quoted(self) -> bool {
        matches!(self, Self::Quoted | Self::UnterminatedQuoted)
    }

    /// Human-readable name, used in trace output.
    pub fn name(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Option => "option",
            Self::Quoted => "quoted",
            Self::UnterminatedQuoted => "unterminated quoted",
            Self::Eof => "end of input",
        }
    }
}

/// A raw token: tag plus byte extent in the source.
///
/// `start..start + len` covers the token as written, quote delimiters
/// included. Leading whitespace is never part of the extent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RawToken {
    pub tag: RawTag,
    pub start: u32,
    pub len: u32,
}

impl RawToken {
    /// Byte offset one past the end of the token.
    #[inline]
    pub fn end(&self) -> u32 {
        self.start + self.len
    }
}
