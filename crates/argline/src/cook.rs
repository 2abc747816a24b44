//! Cooking: turn a raw token extent into an owned [`Token`].
//!
//! Quoted tokens lose their delimiters and every doubled `""` collapses to a
//! single `"`. Unterminated quoted tokens keep everything after the opening
//! quote. Unquoted tokens are taken verbatim.

use argline_core::{Cursor, RawTag, RawToken};

use crate::token::{Token, TokenKind};

/// Cook a non-EOF raw token scanned from `cursor`'s buffer.
pub(crate) fn cook_token(cursor: &Cursor<'_>, raw: RawToken) -> Token {
    debug_assert!(raw.tag != RawTag::Eof, "EOF has no token to cook");
    let source = cursor.slice(raw.start, raw.end());
    let kind = if raw.tag.is_option() {
        TokenKind::Option
    } else {
        TokenKind::Value
    };
    let text = match raw.tag {
        RawTag::Quoted => {
            let content = source.get(1..source.len().saturating_sub(1)).unwrap_or_default();
            collapse_doubled_quotes(content).unwrap_or_else(|| content.to_owned())
        }
        RawTag::UnterminatedQuoted => {
            let content = source.get(1..).unwrap_or_default();
            collapse_doubled_quotes(content).unwrap_or_else(|| content.to_owned())
        }
        RawTag::Plain | RawTag::Option | RawTag::Eof => source.to_owned(),
    };
    Token {
        text,
        kind,
        quoted: raw.tag.is_quoted(),
    }
}

/// Collapse each `""` in quoted content into `"`.
///
/// Fast path: returns `None` when the content has no quotes, so the caller
/// can copy the source slice directly.
pub(crate) fn collapse_doubled_quotes(content: &str) -> Option<String> {
    if !content.contains('"') {
        return None;
    }
    Some(content.replace("\"\"", "\""))
}

#[cfg(test)]
mod tests;
