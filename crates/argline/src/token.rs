//! Cooked tokens handed out by the reader.

use std::fmt;

/// Whether a token is an option or a plain value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Unquoted token starting with `-`.
    Option,
    /// Any other token, quoted tokens included.
    Value,
}

impl TokenKind {
    /// Name with an indefinite article, for messages ("an option").
    pub fn with_article(self) -> &'static str {
        match self {
            Self::Option => "an option",
            Self::Value => "a value",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Option => f.pad("option"),
            Self::Value => f.pad("value"),
        }
    }
}

/// A token with its quoting removed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    /// Token text. Quote delimiters are stripped and doubled quotes collapsed.
    pub text: String,
    pub kind: TokenKind,
    /// The token was written in quotes.
    pub quoted: bool,
}

impl Token {
    #[inline]
    pub fn is_option(&self) -> bool {
        self.kind == TokenKind::Option
    }
}
