//! Read errors.
//!
//! A [`ReadError`] pairs a [`ReadErrorKind`] (what went wrong, with the
//! offending literal) with the option that was in scope when it happened.
//! The message is formatted on demand:
//!
//! ```text
//! Following Option "-numbers" expected an integer but found "four"
//! ```
//!
//! Without option context the kind's message stands alone. The context
//! only affects formatting, never the kind.

use std::fmt;

use thiserror::Error;

use crate::token::TokenKind;

/// A failed read, with the option context it is attributed to.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{}{kind}", OptionContext(.option.as_deref()))]
pub struct ReadError {
    /// What went wrong.
    pub kind: ReadErrorKind,
    /// The most recently read option when the failing read started.
    pub option: Option<String>,
}

/// What kind of read failure occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum ReadErrorKind {
    /// The token found does not have the kind the caller required.
    GrammarViolation { expected: TokenKind, found: String },
    /// Input ran out while a value was required.
    MissingValue,
    /// A value required to be a base-10 integer is not one.
    TypeMismatch { literal: String },
    /// The caller rejected the current token. `None` when no token was held.
    UnexpectedArgument { found: Option<String> },
}

impl fmt::Display for ReadErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GrammarViolation { expected, found } => {
                let found_kind = match expected {
                    TokenKind::Option => TokenKind::Value,
                    TokenKind::Value => TokenKind::Option,
                };
                write!(
                    f,
                    "expected {} but found {found_kind} \"{found}\"",
                    expected.with_article()
                )
            }
            Self::MissingValue => {
                write!(f, "expected a value but reached the end of the arguments")
            }
            Self::TypeMismatch { literal } => {
                write!(f, "expected an integer but found \"{literal}\"")
            }
            Self::UnexpectedArgument { found: Some(found) } => {
                write!(f, "unexpected argument \"{found}\"")
            }
            Self::UnexpectedArgument { found: None } => {
                write!(f, "unexpected end of arguments")
            }
        }
    }
}

/// Formats the `Following Option "<opt>" ` prefix, or nothing.
struct OptionContext<'a>(Option<&'a str>);

impl fmt::Display for OptionContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(option) => write!(f, "Following Option \"{option}\" "),
            None => Ok(()),
        }
    }
}

impl ReadError {
    pub fn new(kind: ReadErrorKind, option: Option<String>) -> Self {
        Self { kind, option }
    }

    /// `expected` was required but a token of the other kind was found.
    pub fn grammar_violation(
        expected: TokenKind,
        found: impl Into<String>,
        option: Option<String>,
    ) -> Self {
        Self::new(
            ReadErrorKind::GrammarViolation {
                expected,
                found: found.into(),
            },
            option,
        )
    }

    pub fn missing_value(option: Option<String>) -> Self {
        Self::new(ReadErrorKind::MissingValue, option)
    }

    pub fn type_mismatch(literal: impl Into<String>, option: Option<String>) -> Self {
        Self::new(
            ReadErrorKind::TypeMismatch {
                literal: literal.into(),
            },
            option,
        )
    }

    pub fn unexpected_argument(found: Option<String>, option: Option<String>) -> Self {
        Self::new(ReadErrorKind::UnexpectedArgument { found }, option)
    }

    /// The offending literal, if the kind carries one.
    pub fn literal(&self) -> Option<&str> {
        match &self.kind {
            ReadErrorKind::GrammarViolation { found, .. } => Some(found),
            ReadErrorKind::TypeMismatch { literal } => Some(literal),
            ReadErrorKind::UnexpectedArgument { found } => found.as_deref(),
            ReadErrorKind::MissingValue => None,
        }
    }
}
