//! The command-line reader: a single-direction cursor over cooked tokens.
//!
//! # State machine
//!
//! ```text
//!            advance() ok            advance() ok
//!  Initial ───────────────▶ Positioned ◀──────┐
//!     │                         │  └──────────┘
//!     │ advance() at end        │ advance() at end
//!     └──────────▶ Exhausted ◀──┘   (sticky)
//!
//!  reset(): any state ──▶ Initial
//! ```
//!
//! Every read operation is at most one `advance()` plus a check. A failed
//! check still leaves the rejected token current, so the caller can see
//! what was actually found.

use argline_core::{RawScanner, RawTag, SourceBuffer};
use tracing::{debug, instrument, trace};

use crate::cook::cook_token;
use crate::error::ReadError;
use crate::quote::join_args;
use crate::token::{Token, TokenKind};

/// Where the reader stands in its traversal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CursorState {
    /// Nothing read yet (after construction or `reset`).
    Initial,
    /// A token is current.
    Positioned,
    /// The last `advance` found no token. Stays until `reset`.
    Exhausted,
}

/// The current-token slot.
#[derive(Clone, Debug)]
enum Current {
    Unset,
    Token(Token),
    Exhausted,
}

/// Pull-based reader over one command line.
///
/// Construction never fails; only reads do. Reads take `&mut self` since
/// each one moves the shared scan position.
#[derive(Clone, Debug)]
pub struct CommandLine {
    buffer: SourceBuffer,
    /// Byte offset where the next scan begins.
    position: u32,
    current: Current,
    latest_option: Option<String>,
    /// The text holds no token at all.
    empty: bool,
}

impl CommandLine {
    /// Create a reader over a full command line.
    pub fn new(source: &str) -> Self {
        let buffer = SourceBuffer::new(source);
        let empty = RawScanner::new(buffer.cursor()).next_token().tag == RawTag::Eof;
        Self {
            buffer,
            position: 0,
            current: Current::Unset,
            latest_option: None,
            empty,
        }
    }

    /// Create a reader over already split arguments, e.g. the process
    /// arguments. Arguments are re-joined with [`join_args`], so reading
    /// them back yields the same texts.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self::new(&join_args(args))
    }

    // ─── Accessors ─────────────────────────────────────────────────────

    /// The command-line text this reader was built from.
    pub fn source(&self) -> &str {
        self.buffer.as_str()
    }

    /// Byte offset where the next scan begins.
    pub fn position(&self) -> u32 {
        self.position
    }

    pub fn state(&self) -> CursorState {
        match self.current {
            Current::Unset => CursorState::Initial,
            Current::Token(_) => CursorState::Positioned,
            Current::Exhausted => CursorState::Exhausted,
        }
    }

    /// `true` when the command line holds no token at all (empty or
    /// whitespace-only). Unlike [`is_exhausted`](Self::is_exhausted) this
    /// does not depend on how far the reader has got.
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self.current, Current::Exhausted)
    }

    /// The current token, if one is held.
    pub fn current_token(&self) -> Option<&Token> {
        match &self.current {
            Current::Token(token) => Some(token),
            Current::Unset | Current::Exhausted => None,
        }
    }

    /// Text of the current token, if one is held.
    pub fn current(&self) -> Option<&str> {
        self.current_token().map(|token| token.text.as_str())
    }

    /// `true` if the current token is an option.
    pub fn is_option(&self) -> bool {
        self.current_token().is_some_and(Token::is_option)
    }

    /// `true` if the current token was written in quotes.
    pub fn is_quoted(&self) -> bool {
        self.current_token().is_some_and(|token| token.quoted)
    }

    /// The most recently scanned option, kept for error context.
    pub fn latest_option(&self) -> Option<&str> {
        self.latest_option.as_deref()
    }

    pub fn clear_latest_option(&mut self) {
        self.latest_option = None;
    }

    // ─── Traversal ─────────────────────────────────────────────────────

    /// Move to the next token.
    ///
    /// Returns `false` and marks the reader exhausted when no token remains.
    /// Never fails.
    pub fn advance(&mut self) -> bool {
        self.advance_token().is_some()
    }

    fn advance_token(&mut self) -> Option<&Token> {
        let cursor = self.buffer.cursor_at(self.position);
        let mut scanner = RawScanner::new(cursor);
        let raw = scanner.next_token();
        self.position = scanner.pos();
        trace!(
            tag = raw.tag.name(),
            start = raw.start,
            len = raw.len,
            "scanned token"
        );

        if raw.tag == RawTag::Eof {
            self.current = Current::Exhausted;
            return None;
        }
        let token = cook_token(&cursor, raw);
        if token.is_option() {
            self.latest_option = Some(token.text.clone());
        }
        self.current = Current::Token(token);
        self.current_token()
    }

    /// Return to the initial state over the same text.
    pub fn reset(&mut self) {
        debug!(position = self.position, "reset command line reader");
        self.position = 0;
        self.current = Current::Unset;
        self.latest_option = None;
    }

    /// Drain the remaining tokens.
    pub fn tokens(&mut self) -> Tokens<'_> {
        Tokens { reader: self }
    }

    // ─── Reads ─────────────────────────────────────────────────────────

    /// Read the next token of either kind. `None` at the end of input.
    pub fn read_next_argument(&mut self) -> Option<&str> {
        self.advance_token().map(|token| token.text.as_str())
    }

    /// Read the next token, which must be an option.
    ///
    /// Running out of input is not an error here: it returns `Ok(None)`, so
    /// `while let Some(option) = reader.read_next_option()?` loops end
    /// cleanly. A value where an option belongs is a grammar violation.
    #[instrument(level = "trace", skip(self))]
    pub fn read_next_option(&mut self) -> Result<Option<&str>, ReadError> {
        let context = self.latest_option.clone();
        let result = match self.advance_token() {
            None => Ok(None),
            Some(token) if !token.is_option() => Err(ReadError::grammar_violation(
                TokenKind::Option,
                token.text.clone(),
                context,
            )),
            Some(token) => Ok(Some(token.text.as_str())),
        };
        result.inspect_err(|err| debug!(%err, "read_next_option failed"))
    }

    /// Read the next token, which must be a value.
    ///
    /// Errors are attributed to the option that was current *before* this
    /// read: a misplaced option must not become its own context.
    #[instrument(level = "trace", skip(self))]
    pub fn read_next_value(&mut self) -> Result<&str, ReadError> {
        let context = self.latest_option.clone();
        let result = match self.advance_token() {
            None => Err(ReadError::missing_value(context)),
            Some(token) if token.is_option() => Err(ReadError::grammar_violation(
                TokenKind::Value,
                token.text.clone(),
                context,
            )),
            Some(token) => Ok(token.text.as_str()),
        };
        result.inspect_err(|err| debug!(%err, "read_next_value failed"))
    }

    /// Read the next value as a base-10 integer.
    #[instrument(level = "trace", skip(self))]
    pub fn read_next_value_as_integer(&mut self) -> Result<i64, ReadError> {
        let context = self.latest_option.clone();
        let value = self.read_next_value()?;
        parse_integer(value, context)
    }

    /// Parse the current token as a base-10 integer without advancing.
    pub fn current_as_integer(&self) -> Result<i64, ReadError> {
        let context = self.latest_option.clone();
        match self.current() {
            Some(text) => parse_integer(text, context),
            None => Err(ReadError::missing_value(context)),
        }
    }

    // ─── Assertions ────────────────────────────────────────────────────

    /// Fail unless the current token is an option.
    ///
    /// With no current token this is an unexpected end of arguments.
    pub fn assert_current_is_option(&self) -> Result<(), ReadError> {
        match self.current_token() {
            Some(token) if token.is_option() => Ok(()),
            Some(token) => Err(ReadError::grammar_violation(
                TokenKind::Option,
                token.text.clone(),
                self.latest_option.clone(),
            )),
            None => Err(ReadError::unexpected_argument(
                None,
                self.latest_option.clone(),
            )),
        }
    }

    /// Fail unless the current token is a value.
    ///
    /// With no current token this is a missing value.
    pub fn assert_current_is_value(&self) -> Result<(), ReadError> {
        match self.current_token() {
            Some(token) if !token.is_option() => Ok(()),
            Some(token) => Err(ReadError::grammar_violation(
                TokenKind::Value,
                token.text.clone(),
                self.context_excluding_current(),
            )),
            None => Err(ReadError::missing_value(self.latest_option.clone())),
        }
    }

    /// Error for a dispatch fallback: the current token is not one the
    /// caller understands.
    pub fn unexpected_argument(&self) -> ReadError {
        ReadError::unexpected_argument(
            self.current().map(str::to_owned),
            self.context_excluding_current(),
        )
    }

    /// Latest option, unless that option is the current token itself.
    fn context_excluding_current(&self) -> Option<String> {
        if self.is_option() {
            None
        } else {
            self.latest_option.clone()
        }
    }
}

fn parse_integer(text: &str, context: Option<String>) -> Result<i64, ReadError> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| ReadError::type_mismatch(text, context))
        .inspect_err(|err| debug!(%err, "integer conversion failed"))
}

/// Iterator draining a [`CommandLine`], returned by
/// [`CommandLine::tokens`].
pub struct Tokens<'a> {
    reader: &'a mut CommandLine,
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.reader.advance_token().cloned()
    }
}
