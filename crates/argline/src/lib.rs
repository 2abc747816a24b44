//! Pull-based, quote-aware command-line reader.
//!
//! A [`CommandLine`] walks one raw command-line string token by token. Each
//! read states what it expects next (an option, a value, an integer) and
//! fails with a [`ReadError`] when the input disagrees. Errors name the
//! offending text and the option being processed, so they can be shown to
//! the user as-is.
//!
//! ```
//! use argline::CommandLine;
//!
//! let mut line = CommandLine::new(r#"resize -width 640 -out "-thumb.png""#);
//! assert_eq!(line.read_next_argument(), Some("resize"));
//! assert_eq!(line.read_next_option()?, Some("-width"));
//! assert_eq!(line.read_next_value_as_integer()?, 640);
//! assert_eq!(line.read_next_option()?, Some("-out"));
//! assert_eq!(line.read_next_value()?, "-thumb.png");
//! assert_eq!(line.read_next_option()?, None);
//! # Ok::<(), argline::ReadError>(())
//! ```
//!
//! # Tokens
//!
//! Tokens are separated by whitespace. A token starting with `-` is an
//! option unless it was quoted. Quoted tokens (`"..."`) may contain
//! whitespace; a doubled quote `""` inside them is a literal `"`. An
//! unterminated quote runs to the end of the input.
//!
//! # Tracing
//!
//! Scanned tokens are logged at `trace` level and failed reads at `debug`
//! level under the `argline` target. Install a subscriber in the host to see
//! them (e.g. `RUST_LOG=argline=trace`).

mod cook;
mod error;
mod quote;
mod reader;
mod token;

pub use error::{ReadError, ReadErrorKind};
pub use quote::{join_args, quote_argument};
pub use reader::{CommandLine, CursorState, Tokens};
pub use token::{Token, TokenKind};
