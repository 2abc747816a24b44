//! Re-joining an already split argument list into one command line.
//!
//! Hosts that receive arguments pre-split (the process arguments, a test
//! fixture) join them back with [`join_args`] so the reader sees the same
//! texts again. An argument is quoted only when reading it back verbatim
//! would change it: it is empty, starts with a quote, or contains
//! whitespace. Inner quotes are doubled.

use std::borrow::Cow;

use argline_core::QUOTE_MARKER;

/// Quote `arg` if it would not read back verbatim as a single token.
///
/// An argument that starts with `-` and needs quoting stops being an option.
pub fn quote_argument(arg: &str) -> Cow<'_, str> {
    let needs_quotes = arg.is_empty()
        || arg.as_bytes()[0] == QUOTE_MARKER
        || arg.chars().any(char::is_whitespace);
    if !needs_quotes {
        return Cow::Borrowed(arg);
    }
    let mut quoted = String::with_capacity(arg.len() + 2);
    quoted.push('"');
    for c in arg.chars() {
        if c == '"' {
            quoted.push('"');
        }
        quoted.push(c);
    }
    quoted.push('"');
    Cow::Owned(quoted)
}

/// Join arguments into one command line, quoting where needed.
pub fn join_args<I>(args: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut line = String::new();
    for arg in args {
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(&quote_argument(arg.as_ref()));
    }
    line
}

#[cfg(test)]
mod tests;
