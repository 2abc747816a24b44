//! Front end for the `argline` reader.
//!
//! The binary reads its own arguments with [`argline::CommandLine`]: a
//! command name, then option/value pairs, with
//! [`CommandLine::unexpected_argument`] as the dispatch fallback.
//!
//! # Logging
//!
//! - `RUST_LOG=argline=debug`: failed reads and resets.
//! - `RUST_LOG=argline=trace`: every scanned token, inside per-read spans.
//! - `ARGLINE_LOG_TREE=1`: render spans as an indented tree.

pub mod commands;
pub mod demo;

use std::io::{self, Read, Write};
use std::sync::Once;

use argline::{CommandLine, ReadError};
use thiserror::Error;

use crate::demo::SAMPLE_LINE;

/// Errors surfaced to the user by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times. Does nothing
/// unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        if std::env::var_os("ARGLINE_LOG_TREE").is_some() {
            tracing_subscriber::registry()
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}

/// Dispatch the command held in `args`.
///
/// `input` backs `tokens` when no `-line` is given; all output goes to
/// `out`.
pub fn run(
    args: &mut CommandLine,
    input: &mut dyn Read,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let Some(command) = args.read_next_argument().map(str::to_owned) else {
        commands::print_usage(out)?;
        return Ok(());
    };
    args.assert_current_is_value()?;
    tracing::debug!(%command, "dispatching command");

    match command.as_str() {
        "tokens" => {
            let text = match read_line_option(args)? {
                Some(text) => text,
                None => io::read_to_string(input)?,
            };
            commands::list_tokens(&text, out)?;
        }
        "demo" => {
            let text = read_line_option(args)?.unwrap_or_else(|| SAMPLE_LINE.to_owned());
            commands::run_demo(&text, out)?;
        }
        "help" => commands::print_usage(out)?,
        _ => return Err(args.unexpected_argument().into()),
    }
    Ok(())
}

/// Read the `-line <text>` option shared by `tokens` and `demo`.
fn read_line_option(args: &mut CommandLine) -> Result<Option<String>, ReadError> {
    let mut line = None;
    while let Some(option) = args.read_next_option()?.map(str::to_owned) {
        match option.as_str() {
            "-line" => line = Some(args.read_next_value()?.to_owned()),
            _ => return Err(args.unexpected_argument()),
        }
    }
    Ok(line)
}
