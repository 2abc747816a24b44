//! Command handlers for the `argline` CLI.
//!
//! Handlers write to a caller-supplied writer so they can be driven from
//! tests as well as from `main`.

use std::io::{self, Write};

use argline::{CommandLine, Token};

use crate::demo::parse_sample;
use crate::CliError;

/// Print usage information.
pub fn print_usage(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "argline - quote-aware command-line reader")?;
    writeln!(out)?;
    writeln!(out, "Usage: argline <command> [options]")?;
    writeln!(out)?;
    writeln!(out, "Commands:")?;
    writeln!(
        out,
        "  tokens [-line <text>]   List the tokens of <text> (default: standard input)"
    )?;
    writeln!(
        out,
        "  demo [-line <text>]     Parse <text> with the sample grammar (default: built-in sample)"
    )?;
    writeln!(out, "  help                    Show this help message")?;
    writeln!(out)?;
    writeln!(out, "Environment:")?;
    writeln!(
        out,
        "  RUST_LOG                Log filter, e.g. RUST_LOG=argline=trace"
    )?;
    writeln!(
        out,
        "  ARGLINE_LOG_TREE        Print logs as an indented span tree"
    )?;
    Ok(())
}

/// One aligned listing line for a token.
pub fn format_token(token: &Token) -> String {
    let quoting = if token.quoted { "quoted" } else { "bare" };
    format!("{:<6} {quoting:<6} {}", token.kind, token.text)
}

/// Tokenize `source` and display the token stream.
pub fn list_tokens(source: &str, out: &mut dyn Write) -> io::Result<()> {
    let mut line = CommandLine::new(source);
    if line.is_empty() {
        writeln!(out, "Empty command line")?;
        return Ok(());
    }
    let tokens: Vec<Token> = line.tokens().collect();
    writeln!(out, "Tokens ({} tokens):", tokens.len())?;
    for token in &tokens {
        writeln!(out, "  {}", format_token(token))?;
    }
    Ok(())
}

/// Parse `source` with the sample grammar and display the result.
pub fn run_demo(source: &str, out: &mut dyn Write) -> Result<(), CliError> {
    let commands = parse_sample(&mut CommandLine::new(source))?;
    for command in &commands {
        writeln!(out, "{}", command.name)?;
        for (option, value) in &command.values {
            writeln!(out, "  {option} = {value}")?;
        }
        for (first, second) in &command.numbers {
            writeln!(out, "  -numbers = {first} {second}")?;
        }
    }
    Ok(())
}
