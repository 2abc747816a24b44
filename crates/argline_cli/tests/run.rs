//! Dispatch tests for the CLI entry point.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]

use argline::CommandLine;
use argline_cli::{run, CliError};
use pretty_assertions::assert_eq;

/// Run the CLI over split arguments with `stdin` as input.
fn run_args(args: &[&str], stdin: &str) -> Result<String, CliError> {
    let mut line = CommandLine::from_args(args);
    let mut input = stdin.as_bytes();
    let mut out = Vec::new();
    run(&mut line, &mut input, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn no_arguments_prints_usage() {
    let out = run_args(&[], "").unwrap();
    assert!(out.starts_with("argline - quote-aware command-line reader"));
}

#[test]
fn help_prints_usage() {
    let out = run_args(&["help"], "").unwrap();
    assert!(out.contains("Usage: argline <command> [options]"));
}

#[test]
fn tokens_with_line_option() {
    let out = run_args(&["tokens", "-line", r#"a -b "-c d""#], "").unwrap();
    assert_eq!(
        out,
        "Tokens (3 tokens):\n  value  bare   a\n  option bare   -b\n  value  quoted -c d\n"
    );
}

#[test]
fn tokens_reads_stdin_by_default() {
    let out = run_args(&["tokens"], "x \"y z\"\n").unwrap();
    assert_eq!(
        out,
        "Tokens (2 tokens):\n  value  bare   x\n  value  quoted y z\n"
    );
}

#[test]
fn demo_uses_sample_by_default() {
    let out = run_args(&["demo"], "").unwrap();
    assert!(out.starts_with("Command\n  -option1 = SpamAndEggs\n"));
    assert!(out.contains("  -option2 = -notanoption.jpg\n"));
}

#[test]
fn demo_with_line_option() {
    let out = run_args(&["demo", "-line", "Run -numbers 1 2"], "").unwrap();
    assert_eq!(out, "Run\n  -numbers = 1 2\n");
}

#[test]
fn unknown_command_is_unexpected() {
    let err = run_args(&["frobnicate"], "").unwrap_err();
    assert_eq!(err.to_string(), r#"unexpected argument "frobnicate""#);
}

#[test]
fn option_as_command_is_grammar_violation() {
    let err = run_args(&["-h"], "").unwrap_err();
    assert_eq!(err.to_string(), r#"expected a value but found option "-h""#);
}

#[test]
fn unknown_option_is_unexpected() {
    let err = run_args(&["tokens", "-lines", "x"], "").unwrap_err();
    assert_eq!(err.to_string(), r#"unexpected argument "-lines""#);
}

#[test]
fn line_option_without_value_names_option() {
    let err = run_args(&["demo", "-line"], "").unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"Following Option "-line" expected a value but reached the end of the arguments"#
    );
}

#[test]
fn stray_value_after_command_is_grammar_violation() {
    let err = run_args(&["tokens", "stray"], "").unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"expected an option but found value "stray""#
    );
}
