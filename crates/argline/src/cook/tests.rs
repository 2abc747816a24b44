use super::*;
use argline_core::{RawScanner, SourceBuffer};
use pretty_assertions::assert_eq;

/// Helper: scan and cook the first token of `source`.
fn cook_first(source: &str) -> Token {
    let buf = SourceBuffer::new(source);
    let mut scanner = RawScanner::new(buf.cursor());
    let raw = scanner.next_token();
    cook_token(&buf.cursor(), raw)
}

fn value(text: &str, quoted: bool) -> Token {
    Token {
        text: text.to_owned(),
        kind: TokenKind::Value,
        quoted,
    }
}

// === Fast path ===

#[test]
fn collapse_without_quotes_is_none() {
    assert_eq!(collapse_doubled_quotes("plain text"), None);
}

#[test]
fn collapse_doubled_pairs() {
    assert_eq!(
        collapse_doubled_quotes(r#"say ""hi"""#).as_deref(),
        Some(r#"say "hi""#)
    );
}

// === Unquoted ===

#[test]
fn plain_token_is_verbatim() {
    assert_eq!(cook_first("  SpamAndEggs "), value("SpamAndEggs", false));
}

#[test]
fn option_token_is_verbatim() {
    assert_eq!(
        cook_first("-option1"),
        Token {
            text: "-option1".to_owned(),
            kind: TokenKind::Option,
            quoted: false,
        }
    );
}

#[test]
fn quote_inside_unquoted_token_is_kept() {
    assert_eq!(cook_first(r#"ab""cd"#), value(r#"ab""cd"#, false));
}

// === Quoted ===

#[test]
fn quoted_token_strips_delimiters() {
    assert_eq!(cook_first(r#""Spam and Eggs""#), value("Spam and Eggs", true));
}

#[test]
fn quoted_dash_is_value() {
    assert_eq!(
        cook_first(r#""-notanoption.jpg""#),
        value("-notanoption.jpg", true)
    );
}

#[test]
fn empty_quoted_token_is_empty_value() {
    assert_eq!(cook_first(r#""""#), value("", true));
}

#[test]
fn doubled_quotes_collapse() {
    assert_eq!(
        cook_first(r#""say ""hi"" now""#),
        value(r#"say "hi" now"#, true)
    );
}

#[test]
fn only_doubled_quote_is_single_quote() {
    assert_eq!(cook_first(r#""""""#), value(r#"""#, true));
}

// === Unterminated ===

#[test]
fn unterminated_keeps_rest_of_input() {
    assert_eq!(cook_first(r#""open ended"#), value("open ended", true));
}

#[test]
fn lone_quote_is_empty_value() {
    assert_eq!(cook_first(r#"""#), value("", true));
}

#[test]
fn trailing_doubled_quote_is_truncated_not_rejected() {
    assert_eq!(cook_first(r#""abc"""#), value(r#"abc""#, true));
}

#[test]
fn multibyte_content_survives() {
    assert_eq!(cook_first("\"caf\u{e9} \u{1F600}\""), value("caf\u{e9} \u{1F600}", true));
}
