//! Quote handling through the public reader API, plus the argument
//! joining round-trip.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]

use argline::{join_args, CommandLine};
use pretty_assertions::assert_eq;

fn texts(source: &str) -> Vec<(String, bool, bool)> {
    CommandLine::new(source)
        .tokens()
        .map(|t| (t.text.clone(), t.is_option(), t.quoted))
        .collect()
}

fn v(text: &str, quoted: bool) -> (String, bool, bool) {
    (text.to_owned(), false, quoted)
}

fn o(text: &str) -> (String, bool, bool) {
    (text.to_owned(), true, false)
}

#[test]
fn unterminated_quote() {
    assert_eq!(
        texts(r#"-title "never closed"#),
        vec![o("-title"), v("never closed", true)]
    );
}

#[test]
fn doubled_quote() {
    assert_eq!(
        texts(r#"-say "He said ""hi""""#),
        vec![o("-say"), v(r#"He said "hi""#, true)]
    );
}

#[test]
fn quote_adjacent_to_text() {
    assert_eq!(
        texts(r#""left"right -x"#),
        vec![v("left", true), v("right", false), o("-x")]
    );
}

#[test]
fn text_adjacent_to_quote() {
    assert_eq!(texts(r#"left"right""#), vec![v(r#"left"right""#, false)]);
}

#[test]
fn trailing_doubled_quote_at_end_is_tolerated() {
    assert_eq!(texts(r#""abc"""#), vec![v(r#"abc""#, true)]);
}

#[test]
fn empty_quoted_value() {
    assert_eq!(
        texts(r#"-name "" next"#),
        vec![o("-name"), v("", true), v("next", false)]
    );
}

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod proptest_join {
    use super::*;
    use proptest::prelude::*;

    fn argument() -> impl Strategy<Value = String> {
        proptest::collection::vec(
            prop_oneof![
                Just(' '),
                Just('"'),
                Just('-'),
                Just('a'),
                Just('\t'),
                Just('\u{e9}'),
            ],
            0..8,
        )
        .prop_map(|chars| chars.into_iter().collect::<String>())
    }

    proptest! {
        #[test]
        fn joined_args_read_back_verbatim(args in proptest::collection::vec(argument(), 0..8)) {
            let mut line = CommandLine::new(&join_args(&args));
            let mut read = Vec::new();
            while let Some(arg) = line.read_next_argument() {
                read.push(arg.to_owned());
            }
            prop_assert_eq!(read, args);
        }
    }
}
