use super::*;
use pretty_assertions::assert_eq;

#[test]
fn simple_argument_is_borrowed() {
    assert!(matches!(quote_argument("SpamAndEggs"), Cow::Borrowed("SpamAndEggs")));
    assert!(matches!(quote_argument("-option1"), Cow::Borrowed("-option1")));
}

#[test]
fn empty_argument_is_quoted() {
    assert_eq!(quote_argument(""), r#""""#);
}

#[test]
fn whitespace_argument_is_quoted() {
    assert_eq!(quote_argument("Spam and Eggs"), r#""Spam and Eggs""#);
    assert_eq!(quote_argument("tab\there"), "\"tab\there\"");
}

#[test]
fn leading_quote_is_doubled() {
    assert_eq!(quote_argument(r#""x"#), r#""""x""#);
}

#[test]
fn inner_quote_without_whitespace_is_verbatim() {
    assert_eq!(quote_argument(r#"ab"cd"#), r#"ab"cd"#);
}

#[test]
fn inner_quotes_doubled_when_quoting() {
    assert_eq!(quote_argument(r#"say "hi""#), r#""say ""hi""""#);
}

#[test]
fn join_separates_with_single_space() {
    assert_eq!(
        join_args(["Command", "-option2", "-notanoption.jpg"]),
        "Command -option2 -notanoption.jpg"
    );
}

#[test]
fn join_quotes_where_needed() {
    assert_eq!(
        join_args(vec!["copy".to_owned(), "my file.txt".to_owned(), String::new()]),
        r#"copy "my file.txt" """#
    );
}

#[test]
fn join_empty_list() {
    assert_eq!(join_args(Vec::<String>::new()), "");
}
