use rechain::{TextConverter, whitespace_normalizer};

const WHITESPACE: [&str; 5] = [" ", "\t", "\n", "\u{0C}", "\r"];

fn string_to_value(text: Option<&str>) -> Option<String> {
    whitespace_normalizer().convert(text)
}

fn value_to_string(value: Option<&str>) -> Option<String> {
    whitespace_normalizer().render(value)
}

/// Fills `{}` in `template` with each whitespace, then with each
/// `a b a` mix of whitespaces, and checks every result.
fn check_string_to_value(expected: &str, template: &str) {
    for a in WHITESPACE {
        let single = template.replace("{}", a);
        assert_eq!(
            string_to_value(Some(&single)).as_deref(),
            Some(expected),
            "input {single:?}"
        );
        for b in WHITESPACE {
            let mixed = template.replace("{}", &format!("{a}{b}{a}"));
            assert_eq!(
                string_to_value(Some(&mixed)).as_deref(),
                Some(expected),
                "input {mixed:?}"
            );
        }
    }
}

#[test]
fn absent_text_to_absent_value() {
    assert_eq!(string_to_value(None), None);
}

#[test]
fn empty_text_to_empty_value() {
    assert_eq!(string_to_value(Some("")).as_deref(), Some(""));
}

#[test]
fn plain_text_to_value() {
    assert_eq!(string_to_value(Some("text")).as_deref(), Some("text"));
}

#[test]
fn already_normalized_text_unchanged() {
    assert_eq!(string_to_value(Some("text text")).as_deref(), Some("text text"));
}

#[test]
fn absent_value_to_absent_text() {
    assert_eq!(value_to_string(None), None);
}

#[test]
fn empty_value_to_empty_text() {
    assert_eq!(value_to_string(Some("")).as_deref(), Some(""));
}

#[test]
fn value_to_text_is_not_renormalized() {
    assert_eq!(value_to_string(Some("text")).as_deref(), Some("text"));
    assert_eq!(value_to_string(Some(" a  b ")).as_deref(), Some(" a  b "));
}

#[test]
fn prefix_whitespace_stripped() {
    assert_eq!(string_to_value(Some("  test")).as_deref(), Some("test"));
    check_string_to_value("test", "{}test");
}

#[test]
fn suffix_whitespace_stripped() {
    assert_eq!(string_to_value(Some("test  ")).as_deref(), Some("test"));
    check_string_to_value("test", "test{}");
}

#[test]
fn infix_whitespace_collapsed() {
    assert_eq!(string_to_value(Some("test\ttest")).as_deref(), Some("test test"));
    assert_eq!(
        string_to_value(Some("test    test")).as_deref(),
        Some("test test")
    );
    check_string_to_value("test test", "test{}test");
}

#[test]
fn surrounding_and_infix_together() {
    assert_eq!(
        string_to_value(Some("\r\n  first \t\t second\u{0B}\u{0B}third  \n")).as_deref(),
        Some("first second third")
    );
}

#[test]
fn whitespace_only_becomes_empty() {
    for a in WHITESPACE {
        for b in WHITESPACE {
            let blank = format!("{a}{b}{a}");
            assert_eq!(string_to_value(Some(&blank)).as_deref(), Some(""));
        }
    }
}
