use super::escape::*;

#[test]
fn safe_labels_pass_through() {
    for label in ["", "abc", "/a+b*/", "x = y; z", "ünïcödé"] {
        assert_eq!(escape_label(label), label);
    }
}

#[test]
fn backslash_and_quote_are_escaped() {
    assert_eq!(escape_label(r#"a\b"#), r#"a\\b"#);
    assert_eq!(escape_label(r#"say "hi""#), r#"say \"hi\""#);
    assert_eq!(escape_label(r#"\""#), r#"\\\""#);
}

#[test]
fn escaping_safe_output_is_stable() {
    let once = escape_label("/[a-z]+/").into_owned();
    let twice = escape_label(&once).into_owned();

    assert_eq!(once, twice);
}

#[test]
fn distinct_labels_stay_distinct() {
    let labels = [r#"\"#, r#"""#, r#"\\"#, r#"\""#, r#""\"#, r#""""#, "a", r#"a\"#];
    let escaped: std::collections::HashSet<_> =
        labels.iter().map(|l| escape_label(l).into_owned()).collect();

    assert_eq!(escaped.len(), labels.len());
}

#[test]
fn record_plain_units() {
    assert_eq!(escape_record(b'a' as u16), "a");
    assert_eq!(escape_record(b'0' as u16), "0");
}

#[test]
fn record_syntax_units() {
    assert_eq!(escape_record(b'{' as u16), r"\{");
    assert_eq!(escape_record(b'|' as u16), r"\|");
    assert_eq!(escape_record(b'<' as u16), r"\<");
    assert_eq!(escape_record(b' ' as u16), r"\ ");
    assert_eq!(escape_record(b'\\' as u16), r"\\");
}

#[test]
fn record_non_printable_units() {
    assert_eq!(escape_record(0), r"\\u0000");
    assert_eq!(escape_record(0xFFFF), r"\\uffff");
}
