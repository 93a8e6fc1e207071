use super::*;
use assert_matches::assert_matches;

#[test]
fn test_log() {
    let err = Error::Io(std::io::Error::other("test"));
    let mut buf = Vec::new();
    err.log_to(&mut buf).unwrap();
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "\u{1b}[1m\u{1b}[91merror:\u{1b}[39m\u{1b}[0m test\n"
    );
}

#[test]
fn test_display() {
    assert_eq!(
        Error::MissingInput { what: "text" }.to_string(),
        "missing text in input"
    );
    assert_eq!(
        Error::from(wildcard::Error::EmptyPattern).to_string(),
        "wildcard pattern is empty"
    );
}

#[test]
fn test_from_wildcard() {
    let err: Error = wildcard::Error::NotInitialized.into();
    assert_matches!(err, Error::Wildcard(wildcard::Error::NotInitialized));
}
