use super::*;

#[test]
fn identifier_normal_usage() {
    let identifier = Identifier::try_from("AAPL").unwrap();
    assert_eq!(identifier.as_str(), "AAPL");
    assert_eq!(identifier.to_string(), "AAPL");
}

#[test]
fn identifier_trims_surrounding_whitespace() {
    let identifier = Identifier::try_from("  MSFT ").unwrap();
    assert_eq!(identifier.as_str(), "MSFT");
}

#[test]
fn identifier_rejects_empty_string() {
    let result = Identifier::try_from("");
    result.unwrap_err();
}

#[test]
fn identifier_rejects_whitespace_string() {
    let result = Identifier::try_from("   ");
    result.unwrap_err();
}

#[test]
fn identifier_rejects_too_long_string() {
    let long_string = "A".repeat(MAX_IDENTIFIER_LENGTH + 1);
    let result = Identifier::try_from(long_string.as_str());
    result.unwrap_err();
}

#[test]
fn identifier_accepts_max_length() {
    let max = "A".repeat(MAX_IDENTIFIER_LENGTH);
    let identifier = Identifier::try_from(max.as_str()).unwrap();
    assert_eq!(identifier.len(), MAX_IDENTIFIER_LENGTH);
}
