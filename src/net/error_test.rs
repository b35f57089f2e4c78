use super::*;

#[test]
fn display_names_the_failure_class() {
    assert_eq!(
        FetchError::Network("connection refused".to_owned()).to_string(),
        "network error: connection refused"
    );
    assert_eq!(
        FetchError::Status(500).to_string(),
        "unexpected response status: 500"
    );
    assert_eq!(
        FetchError::MalformedPayload("expected a sequence".to_owned()).to_string(),
        "malformed payload: expected a sequence"
    );
    assert_eq!(FetchError::EmptyResult.to_string(), "no data for this feature");
}

#[test]
fn empty_result_is_the_only_empty_class() {
    assert!(FetchError::EmptyResult.is_empty());
    assert!(!FetchError::Status(404).is_empty());
    assert!(!FetchError::unavailable().is_empty());
}

#[test]
fn unavailable_is_a_network_failure() {
    assert!(matches!(FetchError::unavailable(), FetchError::Network(_)));
}
