use super::*;

#[test]
fn status_error_mentions_code() {
    assert_eq!(ApiError::Status(503).to_string(), "request failed with status 503");
}

#[test]
fn normalize_error_is_transparent() {
    let err: ApiError = NormalizeError::MissingId.into();
    assert_eq!(err.to_string(), NormalizeError::MissingId.to_string());
}

#[test]
fn serde_errors_become_decode_errors() {
    let err = serde_json::from_str::<Chat>("{").unwrap_err();
    assert!(matches!(ApiError::from(err), ApiError::Decode(_)));
}
