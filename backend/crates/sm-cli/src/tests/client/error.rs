use crate::ClientError;

#[test]
fn test_api_error_display_names_message_and_code() {
    let err = ClientError::api_error("NOT_FOUND", "Export file not found");

    let text = err.to_string();

    assert!(text.starts_with("API error: Export file not found (code: NOT_FOUND)"));
    assert_eq!(err.api_code(), Some("NOT_FOUND"));
}

#[test]
fn test_json_error_has_no_api_code() {
    let parse = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();

    let err = ClientError::from(parse);

    assert!(err.to_string().starts_with("JSON parse error:"));
    assert!(err.api_code().is_none());
}
