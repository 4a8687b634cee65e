use super::*;

#[test]
fn parse_token_response_reads_token_and_expiry() {
    let token = parse_token_response(r#"{"access_token":"abc","expires_in":3600}"#).unwrap();
    assert_eq!(token.value(), "abc");
    assert_eq!(token.expires_in(), Some(3600));
}

#[test]
fn parse_token_response_allows_missing_expiry() {
    let token = parse_token_response(r#"{"access_token":"abc"}"#).unwrap();
    assert_eq!(token.expires_in(), None);
}

#[test]
fn parse_token_response_rejects_blank_token() {
    assert_eq!(
        parse_token_response(r#"{"access_token":"  "}"#),
        Err(TokenError::Parse("empty access_token".to_owned()))
    );
}

#[test]
fn parse_token_response_rejects_malformed_json() {
    assert!(matches!(parse_token_response("not json"), Err(TokenError::Parse(_))));
    assert!(matches!(parse_token_response(r#"{"token":"abc"}"#), Err(TokenError::Parse(_))));
}

#[test]
fn access_token_debug_redacts_value() {
    let token = parse_token_response(r#"{"access_token":"super-secret"}"#).unwrap();
    let rendered = format!("{token:?}");
    assert!(!rendered.contains("super-secret"));
    assert!(rendered.contains("<redacted>"));
}

#[test]
fn bearer_prefixes_scheme() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

#[test]
fn default_store_targets_token_endpoint() {
    let store = BrowserTokenStore::default();
    assert!(store.endpoint().ends_with("/api/auth/token"));
    assert_eq!(store.storage_key(), DEFAULT_STORAGE_KEY);
}

#[test]
fn token_error_messages_are_descriptive() {
    assert_eq!(TokenError::Status(401).to_string(), "token refresh failed: 401");
    assert_eq!(TokenError::Unavailable.to_string(), "access token not available on server");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn save_access_token_is_unavailable_off_browser() {
    let store = BrowserTokenStore::default();
    assert_eq!(futures::executor::block_on(store.save_access_token()), Err(TokenError::Unavailable));
    assert_eq!(store.read_access_token(), None);
}
