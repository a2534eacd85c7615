use crate::Client;

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("https://migration.example.com/", None);
    assert_eq!(client.base_url, "https://migration.example.com");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("https://migration.example.com", None);
    assert_eq!(client.base_url, "https://migration.example.com");
}

#[test]
fn test_token_stored() {
    let client = Client::new("https://migration.example.com", Some("tok-123"));
    assert_eq!(client.token, Some("tok-123".to_string()));
}

#[test]
fn test_token_none() {
    let client = Client::new("https://migration.example.com", None);
    assert!(client.token.is_none());
}
