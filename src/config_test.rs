use super::*;

#[test]
fn new_strips_trailing_slashes() {
    let config = ApiConfig::new("https://api.example.com///");
    assert_eq!(config.base_url(), "https://api.example.com");
}

#[test]
fn empty_base_url_is_same_origin() {
    let config = ApiConfig::new("");
    assert!(config.is_same_origin());
    assert_eq!(config.url("/api/users/me"), "/api/users/me");
}

#[test]
fn slash_only_base_url_is_same_origin() {
    assert!(ApiConfig::new("/").is_same_origin());
}

#[test]
fn url_joins_base_and_path() {
    let config = ApiConfig::new("http://localhost:5000/");
    assert_eq!(config.url("/api/apartments/a1"), "http://localhost:5000/api/apartments/a1");
}

#[test]
fn poll_interval_is_ten_seconds() {
    assert_eq!(INCOMING_POLL_INTERVAL.as_secs(), 10);
}
