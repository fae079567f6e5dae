use super::*;

#[test]
fn default_config_uses_relative_paths() {
    let config = ApiConfig::default();
    assert_eq!(config.endpoint("/password/forgot"), "/password/forgot");
}

#[test]
fn new_trims_whitespace_and_trailing_slashes() {
    let config = ApiConfig::new("  https://api.example.com//  ");
    assert_eq!(config.base_url, "https://api.example.com");
}

#[test]
fn endpoint_joins_with_single_slash() {
    let config = ApiConfig::new("https://api.example.com/");
    assert_eq!(config.endpoint("/password/reset"), "https://api.example.com/password/reset");
    assert_eq!(config.endpoint("password/reset"), "https://api.example.com/password/reset");
}

