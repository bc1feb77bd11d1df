use super::*;

#[test]
fn new_trims_trailing_slashes() {
    let config = ApiConfig::new("https://api.example.com//");
    assert_eq!(config.base_url(), "https://api.example.com");
}

#[test]
fn new_blank_falls_back_to_default() {
    assert_eq!(ApiConfig::new("  ").base_url(), DEFAULT_API_BASE);
}

#[test]
fn endpoint_joins_with_single_slash() {
    let config = ApiConfig::new("http://localhost:8000/");
    assert_eq!(config.endpoint("/admin/numbers"), "http://localhost:8000/admin/numbers");
    assert_eq!(config.endpoint("member/login"), "http://localhost:8000/member/login");
}

#[test]
fn from_build_env_is_never_empty() {
    assert!(!ApiConfig::from_build_env().base_url().is_empty());
}
