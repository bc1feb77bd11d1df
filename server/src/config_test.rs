use std::collections::HashMap;

use super::*;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

// =============================================================
// Defaults and overrides
// =============================================================

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, ServerConfig { port: DEFAULT_PORT, site_root: None });
    assert_eq!(cfg.bind_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", " 8080 "), ("DASHBOARD_SITE_ROOT", "target/site")])).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.site_root, Some(PathBuf::from("target/site")));
}

// =============================================================
// Rejections
// =============================================================

#[test]
fn rejects_bad_port() {
    for bad in ["abc", "0", "70000", ""] {
        let err = ServerConfig::from_lookup(lookup(&[("PORT", bad)])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort { value: bad.to_owned() });
    }
}

#[test]
fn rejects_blank_site_root() {
    let err = ServerConfig::from_lookup(lookup(&[("DASHBOARD_SITE_ROOT", "  ")])).unwrap_err();
    assert_eq!(err, ConfigError::EmptySiteRoot);
}
