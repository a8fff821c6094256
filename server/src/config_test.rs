use super::*;
use std::collections::HashMap;

fn parse(vars: &[(&str, &str)]) -> Result<HostConfig, ConfigError> {
    let map: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    HostConfig::from_vars(|key| map.get(key).cloned())
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = parse(&[]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
    assert_eq!(cfg.site_root, None);
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn reads_overrides() {
    let cfg = parse(&[("PORT", "8080"), ("BIND_ADDR", "127.0.0.1"), ("SITE_ROOT", "target/site")]).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.site_root.as_deref(), Some("target/site"));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = parse(&[("PORT", "  "), ("SITE_ROOT", "")]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.site_root, None);
}

#[test]
fn accepts_ipv6_bind_addr() {
    let cfg = parse(&[("BIND_ADDR", "::1"), ("PORT", "9000")]).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "[::1]:9000");
}

#[test]
fn rejects_malformed_port() {
    let err = parse(&[("PORT", "eighty")]).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(ref raw) if raw == "eighty"));

    let err = parse(&[("PORT", "70000")]).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(_)));
}

#[test]
fn rejects_malformed_bind_addr() {
    let err = parse(&[("BIND_ADDR", "localhost")]).unwrap_err();
    assert_eq!(err.to_string(), "invalid BIND_ADDR: \"localhost\"");
}
