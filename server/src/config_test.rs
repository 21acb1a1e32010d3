use super::*;

// =============================================================================
// parse helpers
// =============================================================================

#[test]
fn port_defaults_when_unset_or_blank() {
    assert_eq!(parse_port(None), Ok(3000));
    assert_eq!(parse_port(Some("  ")), Ok(3000));
}

#[test]
fn port_parses_number() {
    assert_eq!(parse_port(Some("8080")), Ok(8080));
}

#[test]
fn port_rejects_garbage() {
    assert_eq!(parse_port(Some("eighty")), Err(ConfigError::InvalidPort { value: "eighty".to_owned() }));
    assert!(parse_port(Some("70000")).is_err());
}

#[test]
fn host_defaults_to_all_interfaces() {
    assert_eq!(parse_host(None), "0.0.0.0");
    assert_eq!(parse_host(Some("")), "0.0.0.0");
    assert_eq!(parse_host(Some("127.0.0.1")), "127.0.0.1");
}

#[test]
fn bind_addr_joins_host_and_port() {
    let config = ServerConfig { host: "127.0.0.1".to_owned(), port: 4000 };
    assert_eq!(config.bind_addr(), "127.0.0.1:4000");
}

#[test]
fn invalid_port_message_names_value() {
    let err = ConfigError::InvalidPort { value: "x".to_owned() };
    assert_eq!(err.to_string(), "invalid PORT value: \"x\"");
}
