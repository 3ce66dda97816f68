#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::path::Path;

use erratic_core::error::ErrorKind;
use erratic_core::RateUnit;
use erratic_server::config::{self, ServerConfig};

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
rate:
  defualt: 0.5 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.server.host, "0.0.0.0");
    assert_eq!(cfg.rate.default, 0.001);
    assert_eq!(cfg.rate.unit, RateUnit::Raw);
    assert_eq!(cfg.rate.file_path(), std::env::temp_dir().join("rate.txt"));
}

#[test]
fn ok_full_config() {
    let ok = r#"
version: 1
server:
  host: "127.0.0.1"
  port: 9090
rate:
  file: "/var/tmp/erratic-rate.txt"
  default: 0.2
  unit: fraction
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.server.listen_addr().unwrap().to_string(), "127.0.0.1:9090");
    assert_eq!(cfg.rate.file_path(), Path::new("/var/tmp/erratic-rate.txt"));
    assert_eq!(cfg.rate.default, 0.2);
    assert_eq!(cfg.rate.unit, RateUnit::Fraction);
}

#[test]
fn rejects_bad_values() {
    for bad in [
        "version: 2\n",
        "version: 1\nrate:\n  default: 1.5\n",
        "version: 1\nrate:\n  unit: percent\n",
        "version: 1\nserver:\n  host: \"not-an-ip\"\n",
        "version: 1\nserver:\n  port: 70000\n",
    ] {
        let err = config::load_from_str(bad).expect_err(bad);
        assert_eq!(err.kind(), ErrorKind::Config, "{bad}");
    }
}

#[test]
fn port_override() {
    let mut cfg = ServerConfig::default();
    cfg.apply_port_override(Some("3000")).unwrap();
    assert_eq!(cfg.server.port, 3000);

    cfg.apply_port_override(None).unwrap();
    cfg.apply_port_override(Some("")).unwrap();
    assert_eq!(cfg.server.port, 3000);

    let err = cfg.apply_port_override(Some("http")).expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[test]
fn missing_config_file_is_config_error() {
    let err = config::load_from_file("/definitely/not/here.yaml").expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::Config);
}
