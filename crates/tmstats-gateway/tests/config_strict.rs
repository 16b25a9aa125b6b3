#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use tmstats_gateway::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
stats:
  listen: "0.0.0.0:8888"
collector:
  max_exception_per_instance: 10 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let ok = "version: 1\n";
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.stats.listen, "0.0.0.0:8888");
    assert_eq!(cfg.collector.max_exceptions_per_instance, 100);
}

#[test]
fn rejects_unparseable_listen() {
    let bad = r#"
version: 1
stats:
  listen: "localhost"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn rejects_unknown_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn rejects_zero_exception_bound() {
    let bad = r#"
version: 1
collector:
  max_exceptions_per_instance: 0
"#;
    assert!(config::load_from_str(bad).is_err());
}
