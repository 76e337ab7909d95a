//! Command-line and environment overrides on top of the config file.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use clap::Parser;

use tile38_prom_core::error::ErrorKind;
use tile38_prom_exporter::cli::Cli;
use tile38_prom_exporter::config;

#[test]
fn flags_override_file_values() {
    let mut cfg = config::load_from_str(
        "backend: { addr: \"10.0.0.1:9851\" }\nmetrics: { namespace: \"from_file\" }",
    )
    .unwrap();

    let cli = Cli::try_parse_from([
        "tile38-prometheus",
        "--tile38-addr",
        "10.0.0.2:9852",
        "--tile38-auth",
        "secret",
        "--http-addr",
        ":9200",
        "--namespace",
        "svc",
    ])
    .unwrap();
    cli.apply(&mut cfg);
    cfg.validate().unwrap();

    assert_eq!(cfg.backend.addr, "10.0.0.2:9852");
    assert_eq!(cfg.backend.auth_secret(), Some("secret"));
    assert_eq!(cfg.http.listen_addr().unwrap().port(), 9200);
    assert_eq!(cfg.metrics.namespace, "svc");
}

#[test]
fn absent_flags_leave_config_alone() {
    let mut cfg = config::load_from_str("metrics: { namespace: \"keep\" }").unwrap();
    Cli::default().apply(&mut cfg);
    assert_eq!(cfg.metrics.namespace, "keep");
}

#[test]
fn resolve_validates_overrides() {
    let cli = Cli {
        namespace: Some("bad-ns".into()),
        ..Cli::default()
    };
    let err = cli.resolve().expect_err("invalid namespace must fail");
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[test]
fn resolve_reports_missing_config_file() {
    let cli = Cli {
        config: Some("/nonexistent/tile38-prom.yaml".into()),
        ..Cli::default()
    };
    let err = cli.resolve().expect_err("missing file must fail");
    assert_eq!(err.kind(), ErrorKind::Config);
}
