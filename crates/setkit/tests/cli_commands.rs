#![cfg(feature = "cli")]

use std::process::{Command, Output};

fn setkit(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_setkit"))
        .args(["--log-level", "error", "--format", "json"])
        .args(args)
        .env_remove("SETKIT_FORMAT")
        .env_remove("SETKIT_LOG_LEVEL")
        .output()
        .expect("setkit should run")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be a JSON document")
}

#[test]
fn valid_address_exits_zero() {
    let output = setkit(&[
        "validate",
        "/Address",
        "0x5B38Da6a701c568545dCfcB03FcB875f56beddC4",
    ]);

    assert!(output.status.success());
    let report = stdout_json(&output);
    assert_eq!(report["schema"], "/Address");
    assert_eq!(report["valid"], true);
    assert_eq!(report["errors"].as_array().map(Vec::len), Some(0));
}

#[test]
fn short_address_exits_60_with_one_error() {
    let output = setkit(&["validate", "address", "0x123"]);

    assert_eq!(output.status.code(), Some(60));
    let report = stdout_json(&output);
    assert_eq!(report["valid"], false);
    let errors = report["errors"].as_array().expect("errors array");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].as_str().unwrap_or_default().starts_with("/Address"));
}

#[test]
fn whole_number_rejects_fractions() {
    let ok = setkit(&["validate", "/WholeNumber", "1000", "--decimal"]);
    assert!(ok.status.success());

    let fraction = setkit(&["validate", "/WholeNumber", "1.5", "--decimal"]);
    assert_eq!(fraction.status.code(), Some(60));

    let number = setkit(&["validate", "/Number", "1.5", "--decimal"]);
    assert!(number.status.success());

    let plain_string = setkit(&["validate", "/Number", "1.5"]);
    assert_eq!(plain_string.status.code(), Some(60));

    let max_uint = setkit(&[
        "validate",
        "/WholeNumber",
        "115792089237316195423570985008687907853269984665640564039457584007913129639935",
        "--decimal",
    ]);
    assert!(max_uint.status.success());
}

#[test]
fn usage_errors_exit_64() {
    let unknown = setkit(&["validate", "/Uint", "1"]);
    assert_eq!(unknown.status.code(), Some(64));
    assert!(String::from_utf8_lossy(&unknown.stderr).contains("/Uint"));

    let not_a_number = setkit(&["validate", "/Number", "abc", "--decimal"]);
    assert_eq!(not_a_number.status.code(), Some(64));

    let bad_json = setkit(&["validate", "/Number", "{", "--json"]);
    assert_eq!(bad_json.status.code(), Some(64));
}

#[test]
fn schemas_lists_every_builtin() {
    let output = setkit(&["schemas"]);

    assert!(output.status.success());
    let listing = stdout_json(&output);
    let ids: Vec<&str> = listing["schemas"]
        .as_array()
        .expect("schemas array")
        .iter()
        .filter_map(|schema| schema["id"].as_str())
        .collect();
    assert_eq!(
        ids,
        ["/Address", "/Bytes", "/Bytes32", "/Number", "/WholeNumber"]
    );
}

#[test]
fn check_gates() {
    let zero = setkit(&["check", "positive", "0"]);
    assert_eq!(zero.status.code(), Some(60));
    let report = stdout_json(&zero);
    assert_eq!(report["passed"], false);
    assert!(report["message"]
        .as_str()
        .unwrap_or_default()
        .contains("greater than zero"));

    assert!(setkit(&["check", "positive", "1"]).status.success());
    assert!(setkit(&["check", "multiple", "30", "10"]).status.success());
    assert_eq!(
        setkit(&["check", "multiple", "25", "10"]).status.code(),
        Some(60)
    );

    let null = setkit(&[
        "check",
        "not-null",
        "0x0000000000000000000000000000000000000000",
    ]);
    assert_eq!(null.status.code(), Some(60));
    assert_eq!(
        stdout_json(&null)["message"],
        "address cannot be the null address."
    );
}

#[test]
fn format_falls_back_to_environment() {
    let output = Command::new(env!("CARGO_BIN_EXE_setkit"))
        .args(["schemas"])
        .env("SETKIT_FORMAT", "pretty")
        .output()
        .expect("setkit should run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("/Bytes32 (string) ^0x[0-9a-fA-F]{64}$"));
}

#[test]
fn version_prints_package_version() {
    let output = setkit(&["version"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        format!("setkit {}", env!("CARGO_PKG_VERSION"))
    );
}
