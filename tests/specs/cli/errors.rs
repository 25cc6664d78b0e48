//! CLI argument and config validation specs.

use crate::prelude::*;
use predicates::prelude::*;

#[test]
fn help_describes_the_simulator() {
    hall()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Immigration office"));
}

#[test]
fn missing_immigrant_count_is_a_usage_error() {
    hall()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("immigrant count required"));
}

#[test]
fn zero_immigrants_rejected() {
    hall()
        .arg("0")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("at least 1"));
}

#[test]
fn delay_above_ceiling_rejected() {
    hall()
        .args(["3", "--gen-delay", "5000"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("ceiling"));
}

#[test]
fn unreadable_config_file_is_a_usage_error() {
    hall()
        .args(["--config", "/nonexistent/run.toml"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("cannot read"));
}
