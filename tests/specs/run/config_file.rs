//! TOML config file specs.

use crate::prelude::*;
use hall_core::Actor;
use tempfile::TempDir;

#[test]
fn run_described_by_config_file() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("hall.out");
    let config = tmp.path().join("run.toml");
    std::fs::write(
        &config,
        r#"
immigrants = 3
gen_delay_max = "5ms"
judge_delay_max = "5ms"
cert_delay_max = "5ms"
"#,
    )
    .unwrap();

    hall()
        .arg("--config")
        .arg(&config)
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let records = read_records(&out);
    let leaves = records
        .iter()
        .filter(|r| matches!(r.actor, Actor::Immigrant(_)) && r.action == "leaves")
        .count();
    assert_eq!(leaves, 3);
}

#[test]
fn flags_override_config_file_values() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("hall.out");
    let config = tmp.path().join("run.toml");
    std::fs::write(&config, "immigrants = 5\n").unwrap();

    hall()
        .arg("2")
        .arg("--config")
        .arg(&config)
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let records = read_records(&out);
    let leaves = records
        .iter()
        .filter(|r| matches!(r.actor, Actor::Immigrant(_)) && r.action == "leaves")
        .count();
    assert_eq!(leaves, 2, "positional count overrides the file");
}

#[test]
fn config_file_delays_above_ceiling_rejected() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("run.toml");
    std::fs::write(&config, "immigrants = 2\ngen_delay_max = \"10s\"\n").unwrap();

    hall()
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .code(2);
}
