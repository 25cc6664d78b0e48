//! Shared helpers for behavioral specs.

use assert_cmd::Command;
use hall_core::{Actor, Record};
use std::path::Path;

/// The hall binary, ready for arguments.
pub fn hall() -> Command {
    Command::cargo_bin("hall").unwrap()
}

/// Parse every journal line from a run's output file.
pub fn read_records(path: &Path) -> Vec<Record> {
    let text = std::fs::read_to_string(path).unwrap();
    text.lines()
        .map(|line| Record::parse(line).unwrap_or_else(|| panic!("bad journal line: {line}")))
        .collect()
}

/// The ordered action names one actor produced.
pub fn actions_of(records: &[Record], actor: Actor) -> Vec<String> {
    records
        .iter()
        .filter(|r| r.actor == actor)
        .map(|r| r.action.clone())
        .collect()
}
