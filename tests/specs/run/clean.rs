//! Clean-run specs: exit code 0 and a journal satisfying every ordering
//! property of the protocol.

use crate::prelude::*;
use hall_core::Actor;
use tempfile::TempDir;

const EXPECTED_VISIT: [&str; 7] = [
    "starts",
    "wants to enter",
    "enters",
    "checks",
    "wants certificate",
    "got certificate",
    "leaves",
];

#[test]
fn clean_run_emits_an_ordered_consistent_journal() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("hall.out");

    hall()
        .args([
            "4",
            "--gen-delay",
            "5",
            "--judge-delay",
            "5",
            "--cert-delay",
            "5",
            "--output",
        ])
        .arg(&out)
        .assert()
        .success();

    let records = read_records(&out);
    assert!(!records.is_empty());

    // Sequence numbers are dense and start at 1.
    for (i, record) in records.iter().enumerate() {
        assert_eq!(record.seq, i as u64 + 1, "sequence gap at line {i}");
    }

    // checked_in <= waiting <= inside at every observation point.
    for record in &records {
        if let Some(c) = record.counters {
            assert!(
                c.checked_in <= c.waiting && c.waiting <= c.inside,
                "counter invariant broken at seq {}: {c:?}",
                record.seq
            );
        }
    }

    // Each immigrant's visit is exact: no skips, no reordering.
    for id in 1..=4 {
        assert_eq!(
            actions_of(&records, Actor::Immigrant(id)),
            EXPECTED_VISIT,
            "immigrant {id}"
        );
    }

    // Every immigrant is out the door before the judge finishes, and the
    // finish is the last line of the run.
    let last = records.last().unwrap();
    assert_eq!(last.actor, Actor::Judge);
    assert_eq!(last.action, "finishes");
    let leaves = records
        .iter()
        .filter(|r| matches!(r.actor, Actor::Immigrant(_)) && r.action == "leaves")
        .count();
    assert_eq!(leaves, 4);
}

#[test]
fn confirmation_batches_account_for_every_immigrant_exactly_once() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("hall.out");

    hall()
        .args(["6", "--gen-delay", "10", "--judge-delay", "5", "--output"])
        .arg(&out)
        .assert()
        .success();

    let records = read_records(&out);

    // Per cycle, the batch equals the checked-in snapshot at commit time:
    // summing the checked_in column on "starts confirmation" lines over
    // all cycles accounts for each immigrant exactly once.
    let confirmed: u32 = records
        .iter()
        .filter(|r| r.action == "starts confirmation")
        .filter_map(|r| r.counters)
        .map(|c| c.checked_in)
        .sum();
    assert_eq!(confirmed, 6);

    // And the queues are empty after every commit.
    for record in records.iter().filter(|r| r.action == "ends confirmation") {
        let c = record.counters.unwrap();
        assert_eq!((c.waiting, c.checked_in), (0, 0), "at seq {}", record.seq);
    }
}

#[test]
fn run_without_delays_still_terminates() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("hall.out");

    hall().args(["1", "--output"]).arg(&out).assert().success();

    let records = read_records(&out);
    assert_eq!(actions_of(&records, Actor::Immigrant(1)), EXPECTED_VISIT);
}
