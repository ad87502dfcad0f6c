use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn listing_contacts_in_grid_order() {
    let output = Command::cargo_bin("rusty-contacts")
        .unwrap()
        .args(&["list"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let listing = String::from_utf8_lossy(&output);
    let lines: Vec<_> = listing.lines().collect();

    assert_eq!(lines.len(), 7);
    assert!(lines[0].starts_with("  1. r1 c1  Ada Lovelace"));
    assert!(lines[2].starts_with("  3. r1 c3  Grace Hopper"));
    assert!(lines[3].starts_with("  4. r2 c1  Linus"));
    assert!(lines[6].starts_with("  7. r3 c1  Barbara Liskov"));
    assert!(lines[4].contains("(617) 555-0198") && lines[4].ends_with("avatar_margaret"));
}

#[test]
fn listing_never_touches_the_platform() {
    Command::cargo_bin("rusty-contacts")
        .unwrap()
        .args(&["--dry-run", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dial").not())
        .stdout(predicate::str::contains("clipboard").not());
}

#[test]
fn zero_notice_duration_is_rejected() {
    Command::cargo_bin("rusty-contacts")
        .unwrap()
        .args(&["--notice-ms", "0", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation failed"));
}
