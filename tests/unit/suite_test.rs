//! Tests for the declarative check suite

use structcheck::core::models::CheckKind;
use structcheck::core::suite::{self, BACKEND, DOCS, FRONTEND, MANIFEST};

#[test]
fn suite_builds_six_groups() {
    let groups = suite::wifi_console_suite().unwrap();
    assert_eq!(groups.len(), 6);

    let sizes: Vec<usize> = groups.iter().map(|g| g.checks.len()).collect();
    assert_eq!(sizes, vec![4, 2, 7, 8, 3, 4]);
}

#[test]
fn first_group_is_existence_rest_are_content() {
    let groups = suite::wifi_console_suite().unwrap();

    assert!(
        groups[0]
            .checks
            .iter()
            .all(|c| c.kind() == CheckKind::FileExists)
    );
    assert!(
        groups[1..]
            .iter()
            .flat_map(|g| &g.checks)
            .all(|c| c.kind() == CheckKind::ContentMatches)
    );
}

#[test]
fn groups_target_the_expected_files() {
    let groups = suite::wifi_console_suite().unwrap();

    assert!(groups[1].checks.iter().all(|c| c.path() == MANIFEST));
    assert!(groups[2].checks.iter().all(|c| c.path() == BACKEND));
    assert!(groups[3].checks.iter().all(|c| c.path() == FRONTEND));
    assert!(groups[4].checks.iter().all(|c| c.path() == BACKEND));
    assert!(groups[5].checks.iter().all(|c| c.path() == FRONTEND));

    let existence_paths: Vec<&str> = groups[0].checks.iter().map(|c| c.path()).collect();
    assert_eq!(existence_paths, vec![MANIFEST, BACKEND, FRONTEND, DOCS]);
}

#[test]
fn legacy_identifiers_are_checked_on_both_sides() {
    let groups = suite::wifi_console_suite().unwrap();

    for legacy in ["connect_serial_port", "disconnect_serial_port", "write_serial_data"] {
        for group in [&groups[4], &groups[5]] {
            assert!(
                group.checks.iter().any(|c| c.description().contains("Legacy")
                    && pattern_of(c).contains(legacy)),
                "{legacy} should be a legacy check in {}",
                group.title
            );
        }
    }

    // The frontend additionally keeps the legacy event listener.
    assert!(groups[5].checks.iter().any(|c| pattern_of(c).contains("serial-data")));
}

fn pattern_of(check: &structcheck::core::models::Check) -> String {
    match check {
        structcheck::core::models::Check::ContentMatches { pattern, .. } => {
            pattern.as_str().to_string()
        },
        structcheck::core::models::Check::FileExists { .. } => String::new(),
    }
}

#[test]
fn suite_is_rebuilt_identically() {
    let first = suite::wifi_console_suite().unwrap();
    let second = suite::wifi_console_suite().unwrap();

    let titles = |groups: &[structcheck::core::models::CheckGroup]| {
        groups.iter().map(|g| g.title.clone()).collect::<Vec<_>>()
    };
    assert_eq!(titles(&first), titles(&second));
}
