//! Integration tests for the check command.

use super::*;

#[test]
/// Reports one match per built-in rule on an unpatched file.
fn test_check_unpatched_file() {
    let (_dir, path) = scratch_file("T.java", &test::sample_property_test());

    let report = check::execute(CheckArgs {
        path: Some(path),
        rules: None,
    })
    .unwrap();
    let counts: Vec<usize> = report.outcomes.iter().map(|o| o.matches).collect();
    assert_eq!(counts, vec![1, 1]);
    assert!(report.changed);
}

#[test]
/// Any rule without an anchor makes check fail.
fn test_check_reports_first_unmatched_rule() {
    let (_dir, path) = scratch_file("U.java", "class U {}\n");

    let err = check::execute(CheckArgs {
        path: Some(path),
        rules: None,
    })
    .unwrap_err();
    assert!(matches!(
        err,
        PatchError::AnchorMissing { ref rule } if rule == "inject-system-log-mock"
    ));
}

#[test]
/// Several anchors are counted, not rejected.
fn test_check_counts_repeated_anchor() {
    let sample = test::sample_property_test();
    let doubled = format!("{sample}{sample}");
    let (_dir, path) = scratch_file("T.java", &doubled);

    let report = check::execute(CheckArgs {
        path: Some(path),
        rules: None,
    })
    .unwrap();
    assert!(report.outcomes.iter().all(|o| o.matches == 2));
}
