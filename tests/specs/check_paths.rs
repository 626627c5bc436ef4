//! Behavioral specs for the path-expectation runner.
//!
//! One fresh check per path, pre_check gating, expected-outcome
//! matching, and fail-fast ordering.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use yare::parameterized;

use crate::prelude::*;

/// Spec: valid fixtures
///
/// > For all paths in a "valid" fixture set, pre_check() returns true
/// > and check() returns the declared expected boolean.
#[parameterized(
    plain_title = { "# exemplar\n\nA library.\n" },
    leading_blank_lines = { "\n\n# exemplar\n" },
    title_only = { "# exemplar\n" },
)]
fn title_check_passes_valid_readmes(content: &str) {
    let ws = workspace();
    let paths = vec![
        ws.write("README-v1.md", content),
        ws.write("README-v2.md", content),
    ];

    ws.runner()
        .check_each(true, &paths, &ReadmeTitleCheck::new)
        .unwrap();
}

/// Spec: invalid fixtures
///
/// > A fixture set known to violate the standard satisfies an
/// > expected_result of false.
#[test]
fn title_check_confirms_invalid_readmes() {
    let ws = workspace();
    let paths = vec![
        ws.write("README-v1.md", "Just prose, no title.\n"),
        ws.write("README-v2.md", "## Subsection first\n"),
    ];

    ws.runner()
        .check_each(false, &paths, &ReadmeTitleCheck::new)
        .unwrap();
}

/// Spec: outcome mismatch
///
/// > A check() result that differs from the expectation fails the run
/// > with a message naming the check and the offending path.
#[test]
fn outcome_mismatch_names_check_and_path() {
    let ws = workspace();
    let invalid = ws.write("README-v1.md", "No title here.\n");

    let err = ws
        .runner()
        .check_each(true, &[invalid], &ReadmeTitleCheck::new)
        .unwrap_err();

    let msg = err.to_string();
    assert!(msg.contains("[readme.title]"));
    assert!(msg.contains("README-v1.md"));
    assert!(msg.contains("expected true"));
}

/// Spec: pre_check gating
///
/// > pre_check() must succeed before check() is consulted; a target
/// > the check is not applicable to fails the run descriptively.
#[test]
fn pre_check_gates_missing_target() {
    let ws = workspace();
    let missing = ws.root().join("README.md");

    let err = ws
        .runner()
        .check_each(true, &[missing], &ReadmeTitleCheck::new)
        .unwrap_err();

    assert!(matches!(err, RunnerError::PreCheckFailed { check: "readme.title", .. }));
}

/// Spec: fail-fast ordering
///
/// > Paths are processed in order and the first failure aborts the
/// > rest; the reported path is the first offending one.
#[test]
fn first_failing_path_is_reported() {
    let ws = workspace();
    let paths = vec![
        ws.write("README-v1.md", "# exemplar\n"),
        ws.write("README-v2.md", "no title\n"),
        ws.write("README-v3.md", "also no title\n"),
    ];

    let err = ws
        .runner()
        .check_each(true, &paths, &ReadmeTitleCheck::new)
        .unwrap_err();

    assert!(err.to_string().contains("README-v2.md"));
}
