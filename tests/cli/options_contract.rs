use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn single_field_lists_values() {
    let ctx = TestContext::new();

    let stdout = ctx.stdout(&["options", "angle"]);
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.first(), Some(&"Maintain Original"));
    assert!(lines.contains(&"Low Angle"));
}

#[test]
fn field_aliases_resolve() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["o", "film"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cinestill 800T"));
    ctx.cli()
        .args(["options", "ratio"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4:5"));
}

#[test]
fn all_fields_are_grouped_under_headings() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("options")
        .assert()
        .success()
        .stdout(predicate::str::contains("Angle (angle):"))
        .stdout(predicate::str::contains("Film Stock (film-stock):"))
        .stdout(predicate::str::contains("  Low Angle"));
}

#[test]
fn unknown_field_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["options", "bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown option field 'bogus'"));
}
