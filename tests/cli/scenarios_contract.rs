use crate::harness::TestContext;

#[test]
fn builtin_catalog_is_listed() {
    let ctx = TestContext::new();

    let stdout = ctx.stdout(&["scenarios"]);
    let entries: Vec<&str> = stdout
        .lines()
        .filter(|line| line.trim_start().starts_with(|c: char| c.is_ascii_digit()))
        .collect();

    assert_eq!(entries.len(), 21);
    assert!(entries[0].starts_with("  0  "));
    assert!(entries[20].starts_with(" 20  "));
}
