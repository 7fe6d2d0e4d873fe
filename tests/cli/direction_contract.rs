use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn direction_uses_plain_distance() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["direction", "359"])
        .assert()
        .success()
        .stdout(predicate::str::contains("359° → Front-Left (front-left)"));
}

#[test]
fn ties_keep_first_direction() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["d", "22"])
        .assert()
        .success()
        .stdout(predicate::str::contains("22° → Front (front)"));
}

#[test]
fn negative_and_garbage_input() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["direction", "-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-15° → Front (front)"));
    ctx.cli()
        .args(["direction", "sideways"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0° → Front (front)"));
}

#[test]
fn direction_ignores_broken_config() {
    let ctx = TestContext::new();
    ctx.write_config("not toml at all [");

    ctx.cli().args(["direction", "90"]).assert().success();
}

#[test]
fn nearest_anchor_wins_between_rear_and_back_left() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["direction", "200"])
        .assert()
        .success()
        .stdout(predicate::str::contains("200° → Rear (back)"));
}
