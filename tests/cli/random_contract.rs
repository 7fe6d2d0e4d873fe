use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn seeded_random_is_reproducible() {
    let ctx = TestContext::new();

    let first = ctx.stdout(&["random", "--seed", "42", "--count", "2"]);
    let second = ctx.stdout(&["random", "--seed", "42", "--count", "2"]);

    assert_eq!(first, second);
    assert!(first.contains("\"final_technical_prompt\""));
}

#[test]
fn random_prints_one_prompt_per_pick() {
    let ctx = TestContext::new();

    let stdout = ctx.stdout(&["rnd", "--seed", "7", "--count", "3", "--format", "prompt"]);
    let prompts: Vec<&str> = stdout.lines().collect();

    assert_eq!(prompts.len(), 3);
    for prompt in prompts {
        assert!(prompt.starts_with("{{best quality, amazing aesthetics}}"));
        assert!(prompt.contains("{orbital degree: "));
    }
}

#[test]
fn random_keeps_user_negative_prompt() {
    let ctx = TestContext::new();

    let stdout = ctx.stdout(&["random", "--seed", "3", "--negative", "no hats"]);
    let document: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(document["negative_prompt"], "no hats");
}

#[test]
fn random_is_refused_in_studio_mode() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["random", "--studio"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("studio mode is active"));
}

#[test]
fn zero_count_is_rejected() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["random", "--count", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("count must be at least 1"));
}
