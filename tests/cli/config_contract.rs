use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn config_defaults_and_output_apply() {
    let ctx = TestContext::new();
    ctx.write_config(
        r#"
[defaults]
camera = "Leica M11"

[output]
format = "prompt"
"#,
    );

    ctx.cli()
        .arg("render")
        .assert()
        .success()
        .stdout(predicate::str::contains("{{shot on Leica M11}}"))
        .stdout(predicate::str::contains("camera_override_protocol").not());
}

#[test]
fn format_flag_overrides_config_output() {
    let ctx = TestContext::new();
    ctx.write_config("[output]\nformat = \"summary\"\n");

    let document = ctx.render_json(&[]);
    assert!(document.get("final_technical_prompt").is_some());
}

#[test]
fn explicit_config_path_is_used() {
    let ctx = TestContext::new();
    ctx.write_file("conf/studio.toml", "[defaults]\nstudio_mode = true\n");

    let document = ctx.render_json(&["--config", "conf/studio.toml"]);
    assert_eq!(document["selected_parameters"]["studio_mode"], "ACTIVE");
}

#[test]
fn missing_explicit_config_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["render", "--config", "absent.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn invalid_config_values_fail() {
    let ctx = TestContext::new();

    for content in [
        "[output]\nformat = \"xml\"\n",
        "[defaults]\nangel = \"High Angle\"\n",
        "[logging]\nlevel = \"loud\"\n",
        "[unknown]\nkey = 1\n",
    ] {
        ctx.write_config(content);
        ctx.cli().arg("render").assert().failure().stderr(predicate::str::contains("Error:"));
    }
}

#[test]
fn extra_scenarios_extend_catalog() {
    let ctx = TestContext::new();
    ctx.write_file("more.yml", crate::harness::test_context::EXTRA_SCENARIO_YAML);
    ctx.write_config("[catalog]\nextra_scenarios = \"more.yml\"\n");

    ctx.cli()
        .arg("scenarios")
        .assert()
        .success()
        .stdout(predicate::str::contains(" 21  standing in a glass greenhouse at dawn"));
}

#[test]
fn invalid_extra_scenarios_fail() {
    let ctx = TestContext::new();
    ctx.write_file("bad.yml", "scenarios:\n  - text: \"\"\n    settings: {}\n");
    ctx.write_config("[catalog]\nextra_scenarios = \"bad.yml\"\n");

    ctx.cli().arg("scenarios").assert().failure();
}

#[test]
fn config_log_level_covers_config_loading() {
    let ctx = TestContext::new();
    ctx.write_config("[logging]\nlevel = \"debug\"\n");

    ctx.cli()
        .arg("render")
        .assert()
        .success()
        .stderr(predicate::str::contains("loaded configuration"))
        .stderr(predicate::str::contains("context ready"));
}

#[test]
fn verbose_flag_logs_config_fallback() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["render", "--verbose"])
        .assert()
        .success()
        .stderr(predicate::str::contains("no framelab.toml found"));
}
