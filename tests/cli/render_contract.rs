use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn render_defaults_to_json_document() {
    let ctx = TestContext::new();

    let document = ctx.render_json(&[]);

    let keys: Vec<&str> =
        document.as_object().unwrap().keys().map(String::as_str).collect();
    assert!(keys.contains(&"camera_override_protocol"));
    assert!(keys.contains(&"final_technical_prompt"));
    assert_eq!(document["selected_parameters"]["camera"], "Sony A7R V");
    assert_eq!(document["selected_parameters"]["angle"], "Maintain Original");
    assert_eq!(document["selected_parameters"]["studio_mode"], "Inactive");
}

#[test]
fn runway_prompt_keeps_clause_order() {
    let ctx = TestContext::new();

    let prompt = ctx.stdout(&[
        "render",
        "--format",
        "prompt",
        "--angle",
        "Low Angle",
        "--scale",
        "Full Shot (Full Body)",
        "--pose",
        "Frontal Standing",
        "-n",
        "striding down a runway",
        "--aperture",
        "f/8",
        "--ratio",
        "4:5",
        "--degree",
        "45",
        "--negative",
        "blurry",
    ]);
    let prompt = prompt.trim_end();

    assert!(prompt.starts_with("{{best quality, amazing aesthetics}}, {{shot on Sony A7R V}}"));
    assert!(prompt.contains("{{striding down a runway}}"));
    assert!(prompt.contains("{orbital degree: 45° (Front-Right)}"));
    assert!(prompt.ends_with("Aspect Ratio 4:5"));

    let runway = prompt.find("{{striding down a runway}}").unwrap();
    let angle = prompt.find("{Low Angle}").unwrap();
    let orbit = prompt.find("{orbital degree: 45° (Front-Right)}").unwrap();
    assert!(runway < angle && angle < orbit);
}

#[test]
fn studio_mode_replaces_narrative_with_set() {
    let ctx = TestContext::new();

    ctx.cli()
        .args([
            "render",
            "--format",
            "prompt",
            "--studio",
            "-n",
            "walking through a forest",
            "--bg-color",
            "#112233",
            "--bg-texture",
            "Eksiz Kağıt",
            "--floor-color",
            "#445566",
            "--floor-texture",
            "Mat Ahşap",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("seamless #112233 Seamless Studio Paper background"))
        .stdout(predicate::str::contains("standing on #445566 Matte Hardwood Floor floor"))
        .stdout(predicate::str::contains("{studio mode: ACTIVE}"))
        .stdout(predicate::str::contains("walking through a forest").not());
}

#[test]
fn summary_format_renders_card() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["render", "--format", "summary", "-n", "on a rooftop", "--degree", "180"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("FRAMELAB SUMMARY"))
        .stdout(predicate::str::contains("Narrative: on a rooftop"))
        .stdout(predicate::str::contains("Orbit: 180° (Rear)"))
        .stdout(predicate::str::contains("{{best quality, amazing aesthetics}}"));
}

#[test]
fn summary_format_follows_locale() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["render", "--format", "summary", "--locale", "tr"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("FRAMELAB ÖZET"));
}

#[test]
fn render_alias_and_unparsable_degree() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["r", "--format", "prompt", "--degree", "north"])
        .assert()
        .success()
        .stdout(predicate::str::contains("{orbital degree: 0° (Front)}"));
}

#[test]
fn unknown_format_is_rejected() {
    let ctx = TestContext::new();

    ctx.cli().args(["render", "--format", "xml"]).assert().failure();
}
