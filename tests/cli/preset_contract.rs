use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn toml_preset_sets_fields() {
    let ctx = TestContext::new();
    ctx.write_file("looks/high.toml", "angle = \"High Angle\"\ncamera = \"Leica M11\"\n");

    let document = ctx.render_json(&["--preset", "looks/high.toml"]);

    assert_eq!(document["selected_parameters"]["angle"], "High Angle");
    assert_eq!(document["selected_parameters"]["camera"], "Leica M11");
}

#[test]
fn yaml_and_json_presets_are_accepted() {
    let ctx = TestContext::new();
    ctx.write_file("soft.yml", "style: Cinematic\nfilm_stock: Kodak Portra 400\n");
    ctx.write_file("side.json", r#"{ "orbital_degree": 90, "camera_roll": "-5" }"#);

    let yaml = ctx.render_json(&["--preset", "soft.yml"]);
    assert_eq!(yaml["selected_parameters"]["style"], "Cinematic");
    assert_eq!(yaml["selected_parameters"]["film_stock"], "Kodak Portra 400");

    let json = ctx.render_json(&["--preset", "side.json"]);
    assert_eq!(json["selected_parameters"]["orbital_degree"], "90° (Right Side)");
    assert_eq!(json["selected_parameters"]["dutch_roll"], "-5°");
}

#[test]
fn flags_override_preset_and_config() {
    let ctx = TestContext::new();
    ctx.write_config("[defaults]\ncamera = \"Leica M11\"\nlens = \"35mm Street\"\n");
    ctx.write_file("preset.toml", "camera = \"Canon EOS R5\"\n");

    let preset = ctx.render_json(&["--preset", "preset.toml"]);
    assert_eq!(preset["selected_parameters"]["camera"], "Canon EOS R5");
    assert_eq!(preset["selected_parameters"]["lens"], "35mm Street");

    let flagged = ctx.render_json(&["--preset", "preset.toml", "--camera", "Nikon Z9"]);
    assert_eq!(flagged["selected_parameters"]["camera"], "Nikon Z9");
}

#[test]
fn unsupported_preset_extension_fails() {
    let ctx = TestContext::new();
    ctx.write_file("look.ini", "angle=High Angle\n");

    ctx.cli()
        .args(["render", "--preset", "look.ini"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported preset format"));
}

#[test]
fn missing_preset_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["render", "--preset", "nowhere.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn unknown_preset_key_fails() {
    let ctx = TestContext::new();
    ctx.write_file("typo.toml", "angel = \"High Angle\"\n");

    ctx.cli().args(["render", "--preset", "typo.toml"]).assert().failure();
}

#[test]
fn saved_preset_renders_the_same_parameters() {
    let ctx = TestContext::new();

    let original = ctx.render_json(&[
        "--angle",
        "High Angle",
        "--lighting",
        "Rim Lighting",
        "--degree",
        "135",
        "--save",
        "saved/look.yml",
    ]);
    assert!(ctx.read_file("saved/look.yml").contains("High Angle"));

    let restored = ctx.render_json(&["--preset", "saved/look.yml"]);
    assert_eq!(original, restored);
}
