use std::path::Path;

use framelab::{
    AppError, Locale, OptionField, OutputFormat, OutputOptions, ParameterSet, RandomOptions,
    Selection, load_context_at, options, random, render, resolve_parameters, save_preset,
    scenarios,
};
use tempfile::TempDir;

#[test]
fn render_without_copy_returns_json() {
    let dir = TempDir::new().unwrap();
    let ctx = load_context_at(dir.path(), None).unwrap();

    let outcome = render(&ctx, ParameterSet::default(), &OutputOptions::default()).unwrap();

    assert!(!outcome.copied);
    let document: serde_json::Value = serde_json::from_str(&outcome.output).unwrap();
    assert_eq!(document["final_technical_prompt"], outcome.rendered.final_technical_prompt());
}

#[test]
fn prompt_format_prints_only_the_prompt() {
    let dir = TempDir::new().unwrap();
    let ctx = load_context_at(dir.path(), None).unwrap();
    let options = OutputOptions { format: OutputFormat::Prompt, ..OutputOptions::default() };

    let outcome = render(&ctx, ParameterSet::default(), &options).unwrap();

    assert_eq!(outcome.output, outcome.rendered.final_technical_prompt());
}

#[test]
fn saved_presets_resolve_to_the_same_parameters() {
    let dir = TempDir::new().unwrap();
    let ctx = load_context_at(dir.path(), None).unwrap();
    let mut params = ParameterSet::default();
    params.angle = Selection::from("Worm's Eye");
    params.orbital_degree = -90;
    params.gels.left = Some("#00ff00".to_string());

    for name in ["look.toml", "look.yaml", "look.json"] {
        save_preset(&ctx, Path::new(name), &params).unwrap();
        let restored = resolve_parameters(&ctx, Some(Path::new(name))).unwrap();
        assert_eq!(restored, params, "{name}");
    }
}

#[test]
fn seeded_random_picks_come_from_the_catalog() {
    let dir = TempDir::new().unwrap();
    let ctx = load_context_at(dir.path(), None).unwrap();
    let options = RandomOptions { count: 4, seed: Some(11), last_index: None };

    let picks = random(&ctx, &ParameterSet::default(), &options).unwrap();

    assert_eq!(picks.len(), 4);
    for pick in &picks {
        let scenario = &scenarios(&ctx)[pick.index];
        assert_eq!(pick.params.narrative_text, scenario.text);
        assert_eq!(pick.params.camera, scenario.settings.camera);
        assert!(!pick.params.studio_mode);
    }
    let again = random(&ctx, &ParameterSet::default(), &options).unwrap();
    let indices: Vec<usize> = picks.iter().map(|pick| pick.index).collect();
    let repeated: Vec<usize> = again.iter().map(|pick| pick.index).collect();
    assert_eq!(indices, repeated);
}

#[test]
fn random_refuses_studio_mode() {
    let dir = TempDir::new().unwrap();
    let ctx = load_context_at(dir.path(), None).unwrap();
    let mut base = ParameterSet::default();
    base.studio_mode = true;

    let result = random(&ctx, &base, &RandomOptions::default());
    assert!(matches!(result, Err(AppError::StudioModeActive)));
}

#[test]
fn options_by_name() {
    let listings = options(Some("film"), Locale::En).unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].field, OptionField::FilmStock);

    assert_eq!(options(None, Locale::Tr).unwrap().len(), OptionField::ALL.len());
    assert!(matches!(options(Some("nope"), Locale::En), Err(AppError::UnknownOptionField { .. })));
}
