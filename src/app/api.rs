//! API Facade for the application.
//!
//! Glues context creation (filesystem store, embedded catalog, minijinja)
//! to command execution. Pure rendering needs none of this; call
//! [`crate::build_prompt`] directly.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::adapters::{ArboardClipboard, FilesystemPresetStore, MinijinjaTemplateRenderer};
use crate::app::commands::{direction, options, random, render};
use crate::app::config::{load_catalog, load_config, peek_log_level};
use crate::app::AppContext;
use crate::domain::prompt::TemplateRenderer;
use crate::domain::{Locale, OptionField, ParameterSet, ScenarioEntry};
use crate::ports::{ClipboardWriter, NoopClipboard, PresetStore};

pub use crate::app::commands::{
    DirectionOutcome, OptionListing, OptionValue, OutputOptions, RandomOptions, RandomPick,
    RenderOutcome,
};
pub use crate::domain::AppError;

/// Context backed by the local filesystem.
pub type DefaultContext = AppContext<FilesystemPresetStore, MinijinjaTemplateRenderer>;

/// `logging.level` from the config file, if it can be read at all.
pub fn configured_log_level(config: Option<&Path>) -> Option<String> {
    let store = FilesystemPresetStore::current().ok()?;
    peek_log_level(&store, config)
}

/// Load config and catalog relative to the current directory.
pub fn load_context(config: Option<&Path>) -> Result<DefaultContext, AppError> {
    load_context_at(std::env::current_dir()?, config)
}

/// Load config and catalog relative to `root`.
pub fn load_context_at(
    root: impl Into<PathBuf>,
    config: Option<&Path>,
) -> Result<DefaultContext, AppError> {
    let store = FilesystemPresetStore::new(root.into());
    build_context(store, MinijinjaTemplateRenderer::new(), config)
}

/// Assemble a context from any store and renderer.
pub fn build_context<S, R>(
    store: S,
    renderer: R,
    config: Option<&Path>,
) -> Result<AppContext<S, R>, AppError>
where
    S: PresetStore,
    R: TemplateRenderer,
{
    let config = load_config(&store, config)?;
    let catalog = load_catalog(&store, &config.catalog)?;
    debug!(scenarios = catalog.len(), "context ready");
    Ok(AppContext::new(store, renderer, config, catalog))
}

/// Parameters from config defaults and an optional preset file.
pub fn resolve_parameters<S, R>(
    ctx: &AppContext<S, R>,
    preset: Option<&Path>,
) -> Result<ParameterSet, AppError>
where
    S: PresetStore,
    R: TemplateRenderer,
{
    render::resolve_parameters(ctx, preset)
}

/// Render and format `params`, copying to the system clipboard if asked.
pub fn render<S, R>(
    ctx: &AppContext<S, R>,
    params: ParameterSet,
    options: &OutputOptions,
) -> Result<RenderOutcome, AppError>
where
    S: PresetStore,
    R: TemplateRenderer,
{
    if options.copy {
        let mut clipboard = ArboardClipboard::new();
        render_with_clipboard(ctx, params, options, &mut clipboard)
    } else {
        render_with_clipboard(ctx, params, options, &mut NoopClipboard)
    }
}

/// Render with a caller-supplied clipboard.
pub fn render_with_clipboard<S, R, C>(
    ctx: &AppContext<S, R>,
    params: ParameterSet,
    options: &OutputOptions,
    clipboard: &mut C,
) -> Result<RenderOutcome, AppError>
where
    S: PresetStore,
    R: TemplateRenderer,
    C: ClipboardWriter,
{
    render::execute(ctx, params, options, clipboard)
}

/// Apply random scenarios on top of `base`. Fails in studio mode.
pub fn random<S, R>(
    ctx: &AppContext<S, R>,
    base: &ParameterSet,
    options: &RandomOptions,
) -> Result<Vec<RandomPick>, AppError>
where
    S: PresetStore,
    R: TemplateRenderer,
{
    random::execute(ctx, base, options)
}

/// Save `params` as a preset; the extension picks the format.
pub fn save_preset<S, R>(
    ctx: &AppContext<S, R>,
    path: &Path,
    params: &ParameterSet,
) -> Result<(), AppError>
where
    S: PresetStore,
    R: TemplateRenderer,
{
    crate::app::config::save_preset(ctx.store(), path, params)
}

/// Option values for a named field, or for every field.
pub fn options(field: Option<&str>, locale: Locale) -> Result<Vec<OptionListing>, AppError> {
    let field = field.map(OptionField::from_name).transpose()?;
    Ok(options::list_options(field, locale))
}

/// Resolve free-text degree input to a compass direction.
pub fn direction(input: &str) -> DirectionOutcome {
    direction::resolve(input)
}

/// Scenarios available to random picks.
pub fn scenarios<S, R>(ctx: &AppContext<S, R>) -> &[ScenarioEntry]
where
    S: PresetStore,
    R: TemplateRenderer,
{
    ctx.catalog().entries()
}
