use std::path::Path;

use tracing::{debug, info};

use super::output::{OutputOptions, copy_output, format_output};
use crate::app::AppContext;
use crate::app::config::load_preset;
use crate::domain::prompt::TemplateRenderer;
use crate::domain::{AppError, ParameterSet, RenderedDocument, build_prompt};
use crate::ports::{ClipboardWriter, PresetStore};

/// Result of a render.
#[derive(Debug, Clone)]
pub struct RenderOutcome {
    pub params: ParameterSet,
    pub rendered: RenderedDocument,
    /// Text formatted per the output options.
    pub output: String,
    pub copied: bool,
}

/// Config `[defaults]` with an optional preset layered on top.
pub fn resolve_parameters<S, R>(
    ctx: &AppContext<S, R>,
    preset: Option<&Path>,
) -> Result<ParameterSet, AppError>
where
    S: PresetStore,
    R: TemplateRenderer,
{
    let mut overrides = ctx.config().defaults.clone();
    if let Some(path) = preset {
        overrides.merge(load_preset(ctx.store(), path)?);
    }
    overrides.resolve()
}

/// Render `params`, format the result and optionally copy it.
pub fn execute<S, R, C>(
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
    let rendered = build_prompt(&params);
    debug!(clauses = rendered.clauses.len(), studio = params.studio_mode, "rendered prompt");

    let output = format_output(ctx, &params, &rendered, options)?;
    let copied = copy_output(clipboard, &output, options)?;
    if copied {
        info!(format = %options.format, "rendered output copied to clipboard");
    }

    Ok(RenderOutcome { params, rendered, output, copied })
}
