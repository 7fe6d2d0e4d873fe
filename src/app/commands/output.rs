//! Turning a rendered document into printable text.

use tracing::{debug, warn};

use crate::adapters::catalogs::{SUMMARY_TEMPLATE, read_template_asset};
use crate::app::AppContext;
use crate::domain::configuration::OutputConfig;
use crate::domain::prompt::{SummaryContext, TemplateRenderer};
use crate::domain::{AppError, Locale, OutputFormat, ParameterSet, RenderedDocument};
use crate::ports::{ClipboardWriter, PresetStore};

/// How a render is presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub locale: Locale,
    pub copy: bool,
}

impl From<&OutputConfig> for OutputOptions {
    fn from(config: &OutputConfig) -> Self {
        Self { format: config.format, locale: config.locale, copy: config.copy }
    }
}

/// Format a rendered document.
pub fn format_output<S, R>(
    ctx: &AppContext<S, R>,
    params: &ParameterSet,
    rendered: &RenderedDocument,
    options: &OutputOptions,
) -> Result<String, AppError>
where
    S: PresetStore,
    R: TemplateRenderer,
{
    match options.format {
        OutputFormat::Json => rendered.to_json(),
        OutputFormat::Prompt => Ok(rendered.final_technical_prompt().to_string()),
        OutputFormat::Summary => {
            let template = read_template_asset(SUMMARY_TEMPLATE).ok_or_else(|| {
                AppError::TemplateRenderError {
                    template: SUMMARY_TEMPLATE.to_string(),
                    reason: "template is not embedded".to_string(),
                }
            })?;
            let context = SummaryContext::new(params, rendered, options.locale);
            ctx.renderer().render(template, &context, SUMMARY_TEMPLATE)
        }
    }
}

/// Copy `text` when requested. A clipboard failure is returned to the caller.
pub fn copy_output<C: ClipboardWriter>(
    clipboard: &mut C,
    text: &str,
    options: &OutputOptions,
) -> Result<bool, AppError> {
    if !options.copy {
        return Ok(false);
    }
    clipboard.write_text(text).inspect_err(|err| warn!("clipboard write failed: {err}"))?;
    debug!(bytes = text.len(), "copied output to clipboard");
    Ok(true)
}
