use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior};

use crate::domain::AppError;
use crate::domain::prompt::{SummaryContext, TemplateRenderer};

/// Template renderer using Minijinja.
#[derive(Debug, Default, Clone, Copy)]
pub struct MinijinjaTemplateRenderer;

impl MinijinjaTemplateRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for MinijinjaTemplateRenderer {
    fn render(
        &self,
        template: &str,
        context: &SummaryContext,
        template_name: &str,
    ) -> Result<String, AppError> {
        let env = ENV.get_or_init(|| {
            let mut env = Environment::new();
            env.set_undefined_behavior(UndefinedBehavior::Strict);
            env
        });

        env.render_str(template, context).map_err(|err| AppError::TemplateRenderError {
            template: template_name.to_string(),
            reason: err.to_string(),
        })
    }
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();
