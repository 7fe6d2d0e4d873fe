//! Prompt assembly: parameter set in, structured document out.

mod document;
mod engine;
pub mod template;

pub use document::{ConsistencyAnchors, PromptDocument, RenderedDocument, SelectedParameters};
pub use engine::{build_prompt, effective_narrative, maintained_features, scale_phrase};
pub use template::{SummaryContext, SummaryRow, TemplateRenderer};
