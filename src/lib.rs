//! framelab: Assemble structured image-generation prompts from photographic parameters.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


pub use app::AppContext;
pub use app::api::{
    DefaultContext, DirectionOutcome, OptionListing, OptionValue, OutputOptions, RandomOptions,
    RandomPick, RenderOutcome, build_context, direction, load_context, load_context_at, options,
    random, render, render_with_clipboard, resolve_parameters, save_preset, scenarios,
};
pub use domain::{
    AppError, COMPASS_DIRECTIONS, CompassDirection, FramelabConfig, GelColors, Locale,
    MAINTAIN_ORIGINAL, MaterialSurface, OptionField, OutputFormat, ParameterOverrides,
    ParameterSet, PresetFormat, PromptDocument, RenderedDocument, ScenarioCatalog, ScenarioEntry,
    ScenarioPick, ScenarioSettings, Selection, build_prompt, coerce_degree, display_label,
    pick_scenario, resolve_direction, resolve_material, resolve_surface_material,
};
