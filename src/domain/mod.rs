pub mod compass;
pub mod configuration;
pub mod error;
pub mod lighting;
pub mod locale;
pub mod material;
pub mod options;
pub mod parameters;
pub mod preset;
pub mod prompt;
pub mod scenario;
pub mod selection;

pub use compass::{COMPASS_DIRECTIONS, CompassDirection, direction_by_id, resolve_direction};
pub use configuration::{FramelabConfig, OutputFormat};
pub use error::AppError;
pub use lighting::GelColors;
pub use locale::{Locale, display_label};
pub use material::{MaterialSurface, resolve_material, resolve_surface_material};
pub use options::OptionField;
pub use parameters::{ParameterSet, coerce_degree};
pub use preset::{ParameterOverrides, PresetFormat};
pub use prompt::{PromptDocument, RenderedDocument, build_prompt};
pub use scenario::{ScenarioCatalog, ScenarioEntry, ScenarioPick, ScenarioSettings, pick_scenario};
pub use selection::{MAINTAIN_ORIGINAL, Selection};
