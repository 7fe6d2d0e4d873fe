use tracing::debug;

use crate::adapters::catalogs::builtin_scenarios;
use crate::domain::configuration::CatalogConfig;
use crate::domain::{AppError, ScenarioCatalog};
use crate::ports::PresetStore;

/// Built-in scenarios, extended with `[catalog] extra_scenarios` when set.
pub fn load_catalog<S: PresetStore>(
    store: &S,
    config: &CatalogConfig,
) -> Result<ScenarioCatalog, AppError> {
    let catalog = builtin_scenarios()?;
    let Some(path) = &config.extra_scenarios else {
        return Ok(catalog);
    };

    let content = store.read_text(path)?;
    let builtin = catalog.len();
    let catalog = catalog.with_extra_yaml(&content)?;
    debug!(
        path = %path.display(),
        added = catalog.len() - builtin,
        "extended scenario catalog"
    );
    Ok(catalog)
}
