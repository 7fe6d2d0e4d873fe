use std::path::Path;

use tracing::{debug, info};

use crate::domain::{AppError, ParameterOverrides, ParameterSet, PresetFormat};
use crate::ports::PresetStore;

/// Read a preset file as an override layer. The format follows the extension.
pub fn load_preset<S: PresetStore>(store: &S, path: &Path) -> Result<ParameterOverrides, AppError> {
    let format = PresetFormat::from_path(path)?;
    let content = store.read_text(path)?;
    let overrides = ParameterOverrides::parse(format, &content)?;
    debug!(path = %path.display(), fields = overrides.keys().count(), "loaded preset");
    Ok(overrides)
}

/// Write a full parameter set as a preset file.
pub fn save_preset<S: PresetStore>(
    store: &S,
    path: &Path,
    params: &ParameterSet,
) -> Result<(), AppError> {
    let format = PresetFormat::from_path(path)?;
    store.write_text(path, &format.serialize(params)?)?;
    info!(path = %path.display(), "saved preset");
    Ok(())
}
