use std::path::Path;

use tracing::debug;

use crate::domain::configuration::{CONFIG_FILE, parse_config_content};
use crate::domain::{AppError, FramelabConfig};
use crate::ports::PresetStore;

/// Load configuration.
///
/// An explicit path must exist. Without one, `framelab.toml` is read when
/// present and built-in defaults are used otherwise.
pub fn load_config<S: PresetStore>(
    store: &S,
    explicit: Option<&Path>,
) -> Result<FramelabConfig, AppError> {
    let path = match explicit {
        Some(path) => path,
        None if store.exists(Path::new(CONFIG_FILE)) => Path::new(CONFIG_FILE),
        None => {
            debug!("no {CONFIG_FILE} found, using built-in defaults");
            return Ok(FramelabConfig::default());
        }
    };

    let content = store.read_text(path)?;
    let config = parse_config_content(&content).map_err(|err| match err {
        AppError::TomlParseError(_) | AppError::Configuration(_) => {
            AppError::config_error(format!("{}: {err}", path.display()))
        }
        other => other,
    })?;
    debug!(path = %path.display(), "loaded configuration");
    Ok(config)
}

/// Read only `logging.level` from the config file, ignoring every error.
///
/// Runs before the subscriber is installed, so the full load can log.
pub fn peek_log_level<S: PresetStore>(store: &S, explicit: Option<&Path>) -> Option<String> {
    let path = explicit.unwrap_or(Path::new(CONFIG_FILE));
    let content = store.read_text(path).ok()?;
    let value: toml::Value = toml::from_str(&content).ok()?;
    value.get("logging")?.get("level")?.as_str().map(str::to_string)
}
