//! Catalog and template assets compiled into the binary.

use include_dir::{Dir, include_dir};

use crate::domain::{AppError, ScenarioCatalog};

static CATALOG_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/catalog");
static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

const SCENARIOS_FILE: &str = "scenarios.yml";

/// Template used by the `summary` output format.
pub const SUMMARY_TEMPLATE: &str = "summary.txt.j2";

/// Read a catalog asset by its path relative to `src/assets/catalog/`.
pub fn read_catalog_asset(path: &str) -> Option<&'static str> {
    CATALOG_DIR.get_file(path).and_then(|file| file.contents_utf8())
}

/// Read a template by its path relative to `src/assets/templates/`.
pub fn read_template_asset(path: &str) -> Option<&'static str> {
    TEMPLATES_DIR.get_file(path).and_then(|file| file.contents_utf8())
}

/// The built-in scenario catalog.
pub fn builtin_scenarios() -> Result<ScenarioCatalog, AppError> {
    let content = read_catalog_asset(SCENARIOS_FILE).ok_or_else(|| {
        AppError::config_error(format!("Embedded asset {SCENARIOS_FILE} is missing"))
    })?;
    ScenarioCatalog::from_yaml(content)
}
