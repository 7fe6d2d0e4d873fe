use std::path::Path;

use crate::domain::AppError;

/// Port for reading and writing preset and config files.
pub trait PresetStore {
    fn exists(&self, path: &Path) -> bool;

    /// Read a file as text. A missing file is `AppError::PresetNotFound`.
    fn read_text(&self, path: &Path) -> Result<String, AppError>;

    /// Write text, creating parent directories as needed.
    fn write_text(&self, path: &Path, content: &str) -> Result<(), AppError>;
}
