use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::PresetStore;

/// Filesystem-based preset store. Relative paths resolve against `root`.
#[derive(Debug, Clone)]
pub struct FilesystemPresetStore {
    root: PathBuf,
}

impl FilesystemPresetStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a store rooted at the current directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() { path.to_path_buf() } else { self.root.join(path) }
    }
}

impl PresetStore for FilesystemPresetStore {
    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).is_file()
    }

    fn read_text(&self, path: &Path) -> Result<String, AppError> {
        fs::read_to_string(self.resolve(path)).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => AppError::PresetNotFound(path.display().to_string()),
            _ => AppError::Io(err),
        })
    }

    fn write_text(&self, path: &Path, content: &str) -> Result<(), AppError> {
        let full = self.resolve(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(full, content)?;
        Ok(())
    }
}
