use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::PresetStore;

/// In-memory preset store for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryPresetStore {
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
}

impl MemoryPresetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.files.lock().unwrap().insert(PathBuf::from(path), content.to_string());
        self
    }

    pub fn file(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(Path::new(path)).cloned()
    }
}

impl PresetStore for MemoryPresetStore {
    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    fn read_text(&self, path: &Path) -> Result<String, AppError> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| AppError::PresetNotFound(path.display().to_string()))
    }

    fn write_text(&self, path: &Path, content: &str) -> Result<(), AppError> {
        self.files.lock().unwrap().insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
