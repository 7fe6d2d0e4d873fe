use crate::domain::AppError;
use crate::ports::ClipboardWriter;

/// In-memory clipboard keeping every write, optionally failing.
#[derive(Debug, Default)]
pub struct MockClipboard {
    writes: Vec<String>,
    unavailable: bool,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose writes always fail.
    pub fn unavailable() -> Self {
        Self { writes: Vec::new(), unavailable: true }
    }

    /// Most recent successful write.
    pub fn last(&self) -> Option<&str> {
        self.writes.last().map(String::as_str)
    }

    pub fn writes(&self) -> &[String] {
        &self.writes
    }
}

impl ClipboardWriter for MockClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        if self.unavailable {
            return Err(AppError::ClipboardError("clipboard unavailable".to_string()));
        }
        self.writes.push(text.to_string());
        Ok(())
    }
}
