use arboard::Clipboard;

use crate::domain::AppError;
use crate::ports::ClipboardWriter;

/// System clipboard, opened on first write.
#[derive(Default)]
pub struct ArboardClipboard {
    handle: Option<Clipboard>,
}

impl ArboardClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut Clipboard, AppError> {
        let clipboard = match self.handle.take() {
            Some(clipboard) => clipboard,
            None => Clipboard::new().map_err(clipboard_error)?,
        };
        Ok(self.handle.insert(clipboard))
    }
}

fn clipboard_error(err: arboard::Error) -> AppError {
    AppError::ClipboardError(err.to_string())
}

impl ClipboardWriter for ArboardClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        self.handle()?.set_text(text).map_err(clipboard_error)
    }
}
