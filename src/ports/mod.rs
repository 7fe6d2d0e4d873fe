mod clipboard_writer;
mod preset_store;

pub use clipboard_writer::{ClipboardWriter, NoopClipboard};
pub use preset_store::PresetStore;
