pub mod catalogs;
pub mod clipboard_arboard;
pub mod preset_filesystem;
pub mod template;

pub use clipboard_arboard::ArboardClipboard;
pub use preset_filesystem::FilesystemPresetStore;
pub use template::MinijinjaTemplateRenderer;
