pub mod framelab_config;

pub use framelab_config::{
    CONFIG_FILE, CatalogConfig, FramelabConfig, LoggingConfig, OutputConfig, OutputFormat,
    parse_config_content,
};
