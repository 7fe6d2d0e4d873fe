pub mod embedded_assets;

pub use embedded_assets::{
    SUMMARY_TEMPLATE, builtin_scenarios, read_catalog_asset, read_template_asset,
};
