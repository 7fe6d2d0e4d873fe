pub mod direction;
pub mod options;
pub mod output;
pub mod random;
pub mod render;

pub use direction::DirectionOutcome;
pub use options::{OptionListing, OptionValue};
pub use output::OutputOptions;
pub use random::{RandomOptions, RandomPick};
pub use render::RenderOutcome;
