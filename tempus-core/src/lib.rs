/// Surface spellings of units and the words that join components.
pub mod alias;
/// Error types for parsing and option validation.
pub mod error;
/// Parse and render options.
pub mod options;
/// The second-count value passed between parsing and rendering.
pub mod seconds;
/// Canonical units and their sizes.
pub mod units;

pub use error::{DurationParseError, InvalidSeconds, OptionsError};
pub use options::{Format, Options};
pub use seconds::Seconds;
pub use units::{UnitName, UnitTable};

pub type Error = anyhow::Error;
