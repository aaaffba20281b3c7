//! Aggregates the range math and its leaf utilities.

pub mod bounds;
pub mod config;
pub mod constants;
pub mod data;
pub mod divide;
pub mod error;
pub mod format;
pub mod range;

// re-export frequently-used items for convenience
pub use config::{AxisRangeOption, AxisRangeOptionBuilder};
pub use constants::{DEFAULT_AXIS_DIVIDE_COUNT, LABEL_DIGITS};
pub use data::ParseDataError;
pub use divide::auto_divide;
pub use error::{AxisError, ConfigError};
pub use format::{LabelFormat, commaf_with_digits};
pub use range::AxisRange;
