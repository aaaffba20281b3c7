//! Centralised error types used across the crate.

use std::{error::Error, fmt, io};

use crate::core::data::ParseDataError;

/// Precise configuration faults.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    MissingField(&'static str),
    ZeroDivideCount,
    NonFiniteBound { field: &'static str, value: f64 },
    SpanTooLarge { min: f64, max: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingField(x) => write!(f, "configuration missing field `{x}`"),
            ConfigError::ZeroDivideCount => f.write_str("divide count must be at least 1"),
            ConfigError::NonFiniteBound { field, value } => {
                write!(f, "{field} must be finite, got {value}")
            }
            ConfigError::SpanTooLarge { min, max } => {
                write!(f, "range [{min}, {max}] is too large to round into exact units")
            }
        }
    }
}
impl Error for ConfigError {}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug)]
pub enum AxisError {
    Io(io::Error),
    Data(ParseDataError),
    Config(ConfigError),
    EmptyData,
}

impl fmt::Display for AxisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisError::Io(e) => write!(f, "{e}"),
            AxisError::Data(e) => write!(f, "{e}"),
            AxisError::Config(e) => write!(f, "{e}"),
            AxisError::EmptyData => write!(f, "data set is empty"),
        }
    }
}

impl Error for AxisError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AxisError::Io(e) => Some(e),
            AxisError::Data(e) => Some(e),
            AxisError::Config(e) => Some(e),
            AxisError::EmptyData => None,
        }
    }
}

// automatic conversions
impl From<io::Error> for AxisError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<ParseDataError> for AxisError {
    fn from(e: ParseDataError) -> Self {
        Self::Data(e)
    }
}
impl From<ConfigError> for AxisError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
