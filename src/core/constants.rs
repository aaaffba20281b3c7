//! A collection of constants.

/// Divide count used by the CLI when the caller does not pick one.
pub const DEFAULT_AXIS_DIVIDE_COUNT: usize = 6;

/// Each raw bound is pushed away from zero by this share of its magnitude.
pub const PADDING_RATIO: f64 = 0.1;

/// Base unit thresholds on the padded span, checked in order.
/// The last threshold the span exceeds wins.
pub const UNIT_THRESHOLDS: [(f64, i64); 4] = [(10.0, 4), (30.0, 5), (100.0, 10), (200.0, 20)];

/// Base unit when the padded span is at most the first threshold.
pub const SMALLEST_UNIT: i64 = 2;

/// Tick labels are rounded to two decimal places.
///
/// 14.832 becomes 14.83
pub const LABEL_DIGITS: usize = 2;

/// Columns reserved for tick labels when the axis size comes from the terminal
pub const LABEL_GUTTER: usize = 12;

/// Axis must be at least 10 pixels long
pub const MIN_AXIS_SIZE: usize = 10;

/// Largest integer an `f64` holds exactly (2^53); rounded bounds stay within it.
pub const MAX_EXACT_INTEGER: i64 = 1 << 53;
