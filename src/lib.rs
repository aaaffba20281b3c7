//! Public-facing crate root – re-exports + one-shot helper.
//!
//! ```rust
//! use axis_range::{AxisRange, AxisRangeOption};
//!
//! let opt = AxisRangeOption::builder(300, 6).range(0.0..=90.0).build()?;
//! let axis = AxisRange::new(&opt)?;
//! assert_eq!((axis.min(), axis.max()), (0.0, 120.0));
//! assert_eq!(axis.values(), ["0", "20", "40", "60", "80", "100", "120"]);
//! assert_eq!(axis.height_from_value(60.0), 150);
//! # Ok::<(), axis_range::ConfigError>(())
//! ```

pub mod cli;
pub mod core;

pub use crate::core::{
    AxisError, AxisRange, AxisRangeOption, AxisRangeOptionBuilder, ConfigError,
    DEFAULT_AXIS_DIVIDE_COUNT, LabelFormat, ParseDataError, auto_divide, commaf_with_digits,
};

/// Build a range straight from a sample set, using its raw extrema.
///
/// # Errors
///
/// [`AxisError::EmptyData`] for an empty slice, otherwise whatever
/// [`AxisRange::new`] rejects.
pub fn range_for_samples(
    samples: &[f64],
    size: usize,
    divide_count: usize,
    boundary: bool,
) -> Result<AxisRange, AxisError> {
    use crate::core::bounds::raw_bounds;

    if samples.is_empty() {
        return Err(AxisError::EmptyData);
    }
    let (min, max) = raw_bounds(samples);
    let opt = AxisRangeOption::builder(size, divide_count)
        .range(min..=max)
        .boundary(boundary)
        .build()?;
    Ok(AxisRange::new(&opt)?)
}
