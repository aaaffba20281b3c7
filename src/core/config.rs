//! Construction input for [`AxisRange`](crate::AxisRange) + fluent builder.

use crate::core::error::ConfigError;

/// Raw bounds and geometry an axis range is derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRangeOption {
    pub min: f64,
    pub max: f64,
    /// Pixel length of the axis.
    pub size: usize,
    /// Center category values within their band instead of on tick edges.
    pub boundary: bool,
    /// Number of intervals; yields `divide_count + 1` ticks.
    pub divide_count: usize,
}

impl AxisRangeOption {
    #[inline]
    #[must_use]
    pub fn builder(size: usize, divide_count: usize) -> AxisRangeOptionBuilder {
        AxisRangeOptionBuilder::new(size, divide_count)
    }

    /// Reject inputs the rounding algorithm cannot handle.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ZeroDivideCount`] when `divide_count == 0`,
    /// [`ConfigError::NonFiniteBound`] when either bound is NaN or infinite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.divide_count == 0 {
            return Err(ConfigError::ZeroDivideCount);
        }
        for (field, value) in [("min", self.min), ("max", self.max)] {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteBound { field, value });
            }
        }
        Ok(())
    }
}

/// Fluent builder; bounds stay unset until `build`.
#[derive(Debug)]
pub struct AxisRangeOptionBuilder {
    size: usize,
    divide_count: usize,
    min: Option<f64>,
    max: Option<f64>,
    boundary: bool,
}

impl AxisRangeOptionBuilder {
    pub(crate) fn new(size: usize, divide_count: usize) -> Self {
        Self {
            size,
            divide_count,
            min: None,
            max: None,
            boundary: false,
        }
    }

    #[inline]
    #[must_use]
    pub fn min(mut self, v: f64) -> Self {
        self.min = Some(v);
        self
    }
    #[inline]
    #[must_use]
    pub fn max(mut self, v: f64) -> Self {
        self.max = Some(v);
        self
    }
    #[inline]
    #[must_use]
    pub fn range(mut self, r: std::ops::RangeInclusive<f64>) -> Self {
        self.min = Some(*r.start());
        self.max = Some(*r.end());
        self
    }
    #[inline]
    #[must_use]
    pub fn boundary(mut self, on: bool) -> Self {
        self.boundary = on;
        self
    }

    /// # Errors
    ///
    /// Fails when a bound was never set or the option does not pass
    /// [`AxisRangeOption::validate`].
    pub fn build(self) -> Result<AxisRangeOption, ConfigError> {
        let min = self.min.ok_or(ConfigError::MissingField("min"))?;
        let max = self.max.ok_or(ConfigError::MissingField("max"))?;
        let opt = AxisRangeOption {
            min,
            max,
            size: self.size,
            boundary: self.boundary,
            divide_count: self.divide_count,
        };
        opt.validate()?;
        Ok(opt)
    }
}

/// Ergonomic `?` on a builder chain.
impl From<AxisRangeOptionBuilder> for Result<AxisRangeOption, ConfigError> {
    fn from(b: AxisRangeOptionBuilder) -> Self {
        b.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_fills_every_field() {
        let opt = AxisRangeOption::builder(300, 6)
            .range(-5.0..=50.0)
            .boundary(true)
            .build()
            .unwrap();
        assert_eq!(
            opt,
            AxisRangeOption {
                min: -5.0,
                max: 50.0,
                size: 300,
                boundary: true,
                divide_count: 6,
            }
        );
    }

    #[test]
    fn builder_reports_missing_bounds() {
        let err = AxisRangeOption::builder(300, 6).max(1.0).build().unwrap_err();
        assert_eq!(err, ConfigError::MissingField("min"));
        let err = AxisRangeOption::builder(300, 6).min(1.0).build().unwrap_err();
        assert_eq!(err, ConfigError::MissingField("max"));
    }

    #[test]
    fn zero_divide_count_is_rejected() {
        let res: Result<AxisRangeOption, ConfigError> =
            AxisRangeOption::builder(300, 0).range(0.0..=1.0).into();
        assert_eq!(res.unwrap_err(), ConfigError::ZeroDivideCount);
    }

    #[test]
    fn non_finite_bounds_are_rejected() {
        let err = AxisRangeOption::builder(300, 6)
            .min(f64::NAN)
            .max(1.0)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NonFiniteBound { field: "min", .. }
        ));
        let err = AxisRangeOption::builder(300, 6)
            .min(0.0)
            .max(f64::INFINITY)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NonFiniteBound { field: "max", .. }
        ));
    }
}
