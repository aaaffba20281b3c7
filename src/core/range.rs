//! Nice axis ranges: rounded bounds, tick labels and pixel conversion.
//!
//! ### Rounding
//! 1. Each raw bound is pushed away from zero by 10% of its own magnitude.
//! 2. A base unit (2, 4, 5, 10 or 20) is picked from the padded span.
//! 3. The unit is scaled up so `divide_count` steps cover the span.
//! 4. `min` is truncated to a multiple of the unit, one extra unit lower
//!    when negative.
//! 5. `max` is derived as `min + unit * divide_count`.
//!
//! Every interval therefore has the same integer width in data space.

use crate::core::{
    config::AxisRangeOption,
    constants::{MAX_EXACT_INTEGER, PADDING_RATIO, SMALLEST_UNIT, UNIT_THRESHOLDS},
    divide::auto_divide,
    error::ConfigError,
    format::LabelFormat,
};

/// Rounded axis bounds plus the pixel geometry they are drawn into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    divide_count: usize,
    min: f64,
    max: f64,
    unit: i64,
    size: usize,
    boundary: bool,
}

/// Base granularity for a padded span.
#[inline]
fn base_unit(span: f64) -> i64 {
    let mut unit = SMALLEST_UNIT;
    for (threshold, candidate) in UNIT_THRESHOLDS {
        if span > threshold {
            unit = candidate;
        }
    }
    unit
}

/// Truncate toward zero, `None` when `x` does not fit an `i64`.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn trunc_to_i64(x: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
    (x.is_finite() && x >= i64::MIN as f64 && x < i64::MAX as f64).then(|| x as i64)
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss
)]
impl AxisRange {
    /// Round the raw bounds in `opt` into a nice range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroDivideCount`] or
    /// [`ConfigError::NonFiniteBound`] when `opt` fails validation, and
    /// [`ConfigError::SpanTooLarge`] when the rounded bounds or the unit
    /// cannot be held exactly as integers in an `f64`.
    pub fn new(opt: &AxisRangeOption) -> Result<Self, ConfigError> {
        opt.validate()?;

        let divide_count = opt.divide_count;
        let max = opt.max + (opt.max * PADDING_RATIO).abs();
        let min = opt.min - (opt.min * PADDING_RATIO).abs();
        let span = (max - min).abs();

        let base = base_unit(span);
        let too_large = || ConfigError::SpanTooLarge {
            min: opt.min,
            max: opt.max,
        };
        let steps =
            trunc_to_i64((span / divide_count as f64) / base as f64).ok_or_else(too_large)?;
        let unit = steps
            .checked_mul(base)
            .and_then(|u| u.checked_add(base))
            .filter(|&u| u <= MAX_EXACT_INTEGER)
            .ok_or_else(too_large)?;
        let unit_f = unit as f64;

        let mut low = 0i64;
        if min != 0.0 {
            let was_negative = min < 0.0;
            low = trunc_to_i64(min / unit_f)
                .and_then(|q| q.checked_mul(unit))
                .ok_or_else(too_large)?;
            // truncation rounded a negative bound up, step back one unit
            if low < 0 || (was_negative && low == 0) {
                low = low.checked_sub(unit).ok_or_else(too_large)?;
            }
        }
        let extent = i64::try_from(divide_count)
            .ok()
            .and_then(|n| unit.checked_mul(n))
            .filter(|&e| e <= MAX_EXACT_INTEGER)
            .ok_or_else(too_large)?;
        let high = low.checked_add(extent).ok_or_else(too_large)?;
        let exact = -MAX_EXACT_INTEGER..=MAX_EXACT_INTEGER;
        if !exact.contains(&low) || !exact.contains(&high) {
            return Err(too_large());
        }
        let min = low as f64;
        let max = high as f64;

        log::debug!(
            "axis range: raw [{}, {}] span {span} base {base} unit {unit} -> [{min}, {max}]",
            opt.min,
            opt.max
        );

        Ok(Self {
            divide_count,
            min,
            max,
            unit,
            size: opt.size,
            boundary: opt.boundary,
        })
    }

    #[inline]
    #[must_use]
    pub fn divide_count(&self) -> usize {
        self.divide_count
    }
    #[inline]
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }
    #[inline]
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }
    /// Data-space width of one interval.
    #[inline]
    #[must_use]
    pub fn unit(&self) -> i64 {
        self.unit
    }
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }
    #[inline]
    #[must_use]
    pub fn boundary(&self) -> bool {
        self.boundary
    }

    /// The `divide_count + 1` tick values from `min` to `max` inclusive.
    #[must_use]
    pub fn tick_values(&self) -> Vec<f64> {
        let offset = (self.max - self.min) / self.divide_count as f64;
        (0..=self.divide_count)
            .map(|i| self.min + i as f64 * offset)
            .collect()
    }

    /// Tick labels with the default grouped, two-digit format.
    #[must_use]
    pub fn values(&self) -> Vec<String> {
        self.values_with(&LabelFormat::default())
    }

    #[must_use]
    pub fn values_with(&self, format: &LabelFormat) -> Vec<String> {
        self.tick_values()
            .into_iter()
            .map(|v| format.format(v))
            .collect()
    }

    /// Pixel offset of `value` from the `min` end of the axis.
    ///
    /// Truncates toward zero; values outside the range are not clamped.
    #[inline]
    #[must_use]
    pub fn height_from_value(&self, value: f64) -> i64 {
        let v = (value - self.min) / (self.max - self.min);
        (v * self.size as f64) as i64
    }

    /// Pixel offset of `value` from the `max` end of the axis.
    #[inline]
    #[must_use]
    pub fn rest_height_from_value(&self, value: f64) -> i64 {
        self.size as i64 - self.height_from_value(value)
    }

    /// Horizontal pixel position of `value`.
    ///
    /// In boundary mode the position is shifted by half a band so a category
    /// sits in the middle of its interval. The value is scaled by the span
    /// without subtracting `min`.
    #[inline]
    #[must_use]
    pub fn width_from_value(&self, value: f64) -> i64 {
        let mut v = value / (self.max - self.min);
        if self.boundary && self.divide_count != 0 {
            v += 1.0 / (self.divide_count * 2) as f64;
        }
        (v * self.size as f64) as i64
    }

    /// Pixel band `[start, end)` owned by interval `index`.
    ///
    /// Indices past the last interval extrapolate instead of failing.
    #[must_use]
    pub fn get_range(&self, index: usize) -> (f64, f64) {
        let unit = self.size as f64 / self.divide_count as f64;
        (unit * index as f64, unit * (index as f64 + 1.0))
    }

    /// Integer boundary offsets splitting the axis into `divide_count` bands.
    #[must_use]
    pub fn auto_divide(&self) -> Vec<usize> {
        auto_divide(self.size, self.divide_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(min: f64, max: f64, size: usize, divide_count: usize) -> AxisRange {
        let opt = AxisRangeOption {
            min,
            max,
            size,
            boundary: false,
            divide_count,
        };
        AxisRange::new(&opt).unwrap()
    }

    #[test]
    fn base_unit_thresholds_are_inclusive_upper_bounds() {
        assert_eq!(base_unit(0.0), 2);
        assert_eq!(base_unit(10.0), 2);
        assert_eq!(base_unit(10.5), 4);
        assert_eq!(base_unit(30.0), 4);
        assert_eq!(base_unit(30.5), 5);
        assert_eq!(base_unit(100.0), 5);
        assert_eq!(base_unit(100.5), 10);
        assert_eq!(base_unit(200.0), 10);
        assert_eq!(base_unit(200.5), 20);
        assert_eq!(base_unit(1e9), 20);
    }

    #[test]
    fn zero_min_is_not_snapped() {
        // padded max 99, base unit 5, refined floor(16.5 / 5) * 5 + 5 = 20
        let r = range(0.0, 90.0, 300, 6);
        assert_eq!(r.min(), 0.0);
        assert_eq!(r.unit(), 20);
        assert_eq!(r.max(), 120.0);
    }

    #[test]
    fn negative_min_steps_past_truncated_zero() {
        // padded [-5.5, 55], unit 15; -5.5 / 15 truncates to 0, then -15
        let r = range(-5.0, 50.0, 300, 6);
        assert_eq!(r.unit(), 15);
        assert_eq!(r.min(), -15.0);
        assert_eq!(r.max(), 75.0);
    }

    #[test]
    fn negative_min_steps_past_truncated_multiple() {
        // padded [-55, 55], unit 30; -55 / 30 truncates to -30, then -60
        let r = range(-50.0, 50.0, 300, 4);
        assert_eq!(r.unit(), 30);
        assert_eq!(r.min(), -60.0);
        assert_eq!(r.max(), 60.0);
    }

    #[test]
    fn positive_min_truncates_down() {
        // padded [18, 88], unit 15; 18 / 15 truncates to 15
        let r = range(20.0, 80.0, 300, 5);
        assert_eq!(r.min(), 15.0);
        assert_eq!(r.max(), 90.0);
    }

    #[test]
    fn single_division() {
        let r = range(0.0, 7.0, 400, 4);
        assert_eq!((r.min(), r.max(), r.unit()), (0.0, 8.0, 2));
    }

    #[test]
    fn zero_divide_count_is_rejected() {
        let opt = AxisRangeOption {
            min: 0.0,
            max: 10.0,
            size: 100,
            boundary: false,
            divide_count: 0,
        };
        assert_eq!(AxisRange::new(&opt), Err(ConfigError::ZeroDivideCount));
    }

    #[test]
    fn labels_cover_every_tick() {
        let r = range(-5.0, 50.0, 300, 6);
        assert_eq!(
            r.values(),
            vec!["-15", "0", "15", "30", "45", "60", "75"]
        );
        let r = range(0.0, 90.0, 300, 6);
        assert_eq!(r.values().len(), 7);
        assert_eq!(r.values().last().map(String::as_str), Some("120"));
    }

    #[test]
    fn compact_labels() {
        let r = range(0.0, 9_000.0, 300, 5);
        let labels = r.values_with(&LabelFormat::compact());
        assert_eq!(labels.first().map(String::as_str), Some("0"));
        assert!(labels.iter().skip(1).all(|l| l.ends_with('k')), "{labels:?}");
    }

    #[test]
    fn height_and_rest_height() {
        let r = range(0.0, 7.0, 400, 4);
        assert_eq!(r.height_from_value(0.0), 0);
        assert_eq!(r.height_from_value(2.0), 100);
        assert_eq!(r.height_from_value(8.0), 400);
        assert_eq!(r.rest_height_from_value(2.0), 300);
        assert_eq!(r.height_from_value(-1.0), -50);
        assert_eq!(r.height_from_value(9.0), 450);
        assert_eq!(r.rest_height_from_value(9.0), -50);
    }

    #[test]
    fn width_without_and_with_boundary() {
        let r = range(0.0, 7.0, 400, 4);
        assert_eq!(r.width_from_value(0.0), 0);
        assert_eq!(r.width_from_value(2.0), 100);

        let opt = AxisRangeOption {
            min: 0.0,
            max: 7.0,
            size: 400,
            boundary: true,
            divide_count: 4,
        };
        let r = AxisRange::new(&opt).unwrap();
        assert_eq!(r.width_from_value(0.0), 50);
        assert_eq!(r.width_from_value(2.0), 150);
        assert_eq!(r.width_from_value(4.0), 250);
    }

    #[test]
    fn width_ignores_a_non_zero_min() {
        // snaps to [-15, 75]; widths scale by the span of 90 only
        let r = range(-5.0, 50.0, 300, 6);
        assert_eq!(r.min(), -15.0);
        assert_eq!(r.width_from_value(0.0), 0);
        assert_eq!(r.width_from_value(45.0), 150);
        assert_eq!(r.width_from_value(-15.0), -50);

        let opt = AxisRangeOption {
            min: -5.0,
            max: 50.0,
            size: 300,
            boundary: true,
            divide_count: 6,
        };
        let r = AxisRange::new(&opt).unwrap();
        assert_eq!(r.width_from_value(0.0), 25);
        assert_eq!(r.width_from_value(45.0), 175);
    }

    #[test]
    fn span_too_large_for_exact_units_is_rejected() {
        let opt = AxisRangeOption {
            min: 0.0,
            max: 1e20,
            size: 300,
            boundary: false,
            divide_count: 6,
        };
        assert_eq!(
            AxisRange::new(&opt),
            Err(ConfigError::SpanTooLarge { min: 0.0, max: 1e20 })
        );

        let opt = AxisRangeOption {
            min: -1e17,
            max: -1e17 + 10.0,
            divide_count: 1_000,
            ..opt
        };
        assert!(matches!(
            AxisRange::new(&opt),
            Err(ConfigError::SpanTooLarge { .. })
        ));
    }

    #[test]
    fn large_but_exact_spans_still_divide_evenly() {
        let r = range(0.0, 1e12, 300, 6);
        assert!(r.max() >= 1e12);
        assert_eq!((r.max() - r.min()) / 6.0, r.unit() as f64);
    }

    #[test]
    fn get_range_bands_and_extrapolation() {
        let r = range(0.0, 90.0, 300, 6);
        assert_eq!(r.get_range(0), (0.0, 50.0));
        assert_eq!(r.get_range(5), (250.0, 300.0));
        assert_eq!(r.get_range(6), (300.0, 350.0));

        let (lo, hi) = r.get_range(usize::MAX);
        assert!(lo.is_finite() && hi >= lo);
    }

    #[test]
    fn auto_divide_uses_axis_geometry() {
        let r = range(0.0, 90.0, 301, 6);
        assert_eq!(r.auto_divide(), vec![0, 51, 101, 151, 201, 251, 301]);
    }
}
