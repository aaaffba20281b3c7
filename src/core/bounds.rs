//! Geometry helpers: raw sample bounds + terminal size plumbing.

use terminal_size::{Width, terminal_size};

use crate::core::constants::{LABEL_GUTTER, MIN_AXIS_SIZE};

/// Inclusive bounds of `samples` without any padding.
///
/// * If the set is empty or contains only non-finite values the
///   fallback is `(0.0, 1.0)`.
/// * If *all* finite samples are identical we expand by +-0.5 so the axis
///   still has a non-zero span.
#[must_use]
pub fn raw_bounds(samples: &[f64]) -> (f64, f64) {
    let (mut low, mut high) = (f64::INFINITY, f64::NEG_INFINITY);

    for &s in samples.iter().filter(|s| s.is_finite()) {
        low = low.min(s);
        high = high.max(s);
    }

    if !low.is_finite() || !high.is_finite() {
        return (0.0, 1.0);
    }

    // Flat series - give it some breathing room.
    if (high - low).abs() < f64::EPSILON {
        return (low - 0.5, high + 0.5);
    }

    (low, high)
}

/// Current terminal width (80 column fallback).
#[inline]
#[must_use]
pub fn terminal_width() -> Width {
    terminal_size().map_or(Width(80), |(w, _)| w)
}

/// Axis length left over once the label gutter is reserved.
#[inline]
#[must_use]
pub fn axis_size(Width(w): Width) -> usize {
    usize::from(w)
        .saturating_sub(LABEL_GUTTER)
        .max(MIN_AXIS_SIZE)
}
