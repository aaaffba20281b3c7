//! Tick label formatting: thousands separators + fixed fraction digits.

use crate::core::constants::LABEL_DIGITS;

/// Format `value` with `,` grouping and at most `digits` fraction digits.
///
/// The value is rounded to `digits` places first, then trailing fractional
/// zeros are dropped: `1234.5` prints as `1,234.5`, `20.0` as `20`.
/// A value that rounds to zero never prints a sign.
#[must_use]
pub fn commaf_with_digits(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.digits$}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let negative = value < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9'));

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    push_grouped(&mut out, int_part);
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Append ASCII digits with a `,` before every group of three.
#[inline]
fn push_grouped(buf: &mut String, digits: &str) {
    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - lead) % 3 == 0 {
            buf.push(',');
        }
        buf.push(ch);
    }
}

/// How tick values are turned into labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelFormat {
    /// Maximum fraction digits after rounding.
    pub digits: usize,
    /// Opt-in: abbreviate thousands as `k` and millions as `M`.
    ///
    /// Only values at or above 1,000 abbreviate; negative values never do.
    pub compact: bool,
}

impl Default for LabelFormat {
    fn default() -> Self {
        Self {
            digits: LABEL_DIGITS,
            compact: false,
        }
    }
}

impl LabelFormat {
    #[must_use]
    pub fn compact() -> Self {
        Self {
            compact: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn format(&self, value: f64) -> String {
        const M: f64 = 1_000_000.0;
        const K: f64 = 1_000.0;

        if self.compact {
            if value >= M {
                return commaf_with_digits(value / M, self.digits) + "M";
            }
            if value >= K {
                return commaf_with_digits(value / K, self.digits) + "k";
            }
        }
        commaf_with_digits(value, self.digits)
    }
}
