//! Split a pixel span into near-equal integer segments.

/// Boundary offsets of `count` segments covering `0..=size`.
///
/// The `size % count` leftover pixels go to the first segments, so widths
/// differ by at most one. Returns `count + 1` offsets, first `0`, last `size`.
/// A zero `count` yields just `[0]`.
#[must_use]
pub fn auto_divide(size: usize, count: usize) -> Vec<usize> {
    if count == 0 {
        return vec![0];
    }
    let base = size / count;
    let extra = size % count;

    let mut out = Vec::with_capacity(count + 1);
    let mut offset = 0;
    out.push(offset);
    for i in 0..count {
        offset += base + usize::from(i < extra);
        out.push(offset);
    }
    out
}
