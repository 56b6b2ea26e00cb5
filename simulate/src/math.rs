use std::cmp::Ordering;

/// Piecewise-linear interpolation of `ys` over the increasing `xs`. Values
/// outside the range are clamped to the ends.
pub fn linear_interpolate(xs: &[f32], ys: &[f32], x: f32) -> f32 {
    let (index, frac) = find_segment(xs, x);
    if index + 1 >= ys.len() {
        return ys[index];
    }
    ys[index] + (ys[index + 1] - ys[index]) * frac
}

/// Locate `x` within `xs`. Returns the index of the segment starting point and
/// how far along that segment `x` lies, within `0..=1`.
///
/// This lets you split interpolation into two steps when several series share
/// the same `xs`.
pub fn find_segment(xs: &[f32], x: f32) -> (usize, f32) {
    match xs.binary_search_by(|n| n.partial_cmp(&x).unwrap_or(Ordering::Less)) {
        Ok(i) if i + 1 == xs.len() && i > 0 => (i - 1, 1.0),
        Ok(i) => (i, 0.0),
        Err(0) => (0, 0.0),
        Err(i) if i == xs.len() => {
            if i >= 2 {
                (i - 2, 1.0)
            } else {
                (0, 0.0)
            }
        }
        Err(i) => {
            let left = xs[i - 1];
            let right = xs[i];
            (i - 1, (x - left) / (right - left))
        }
    }
}
