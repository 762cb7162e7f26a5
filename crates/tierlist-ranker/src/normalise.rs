//! Score normalisation functions.

/// Linear min-max normalisation of `value` into the range `[min_val, max_val]`.
///
/// Not clamped: values below `min_val` come out negative and values above
/// `max_val` come out greater than 1.
/// Returns `None` when the range is degenerate: empty, or with a span that
/// is not finite (NaN or infinite bounds).
pub fn linear_normalise(value: f64, min_val: f64, max_val: f64) -> Option<f64> {
    let span = max_val - min_val;
    if !span.is_finite() || span == 0.0 {
        return None;
    }
    Some((value - min_val) / span)
}
