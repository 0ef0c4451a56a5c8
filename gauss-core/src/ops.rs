//! Row-level arithmetic shared by the elimination phases.

/// Dot product of two equally long slices.
/// Extra elements of the longer slice are ignored.
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// `y = y - alpha * x`, element-wise over the common length.
pub fn sub_scaled(alpha: f64, x: &[f64], y: &mut [f64]) {
    for (yi, xi) in y.iter_mut().zip(x) {
        *yi -= alpha * xi;
    }
}

/// Divides every element of `row` by `divisor`.
/// The reciprocal is not precomputed so that `divisor / divisor` is exactly 1.
pub fn divide(row: &mut [f64], divisor: f64) {
    for v in row.iter_mut() {
        *v /= divisor;
    }
}

/// Index of the element with the largest absolute value.
/// Ties go to the first index; NaN never wins. Returns None for an empty slice.
pub fn argmax_abs<I>(values: I) -> Option<(usize, f64)>
where
    I: IntoIterator<Item = f64>,
{
    let mut best: Option<(usize, f64)> = None;
    for (i, v) in values.into_iter().enumerate() {
        let magnitude = v.abs();
        match best {
            None => best = Some((i, magnitude)),
            Some((_, current)) if magnitude > current || current.is_nan() => {
                best = Some((i, magnitude))
            }
            _ => {}
        }
    }
    best
}
