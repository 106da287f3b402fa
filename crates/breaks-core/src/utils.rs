//! Utility functions for working with data slices

/// Sort data ascending and return a new vector
///
/// Uses the IEEE total order, so the result is deterministic for every input.
///
/// # Examples
///
/// ```rust
/// use breaks_core::utils::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Calculate the mean of a slice
///
/// Returns 0.0 for empty slices.
///
/// # Examples
///
/// ```rust
/// use breaks_core::utils::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
/// assert_eq!(mean(&[]), 0.0);
/// ```
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let n = data.len() as f64;
    let sum: f64 = data.iter().sum();
    if sum.is_finite() {
        return sum / n;
    }
    // The sum overflowed; the mean of finite values never does
    data.iter().map(|&x| x / n).sum()
}

/// Sum of squared deviations about the slice mean
///
/// Returns 0.0 for empty slices.
///
/// # Examples
///
/// ```rust
/// use breaks_core::utils::ssd;
///
/// assert_eq!(ssd(&[1.0, 2.0, 3.0]), 2.0);
/// ```
pub fn ssd(data: &[f64]) -> f64 {
    let m = mean(data);
    data.iter()
        .map(|&x| {
            let diff = x - m;
            diff * diff
        })
        .sum()
}

/// Sum of squared deviations of `data / scale` about its mean
///
/// With `scale` at least the largest absolute value every term lies in
/// `[0, 4]`, so the result is finite for any finite input.
pub fn scaled_ssd(data: &[f64], scale: f64) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let m = data.iter().map(|&x| x / scale).sum::<f64>() / data.len() as f64;
    data.iter()
        .map(|&x| {
            let diff = x / scale - m;
            diff * diff
        })
        .sum()
}

/// Mean of `data` topped up with `extra` copies of `value`
///
/// Used to evaluate a class as if a value's missing occurrences had been
/// moved into it. `sum` is the sum of the `len` values already present.
pub fn topped_up_mean(sum: f64, len: usize, value: f64, extra: usize) -> f64 {
    let total = len + extra;
    if total == 0 {
        return value;
    }
    (sum + value * extra as f64) / total as f64
}
