//! Trailing moving averages for trend lines.
//!
//! Mirrors the "minimum one period" policy used throughout the history
//! views: the window shrinks at the start of the series so every position
//! has a defined value, and the first output always equals the first input.

/// Trailing moving average over `series` with the given window size.
///
/// Output position `i` is the mean of the last `min(i + 1, window)` values
/// ending at `i`. The result has the same length as the input. A window of
/// zero is treated as one.
pub fn rolling_average(series: &[f64], window: usize) -> Vec<f64> {
    let window = window.max(1);
    let mut out = Vec::with_capacity(series.len());
    let mut sum = 0.0;
    for (i, &value) in series.iter().enumerate() {
        sum += value;
        if i >= window {
            sum -= series[i - window];
        }
        let span = (i + 1).min(window);
        out.push(sum / span as f64);
    }
    out
}

/// Trailing moving average over a series with gaps.
///
/// Positions with `None` contribute nothing to the window; a window that
/// contains no present values yields `None`. Used for per-round rates that
/// are undefined on some rounds (an up-and-down percentage on a round with
/// no up-and-down chances, for example).
pub fn rolling_average_sparse(series: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    let window = window.max(1);
    let mut out = Vec::with_capacity(series.len());
    for i in 0..series.len() {
        let start = (i + 1).saturating_sub(window);
        let mut sum = 0.0;
        let mut count = 0usize;
        for value in series[start..=i].iter().flatten() {
            sum += value;
            count += 1;
        }
        out.push(if count > 0 { Some(sum / count as f64) } else { None });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_shrinks_at_start() {
        let out = rolling_average(&[1.0, 2.0, 3.0, 4.0], 2);
        assert_eq!(out, vec![1.0, 1.5, 2.5, 3.5]);
    }

    #[test]
    fn test_first_output_defined_for_wide_window() {
        let out = rolling_average(&[5.0, 7.0], 10);
        assert_eq!(out, vec![5.0, 6.0]);
    }

    #[test]
    fn test_empty_series() {
        assert!(rolling_average(&[], 3).is_empty());
    }

    #[test]
    fn test_window_one_is_identity() {
        let series = [3.0, 1.0, 4.0, 1.0, 5.0];
        assert_eq!(rolling_average(&series, 1), series.to_vec());
    }

    #[test]
    fn test_zero_window_treated_as_one() {
        let series = [2.0, 4.0];
        assert_eq!(rolling_average(&series, 0), series.to_vec());
    }

    #[test]
    fn test_sparse_skips_gaps() {
        let series = [Some(100.0), None, Some(50.0), Some(0.0)];
        let out = rolling_average_sparse(&series, 2);
        assert_eq!(out, vec![Some(100.0), Some(100.0), Some(50.0), Some(25.0)]);
    }

    #[test]
    fn test_sparse_all_missing_window() {
        let series = [None, None, Some(10.0)];
        let out = rolling_average_sparse(&series, 2);
        assert_eq!(out, vec![None, None, Some(10.0)]);
    }
}
