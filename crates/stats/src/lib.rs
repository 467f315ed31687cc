//! Statistical helper functions for the arkov discretizers.

use std::f64::consts::SQRT_2;

// Abramowitz & Stegun 7.1.26 coefficients.
const A1: f64 = 0.254829592;
const A2: f64 = -0.284496736;
const A3: f64 = 1.421413741;
const A4: f64 = -1.453152027;
const A5: f64 = 1.061405429;
const P: f64 = 0.3275911;

/// Standard normal cumulative distribution function, Φ(x).
///
/// Uses the Abramowitz & Stegun rational approximation (formula 7.1.26)
/// of `erf`, evaluated on `|x| / √2` and reflected by the sign of `x`.
/// Absolute error is below 1.5e-7 for all finite `x`.
///
/// `Φ(0)` is exactly 0.5, so `Φ(-x) == 1 - Φ(x)` also holds at the origin.
/// Infinite inputs map to 0.0 and 1.0; NaN propagates.
///
/// # Example
///
/// ```
/// use arkov_stats::normal_cdf;
///
/// assert_eq!(normal_cdf(0.0), 0.5);
/// assert!(normal_cdf(3.0) > 0.998);
/// ```
pub fn normal_cdf(x: f64) -> f64 {
    // The rational fit leaves erf(0) at 1e-9; pin the midpoint.
    if x == 0.0 {
        return 0.5;
    }
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let z = x.abs() / SQRT_2;

    let t = 1.0 / (1.0 + P * z);
    let y = 1.0 - (((((A5 * t + A4) * t) + A3) * t + A2) * t + A1) * t * (-z * z).exp();

    0.5 * (1.0 + sign * y)
}

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Sample variance with N-1 denominator.
/// Returns 0.0 if fewer than 2 elements.
pub fn variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }
    let nf = n as f64;
    let mean = data.iter().sum::<f64>() / nf;
    data.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / (nf - 1.0)
}

/// Sample standard deviation with N-1 denominator.
/// Returns 0.0 if fewer than 2 elements.
pub fn sd(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Lag-1 sample autocorrelation.
///
/// Uses the standard ACF estimator: the lag-1 autocovariance and the
/// variance are both computed around the full-sample mean with an N
/// denominator, so the ratio is
/// `Σ (x_t - m)(x_{t-1} - m) / Σ (x_t - m)²`.
///
/// Returns `None` if fewer than 3 values or if the series is constant.
pub fn lag1_autocorrelation(data: &[f64]) -> Option<f64> {
    if data.len() < 3 {
        return None;
    }
    let m = mean(data);

    let denom: f64 = data.iter().map(|&x| (x - m) * (x - m)).sum();
    if denom == 0.0 {
        return None;
    }

    let num: f64 = data
        .windows(2)
        .map(|w| (w[0] - m) * (w[1] - m))
        .sum();

    Some(num / denom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_normal_cdf_zero() {
        assert_eq!(normal_cdf(0.0), 0.5);
        assert_eq!(normal_cdf(-0.0), 0.5);
        assert_eq!(normal_cdf(-0.0), 1.0 - normal_cdf(0.0));
    }

    #[test]
    fn test_normal_cdf_monotone_across_zero() {
        let below = normal_cdf(-1e-300);
        let above = normal_cdf(1e-300);
        assert!(below <= 0.5 && 0.5 <= above, "{below} / {above}");
    }

    #[test]
    fn test_normal_cdf_known_values() {
        // Reference values of Φ to 7 decimals.
        assert_abs_diff_eq!(normal_cdf(1.0), 0.8413447, epsilon = 1.5e-7);
        assert_abs_diff_eq!(normal_cdf(-1.0), 0.1586553, epsilon = 1.5e-7);
        assert_abs_diff_eq!(normal_cdf(1.959964), 0.9750000, epsilon = 1.5e-7);
        assert_abs_diff_eq!(normal_cdf(3.0), 0.9986501, epsilon = 1.5e-7);
    }

    #[test]
    fn test_normal_cdf_symmetry() {
        for i in 0..=80 {
            let x = i as f64 * 0.1;
            assert_abs_diff_eq!(normal_cdf(-x), 1.0 - normal_cdf(x), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_normal_cdf_monotone() {
        let mut prev = normal_cdf(-6.0);
        for i in 1..=1200 {
            let x = -6.0 + i as f64 * 0.01;
            let cur = normal_cdf(x);
            assert!(cur >= prev, "Φ decreased at x={x}: {prev} -> {cur}");
            prev = cur;
        }
    }

    #[test]
    fn test_normal_cdf_bounds() {
        for i in -100..=100 {
            let p = normal_cdf(i as f64 * 0.2);
            assert!((0.0..=1.0).contains(&p), "Φ out of range: {p}");
        }
    }

    #[test]
    fn test_normal_cdf_infinite() {
        assert_eq!(normal_cdf(f64::INFINITY), 1.0);
        assert_eq!(normal_cdf(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_normal_cdf_nan() {
        assert!(normal_cdf(f64::NAN).is_nan());
    }

    #[test]
    fn test_mean() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(mean(&data), 5.0, epsilon = 1e-6);
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_sd() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(sd(&data), 2.138090, epsilon = 1e-6);
    }

    #[test]
    fn test_sd_single() {
        assert_eq!(sd(&[5.0]), 0.0);
    }

    #[test]
    fn test_variance_two() {
        // [3.0, 7.0]: mean=5, sum_sq=8, var=8/1=8
        assert_relative_eq!(variance(&[3.0, 7.0]), 8.0, epsilon = 1e-10);
    }

    #[test]
    fn test_variance_empty() {
        assert_eq!(variance(&[]), 0.0);
    }

    #[test]
    fn test_lag1_alternating() {
        // mean = 0, denom = 6, num = 5 * (-1)
        let data = [1.0, -1.0, 1.0, -1.0, 1.0, -1.0];
        assert_relative_eq!(lag1_autocorrelation(&data).unwrap(), -5.0 / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_lag1_trend() {
        // 1..=5: mean=3, devs=[-2,-1,0,1,2], denom=10, num=2+0+0+2=4
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(lag1_autocorrelation(&data).unwrap(), 0.4, epsilon = 1e-12);
    }

    #[test]
    fn test_lag1_constant() {
        assert!(lag1_autocorrelation(&[2.0, 2.0, 2.0, 2.0]).is_none());
    }

    #[test]
    fn test_lag1_too_short() {
        assert!(lag1_autocorrelation(&[1.0, 2.0]).is_none());
    }
}
