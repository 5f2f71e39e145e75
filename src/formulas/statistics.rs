// ============================================================================
// Descriptive Statistics
// Mean, dispersion and simple linear regression over float samples
// ============================================================================

use crate::numeric::{MoneyError, MoneyResult};

/// Arithmetic mean of a sample.
///
/// # Errors
/// `InvalidInput` for an empty sample.
pub fn mean(values: &[f64]) -> MoneyResult<f64> {
    if values.is_empty() {
        return Err(MoneyError::InvalidInput);
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Covariance of two paired samples.
///
/// `cov(x, y) = mean(x * y) - mean(x) * mean(y)`
///
/// # Errors
/// `InvalidInput` if the samples are empty or their lengths differ.
pub fn covariance(x: &[f64], y: &[f64]) -> MoneyResult<f64> {
    if x.is_empty() || x.len() != y.len() {
        return Err(MoneyError::InvalidInput);
    }
    let mean_xy = x.iter().zip(y).map(|(&a, &b)| a * b).sum::<f64>() / x.len() as f64;
    Ok(mean_xy - mean(x)? * mean(y)?)
}

/// Population standard deviation.
///
/// `sd = sqrt(SUM (a[i] - mean)^2 / n)`
///
/// # Errors
/// `InvalidInput` for an empty sample.
pub fn std_dev(values: &[f64]) -> MoneyResult<f64> {
    let m = mean(values)?;
    let sum: f64 = values.iter().map(|&v| (v - m) * (v - m)).sum();
    Ok((sum / values.len() as f64).sqrt())
}

/// Sample standard deviation (n - 1 in the denominator).
///
/// # Errors
/// `InvalidInput` for samples of fewer than two values.
pub fn std_dev_sample(values: &[f64]) -> MoneyResult<f64> {
    if values.len() < 2 {
        return Err(MoneyError::InvalidInput);
    }
    let m = mean(values)?;
    let sum: f64 = values.iter().map(|&v| (v - m) * (v - m)).sum();
    Ok((sum / (values.len() - 1) as f64).sqrt())
}

/// Result of a simple linear regression `y = intercept + slope * x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Regression {
    /// Intercept `a`
    pub intercept: f64,
    /// Slope `b`
    pub slope: f64,
    /// Correlation coefficient `r`
    pub correlation: f64,
}

/// Least-squares regression of `y` on `x`.
///
/// ```text
/// b = (n SUM(xy) - SUM(x) SUM(y)) / (n SUM(x^2) - SUM(x)^2)
/// a = (SUM(y) - b SUM(x)) / n
/// r = (n SUM(xy) - SUM(x) SUM(y))
///     / sqrt(n SUM(x^2) - SUM(x)^2) / sqrt(n SUM(y^2) - SUM(y)^2)
/// ```
///
/// # Errors
/// `InvalidInput` if the samples differ in length or hold fewer than
/// two points.
pub fn linear_regression(x: &[f64], y: &[f64]) -> MoneyResult<Regression> {
    if x.len() != y.len() || x.len() < 2 {
        return Err(MoneyError::InvalidInput);
    }
    let n = x.len() as f64;
    let sum_x: f64 = x.iter().sum();
    let sum_y: f64 = y.iter().sum();
    let sum_xy: f64 = x.iter().zip(y).map(|(&a, &b)| a * b).sum();
    let sum_x_sq: f64 = x.iter().map(|&v| v * v).sum();
    let sum_y_sq: f64 = y.iter().map(|&v| v * v).sum();

    let s = n * sum_xy - sum_x * sum_y;
    let p = n * sum_x_sq - sum_x * sum_x;
    let q = n * sum_y_sq - sum_y * sum_y;

    let slope = s / p;
    Ok(Regression {
        intercept: (sum_y - slope * sum_x) / n,
        slope,
        correlation: s / (p.sqrt() * q.sqrt()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5);
        assert_eq!(mean(&[]), Err(MoneyError::InvalidInput));
    }

    #[test]
    fn test_covariance() {
        let cov = covariance(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
        assert!((cov - 4.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_covariance_rejects_mismatched_lengths() {
        assert_eq!(
            covariance(&[1.0, 2.0], &[1.0]),
            Err(MoneyError::InvalidInput)
        );
        assert_eq!(covariance(&[], &[]), Err(MoneyError::InvalidInput));
    }

    #[test]
    fn test_std_dev_population() {
        let sd = std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert!((sd - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_std_dev_sample() {
        let sd = std_dev_sample(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert!((sd - 2.5f64.sqrt()).abs() < 1e-12);
        assert_eq!(std_dev_sample(&[1.0]), Err(MoneyError::InvalidInput));
    }

    #[test]
    fn test_linear_regression_perfect_fit() {
        let r = linear_regression(&[1.0, 2.0, 3.0, 4.0], &[3.0, 5.0, 7.0, 9.0]).unwrap();
        assert!((r.slope - 2.0).abs() < 1e-12);
        assert!((r.intercept - 1.0).abs() < 1e-12);
        assert!((r.correlation - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_linear_regression_rejects_degenerate_input() {
        assert_eq!(
            linear_regression(&[1.0], &[1.0]),
            Err(MoneyError::InvalidInput)
        );
        assert_eq!(
            linear_regression(&[1.0, 2.0], &[1.0]),
            Err(MoneyError::InvalidInput)
        );
    }
}
