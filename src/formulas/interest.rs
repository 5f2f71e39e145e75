// ============================================================================
// Interest and Future Value
// Compound, simple and continuous interest over a money amount
// ============================================================================

use crate::numeric::{Money, MoneyResult};

/// Compound interest factor for n periods.
///
/// `factor = (1 + r)^n`
///
/// - `rate` - interest rate per period, as a decimal fraction
/// - `periods` - number of periods
#[inline]
pub fn compound_factor(rate: f64, periods: i32) -> f64 {
    (1.0 + rate).powi(periods)
}

/// Future value under compound interest.
///
/// `fv = pv * (1 + r)^n`
///
/// - `pv` - principal or present value
/// - `rate` - interest rate per period
/// - `periods` - number of periods
pub fn future_value(pv: Money, rate: f64, periods: i32) -> MoneyResult<Money> {
    pv.mul_f64(compound_factor(rate, periods))
}

/// Future value under simple interest.
///
/// `fv = pv * (1 + r * n)`
///
/// - `pv` - principal or present value
/// - `rate` - interest rate per period
/// - `periods` - number of periods
pub fn future_value_simple(pv: Money, rate: f64, periods: i32) -> MoneyResult<Money> {
    pv.mul_f64(1.0 + rate * periods as f64)
}

/// Future value of an ordinary annuity.
///
/// `fv = pmt * ((1 + r)^n - 1) / r`
///
/// - `pmt` - payment per period
/// - `rate` - interest rate per period
/// - `periods` - number of periods
pub fn future_value_annuity(pmt: Money, rate: f64, periods: i32) -> MoneyResult<Money> {
    pmt.mul_f64((compound_factor(rate, periods) - 1.0) / rate)
}

/// Future value of a growing annuity.
///
/// `fv = pmt * ((1 + r)^n - (1 + g)^n) / (r - g)`
///
/// When the growth rate equals the interest rate the closed form
/// degenerates and `fv = pmt * n * (1 + r)^(n - 1)` applies instead.
///
/// - `pmt` - amount of each payment
/// - `rate` - interest rate per period
/// - `growth` - payment growth rate per period
/// - `periods` - number of periods
pub fn future_value_growing_annuity(
    pmt: Money,
    rate: f64,
    growth: f64,
    periods: i32,
) -> MoneyResult<Money> {
    if rate == growth {
        return pmt.mul_f64(periods as f64 * compound_factor(rate, periods - 1));
    }
    pmt.mul_f64((compound_factor(rate, periods) - compound_factor(growth, periods)) / (rate - growth))
}

/// Future value under continuous compounding.
///
/// `fv = pv * e^(r * n)`
///
/// - `pv` - principal or present value
/// - `rate` - interest rate per period
/// - `periods` - number of periods
pub fn continuous_interest(pv: Money, rate: f64, periods: i32) -> MoneyResult<Money> {
    pv.mul_f64((rate * periods as f64).exp())
}

/// Implied compound interest rate per period.
///
/// `i = (fv / pv)^(1 / n) - 1`
///
/// - `fv` - future value
/// - `pv` - present value
/// - `periods` - number of periods (non-integer allowed)
///
/// # Errors
/// `DivisionByZero` if `pv` is zero, `ScaleMismatch` across precisions.
/// A zero `periods` produces a `fv/pv`-dependent non-finite power; the
/// caller owns that precondition.
pub fn compound_rate(fv: Money, pv: Money, periods: f64) -> MoneyResult<f64> {
    Ok(fv.checked_div(pv)?.to_f64().powf(1.0 / periods) - 1.0)
}

/// Fixed-rate mortgage payment per period.
///
/// `pmt = loan * i * (1 + i)^n / ((1 + i)^n - 1)` with `i = r / 12`
///
/// - `loan` - loan amount
/// - `rate` - annual note rate
/// - `periods` - number of monthly periods (e.g. 360 for a 30-year loan)
pub fn mortgage_payment(loan: Money, rate: f64, periods: i32) -> MoneyResult<Money> {
    let monthly = rate / 12.0;
    let factor = compound_factor(monthly, periods);
    Money::from_f64(
        loan.to_f64() * monthly * factor / (factor - 1.0),
        loan.precision(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::Precision;

    fn amount(value: f64) -> Money {
        Money::from_f64(value, Precision::new(2).unwrap()).unwrap()
    }

    #[test]
    fn test_compound_factor() {
        assert!((compound_factor(0.1, 2) - 1.21).abs() < 1e-12);
        assert_eq!(compound_factor(0.0, 10), 1.0);
    }

    #[test]
    fn test_future_value() {
        let fv = future_value(amount(100.0), 0.1, 2).unwrap();
        assert_eq!(fv.raw_value(), 12100);
        assert_eq!(fv.to_string(), "121.00");
    }

    #[test]
    fn test_future_value_simple() {
        let fv = future_value_simple(amount(100.0), 0.05, 3).unwrap();
        assert_eq!(fv.raw_value(), 11500);
    }

    #[test]
    fn test_future_value_annuity() {
        let fv = future_value_annuity(amount(100.0), 0.1, 3).unwrap();
        assert_eq!(fv.raw_value(), 33100); // 100 * (1.331 - 1) / 0.1
    }

    #[test]
    fn test_future_value_growing_annuity() {
        let fv = future_value_growing_annuity(amount(100.0), 0.1, 0.05, 2).unwrap();
        // (1.21 - 1.1025) / 0.05 = 2.15
        assert_eq!(fv.raw_value(), 21500);
    }

    #[test]
    fn test_future_value_growing_annuity_equal_rates() {
        let fv = future_value_growing_annuity(amount(100.0), 0.05, 0.05, 3).unwrap();
        // 3 * 1.05^2 = 3.3075
        assert_eq!(fv.raw_value(), 33075);
    }

    #[test]
    fn test_continuous_interest() {
        let fv = continuous_interest(amount(100.0), 0.1, 1).unwrap();
        // e^0.1 = 1.10517..., truncated to guard precision before scaling
        assert_eq!(fv.raw_value(), 11051);
    }

    #[test]
    fn test_compound_rate() {
        let rate = compound_rate(amount(121.0), amount(100.0), 2.0).unwrap();
        assert!((rate - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_compound_rate_zero_pv() {
        let err = compound_rate(amount(121.0), amount(0.0), 2.0);
        assert!(err.is_err());
    }

    #[test]
    fn test_mortgage_payment() {
        let p = Precision::new(2).unwrap();
        let loan = Money::from_integer(100_000, p).unwrap();
        let pmt = mortgage_payment(loan, 0.06, 360).unwrap();
        assert_eq!(pmt.to_string(), "599.55");
    }
}
