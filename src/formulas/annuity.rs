// ============================================================================
// Present Value and Annuities
// Discounting future amounts and payment streams back to today
// ============================================================================

use crate::numeric::{Money, MoneyError, MoneyResult};

use super::interest::compound_factor;

/// Present value of a single future amount.
///
/// `pv = fv / (1 + r)^n`
///
/// - `fv` - future value
/// - `rate` - interest rate per period
/// - `periods` - number of periods (non-integer allowed)
pub fn present_value(fv: Money, rate: f64, periods: f64) -> MoneyResult<Money> {
    fv.mul_f64(1.0 / (1.0 + rate).powf(periods))
}

/// Present value of a series of cash flows at possibly irregular times.
///
/// `pv = SUM fv[t] / (1 + r[t])^n[t]`
///
/// The three slices must correspond element-for-element.
///
/// # Errors
/// `InvalidInput` if the slices are empty or their lengths differ;
/// `ScaleMismatch` if the cash flows mix precisions.
pub fn present_value_series(
    fvs: &[Money],
    rates: &[f64],
    periods: &[f64],
) -> MoneyResult<Money> {
    if fvs.is_empty() || fvs.len() != rates.len() || fvs.len() != periods.len() {
        return Err(MoneyError::InvalidInput);
    }
    let mut total = Money::zero(fvs[0].precision());
    for ((&fv, &rate), &n) in fvs.iter().zip(rates).zip(periods) {
        total = total.checked_add(present_value(fv, rate, n)?)?;
    }
    Ok(total)
}

/// Present value of an ordinary annuity (payments at period end).
///
/// `pv = pmt * (1 - 1 / (1 + r)^n) / r`
///
/// - `pmt` - amount of each payment
/// - `rate` - interest rate per period
/// - `periods` - number of periods
pub fn present_value_annuity(pmt: Money, rate: f64, periods: i32) -> MoneyResult<Money> {
    pmt.mul_f64((1.0 - 1.0 / compound_factor(rate, periods)) / rate)
}

/// Present value of an annuity due (payments at period start).
///
/// `pv = pmt * (1 - 1 / (1 + r)^n) / r * (1 + r)`
pub fn present_value_annuity_due(pmt: Money, rate: f64, periods: i32) -> MoneyResult<Money> {
    pmt.mul_f64((1.0 - 1.0 / compound_factor(rate, periods)) / rate * (1.0 + rate))
}

/// Present value of a growing annuity.
///
/// `pv = pmt * (1 - (1 + g) / (1 + r)^n) / (r - g)`
///
/// - `pmt` - payment per period
/// - `rate` - interest rate per period
/// - `growth` - payment growth rate per period
pub fn present_value_growing_annuity(
    pmt: Money,
    rate: f64,
    growth: f64,
    periods: i32,
) -> MoneyResult<Money> {
    pmt.mul_f64((1.0 - (1.0 + growth) / compound_factor(rate, periods)) / (rate - growth))
}

/// Present value of a growing annuity due (payments at period start).
///
/// `pv = pmt * (1 - (1 + g) / (1 + r)^n) / (r - g) * (1 + r)`
pub fn present_value_growing_annuity_due(
    pmt: Money,
    rate: f64,
    growth: f64,
    periods: i32,
) -> MoneyResult<Money> {
    pmt.mul_f64(
        (1.0 - (1.0 + growth) / compound_factor(rate, periods)) / (rate - growth) * (1.0 + rate),
    )
}

/// Present value with intra-year compounding.
///
/// `pv = fv / (1 + r/pd)^(n * pd)`
///
/// - `fv` - future value
/// - `rate` - annual interest rate
/// - `periods` - number of years
/// - `periods_per_year` - compounding periods per year
pub fn present_value_periodic(
    fv: Money,
    rate: f64,
    periods: i32,
    periods_per_year: i32,
) -> MoneyResult<Money> {
    let per_period = rate / periods_per_year as f64;
    fv.mul_f64(1.0 / (1.0 + per_period).powi(periods * periods_per_year))
}
