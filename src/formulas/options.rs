// ============================================================================
// Option Pricing
// European option premiums under Black-Scholes
// ============================================================================

use crate::numeric::{MoneyError, MoneyResult};

/// Which side of a European option to price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionType {
    /// Right to buy at the strike
    Call,
    /// Right to sell at the strike
    Put,
}

/// Standard normal cumulative distribution function.
#[inline]
fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + libm::erf(x / std::f64::consts::SQRT_2))
}

/// Black-Scholes premium for a European option on a non-dividend-paying
/// underlying.
///
/// ```text
/// d1 = (ln(s/k) + (r + v^2/2) t) / (v sqrt(t))
/// d2 = d1 - v sqrt(t)
/// call = s N(d1) - k e^(-r t) N(d2)
/// put  = k e^(-r t) N(-d2) - s N(-d1)
/// ```
///
/// - `spot` - current price of the underlying
/// - `strike` - strike price
/// - `expiry` - time to expiry in years
/// - `rate` - risk-free rate
/// - `volatility` - annualized volatility (sigma)
///
/// # Errors
/// `DomainError` if any input is non-finite, or if `spot`, `strike`,
/// `expiry` or `volatility` is not strictly positive.
pub fn black_scholes(
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
    option: OptionType,
) -> MoneyResult<f64> {
    let inputs = [spot, strike, expiry, rate, volatility];
    if inputs.iter().any(|v| !v.is_finite()) {
        return Err(MoneyError::DomainError);
    }
    if spot <= 0.0 || strike <= 0.0 || expiry <= 0.0 || volatility <= 0.0 {
        return Err(MoneyError::DomainError);
    }

    let vol_sqrt_t = volatility * expiry.sqrt();
    let d1 = ((spot / strike).ln() + (rate + volatility * volatility / 2.0) * expiry) / vol_sqrt_t;
    let d2 = d1 - vol_sqrt_t;
    let discounted_strike = strike * (-rate * expiry).exp();

    let premium = match option {
        OptionType::Call => spot * norm_cdf(d1) - discounted_strike * norm_cdf(d2),
        OptionType::Put => discounted_strike * norm_cdf(-d2) - spot * norm_cdf(-d1),
    };
    Ok(premium)
}
