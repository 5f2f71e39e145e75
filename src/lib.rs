// ============================================================================
// Fixed Money Library
// Exact decimal-money arithmetic on scaled integers, plus financial formulas
// ============================================================================

//! # Fixed Money
//!
//! Reproducible decimal-money arithmetic backed by scaled `i64` values,
//! with a financial-formula library layered on top.
//!
//! ## Features
//!
//! - **Scaled-integer amounts** with an explicit, immutable [`numeric::Precision`]
//!   bound to each value (0 to 18 decimal places)
//! - **One rounding boundary**: every operation re-rounds through a single
//!   half-away-from-zero primitive, with guard digits carried only during
//!   intermediate computation
//! - **Hard overflow detection** on addition, subtraction and multiplication
//! - **Result-based errors** throughout; no panics in library paths
//! - **Formula library**: interest, annuities, mortgage payments,
//!   Black-Scholes option premiums, descriptive statistics
//!
//! ## Example
//!
//! ```rust
//! use fixed_money::prelude::*;
//!
//! let p = Precision::new(2).unwrap();
//!
//! // 19.99 / 2 = 9.995, which rounds half away from zero to 10.00
//! let price = Money::from_f64(19.99, p).unwrap();
//! let qty = Money::from_f64(2.0, p).unwrap();
//! assert_eq!(price.checked_div(qty).unwrap().to_string(), "10.00");
//!
//! // Future value of 100.00 at 10% over 2 periods
//! let pv = Money::from_integer(100, p).unwrap();
//! let fv = future_value(pv, 0.1, 2).unwrap();
//! assert_eq!(fv.to_string(), "121.00");
//! ```

pub mod formulas;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::formulas::{
        black_scholes, compound_factor, compound_rate, continuous_interest, covariance,
        future_value, future_value_annuity, future_value_growing_annuity, future_value_simple,
        linear_regression, mean, mortgage_payment, present_value, present_value_annuity,
        present_value_annuity_due, present_value_growing_annuity,
        present_value_growing_annuity_due, present_value_periodic, present_value_series,
        std_dev, std_dev_sample, OptionType, Regression,
    };
    pub use crate::numeric::{
        round_half_away, Money, MoneyError, MoneyResult, Precision, GUARD, MAX_PLACES,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_quote_text_to_per_unit_price() {
        // A parsed quote feed hands over decimal strings; the division
        // lands exactly on the rounding boundary
        let p = Precision::new(2).unwrap();
        let total = Money::parse("19.99", p).unwrap();
        let count = Money::parse("2", p).unwrap();
        let each = total.checked_div(count).unwrap();
        assert_eq!(each.raw_value(), 1000);
        assert_eq!(each.to_string(), "10.00");
    }

    #[test]
    fn test_display_width_is_independent_of_precision() {
        let p = Precision::new(4).unwrap();
        let m = Money::from_f64(7.0099, p).unwrap();
        assert_eq!(m.raw_value(), 70_099);
        assert_eq!(m.to_string(), "7.00");
        assert!((m.to_f64() - 7.0099).abs() < 1e-9);
    }

    #[test]
    fn test_compound_then_discount() {
        // Growing 100.00 forward and discounting it back loses at most
        // one raw unit to guard truncation
        let p = Precision::new(2).unwrap();
        let pv = Money::from_integer(100, p).unwrap();
        let fv = future_value(pv, 0.1, 2).unwrap();
        assert_eq!(fv.raw_value(), 12100);
        let back = present_value(fv, 0.1, 2.0).unwrap();
        assert_eq!(back.raw_value(), 9999);
    }

    #[test]
    fn test_precisions_do_not_mix() {
        let cents = Money::from_integer(5, Precision::new(2).unwrap()).unwrap();
        let micros = Money::from_integer(5, Precision::new(6).unwrap()).unwrap();
        assert_eq!(cents.checked_add(micros), Err(MoneyError::ScaleMismatch));
    }

    #[test]
    fn test_payment_stream_valuation() {
        // Value a three-payment stream two ways: closed-form annuity vs
        // explicit cash-flow series
        let p = Precision::new(2).unwrap();
        let pmt = Money::from_integer(100, p).unwrap();
        let annuity = present_value_annuity(pmt, 0.1, 3).unwrap();

        let flows = [pmt, pmt, pmt];
        let series =
            present_value_series(&flows, &[0.1, 0.1, 0.1], &[1.0, 2.0, 3.0]).unwrap();

        // Both paths truncate at the guard boundary independently, so
        // they agree only to within a raw unit per payment
        let diff = (annuity.raw_value() - series.raw_value()).abs();
        assert!(diff <= 3, "annuity {} vs series {}", annuity, series);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_float_roundtrip() {
        let m: Money = serde_json::from_str("19.99").unwrap();
        assert_eq!(m.raw_value(), 1999);
        assert_eq!(serde_json::to_string(&m).unwrap(), "19.99");
    }
}
