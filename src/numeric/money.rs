// ============================================================================
// Money Value Type
// Scaled-integer decimal amounts with guard-digit rounding
// ============================================================================

use super::errors::{MoneyError, MoneyResult};
use super::precision::{Precision, GUARD, GUARD_F};
use super::rounding::round_half_away;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// A fixed-point decimal money amount.
///
/// Internally stores `value × 10^places` as an `i64`, alongside the
/// [`Precision`] it was constructed with. The raw integer always holds a
/// value already rounded to that precision; intermediate computation may
/// carry guard digits but re-rounds through the single
/// [`round_half_away`] boundary before being stored back.
///
/// `Money` is a plain value type: operations take `self` by value and
/// return a fresh result, so chained computation composes with `?`.
/// There is intentionally no `From<i64>` impl; callers must state
/// whether a raw integer is already scaled ([`Money::from_raw`]) or a
/// whole-unit count ([`Money::from_integer`]).
///
/// # Example
/// ```ignore
/// let p = Precision::new(2)?;
/// let price = Money::from_f64(19.99, p)?;
/// let qty = Money::from_f64(2.0, p)?;
/// let each = price.checked_div(qty)?;   // 9.995 rounds half away: 10.00
/// assert_eq!(each.to_string(), "10.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Money {
    raw: i64,
    precision: Precision,
}

impl Money {
    // ========================================================================
    // Construction
    // ========================================================================

    /// A zero amount at the given precision.
    #[inline]
    pub const fn zero(precision: Precision) -> Self {
        Self { raw: 0, precision }
    }

    /// Create from a raw scaled integer.
    ///
    /// The integer is stored directly; it must already be at the scale of
    /// `precision`. No rounding is applied.
    #[inline]
    pub const fn from_raw(raw: i64, precision: Precision) -> Self {
        Self { raw, precision }
    }

    /// Create from a whole-unit count (e.g. dollars, not cents).
    ///
    /// # Errors
    /// Returns `Overflow` if the scaled value is too large to represent.
    #[inline]
    pub fn from_integer(units: i64, precision: Precision) -> MoneyResult<Self> {
        units
            .checked_mul(precision.scale())
            .map(|raw| Self { raw, precision })
            .ok_or(MoneyError::Overflow)
    }

    /// Create from a float, rounding to the precision.
    ///
    /// The value is scaled up, truncated, and re-rounded through the
    /// half-away-from-zero boundary; `-0.005` at two places becomes
    /// `-0.01`, not `0.00`.
    ///
    /// # Errors
    /// - `DomainError` if `value` is NaN or infinite
    /// - `Overflow` if the scaled value does not fit an i64
    pub fn from_f64(value: f64, precision: Precision) -> MoneyResult<Self> {
        if !value.is_finite() {
            return Err(MoneyError::DomainError);
        }
        let scaled = value * precision.scale_f();
        if scaled.abs() >= i64::MAX as f64 {
            return Err(MoneyError::Overflow);
        }
        let trunc = scaled as i64;
        let raw = round_half_away(trunc, scaled - trunc as f64);
        Ok(Self { raw, precision })
    }

    /// Parse a decimal string into a money amount.
    ///
    /// This is the entry point for externally sourced quote and price
    /// text: the string is parsed as a float and stored through the same
    /// rounding path as [`Money::from_f64`].
    ///
    /// # Errors
    /// - `InvalidInput` if the text is not a decimal number
    /// - `DomainError` / `Overflow` as for [`Money::from_f64`]
    pub fn parse(s: &str, precision: Precision) -> MoneyResult<Self> {
        let value: f64 = s.trim().parse().map_err(|_| MoneyError::InvalidInput)?;
        Self::from_f64(value, precision)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The raw scaled integer backing this amount.
    #[inline]
    pub const fn raw_value(self) -> i64 {
        self.raw
    }

    /// The precision this amount is bound to.
    #[inline]
    pub const fn precision(self) -> Precision {
        self.precision
    }

    /// The amount as a float (`raw / 10^places`).
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.raw as f64 / self.precision.scale_f()
    }

    /// The whole-unit part, truncated toward zero (not rounded).
    #[inline]
    pub const fn integer_part(self) -> i64 {
        self.raw / self.precision.scale()
    }

    /// Check if the amount is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.raw == 0
    }

    /// Sign of the amount: `-1` for negative values, `+1` otherwise.
    ///
    /// Zero is reported as positive.
    #[inline]
    pub const fn sign(self) -> i64 {
        if self.raw < 0 {
            -1
        } else {
            1
        }
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    #[inline]
    fn require_same_scale(self, rhs: Self) -> MoneyResult<()> {
        if self.precision != rhs.precision {
            return Err(MoneyError::ScaleMismatch);
        }
        Ok(())
    }

    /// Checked addition.
    ///
    /// # Errors
    /// - `ScaleMismatch` if the operands use different precisions
    /// - `Overflow` if the raw sum leaves the i64 range
    #[inline]
    pub fn checked_add(self, rhs: Self) -> MoneyResult<Self> {
        self.require_same_scale(rhs)?;
        self.raw
            .checked_add(rhs.raw)
            .map(|raw| Self { raw, precision: self.precision })
            .ok_or(MoneyError::Overflow)
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// - `ScaleMismatch` if the operands use different precisions
    /// - `Overflow` if the raw difference leaves the i64 range
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> MoneyResult<Self> {
        self.require_same_scale(rhs)?;
        self.raw
            .checked_sub(rhs.raw)
            .map(|raw| Self { raw, precision: self.precision })
            .ok_or(MoneyError::Overflow)
    }

    /// Checked multiplication, integer path.
    ///
    /// Multiplies the raw integers and rescales the double-scale product
    /// down with truncating division. No guard digits and no rounding
    /// pass are applied: this is the deliberately lower-fidelity variant,
    /// kept distinct from [`Money::mul_f64`] because the two can diverge
    /// on products whose trailing digits sit on a rounding boundary.
    ///
    /// # Errors
    /// - `ScaleMismatch` if the operands use different precisions
    /// - `Overflow` if the raw product leaves the i64 range
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> MoneyResult<Self> {
        self.require_same_scale(rhs)?;
        let product = self.raw.checked_mul(rhs.raw).ok_or(MoneyError::Overflow)?;
        Ok(Self {
            raw: product / self.precision.scale(),
            precision: self.precision,
        })
    }

    /// Multiply by a float with guard digits and rounding.
    ///
    /// The factor is scaled by `guard × 10^places` and truncated to an
    /// integer, the raw product is rescaled down, and the float residual
    /// goes through [`round_half_away`]. This is the precision-preserving
    /// multiply the formula layer is built on.
    ///
    /// # Errors
    /// - `DomainError` if `factor` is NaN or infinite
    /// - `Overflow` if the guarded product leaves the i64 range
    pub fn mul_f64(self, factor: f64) -> MoneyResult<Self> {
        if !factor.is_finite() {
            return Err(MoneyError::DomainError);
        }
        let scaled_factor = (factor * GUARD_F * self.precision.scale_f()) as i64;
        let product = self
            .raw
            .checked_mul(scaled_factor)
            .ok_or(MoneyError::Overflow)?;
        let trunc = product / (GUARD * self.precision.scale());
        let remainder = product as f64 / (GUARD_F * self.precision.scale_f()) - trunc as f64;
        Ok(Self {
            raw: round_half_away(trunc, remainder),
            precision: self.precision,
        })
    }

    /// Checked division.
    ///
    /// The quotient is computed in floating point with the guard factor
    /// applied and removed around the division, keeping extra bits in the
    /// intermediate before the final truncate-and-round.
    ///
    /// # Errors
    /// - `ScaleMismatch` if the operands use different precisions
    /// - `DivisionByZero` if `rhs` is zero
    /// - `Overflow` if the rescaled quotient leaves the i64 range
    pub fn checked_div(self, rhs: Self) -> MoneyResult<Self> {
        self.require_same_scale(rhs)?;
        if rhs.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        let quotient =
            GUARD_F * self.precision.scale_f() * self.raw as f64 / rhs.raw as f64 / GUARD_F;
        if quotient.abs() >= i64::MAX as f64 {
            return Err(MoneyError::Overflow);
        }
        let trunc = quotient as i64;
        Ok(Self {
            raw: round_half_away(trunc, quotient - trunc as f64),
            precision: self.precision,
        })
    }

    /// Absolute value.
    ///
    /// # Errors
    /// Returns `Overflow` for the one raw value (`i64::MIN`) whose
    /// magnitude is unrepresentable.
    #[inline]
    pub fn abs(self) -> MoneyResult<Self> {
        if self.raw == i64::MIN {
            Err(MoneyError::Overflow)
        } else {
            Ok(Self {
                raw: self.raw.abs(),
                precision: self.precision,
            })
        }
    }

    /// Raise the decimal value to a float power.
    ///
    /// Computes `to_f64().powf(exponent)` and re-stores through the
    /// [`Money::from_f64`] rounding path.
    ///
    /// # Errors
    /// - `DomainError` if the result is NaN or infinite (e.g. a negative
    ///   base with a fractional exponent)
    /// - `Overflow` if the result does not fit the scale
    pub fn powf(self, exponent: f64) -> MoneyResult<Self> {
        Self::from_f64(self.to_f64().powf(exponent), self.precision)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl PartialOrd for Money {
    /// Amounts at different precisions are unordered.
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.precision == other.precision).then(|| self.raw.cmp(&other.raw))
    }
}

impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            raw: -self.raw,
            precision: self.precision,
        }
    }
}

// Infallible Add/Sub for ergonomics (panics on overflow or scale mismatch -
// use checked_* in production)
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).expect("money addition overflow")
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs).expect("money subtraction overflow")
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Money {
    /// Renders as `<units>.<two-digit fraction>`.
    ///
    /// The fractional part is always exactly two digits, whatever the
    /// configured precision: digits beyond the second decimal place are
    /// truncated for display (the stored value is untouched). Use
    /// [`Money::to_f64`] or [`Money::to_decimal`] for full precision.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scale = self.precision.scale();
        let units = self.raw / scale;
        let frac = (self.raw % scale).unsigned_abs();
        let cents = if scale >= 100 {
            frac / (scale / 100) as u64
        } else {
            frac * (100 / scale) as u64
        };
        if self.raw < 0 && units == 0 {
            write!(f, "-0.{:02}", cents)
        } else {
            write!(f, "{}.{:02}", units, cents)
        }
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl Money {
    /// Convert from `rust_decimal::Decimal`.
    ///
    /// Intended for API boundaries where feed text has already been
    /// parsed into a `Decimal`. Digits beyond the target precision are
    /// rounded with the same half-away-from-zero policy as the rest of
    /// the crate.
    ///
    /// # Errors
    /// Returns `Overflow` if the scaled value does not fit an i64.
    pub fn from_decimal(value: rust_decimal::Decimal, precision: Precision) -> MoneyResult<Self> {
        use rust_decimal::prelude::ToPrimitive;
        use rust_decimal::{Decimal, RoundingStrategy};

        if value.scale() > precision.places() as u32 {
            tracing::debug!(
                "rounding {} to {} decimal places",
                value,
                precision.places()
            );
        }
        let rounded = value.round_dp_with_strategy(
            precision.places() as u32,
            RoundingStrategy::MidpointAwayFromZero,
        );
        let scaled = rounded
            .checked_mul(Decimal::from(precision.scale()))
            .ok_or(MoneyError::Overflow)?;
        let raw = scaled.to_i64().ok_or(MoneyError::Overflow)?;
        Ok(Self { raw, precision })
    }

    /// Convert to `rust_decimal::Decimal` at full stored precision.
    pub fn to_decimal(self) -> rust_decimal::Decimal {
        let mut d = rust_decimal::Decimal::from(self.raw);
        d.set_scale(self.precision.places() as u32).expect("valid scale");
        d
    }
}

// ============================================================================
// Serde (optional)
// ============================================================================

// Feed configs historically carry money as plain floats; deserialization
// stores them through the from_f64 rounding path at the default two-place
// precision.
#[cfg(feature = "serde")]
impl serde::Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_f64(self.to_f64())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Money::from_f64(value, Precision::default()).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
