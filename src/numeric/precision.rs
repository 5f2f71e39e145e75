// ============================================================================
// Precision Configuration
// Decimal scale factors bound to each Money value at construction
// ============================================================================

use super::errors::{MoneyError, MoneyResult};

/// Maximum supported decimal places.
///
/// Chosen so the scale factor never overflows an i64 in combination with
/// the guard multiplier.
pub const MAX_PLACES: u8 = 18;

/// Extra-precision multiplier applied during intermediate float
/// computation and discarded before the final rounding step.
pub const GUARD: i64 = 100;

/// Float equivalent of [`GUARD`].
pub const GUARD_F: f64 = 100.0;

/// Compute 10^n at compile time
const fn pow10(n: u8) -> i64 {
    let mut result: i64 = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

/// Decimal precision configuration for a [`Money`](super::Money) value.
///
/// Holds the number of decimal places and the derived integer scale
/// `10^places`. A `Precision` is immutable and is bound to each `Money`
/// at construction: changing precision means constructing new values, so
/// no amount is ever silently reinterpreted under a different scale and
/// no process-wide mutable state exists to race on.
///
/// # Example
/// ```ignore
/// let cents = Precision::new(2)?;   // scale 100
/// let whole = Precision::new(0)?;   // scale 1, whole-unit amounts
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Precision {
    places: u8,
    scale: i64,
}

impl Precision {
    /// Two decimal places, the conventional cents scale.
    pub const CENTS: Self = Self { places: 2, scale: 100 };

    /// Create a precision with the given number of decimal places.
    ///
    /// # Errors
    /// - `InvalidPrecision` if `places` is negative
    /// - `PrecisionTooLarge` if `places` exceeds [`MAX_PLACES`]
    pub fn new(places: i32) -> MoneyResult<Self> {
        if places < 0 {
            return Err(MoneyError::InvalidPrecision);
        }
        if places > MAX_PLACES as i32 {
            return Err(MoneyError::PrecisionTooLarge);
        }
        let places = places as u8;
        Ok(Self {
            places,
            scale: pow10(places),
        })
    }

    /// Number of decimal places.
    #[inline]
    pub const fn places(self) -> u8 {
        self.places
    }

    /// The integer scale factor (10^places).
    #[inline]
    pub const fn scale(self) -> i64 {
        self.scale
    }

    /// The scale factor as a float, for guard-digit intermediates.
    #[inline]
    pub fn scale_f(self) -> f64 {
        self.scale as f64
    }
}

impl Default for Precision {
    #[inline]
    fn default() -> Self {
        Self::CENTS
    }
}
