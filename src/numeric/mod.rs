// ============================================================================
// Numeric Module
// Fixed-point money arithmetic with a single rounding boundary
// ============================================================================
//
// This module provides:
// - Money: scaled-i64 decimal amount bound to an explicit precision
// - Precision: validated decimal-places configuration with guard constants
// - round_half_away: the one rounding primitive all arithmetic routes through
// - MoneyError: error types for arithmetic and configuration
//
// Design principles:
// - One rounding boundary (half away from zero) for every operation
// - Precision is an immutable value, never process-global state
// - All fallible arithmetic returns Result (no panics)
// - Guard digits are scratch precision only, never stored

mod errors;
mod money;
mod precision;
mod rounding;

pub use errors::{MoneyError, MoneyResult};
pub use money::Money;
pub use precision::{Precision, GUARD, GUARD_F, MAX_PLACES};
pub use rounding::{round_half_away, ROUND_HALF};
