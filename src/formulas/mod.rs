// ============================================================================
// Formulas Module
// Financial formulas built as thin callers of the money core
// ============================================================================
//
// Every formula routes its real arithmetic through the core's guarded
// multiply and divide, so the half-away-from-zero boundary applies here
// exactly as it does to plain arithmetic. Scalar helpers (rates, factors,
// statistics) stay in f64 and only cross into Money at the edges.

mod annuity;
mod interest;
mod options;
mod statistics;

pub use annuity::{
    present_value, present_value_annuity, present_value_annuity_due,
    present_value_growing_annuity, present_value_growing_annuity_due, present_value_periodic,
    present_value_series,
};
pub use interest::{
    compound_factor, compound_rate, continuous_interest, future_value, future_value_annuity,
    future_value_growing_annuity, future_value_simple, mortgage_payment,
};
pub use options::{black_scholes, OptionType};
pub use statistics::{
    covariance, linear_regression, mean, std_dev, std_dev_sample, Regression,
};
