// ============================================================================
// Basic Usage Example
// ============================================================================

use fixed_money::prelude::*;

fn main() {
    println!("=== Fixed Money Example ===\n");

    let p = Precision::new(2).unwrap();

    // Quote text straight from a feed
    let price = Money::parse("42.37", p).unwrap();
    let shares = Money::from_integer(150, p).unwrap();
    println!("Price per share: {}", price);
    println!("Shares:          {}", shares.integer_part());

    let position = price.mul_f64(150.0).unwrap();
    println!("Position value:  {}\n", position);

    // Splitting a total lands on the rounding boundary
    let total = Money::from_f64(19.99, p).unwrap();
    let half = total.checked_div(Money::from_integer(2, p).unwrap()).unwrap();
    println!("{} split in two: {} (9.995 rounds half away)\n", total, half);

    // A 30-year mortgage
    let loan = Money::from_integer(250_000, p).unwrap();
    let payment = mortgage_payment(loan, 0.065, 360).unwrap();
    println!("Monthly payment on {} at 6.5% over 360 periods: {}\n", loan, payment);

    // Compounding
    let principal = Money::from_integer(10_000, p).unwrap();
    for years in [5, 10, 30] {
        let fv = future_value(principal, 0.07, years).unwrap();
        println!("{} at 7% for {:>2} years: {}", principal, years, fv);
    }
    println!();

    // Option pricing
    let call = black_scholes(42.0, 40.0, 0.5, 0.1, 0.2, OptionType::Call).unwrap();
    let put = black_scholes(42.0, 40.0, 0.5, 0.1, 0.2, OptionType::Put).unwrap();
    println!("Call premium: {:.4}", call);
    println!("Put premium:  {:.4}", put);

    // Overflow is an error, not a wraparound
    let max = Money::from_raw(i64::MAX, p);
    let one = Money::from_raw(1, p);
    println!("\nAdding past i64::MAX: {:?}", max.checked_add(one));
}
