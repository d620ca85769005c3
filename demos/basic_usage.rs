// ============================================================================
// Basic Usage Example
// ============================================================================

use exact_fraction::prelude::*;

fn main() {
    // Parse failures and overflow under the strict policy are logged at debug
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Exact Fraction Example ===\n");

    // Construction always reduces
    let half = Fraction::new(2, 4);
    let third = Fraction::new(-1, -3);
    println!("2/4   -> {}", half.to_ratio_string());
    println!("-1/-3 -> {}", third.to_ratio_string());

    // Arithmetic stays exact
    println!("\n=== Arithmetic ===");
    println!("1/2 + 1/3 = {}", (half + third).to_ratio_string());
    println!("1/2 - 1/3 = {}", (half - third).to_ratio_string());
    println!("1/2 * 1/3 = {}", (half * third).to_ratio_string());
    println!("1/2 / 1/3 = {}", (half / third).to_ratio_string());
    println!("(2/3)^-3  = {}", Fraction::new(2, 3).pow(-3).to_ratio_string());

    // Mixed operands on either side
    println!("\n=== Mixed Operands ===");
    println!("3 * 1/2   = {}", (3i64 * half).to_ratio_string());
    println!("1/2 + 0.25 = {}", (half + 0.25f64).to_ratio_string());
    println!("1/3 < 0.34 = {}", third < 0.34f64);

    // Decimal text parses exactly
    println!("\n=== Parsing ===");
    for text in ["3.14", "-0.125", "0,5", "1e3", "12abc"] {
        let value = Fraction::from(text);
        if value.is_valid() {
            println!("  {:>6} -> {}", text, value.to_ratio_string());
        } else {
            println!("  {:>6} -> invalid", text);
        }
    }

    // Floats go through their shortest text form
    println!("\n=== Float Conversion ===");
    println!("0.1 (shortest) -> {}", Fraction::from(0.1f64).to_ratio_string());
    match Fraction::from_f64_exact(0.5) {
        Ok(exact) => println!("0.5 (exact)    -> {}", exact.to_ratio_string()),
        Err(e) => println!("0.5 (exact)    -> {}", e),
    }
    println!("22/7 as f64    -> {:.6}", Fraction::new(22, 7));

    // The invalid sentinel propagates instead of panicking
    println!("\n=== Invalid Sentinel ===");
    let undefined = half / 0i64;
    println!("1/2 / 0       -> {:?}", undefined);
    println!("undefined + 1 -> {:?}", undefined + 1i64);
    println!("as i64        -> {}", undefined.to_i64());

    // Policy contexts
    println!("\n=== Arithmetic Policies ===");
    let default = Arithmetic::default();
    let strict = Arithmetic::new(ArithmeticConfig::strict());
    let legacy = Arithmetic::new(ArithmeticConfig::compatible());

    println!("default MAX + 1 -> {:?}", default.add(Fraction::MAX, Fraction::ONE));
    println!("strict  MAX + 1 -> {:?}", strict.add(Fraction::MAX, Fraction::ONE));
    println!("strict  INVALID^0 -> {:?}", strict.pow(Fraction::INVALID, 0));
    println!("legacy  INVALID^0 -> {:?}", legacy.pow(Fraction::INVALID, 0));

    // Checked API with error propagation
    println!("\n=== Checked API ===");
    match checked_total("19.99", 3) {
        Ok(total) => println!("19.99 x 3 = {}", total.to_ratio_string()),
        Err(e) => println!("error: {}", e),
    }
    match checked_total("not a price", 3) {
        Ok(total) => println!("total = {}", total.to_ratio_string()),
        Err(e) => println!("error: {}", e),
    }
}

fn checked_total(price: &str, quantity: i64) -> NumericResult<Fraction> {
    let price: Fraction = price.parse()?;
    price.checked_mul(Fraction::from_integer(quantity))
}
