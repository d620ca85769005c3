// ============================================================================
// Exact Fraction Library
// Reduced rational numbers over i64 with an explicit invalid state
// ============================================================================

//! # Exact Fraction
//!
//! An exact rational value type for code that cannot afford binary
//! floating-point rounding.
//!
//! ## Features
//!
//! - **Always reduced**: every value is `numerator/denominator` in lowest
//!   terms with a positive denominator; zero is `0/1`
//! - **Invalid sentinel** instead of panics for undefined results such as
//!   division by zero or unparsable text
//! - **Exact decimal parsing**: `"3.14"` is `157/50`, `"0,5"` is `1/2`
//! - **Mixed operands**: `Fraction` combines with every primitive integer
//!   and float type, on either side of the operator
//! - **Selectable policies** for overflow (wrap or check) and for how the
//!   invalid sentinel propagates, via [`engine::Arithmetic`]
//!
//! ## Example
//!
//! ```rust
//! use exact_fraction::prelude::*;
//!
//! let a = Fraction::new(1, 2);
//! let b: Fraction = "0.25".parse().unwrap();
//!
//! assert_eq!(a + b, Fraction::new(3, 4));
//! assert_eq!(a * 3, Fraction::new(3, 2));
//! assert!(a < Fraction::new(2, 3));
//!
//! // Undefined results are values, not panics
//! let undefined = a / Fraction::ZERO;
//! assert!(!undefined.is_valid());
//!
//! // Opt into overflow detection
//! let strict = Arithmetic::new(ArithmeticConfig::strict());
//! assert!(!strict.add(Fraction::MAX, Fraction::ONE).is_valid());
//! ```

pub mod engine;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::engine::{
        Arithmetic, ArithmeticConfig, BinaryOp, InvalidPolicy, OverflowPolicy,
    };
    pub use crate::numeric::{Fraction, NumericError, NumericResult};
}
