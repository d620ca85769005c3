// ============================================================================
// Numeric Module
// Exact rational arithmetic over 64-bit integers
// ============================================================================
//
// This module provides:
// - Fraction: reduced numerator/denominator pair with an invalid sentinel
// - NumericError: Error types for the checked API
// - gcd/lcm helpers used by normalization and ordering
// - Decimal literal validation and parsing
//
// Design principles:
// - No floating-point arithmetic inside the core; floats only at the edges
// - Every constructor and operator returns a reduced value
// - Operators never panic; undefined results become Fraction::INVALID
// - Checked variants return Result for callers that need to know why

mod convert;
mod errors;
mod fraction;
mod gcd;
mod ops;
mod parse;

pub use errors::{NumericError, NumericResult};
pub use fraction::Fraction;
pub use gcd::{checked_lcm, gcd, lcm};
pub use parse::is_decimal_literal;

pub(crate) use fraction::cmp_scaled;
