// ============================================================================
// Fraction
// Exact rational value over i64 with reduced form and an invalid sentinel
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::gcd::{gcd, gcd_wide, lcm_wide};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Exact rational number `numerator / denominator` over `i64`.
///
/// Every valid value is kept in reduced form with a positive denominator;
/// zero is always `0/1`. Operations without a defined result (a zero
/// denominator, unparsable text) produce [`Fraction::INVALID`], stored as
/// `0/0`. Because its denominator is zero, the sentinel absorbs every
/// arithmetic operation it takes part in.
///
/// The operator impls wrap silently on overflow. Use the `checked_*`
/// methods, or an [`Arithmetic`](crate::engine::Arithmetic) context with
/// [`OverflowPolicy::Check`](crate::engine::OverflowPolicy), to detect it.
///
/// # Example
/// ```
/// use exact_fraction::numeric::Fraction;
///
/// let sum = Fraction::new(1, 2) + Fraction::new(1, 3);
/// assert_eq!((sum.numerator(), sum.denominator()), (5, 6));
///
/// let pi: Fraction = "3.14".parse().unwrap();
/// assert_eq!(pi, Fraction::new(157, 50));
///
/// assert!(!Fraction::new(1, 0).is_valid());
/// ```
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "FractionParts", into = "FractionParts"))]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
    valid: bool,
}

impl Fraction {
    /// Zero (`0/1`)
    pub const ZERO: Self = Self::raw(0, 1);

    /// One (`1/1`)
    pub const ONE: Self = Self::raw(1, 1);

    /// The invalid sentinel (`0/0`)
    pub const INVALID: Self = Self {
        numerator: 0,
        denominator: 0,
        valid: false,
    };

    /// Largest representable value
    pub const MAX: Self = Self::raw(i64::MAX, 1);

    /// Smallest representable value
    pub const MIN: Self = Self::raw(i64::MIN, 1);

    #[inline]
    const fn raw(numerator: i64, denominator: i64) -> Self {
        Self {
            numerator,
            denominator,
            valid: true,
        }
    }

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a reduced fraction from a numerator/denominator pair.
    ///
    /// A zero denominator yields [`Fraction::INVALID`]. A zero numerator
    /// yields `0/1` whatever the denominator's sign. Otherwise the sign is
    /// moved to the numerator and both parts are divided by their GCD.
    ///
    /// The only unrepresentable reduced denominator is 2^63 (from
    /// `i64::MIN` with an odd numerator); it yields the sentinel. A reduced
    /// numerator of 2^63 wraps to `i64::MIN`.
    pub fn new(numerator: i64, denominator: i64) -> Self {
        if denominator == 0 {
            return Self::INVALID;
        }
        if numerator == 0 {
            return Self::ZERO;
        }
        if denominator == 1 {
            return Self::raw(numerator, 1);
        }

        let negative = (numerator < 0) != (denominator < 0);
        let n = numerator.unsigned_abs();
        let d = denominator.unsigned_abs();
        let divisor = gcd(n, d);

        let d = d / divisor;
        if d > i64::MAX as u64 {
            tracing::trace!(numerator, denominator, "reduced denominator out of range");
            return Self::INVALID;
        }
        let n = (n / divisor) as i64;

        Self::raw(if negative { n.wrapping_neg() } else { n }, d as i64)
    }

    /// Like [`Fraction::new`], but reports the failure instead of producing
    /// the sentinel.
    ///
    /// # Errors
    /// - `DivisionByZero` if `denominator` is zero
    /// - `Overflow` if the reduced value does not fit in `i64`
    pub fn checked_new(numerator: i64, denominator: i64) -> NumericResult<Self> {
        Self::from_wide(numerator as i128, denominator as i128)
    }

    /// Create from an integer value (`value/1`).
    #[inline]
    pub const fn from_integer(value: i64) -> Self {
        Self::raw(value, 1)
    }

    /// `true` gives zero, `false` gives the invalid sentinel.
    #[inline]
    pub const fn from_valid(valid: bool) -> Self {
        if valid {
            Self::ZERO
        } else {
            Self::INVALID
        }
    }

    /// Reduce a 128-bit pair and narrow it to i64.
    pub(crate) fn from_wide(numerator: i128, denominator: i128) -> NumericResult<Self> {
        if denominator == 0 {
            return Err(NumericError::DivisionByZero);
        }
        if numerator == 0 {
            return Ok(Self::ZERO);
        }

        let negative = (numerator < 0) != (denominator < 0);
        let n = numerator.unsigned_abs();
        let d = denominator.unsigned_abs();
        let divisor = gcd_wide(n, d);

        let d = i64::try_from(d / divisor).map_err(|_| NumericError::Overflow)?;
        let magnitude = i128::try_from(n / divisor).map_err(|_| NumericError::Overflow)?;
        let signed = if negative { -magnitude } else { magnitude };
        let n = i64::try_from(signed).map_err(|_| NumericError::Overflow)?;

        Ok(Self::raw(n, d))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Numerator; carries the sign. 0 for the sentinel.
    #[inline]
    pub const fn numerator(self) -> i64 {
        self.numerator
    }

    /// Denominator; positive when valid, 0 for the sentinel.
    #[inline]
    pub const fn denominator(self) -> i64 {
        self.denominator
    }

    /// Check that this is not the invalid sentinel.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.valid
    }

    /// Check if value is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.valid && self.numerator == 0
    }

    /// Check if value is positive.
    #[inline]
    pub const fn is_positive(self) -> bool {
        self.numerator > 0
    }

    /// Check if value is negative.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.numerator < 0
    }

    /// Check if the denominator is one.
    #[inline]
    pub const fn is_integer(self) -> bool {
        self.valid && self.denominator == 1
    }

    /// -1, 0 or 1. The sentinel reports 0.
    #[inline]
    pub const fn signum(self) -> i64 {
        self.numerator.signum()
    }

    /// Absolute value (wraps for `i64::MIN`).
    #[inline]
    pub fn abs(self) -> Self {
        Self {
            numerator: self.numerator.wrapping_abs(),
            ..self
        }
    }

    /// Absolute value.
    ///
    /// # Errors
    /// Returns `Overflow` for a numerator of `i64::MIN`.
    #[inline]
    pub fn checked_abs(self) -> NumericResult<Self> {
        self.numerator
            .checked_abs()
            .map(|numerator| Self { numerator, ..self })
            .ok_or(NumericError::Overflow)
    }

    /// `"numerator/denominator"`, e.g. `"-5/6"`. The sentinel renders as `"0/0"`.
    pub fn to_ratio_string(self) -> String {
        format!("{}/{}", self.numerator, self.denominator)
    }

    /// Numerator and denominator divided by their own GCD.
    ///
    /// Identity for anything built through the public API; equality and
    /// hashing go through it so they never depend on the stored form.
    #[inline]
    fn reduced_parts(self) -> (i64, i64) {
        let divisor = gcd(self.numerator.unsigned_abs(), self.denominator.unsigned_abs());
        if divisor <= 1 || divisor > i64::MAX as u64 {
            (self.numerator, self.denominator)
        } else {
            let divisor = divisor as i64;
            (self.numerator / divisor, self.denominator / divisor)
        }
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Addition with silent wraparound of the cross products.
    #[inline]
    pub fn wrapping_add(self, rhs: Self) -> Self {
        Self::new(
            self.numerator
                .wrapping_mul(rhs.denominator)
                .wrapping_add(rhs.numerator.wrapping_mul(self.denominator)),
            self.denominator.wrapping_mul(rhs.denominator),
        )
    }

    /// Subtraction with silent wraparound of the cross products.
    #[inline]
    pub fn wrapping_sub(self, rhs: Self) -> Self {
        Self::new(
            self.numerator
                .wrapping_mul(rhs.denominator)
                .wrapping_sub(rhs.numerator.wrapping_mul(self.denominator)),
            self.denominator.wrapping_mul(rhs.denominator),
        )
    }

    /// Multiplication with silent wraparound.
    #[inline]
    pub fn wrapping_mul(self, rhs: Self) -> Self {
        Self::new(
            self.numerator.wrapping_mul(rhs.numerator),
            self.denominator.wrapping_mul(rhs.denominator),
        )
    }

    /// Division with silent wraparound. A zero divisor yields the sentinel.
    #[inline]
    pub fn wrapping_div(self, rhs: Self) -> Self {
        Self::new(
            self.numerator.wrapping_mul(rhs.denominator),
            self.denominator.wrapping_mul(rhs.numerator),
        )
    }

    /// Negation (wraps for `i64::MIN`).
    #[inline]
    pub fn wrapping_neg(self) -> Self {
        Self::new(self.numerator.wrapping_neg(), self.denominator)
    }

    /// Checked addition.
    ///
    /// Cross products are formed in 128 bits, so this only fails when the
    /// reduced result does not fit.
    ///
    /// # Errors
    /// - `InvalidOperand` if either side is the sentinel
    /// - `Overflow` if the result is out of range
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        self.require_valid(rhs)?;
        Self::from_wide(
            self.numerator as i128 * rhs.denominator as i128
                + rhs.numerator as i128 * self.denominator as i128,
            self.denominator as i128 * rhs.denominator as i128,
        )
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// - `InvalidOperand` if either side is the sentinel
    /// - `Overflow` if the result is out of range
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        self.require_valid(rhs)?;
        Self::from_wide(
            self.numerator as i128 * rhs.denominator as i128
                - rhs.numerator as i128 * self.denominator as i128,
            self.denominator as i128 * rhs.denominator as i128,
        )
    }

    /// Checked multiplication.
    ///
    /// # Errors
    /// - `InvalidOperand` if either side is the sentinel
    /// - `Overflow` if the result is out of range
    pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        self.require_valid(rhs)?;
        Self::from_wide(
            self.numerator as i128 * rhs.numerator as i128,
            self.denominator as i128 * rhs.denominator as i128,
        )
    }

    /// Checked division.
    ///
    /// # Errors
    /// - `InvalidOperand` if either side is the sentinel
    /// - `DivisionByZero` if `rhs` is zero
    /// - `Overflow` if the result is out of range
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        self.require_valid(rhs)?;
        Self::from_wide(
            self.numerator as i128 * rhs.denominator as i128,
            self.denominator as i128 * rhs.numerator as i128,
        )
    }

    /// Checked negation.
    ///
    /// # Errors
    /// - `InvalidOperand` for the sentinel
    /// - `Overflow` for a numerator of `i64::MIN`
    pub fn checked_neg(self) -> NumericResult<Self> {
        self.require_valid(self)?;
        self.numerator
            .checked_neg()
            .map(|numerator| Self { numerator, ..self })
            .ok_or(NumericError::Overflow)
    }

    #[inline]
    fn require_valid(self, rhs: Self) -> NumericResult<()> {
        if self.valid && rhs.valid {
            Ok(())
        } else {
            Err(NumericError::InvalidOperand)
        }
    }

    // ========================================================================
    // Powers, Inversion, Stepping
    // ========================================================================

    /// Raise to an integer power.
    ///
    /// A negative exponent inverts first. Any valid base to the power zero
    /// is one (including zero). The sentinel stays invalid for every
    /// exponent; [`Arithmetic`](crate::engine::Arithmetic) with
    /// [`InvalidPolicy::Leak`](crate::engine::InvalidPolicy) maps
    /// `INVALID^0` to one instead.
    pub fn pow(self, exp: i32) -> Self {
        if !self.valid {
            return Self::INVALID;
        }
        if exp == 0 {
            return Self::ONE;
        }

        let mut base = if exp < 0 { self.invert() } else { self };
        let mut remaining = exp.unsigned_abs();
        let mut result = Self::ONE;
        while remaining > 0 {
            if remaining & 1 == 1 {
                result = result.wrapping_mul(base);
            }
            remaining >>= 1;
            if remaining > 0 {
                base = base.wrapping_mul(base);
            }
        }
        result
    }

    /// Checked integer power.
    ///
    /// # Errors
    /// - `InvalidOperand` for the sentinel
    /// - `DivisionByZero` for zero to a negative power
    /// - `Overflow` if any partial product is out of range
    pub fn checked_pow(self, exp: i32) -> NumericResult<Self> {
        self.require_valid(self)?;
        if exp == 0 {
            return Ok(Self::ONE);
        }

        let mut base = if exp < 0 {
            Self::ONE.checked_div(self)?
        } else {
            self
        };
        let mut remaining = exp.unsigned_abs();
        let mut result = Self::ONE;
        while remaining > 0 {
            if remaining & 1 == 1 {
                result = result.checked_mul(base)?;
            }
            remaining >>= 1;
            if remaining > 0 {
                base = base.checked_mul(base)?;
            }
        }
        Ok(result)
    }

    /// Reciprocal as a new value. Zero and the sentinel invert to the sentinel.
    #[inline]
    pub fn invert(self) -> Self {
        Self::new(self.denominator, self.numerator)
    }

    /// Replace the value with its reciprocal.
    #[inline]
    pub fn invert_in_place(&mut self) {
        *self = self.invert();
    }

    /// Add one whole unit in place (pre-increment).
    #[inline]
    pub fn increment(&mut self) -> &mut Self {
        *self = Self::new(
            self.numerator.wrapping_add(self.denominator),
            self.denominator,
        );
        self
    }

    /// Subtract one whole unit in place (pre-decrement).
    #[inline]
    pub fn decrement(&mut self) -> &mut Self {
        *self = Self::new(
            self.numerator.wrapping_sub(self.denominator),
            self.denominator,
        );
        self
    }

    /// Add one whole unit in place, returning the previous value.
    #[inline]
    pub fn post_increment(&mut self) -> Self {
        let previous = *self;
        self.increment();
        previous
    }

    /// Subtract one whole unit in place, returning the previous value.
    #[inline]
    pub fn post_decrement(&mut self) -> Self {
        let previous = *self;
        self.decrement();
        previous
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Returns the smaller value, or the sentinel if either side is invalid.
    pub fn min(self, other: Self) -> Self {
        match self.partial_cmp(&other) {
            Some(Ordering::Greater) => other,
            Some(_) => self,
            None => Self::INVALID,
        }
    }

    /// Returns the larger value, or the sentinel if either side is invalid.
    pub fn max(self, other: Self) -> Self {
        match self.partial_cmp(&other) {
            Some(Ordering::Less) => other,
            Some(_) => self,
            None => Self::INVALID,
        }
    }
}

/// Order two `numerator/denominator` pairs with positive denominators by
/// scaling both numerators to `lcm(da, db)`.
///
/// The scaled numerators are formed in 128 bits and cannot overflow.
pub(crate) fn cmp_scaled(na: i64, da: u64, nb: i64, db: u64) -> Ordering {
    let multiple = lcm_wide(da, db);
    let lhs = na as i128 * (multiple / da as u128) as i128;
    let rhs = nb as i128 * (multiple / db as u128) as i128;
    lhs.cmp(&rhs)
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Fraction {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        if self.valid != other.valid {
            return false;
        }
        if self.numerator == 0 {
            return other.numerator == 0;
        }
        self.reduced_parts() == other.reduced_parts()
    }
}

impl Eq for Fraction {}

impl PartialOrd for Fraction {
    /// `None` when exactly one side is the sentinel; two sentinels are equal.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.valid, other.valid) {
            (true, true) => Some(cmp_scaled(
                self.numerator,
                self.denominator as u64,
                other.numerator,
                other.denominator as u64,
            )),
            (false, false) => Some(Ordering::Equal),
            _ => None,
        }
    }
}

impl Hash for Fraction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.valid.hash(state);
        self.reduced_parts().hash(state);
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid {
            write!(f, "Fraction({}/{})", self.numerator, self.denominator)
        } else {
            write!(f, "Fraction(invalid)")
        }
    }
}

/// Renders the floating-point quotient, honouring the formatter's precision.
/// The sentinel renders as `NaN`.
impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_f64(), f)
    }
}

// ============================================================================
// Serialization
// ============================================================================

/// Wire form; deserialization re-normalizes, so unreduced input is accepted
/// and a zero denominator becomes the sentinel.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct FractionParts {
    numerator: i64,
    denominator: i64,
}

#[cfg(feature = "serde")]
impl From<FractionParts> for Fraction {
    fn from(parts: FractionParts) -> Self {
        Fraction::new(parts.numerator, parts.denominator)
    }
}

#[cfg(feature = "serde")]
impl From<Fraction> for FractionParts {
    fn from(value: Fraction) -> Self {
        FractionParts {
            numerator: value.numerator,
            denominator: value.denominator,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
