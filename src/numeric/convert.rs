// ============================================================================
// Conversions
// Primitive, floating-point and rust_decimal bridges for Fraction
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::fraction::Fraction;
use rust_decimal::Decimal;

// ============================================================================
// From Primitives
// ============================================================================

macro_rules! impl_from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for Fraction {
            #[inline]
            fn from(value: $t) -> Self {
                Fraction::from_integer(value as i64)
            }
        }
    )*};
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for Fraction {
            /// Saturates at `i64::MAX`.
            #[inline]
            fn from(value: $t) -> Self {
                Fraction::from_integer(i64::try_from(value).unwrap_or(i64::MAX))
            }
        }
    )*};
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<bool> for Fraction {
    /// `true` gives zero, `false` gives the invalid sentinel.
    #[inline]
    fn from(valid: bool) -> Self {
        Fraction::from_valid(valid)
    }
}

impl From<f64> for Fraction {
    /// Converts through the shortest decimal text that round-trips the float.
    ///
    /// `0.1` becomes exactly `1/10`. Non-finite values and values whose
    /// decimal expansion does not fit in i64 give the invalid sentinel.
    /// See [`Fraction::from_f64_exact`] for the binary value instead.
    fn from(value: f64) -> Self {
        if !value.is_finite() {
            tracing::debug!(value, "non-finite float converted to invalid fraction");
            return Fraction::INVALID;
        }
        Fraction::from_decimal_str(&value.to_string())
    }
}

impl From<f32> for Fraction {
    /// Converts through the shortest decimal text that round-trips the `f32`.
    fn from(value: f32) -> Self {
        if !value.is_finite() {
            tracing::debug!(value, "non-finite float converted to invalid fraction");
            return Fraction::INVALID;
        }
        Fraction::from_decimal_str(&value.to_string())
    }
}

// ============================================================================
// Exact Binary Decomposition
// ============================================================================

impl Fraction {
    /// Convert the exact binary value of an `f64` (`mantissa * 2^exponent`).
    ///
    /// Unlike `From<f64>`, this does not go through decimal text, so
    /// `0.1` becomes `3602879701896397/36028797018963968`.
    ///
    /// # Errors
    /// - `InvalidInput` for NaN and infinities
    /// - `Overflow` if the numerator or the power-of-two denominator does
    ///   not fit in i64 (`-2^63` itself is accepted)
    pub fn from_f64_exact(value: f64) -> NumericResult<Self> {
        if !value.is_finite() {
            return Err(NumericError::InvalidInput);
        }
        if value == 0.0 {
            return Ok(Self::ZERO);
        }

        let bits = value.to_bits();
        let negative = bits >> 63 == 1;
        let biased_exponent = ((bits >> 52) & 0x7ff) as i32;
        let fraction = bits & ((1u64 << 52) - 1);

        let (mut mantissa, mut exponent) = if biased_exponent == 0 {
            (fraction, -1074)
        } else {
            (fraction | (1u64 << 52), biased_exponent - 1075)
        };

        let shift = mantissa.trailing_zeros();
        mantissa >>= shift;
        exponent += shift as i32;

        let signed = |magnitude: i128| if negative { -magnitude } else { magnitude };

        if exponent >= 0 {
            let significant_bits = 64 - mantissa.leading_zeros() as i32;
            // -2^63 is the one value that needs all 64 bits
            let available = if negative && mantissa == 1 { 64 } else { 63 };
            if significant_bits + exponent > available {
                return Err(NumericError::Overflow);
            }
            Self::from_wide(signed((mantissa as i128) << exponent), 1)
        } else {
            if -exponent > 62 {
                return Err(NumericError::Overflow);
            }
            Self::from_wide(signed(mantissa as i128), 1i128 << -exponent)
        }
    }

    /// Convert the exact binary value of an `f32`.
    ///
    /// # Errors
    /// As [`Fraction::from_f64_exact`].
    pub fn from_f32_exact(value: f32) -> NumericResult<Self> {
        Self::from_f64_exact(value as f64)
    }
}

// ============================================================================
// To Primitives
// ============================================================================

impl Fraction {
    /// Integer quotient, truncated toward zero. The sentinel gives 0.
    #[inline]
    pub fn to_i64(self) -> i64 {
        if self.is_valid() {
            self.numerator().wrapping_div(self.denominator())
        } else {
            0
        }
    }

    /// Truncated quotient narrowed to `i32` (wraps).
    #[inline]
    pub fn to_i32(self) -> i32 {
        self.to_i64() as i32
    }

    /// Truncated quotient narrowed to `i16` (wraps).
    #[inline]
    pub fn to_i16(self) -> i16 {
        self.to_i64() as i16
    }

    /// Floating-point quotient. The sentinel gives NaN.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.numerator() as f64 / self.denominator() as f64
    }

    /// Floating-point quotient. The sentinel gives NaN.
    #[inline]
    pub fn to_f32(self) -> f32 {
        self.to_f64() as f32
    }

    /// `true` when the numerator is non-zero.
    #[inline]
    pub fn to_bool(self) -> bool {
        self.numerator() != 0
    }
}

impl From<Fraction> for i64 {
    #[inline]
    fn from(value: Fraction) -> Self {
        value.to_i64()
    }
}

impl From<Fraction> for f64 {
    #[inline]
    fn from(value: Fraction) -> Self {
        value.to_f64()
    }
}

impl From<Fraction> for f32 {
    #[inline]
    fn from(value: Fraction) -> Self {
        value.to_f32()
    }
}

impl From<Fraction> for bool {
    #[inline]
    fn from(value: Fraction) -> Self {
        value.to_bool()
    }
}

// ============================================================================
// rust_decimal Bridge
// ============================================================================

impl Fraction {
    /// Exact conversion from `rust_decimal::Decimal` (`mantissa / 10^scale`).
    ///
    /// # Errors
    /// Returns `Overflow` if the reduced value does not fit in i64.
    pub fn from_decimal(d: Decimal) -> NumericResult<Self> {
        let scale = 10i128
            .checked_pow(d.scale())
            .ok_or(NumericError::Overflow)?;
        Self::from_wide(d.mantissa(), scale)
    }

    /// Convert to `rust_decimal::Decimal`, rounding to 28 significant digits.
    ///
    /// # Errors
    /// - `InvalidOperand` for the sentinel
    /// - `Overflow` if the quotient is out of the decimal range
    pub fn to_decimal(self) -> NumericResult<Decimal> {
        if !self.is_valid() {
            return Err(NumericError::InvalidOperand);
        }
        Decimal::from(self.numerator())
            .checked_div(Decimal::from(self.denominator()))
            .ok_or(NumericError::Overflow)
    }

    /// Convert to `rust_decimal::Decimal` only if no digit is lost.
    ///
    /// Values whose denominator has prime factors other than 2 and 5, or
    /// whose expansion needs more than 28 digits, are rejected.
    ///
    /// # Errors
    /// - `InvalidOperand` for the sentinel
    /// - `Overflow` if the quotient is out of the decimal range
    /// - `PrecisionLoss` if the decimal is not exactly this value
    pub fn to_decimal_exact(self) -> NumericResult<Decimal> {
        let rounded = self.to_decimal()?;
        match Self::from_decimal(rounded) {
            Ok(back) if back == self => Ok(rounded),
            _ => Err(NumericError::PrecisionLoss),
        }
    }
}

impl TryFrom<Decimal> for Fraction {
    type Error = NumericError;

    #[inline]
    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Fraction::from_decimal(value)
    }
}

// ============================================================================
// Tests
// ============================================================================
