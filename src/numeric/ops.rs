// ============================================================================
// Operators
// std::ops and mixed-type impls for Fraction
// ============================================================================
//
// Binary operators copy the left operand and apply the compound form, so
// `a + b` and `a += b` can never disagree. Integer operands use the direct
// formulas (n + r*d)/d, (n - r*d)/d, (n*r)/d, n/(d*r); float operands are
// converted first and then go through the fraction formulas.

use super::fraction::{cmp_scaled, Fraction};
use std::cmp::Ordering;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

impl AddAssign for Fraction {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = self.wrapping_add(rhs);
    }
}

impl SubAssign for Fraction {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.wrapping_sub(rhs);
    }
}

impl MulAssign for Fraction {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.wrapping_mul(rhs);
    }
}

impl DivAssign for Fraction {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = self.wrapping_div(rhs);
    }
}

/// Implements a binary operator by copy-then-compound.
macro_rules! forward_binop {
    ($rhs:ty, $op:ident, $method:ident, $assign:tt) => {
        impl $op<$rhs> for Fraction {
            type Output = Fraction;

            #[inline]
            fn $method(self, rhs: $rhs) -> Fraction {
                let mut temp = self;
                temp $assign rhs;
                temp
            }
        }
    };
}

forward_binop!(Fraction, Add, add, +=);
forward_binop!(Fraction, Sub, sub, -=);
forward_binop!(Fraction, Mul, mul, *=);
forward_binop!(Fraction, Div, div, /=);

impl<'a> Add<&'a Fraction> for Fraction {
    type Output = Fraction;

    #[inline]
    fn add(self, rhs: &'a Fraction) -> Fraction {
        self + *rhs
    }
}

impl<'a> Mul<&'a Fraction> for Fraction {
    type Output = Fraction;

    #[inline]
    fn mul(self, rhs: &'a Fraction) -> Fraction {
        self * *rhs
    }
}

impl Neg for Fraction {
    type Output = Fraction;

    #[inline]
    fn neg(self) -> Fraction {
        self.wrapping_neg()
    }
}

impl Sum for Fraction {
    fn sum<I: Iterator<Item = Fraction>>(iter: I) -> Fraction {
        iter.fold(Fraction::ZERO, |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Fraction> for Fraction {
    fn sum<I: Iterator<Item = &'a Fraction>>(iter: I) -> Fraction {
        iter.fold(Fraction::ZERO, |acc, x| acc + x)
    }
}

impl Product for Fraction {
    fn product<I: Iterator<Item = Fraction>>(iter: I) -> Fraction {
        iter.fold(Fraction::ONE, |acc, x| acc * x)
    }
}

impl<'a> Product<&'a Fraction> for Fraction {
    fn product<I: Iterator<Item = &'a Fraction>>(iter: I) -> Fraction {
        iter.fold(Fraction::ONE, |acc, x| acc * x)
    }
}

// ============================================================================
// Mixed Operands
// ============================================================================

/// Binary operators shared by every primitive operand type, in both
/// operand orders. The primitive side is lifted with `Fraction::from`.
macro_rules! impl_primitive_common {
    ($($t:ty),*) => {$(
        forward_binop!($t, Add, add, +=);
        forward_binop!($t, Sub, sub, -=);
        forward_binop!($t, Mul, mul, *=);
        forward_binop!($t, Div, div, /=);

        impl Add<Fraction> for $t {
            type Output = Fraction;

            #[inline]
            fn add(self, rhs: Fraction) -> Fraction {
                Fraction::from(self) + rhs
            }
        }

        impl Sub<Fraction> for $t {
            type Output = Fraction;

            #[inline]
            fn sub(self, rhs: Fraction) -> Fraction {
                Fraction::from(self) - rhs
            }
        }

        impl Mul<Fraction> for $t {
            type Output = Fraction;

            #[inline]
            fn mul(self, rhs: Fraction) -> Fraction {
                Fraction::from(self) * rhs
            }
        }

        impl Div<Fraction> for $t {
            type Output = Fraction;

            #[inline]
            fn div(self, rhs: Fraction) -> Fraction {
                Fraction::from(self) / rhs
            }
        }
    )*};
}

/// Order a fraction against an integer without narrowing the integer, so
/// `u64` values above `i64::MAX` compare exactly. `None` for the sentinel.
fn cmp_integer(lhs: Fraction, rhs: i128) -> Option<Ordering> {
    if !lhs.is_valid() {
        return None;
    }
    match i64::try_from(rhs) {
        Ok(rhs) => Some(cmp_scaled(
            lhs.numerator(),
            lhs.denominator() as u64,
            rhs,
            1,
        )),
        // every valid fraction lies within the i64 range
        Err(_) if rhs > 0 => Some(Ordering::Less),
        Err(_) => Some(Ordering::Greater),
    }
}

/// Exact comparisons against integers, in both operand orders.
macro_rules! impl_integer_cmp {
    ($($t:ty),*) => {$(
        impl PartialEq<$t> for Fraction {
            #[inline]
            fn eq(&self, other: &$t) -> bool {
                cmp_integer(*self, *other as i128) == Some(Ordering::Equal)
            }
        }

        impl PartialEq<Fraction> for $t {
            #[inline]
            fn eq(&self, other: &Fraction) -> bool {
                cmp_integer(*other, *self as i128) == Some(Ordering::Equal)
            }
        }

        impl PartialOrd<$t> for Fraction {
            #[inline]
            fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                cmp_integer(*self, *other as i128)
            }
        }

        impl PartialOrd<Fraction> for $t {
            #[inline]
            fn partial_cmp(&self, other: &Fraction) -> Option<Ordering> {
                cmp_integer(*other, *self as i128).map(Ordering::reverse)
            }
        }
    )*};
}

/// Comparisons against floats go through the float conversion.
macro_rules! impl_float_cmp {
    ($($t:ty),*) => {$(
        impl PartialEq<$t> for Fraction {
            #[inline]
            fn eq(&self, other: &$t) -> bool {
                *self == Fraction::from(*other)
            }
        }

        impl PartialEq<Fraction> for $t {
            #[inline]
            fn eq(&self, other: &Fraction) -> bool {
                Fraction::from(*self) == *other
            }
        }

        impl PartialOrd<$t> for Fraction {
            #[inline]
            fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                self.partial_cmp(&Fraction::from(*other))
            }
        }

        impl PartialOrd<Fraction> for $t {
            #[inline]
            fn partial_cmp(&self, other: &Fraction) -> Option<Ordering> {
                Fraction::from(*self).partial_cmp(other)
            }
        }
    )*};
}

/// Compound assignment with an integer right-hand side, applied directly
/// to the stored pair.
macro_rules! impl_integer_assign {
    ($($t:ty),*) => {$(
        impl AddAssign<$t> for Fraction {
            #[inline]
            fn add_assign(&mut self, rhs: $t) {
                let rhs = Fraction::from(rhs).numerator();
                *self = Fraction::new(
                    self.numerator().wrapping_add(rhs.wrapping_mul(self.denominator())),
                    self.denominator(),
                );
            }
        }

        impl SubAssign<$t> for Fraction {
            #[inline]
            fn sub_assign(&mut self, rhs: $t) {
                let rhs = Fraction::from(rhs).numerator();
                *self = Fraction::new(
                    self.numerator().wrapping_sub(rhs.wrapping_mul(self.denominator())),
                    self.denominator(),
                );
            }
        }

        impl MulAssign<$t> for Fraction {
            #[inline]
            fn mul_assign(&mut self, rhs: $t) {
                let rhs = Fraction::from(rhs).numerator();
                *self = Fraction::new(self.numerator().wrapping_mul(rhs), self.denominator());
            }
        }

        impl DivAssign<$t> for Fraction {
            #[inline]
            fn div_assign(&mut self, rhs: $t) {
                let rhs = Fraction::from(rhs).numerator();
                *self = Fraction::new(self.numerator(), self.denominator().wrapping_mul(rhs));
            }
        }
    )*};
}

/// Compound assignment with a float right-hand side.
macro_rules! impl_float_assign {
    ($($t:ty),*) => {$(
        impl AddAssign<$t> for Fraction {
            #[inline]
            fn add_assign(&mut self, rhs: $t) {
                *self += Fraction::from(rhs);
            }
        }

        impl SubAssign<$t> for Fraction {
            #[inline]
            fn sub_assign(&mut self, rhs: $t) {
                *self -= Fraction::from(rhs);
            }
        }

        impl MulAssign<$t> for Fraction {
            #[inline]
            fn mul_assign(&mut self, rhs: $t) {
                *self *= Fraction::from(rhs);
            }
        }

        impl DivAssign<$t> for Fraction {
            #[inline]
            fn div_assign(&mut self, rhs: $t) {
                *self /= Fraction::from(rhs);
            }
        }
    )*};
}

impl_integer_assign!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_float_assign!(f32, f64);
impl_primitive_common!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
impl_integer_cmp!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_float_cmp!(f32, f64);
