// ============================================================================
// Arithmetic Context
// Applies the Fraction operators under an explicit ArithmeticConfig
// ============================================================================

use super::config::{ArithmeticConfig, BinaryOp, InvalidPolicy, OverflowPolicy};
use crate::numeric::{cmp_scaled, Fraction, NumericError, NumericResult};
use std::cmp::Ordering;

/// Evaluates fraction arithmetic under a fixed pair of policies.
///
/// The plain operators on [`Fraction`] behave like
/// `Arithmetic::new(ArithmeticConfig::default())`. A context is `Copy` and
/// holds no state besides its configuration.
///
/// # Example
/// ```
/// use exact_fraction::engine::{Arithmetic, ArithmeticConfig};
/// use exact_fraction::numeric::Fraction;
///
/// let strict = Arithmetic::new(ArithmeticConfig::strict());
/// let overflowed = strict.add(Fraction::MAX, Fraction::ONE);
/// assert!(!overflowed.is_valid());
///
/// let legacy = Arithmetic::new(ArithmeticConfig::compatible());
/// assert_eq!(legacy.pow(Fraction::INVALID, 0), Fraction::ONE);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Arithmetic {
    config: ArithmeticConfig,
}

#[allow(clippy::should_implement_trait)]
impl Arithmetic {
    /// Create a context from configuration
    pub const fn new(config: ArithmeticConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub const fn config(&self) -> &ArithmeticConfig {
        &self.config
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Apply a binary operator
    pub fn apply(&self, op: BinaryOp, lhs: Fraction, rhs: Fraction) -> Fraction {
        if self.absorbs(lhs, rhs) {
            tracing::trace!(%op, "invalid operand absorbed");
            return Fraction::INVALID;
        }

        match self.config.overflow_policy {
            OverflowPolicy::Wrap => match op {
                BinaryOp::Add => lhs.wrapping_add(rhs),
                BinaryOp::Sub => lhs.wrapping_sub(rhs),
                BinaryOp::Mul => lhs.wrapping_mul(rhs),
                BinaryOp::Div => lhs.wrapping_div(rhs),
            },
            OverflowPolicy::Check => {
                let result = match op {
                    BinaryOp::Add => lhs.checked_add(rhs),
                    BinaryOp::Sub => lhs.checked_sub(rhs),
                    BinaryOp::Mul => lhs.checked_mul(rhs),
                    BinaryOp::Div => lhs.checked_div(rhs),
                };
                self.settle(result, || format!("{lhs:?} {op} {rhs:?}"))
            },
        }
    }

    /// `lhs + rhs`
    #[inline]
    pub fn add(&self, lhs: Fraction, rhs: Fraction) -> Fraction {
        self.apply(BinaryOp::Add, lhs, rhs)
    }

    /// `lhs - rhs`
    #[inline]
    pub fn sub(&self, lhs: Fraction, rhs: Fraction) -> Fraction {
        self.apply(BinaryOp::Sub, lhs, rhs)
    }

    /// `lhs * rhs`
    #[inline]
    pub fn mul(&self, lhs: Fraction, rhs: Fraction) -> Fraction {
        self.apply(BinaryOp::Mul, lhs, rhs)
    }

    /// `lhs / rhs`
    #[inline]
    pub fn div(&self, lhs: Fraction, rhs: Fraction) -> Fraction {
        self.apply(BinaryOp::Div, lhs, rhs)
    }

    /// `-value`
    pub fn neg(&self, value: Fraction) -> Fraction {
        if !value.is_valid() {
            return Fraction::INVALID;
        }
        match self.config.overflow_policy {
            OverflowPolicy::Wrap => value.wrapping_neg(),
            OverflowPolicy::Check => self.settle(value.checked_neg(), || format!("-{value:?}")),
        }
    }

    /// `1 / value`
    pub fn invert(&self, value: Fraction) -> Fraction {
        value.invert()
    }

    /// `base^exp`
    ///
    /// Exponent zero gives one for every valid base. For the sentinel it
    /// gives one under [`InvalidPolicy::Leak`] and invalid under
    /// [`InvalidPolicy::Absorb`].
    pub fn pow(&self, base: Fraction, exp: i32) -> Fraction {
        if !base.is_valid() {
            return match (exp, self.config.invalid_policy) {
                (0, InvalidPolicy::Leak) => Fraction::ONE,
                _ => Fraction::INVALID,
            };
        }
        match self.config.overflow_policy {
            OverflowPolicy::Wrap => base.pow(exp),
            OverflowPolicy::Check => {
                self.settle(base.checked_pow(exp), || format!("{base:?}^{exp}"))
            },
        }
    }

    /// Fold with `+`, starting from zero
    pub fn sum<I>(&self, values: I) -> Fraction
    where
        I: IntoIterator<Item = Fraction>,
    {
        values
            .into_iter()
            .fold(Fraction::ZERO, |acc, x| self.add(acc, x))
    }

    /// Fold with `*`, starting from one
    pub fn product<I>(&self, values: I) -> Fraction
    where
        I: IntoIterator<Item = Fraction>,
    {
        values
            .into_iter()
            .fold(Fraction::ONE, |acc, x| self.mul(acc, x))
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Order two values.
    ///
    /// `None` only under [`InvalidPolicy::Absorb`] when exactly one side is
    /// invalid. Under [`InvalidPolicy::Leak`] invalid orders as zero.
    pub fn compare(&self, lhs: Fraction, rhs: Fraction) -> Option<Ordering> {
        match self.config.invalid_policy {
            InvalidPolicy::Absorb => lhs.partial_cmp(&rhs),
            InvalidPolicy::Leak => {
                let (ln, ld) = leaked_parts(lhs);
                let (rn, rd) = leaked_parts(rhs);
                Some(cmp_scaled(ln, ld, rn, rd))
            },
        }
    }

    /// `lhs == rhs`
    pub fn eq(&self, lhs: Fraction, rhs: Fraction) -> bool {
        self.compare(lhs, rhs) == Some(Ordering::Equal)
    }

    /// `lhs < rhs`
    pub fn lt(&self, lhs: Fraction, rhs: Fraction) -> bool {
        self.compare(lhs, rhs) == Some(Ordering::Less)
    }

    /// `lhs > rhs`
    pub fn gt(&self, lhs: Fraction, rhs: Fraction) -> bool {
        self.compare(lhs, rhs) == Some(Ordering::Greater)
    }

    /// `lhs <= rhs`
    pub fn le(&self, lhs: Fraction, rhs: Fraction) -> bool {
        match self.config.invalid_policy {
            InvalidPolicy::Absorb => matches!(
                self.compare(lhs, rhs),
                Some(Ordering::Less | Ordering::Equal)
            ),
            InvalidPolicy::Leak => !self.gt(lhs, rhs),
        }
    }

    /// `lhs >= rhs`
    pub fn ge(&self, lhs: Fraction, rhs: Fraction) -> bool {
        match self.config.invalid_policy {
            InvalidPolicy::Absorb => matches!(
                self.compare(lhs, rhs),
                Some(Ordering::Greater | Ordering::Equal)
            ),
            InvalidPolicy::Leak => !self.lt(lhs, rhs),
        }
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    #[inline]
    fn absorbs(&self, lhs: Fraction, rhs: Fraction) -> bool {
        self.config.invalid_policy == InvalidPolicy::Absorb && !(lhs.is_valid() && rhs.is_valid())
    }

    /// Collapse a checked result into a fraction, logging overflow.
    fn settle<F>(&self, result: NumericResult<Fraction>, describe: F) -> Fraction
    where
        F: FnOnce() -> String,
    {
        match result {
            Ok(value) => value,
            Err(NumericError::Overflow) => {
                tracing::debug!(operation = %describe(), "overflow, result is invalid");
                Fraction::INVALID
            },
            Err(_) => Fraction::INVALID,
        }
    }
}

/// The sentinel's pair as seen by leaky comparisons: zero.
#[inline]
fn leaked_parts(value: Fraction) -> (i64, u64) {
    if value.is_valid() {
        (value.numerator(), value.denominator() as u64)
    } else {
        (0, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn f(n: i64, d: i64) -> Fraction {
        Fraction::new(n, d)
    }

    fn absorbing() -> Arithmetic {
        Arithmetic::default()
    }

    fn leaky() -> Arithmetic {
        Arithmetic::new(ArithmeticConfig::compatible())
    }

    fn strict() -> Arithmetic {
        Arithmetic::new(ArithmeticConfig::strict())
    }

    #[test]
    fn test_basic_operations() {
        let ctx = absorbing();
        assert_eq!(ctx.add(f(1, 2), f(1, 3)), f(5, 6));
        assert_eq!(ctx.sub(f(1, 2), f(1, 3)), f(1, 6));
        assert_eq!(ctx.mul(f(1, 2), f(1, 3)), f(1, 6));
        assert_eq!(ctx.div(f(1, 2), f(1, 3)), f(3, 2));
        assert_eq!(ctx.neg(f(1, 2)), f(-1, 2));
        assert_eq!(ctx.invert(f(-2, 5)), f(-5, 2));
        assert_eq!(ctx.pow(f(2, 3), -2), f(9, 4));
    }

    #[test]
    fn test_apply_matches_operators() {
        let ctx = absorbing();
        let (a, b) = (f(7, 9), f(-5, 12));
        assert_eq!(ctx.apply(BinaryOp::Add, a, b), a + b);
        assert_eq!(ctx.apply(BinaryOp::Sub, a, b), a - b);
        assert_eq!(ctx.apply(BinaryOp::Mul, a, b), a * b);
        assert_eq!(ctx.apply(BinaryOp::Div, a, b), a / b);
    }

    #[test]
    fn test_division_by_zero_is_invalid_in_every_mode() {
        for ctx in [absorbing(), leaky(), strict()] {
            assert!(!ctx.div(f(1, 2), Fraction::ZERO).is_valid());
        }
    }

    #[test]
    fn test_absorb_policy() {
        let ctx = absorbing();
        let bad = Fraction::INVALID;
        for op in BinaryOp::ALL {
            assert!(!ctx.apply(op, bad, f(1, 2)).is_valid());
            assert!(!ctx.apply(op, f(1, 2), bad).is_valid());
        }
        assert!(!ctx.pow(bad, 0).is_valid());
        assert!(!ctx.neg(bad).is_valid());
        assert!(!ctx.eq(bad, Fraction::ZERO));
        assert!(ctx.eq(bad, bad));
        assert!(!ctx.lt(bad, f(1, 2)));
        assert!(!ctx.le(bad, f(1, 2)));
        assert!(!ctx.ge(bad, f(1, 2)));
        assert_eq!(ctx.compare(bad, Fraction::ONE), None);
    }

    #[test]
    fn test_leak_policy() {
        let ctx = leaky();
        let bad = Fraction::INVALID;
        // the zero denominator still poisons the four operators
        for op in BinaryOp::ALL {
            assert!(!ctx.apply(op, bad, f(1, 2)).is_valid());
            assert!(!ctx.apply(op, f(1, 2), bad).is_valid());
        }
        assert_eq!(ctx.pow(bad, 0), Fraction::ONE);
        assert!(!ctx.pow(bad, 2).is_valid());
        // invalid compares as zero
        assert!(ctx.eq(bad, Fraction::ZERO));
        assert!(ctx.lt(bad, f(1, 2)));
        assert!(ctx.gt(bad, f(-1, 2)));
        assert!(ctx.le(bad, Fraction::ZERO));
        assert!(ctx.ge(bad, Fraction::ZERO));
        assert_eq!(ctx.compare(bad, Fraction::ONE), Some(Ordering::Less));
    }

    #[test]
    fn test_wrap_policy_overflow() {
        let ctx = absorbing();
        let wrapped = ctx.add(Fraction::MAX, Fraction::ONE);
        assert!(wrapped.is_valid());
        assert_eq!(wrapped, Fraction::MIN);
        assert_eq!(ctx.neg(Fraction::MIN), Fraction::MIN);
    }

    #[test]
    fn test_check_policy_overflow() {
        let ctx = strict();
        assert!(!ctx.add(Fraction::MAX, Fraction::ONE).is_valid());
        assert!(!ctx.sub(Fraction::MIN, Fraction::ONE).is_valid());
        assert!(!ctx.mul(Fraction::MAX, Fraction::from_integer(2)).is_valid());
        assert!(!ctx.neg(Fraction::MIN).is_valid());
        assert!(!ctx.pow(Fraction::from_integer(2), 63).is_valid());
        assert_eq!(
            ctx.pow(Fraction::from_integer(2), 62),
            Fraction::from_integer(1 << 62)
        );
    }

    #[test]
    fn test_check_policy_exact_where_wrap_is_not() {
        let a = f(i64::MAX, 3);
        let b = f(1, 3);
        // cross products leave i64, reduced results do not
        assert_eq!(strict().sub(a, a), Fraction::ZERO);
        assert_eq!(strict().div(a, b), Fraction::MAX);
        assert!(!strict().mul(a, Fraction::from_integer(6)).is_valid());
    }

    #[test]
    fn test_sum_and_product() {
        let values = [f(1, 2), f(1, 3), f(1, 6)];
        assert_eq!(absorbing().sum(values), Fraction::ONE);
        assert_eq!(absorbing().product(values), f(1, 36));
        assert!(!strict().sum([Fraction::MAX, Fraction::MAX]).is_valid());
        assert!(!absorbing().sum([f(1, 2), Fraction::INVALID]).is_valid());
    }

    #[test]
    fn test_config_accessor() {
        assert_eq!(*strict().config(), ArithmeticConfig::strict());
    }

    fn small_fraction() -> impl Strategy<Value = Fraction> {
        (-1_000i64..1_000, 1i64..1_000).prop_map(|(n, d)| Fraction::new(n, d))
    }

    proptest! {
        #[test]
        fn policies_agree_on_valid_operands(a in small_fraction(), b in small_fraction()) {
            for op in BinaryOp::ALL {
                let expected = absorbing().apply(op, a, b);
                prop_assert_eq!(leaky().apply(op, a, b), expected);
                prop_assert_eq!(strict().apply(op, a, b), expected);
            }
            prop_assert_eq!(leaky().compare(a, b), a.partial_cmp(&b));
            prop_assert_eq!(leaky().le(a, b), a <= b);
            prop_assert_eq!(leaky().ge(a, b), a >= b);
        }
    }
}
