// ============================================================================
// GCD / LCM
// Euclidean helpers used by normalization and ordering
// ============================================================================

/// Greatest common divisor by the iterative Euclidean algorithm.
///
/// `gcd(0, 0)` is 0; `gcd(a, 0)` is `a`.
#[inline]
pub const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

/// Least common multiple, `(a / gcd(a, b)) * b`.
///
/// Returns 0 if either argument is 0. The final multiplication wraps on
/// overflow; callers that cannot rule that out use [`checked_lcm`].
#[inline]
pub const fn lcm(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 {
        return 0;
    }
    (a / gcd(a, b)).wrapping_mul(b)
}

/// Least common multiple, `None` if it does not fit in a `u64`.
#[inline]
pub const fn checked_lcm(a: u64, b: u64) -> Option<u64> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    (a / gcd(a, b)).checked_mul(b)
}

#[inline]
pub(crate) const fn gcd_wide(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

/// LCM of two 64-bit values; always fits in 128 bits.
#[inline]
pub(crate) const fn lcm_wide(a: u64, b: u64) -> u128 {
    if a == 0 || b == 0 {
        return 0;
    }
    (a / gcd(a, b)) as u128 * b as u128
}
