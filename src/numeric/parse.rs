// ============================================================================
// Decimal Parsing
// Exact conversion of decimal literals into Fraction
// ============================================================================
//
// Accepted grammar: an optional leading '-', at least one digit, and at most
// one decimal separator ('.' or ',') that is followed by at least one digit.
// Examples: "42", "-3.14", "0,5". Rejected: "", "-", ".5", "5.", "1.2.3",
// "+1", " 1", "1e3".

use super::errors::{NumericError, NumericResult};
use super::fraction::Fraction;
use std::str::FromStr;

#[inline]
const fn is_separator(b: u8) -> bool {
    b == b'.' || b == b','
}

/// Check whether `s` is a decimal literal this crate can parse.
///
/// Pure and linear in the length of `s`. Passing the check does not
/// guarantee the value fits in i64.
pub fn is_decimal_literal(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s).as_bytes();

    let (Some(&first), Some(&last)) = (digits.first(), digits.last()) else {
        return false;
    };
    if !first.is_ascii_digit() || is_separator(last) {
        return false;
    }

    let mut seen_separator = false;
    for &b in digits {
        if is_separator(b) {
            if seen_separator {
                return false;
            }
            seen_separator = true;
        } else if !b.is_ascii_digit() {
            return false;
        }
    }
    true
}

/// Accumulate ASCII digits, failing once the value leaves i128.
fn accumulate(digits: &str) -> NumericResult<i128> {
    digits.bytes().try_fold(0i128, |acc, b| {
        acc.checked_mul(10)
            .and_then(|acc| acc.checked_add((b - b'0') as i128))
            .ok_or(NumericError::Overflow)
    })
}

/// Express `digits / 10^scale` with the factors of 2 and 5 shared by
/// numerator and denominator cancelled, so long expansions of dyadic values
/// (e.g. 2^-40, forty digits) still produce a representable denominator.
fn decimal_fraction(mut digits: i128, scale: u32) -> NumericResult<(i128, i128)> {
    let mut twos = scale;
    let mut fives = scale;
    while twos > 0 && digits % 2 == 0 {
        digits /= 2;
        twos -= 1;
    }
    while fives > 0 && digits % 5 == 0 {
        digits /= 5;
        fives -= 1;
    }

    let denominator = 2i128
        .checked_pow(twos)
        .zip(5i128.checked_pow(fives))
        .and_then(|(a, b)| a.checked_mul(b))
        .ok_or(NumericError::Overflow)?;
    Ok((digits, denominator))
}

/// Parse a decimal literal into an exact fraction.
///
/// The integer digits become `digits/1` and the `k` fractional digits
/// become `digits/10^k`, each reduced on its own, and the two are summed
/// with exact addition. The sign is applied to both terms, so
/// `"-9223372036854775808"` parses.
///
/// # Errors
/// - `InvalidInput` if `s` is not a decimal literal
/// - `Overflow` if the value does not fit in i64
pub(crate) fn parse_decimal(s: &str) -> NumericResult<Fraction> {
    if !is_decimal_literal(s) {
        return Err(NumericError::InvalidInput);
    }

    let (negative, unsigned) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };

    let (int_digits, frac_digits) = match unsigned.bytes().position(is_separator) {
        Some(pos) => (&unsigned[..pos], &unsigned[pos + 1..]),
        None => (unsigned, ""),
    };
    // Trailing zeros do not change the value, only the scale.
    let frac_digits = frac_digits.trim_end_matches('0');

    let sign = if negative { -1 } else { 1 };

    let integer = Fraction::from_wide(sign * accumulate(int_digits)?, 1)?;
    if frac_digits.is_empty() {
        return Ok(integer);
    }

    let scale = u32::try_from(frac_digits.len()).map_err(|_| NumericError::Overflow)?;
    let (digits, denominator) = decimal_fraction(accumulate(frac_digits)?, scale)?;
    let fractional = Fraction::from_wide(sign * digits, denominator)?;

    integer.checked_add(fractional)
}

impl Fraction {
    /// Parse a decimal literal, yielding [`Fraction::INVALID`] on failure.
    ///
    /// Use `str::parse` to learn why a literal was rejected.
    pub fn from_decimal_str(s: &str) -> Self {
        match parse_decimal(s) {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!(input = s, error = %err, "decimal literal rejected");
                Fraction::INVALID
            },
        }
    }
}

impl FromStr for Fraction {
    type Err = NumericError;

    /// Parse from a decimal string.
    ///
    /// # Examples
    /// - "3.14" -> 157/50
    /// - "-0,5" -> -1/2
    /// - "42" -> 42/1
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_decimal(s)
    }
}

impl From<&str> for Fraction {
    #[inline]
    fn from(s: &str) -> Self {
        Fraction::from_decimal_str(s)
    }
}

impl From<String> for Fraction {
    #[inline]
    fn from(s: String) -> Self {
        Fraction::from_decimal_str(&s)
    }
}

impl From<&String> for Fraction {
    #[inline]
    fn from(s: &String) -> Self {
        Fraction::from_decimal_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn parts(f: Fraction) -> (i64, i64) {
        (f.numerator(), f.denominator())
    }

    #[test]
    fn test_is_decimal_literal_accepts() {
        for s in ["0", "42", "-42", "3.14", "3,14", "-0.5", "007", "1.0", "-0,001"] {
            assert!(is_decimal_literal(s), "{s:?} should be accepted");
        }
    }

    #[test]
    fn test_is_decimal_literal_rejects() {
        for s in [
            "", "-", "--1", "+1", ".5", "-.5", "5.", "-5,", "1.2.3", "1.2,3", "12abc", "1e3",
            " 1", "1 ", "0x10", "١",
        ] {
            assert!(!is_decimal_literal(s), "{s:?} should be rejected");
        }
    }

    #[test]
    fn test_parse_scenarios() {
        assert_eq!(parts("3.14".parse().unwrap()), (157, 50));
        assert_eq!(parts("-3.14".parse().unwrap()), (-157, 50));
        assert_eq!(parts("0,5".parse().unwrap()), (1, 2));
        assert_eq!(parts("42".parse().unwrap()), (42, 1));
        assert_eq!(parts("-0".parse().unwrap()), (0, 1));
        assert_eq!(parts("0.000".parse().unwrap()), (0, 1));
        assert_eq!(parts("2.50000".parse().unwrap()), (5, 2));
        assert_eq!(parts("-1.25".parse().unwrap()), (-5, 4));
    }

    #[test]
    fn test_parse_rejects() {
        assert_eq!("12abc".parse::<Fraction>(), Err(NumericError::InvalidInput));
        assert_eq!("".parse::<Fraction>(), Err(NumericError::InvalidInput));
        assert_eq!("1.".parse::<Fraction>(), Err(NumericError::InvalidInput));
    }

    #[test]
    fn test_parse_range() {
        assert_eq!(
            "9223372036854775807".parse::<Fraction>(),
            Ok(Fraction::MAX)
        );
        assert_eq!(
            "-9223372036854775808".parse::<Fraction>(),
            Ok(Fraction::MIN)
        );
        assert_eq!(
            "9223372036854775808".parse::<Fraction>(),
            Err(NumericError::Overflow)
        );
        assert_eq!(
            "0.0000000000000000000001".parse::<Fraction>(),
            Err(NumericError::Overflow)
        );
    }

    #[test]
    fn test_parse_long_fraction_that_reduces() {
        // 2^-40, forty fractional digits but a denominator that fits
        let s = "0.0000000000009094947017729282379150390625";
        assert_eq!(
            s.parse::<Fraction>(),
            Ok(Fraction::new(1, 1i64 << 40))
        );
    }

    #[test]
    fn test_sentinel_entry_points() {
        let bad = Fraction::from("12abc");
        assert!(!bad.is_valid());
        assert_eq!(parts(bad), (0, 0));

        assert_eq!(Fraction::from("3.14"), Fraction::new(157, 50));
        assert_eq!(Fraction::from(String::from("-2,5")), Fraction::new(-5, 2));
        assert_eq!(Fraction::from(&String::from("7")), Fraction::from_integer(7));
        assert!(!Fraction::from_decimal_str("99999999999999999999").is_valid());
    }

    proptest! {
        #[test]
        fn validation_matches_grammar(s in "-?[0-9]{1,6}([.,][0-9]{1,6})?") {
            prop_assert!(is_decimal_literal(&s));
            prop_assert!(s.parse::<Fraction>().is_ok());
        }

        #[test]
        fn validation_never_panics(s in "\\PC*") {
            let _ = is_decimal_literal(&s);
            let _ = Fraction::from_decimal_str(&s);
        }

        #[test]
        fn parse_is_exact(int in 0i64..1_000_000, frac in 0i64..1_000_000, negative in any::<bool>()) {
            let s = format!("{}{}.{:06}", if negative { "-" } else { "" }, int, frac);
            let expected = Fraction::new(int * 1_000_000 + frac, 1_000_000);
            let expected = if negative { -expected } else { expected };
            prop_assert_eq!(s.parse::<Fraction>(), Ok(expected));
        }

        #[test]
        fn decimal_text_roundtrip(int in 0i64..1_000_000, frac in 0i64..1_000_000) {
            let s = format!("{}.{:06}", int, frac);
            let f: Fraction = s.parse().unwrap();
            let rendered = f.to_string();
            let back: Fraction = rendered.parse().unwrap();
            prop_assert_eq!(back, f);
        }

        #[test]
        fn display_roundtrip_within_precision(n in -1000i64..1000, d in 1i64..1000) {
            let f = Fraction::new(n, d);
            let back = Fraction::from_decimal_str(&f.to_string());
            prop_assume!(back.is_valid());
            let diff = (back.to_f64() - f.to_f64()).abs();
            prop_assert!(diff <= f.to_f64().abs() * 1e-12);
        }
    }
}
