// ============================================================================
// Arithmetic Configuration
// Policies for invalid operands and overflow in an Arithmetic context
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Invalid Policy
// ============================================================================

/// How the invalid sentinel behaves when it takes part in an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InvalidPolicy {
    /// The sentinel is absorbing
    /// - Any operation with an invalid operand yields invalid
    /// - `INVALID^0` is invalid
    /// - Comparisons against invalid are false; two invalids are equal
    ///
    /// Same behaviour as the `Fraction` operators.
    #[default]
    Absorb,

    /// The sentinel's raw `0/0` pair is fed through the formulas
    /// - Binary operators still hit the zero-denominator path and yield invalid
    /// - `INVALID^0` is one
    /// - Comparisons treat invalid as zero; `<=`/`>=` are the negation of `>`/`<`
    Leak,
}

// ============================================================================
// Overflow Policy
// ============================================================================

/// What happens when a result does not fit in 64 bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OverflowPolicy {
    /// Cross products wrap silently
    #[default]
    Wrap,

    /// Results are computed exactly in 128 bits; anything out of range
    /// becomes the invalid sentinel
    Check,
}

// ============================================================================
// Binary Operators
// ============================================================================

/// The four arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// All operators, in table order
    pub const ALL: [BinaryOp; 4] = [BinaryOp::Add, BinaryOp::Sub, BinaryOp::Mul, BinaryOp::Div];

    /// Operator symbol
    pub const fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// ============================================================================
// Complete Arithmetic Configuration
// ============================================================================

/// Configuration for an [`Arithmetic`](super::Arithmetic) context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArithmeticConfig {
    /// Behaviour of the invalid sentinel
    pub invalid_policy: InvalidPolicy,

    /// Behaviour on overflow
    pub overflow_policy: OverflowPolicy,
}

impl ArithmeticConfig {
    /// Create a new configuration
    pub const fn new(invalid_policy: InvalidPolicy, overflow_policy: OverflowPolicy) -> Self {
        Self {
            invalid_policy,
            overflow_policy,
        }
    }

    /// Builder method: Set the invalid policy
    pub const fn with_invalid_policy(mut self, policy: InvalidPolicy) -> Self {
        self.invalid_policy = policy;
        self
    }

    /// Builder method: Set the overflow policy
    pub const fn with_overflow_policy(mut self, policy: OverflowPolicy) -> Self {
        self.overflow_policy = policy;
        self
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl ArithmeticConfig {
    /// Hardened configuration
    /// - Invalid is absorbing
    /// - Overflow becomes invalid
    pub const fn strict() -> Self {
        Self::new(InvalidPolicy::Absorb, OverflowPolicy::Check)
    }

    /// Legacy-compatible configuration
    /// - Invalid leaks through `pow` and comparisons
    /// - Overflow wraps silently
    pub const fn compatible() -> Self {
        Self::new(InvalidPolicy::Leak, OverflowPolicy::Wrap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_operators() {
        let config = ArithmeticConfig::default();
        assert_eq!(config.invalid_policy, InvalidPolicy::Absorb);
        assert_eq!(config.overflow_policy, OverflowPolicy::Wrap);
    }

    #[test]
    fn test_presets() {
        assert_eq!(
            ArithmeticConfig::strict(),
            ArithmeticConfig::new(InvalidPolicy::Absorb, OverflowPolicy::Check)
        );
        assert_eq!(
            ArithmeticConfig::compatible(),
            ArithmeticConfig::new(InvalidPolicy::Leak, OverflowPolicy::Wrap)
        );
    }

    #[test]
    fn test_builder() {
        let config = ArithmeticConfig::default()
            .with_invalid_policy(InvalidPolicy::Leak)
            .with_overflow_policy(OverflowPolicy::Check);
        assert_eq!(config.invalid_policy, InvalidPolicy::Leak);
        assert_eq!(config.overflow_policy, OverflowPolicy::Check);
    }

    #[test]
    fn test_binary_op_display() {
        let rendered: Vec<String> = BinaryOp::ALL.iter().map(|op| op.to_string()).collect();
        assert_eq!(rendered, ["+", "-", "*", "/"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_serde() {
        let config = ArithmeticConfig::strict();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"invalid_policy":"Absorb","overflow_policy":"Check"}"#);
        let back: ArithmeticConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
