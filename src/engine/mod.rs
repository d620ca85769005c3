// ============================================================================
// Engine Module
// Policy-driven evaluation of fraction arithmetic
// ============================================================================

mod arithmetic;
mod config;

pub use arithmetic::Arithmetic;
pub use config::{ArithmeticConfig, BinaryOp, InvalidPolicy, OverflowPolicy};
