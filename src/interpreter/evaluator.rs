/// Core evaluation logic.
///
/// Contains the `evaluate` entry point dispatching over the three AST node
/// kinds, and the shared `EvalResult` alias.
pub mod core;

/// Unary operator evaluation.
///
/// Sign flip and identity, preserving the operand's numeric kind.
pub mod unary;

/// Binary operator evaluation.
///
/// Arithmetic with integer/real promotion, checked integer operations, and
/// the division-by-zero check.
pub mod binary;
