/// Numeric conversion helpers.
///
/// Safe conversion from integers to floating-point values without silent
/// data loss. Used by the evaluator when an integer operand is promoted to
/// a real.
pub mod num;
