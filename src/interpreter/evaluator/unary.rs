use crate::{
    ast::UnaryOperator,
    interpreter::{evaluator::core::EvalResult, value::Number},
    span::Span,
};

/// Evaluates a unary operation on a value.
///
/// Supported operators:
/// - `Negate`: flips the sign directly, preserving the operand's numeric
///   kind (an integer stays an integer).
/// - `Identity`: passes the operand through unchanged.
///
/// # Parameters
/// - `op`: Unary operator.
/// - `value`: Input value.
/// - `span`: Span of the unary node, used for error reporting.
///
/// # Returns
/// The computed [`Number`] wrapped in [`EvalResult`].
///
/// # Errors
/// Negating `i64::MIN` reports an overflow.
///
/// # Example
/// ```
/// use expreval::{
///     ast::{LiteralValue, UnaryOperator},
///     interpreter::{evaluator::unary::eval_unary, value::{Number, NumberValue}},
///     span::Span,
/// };
///
/// let five = Number::from(LiteralValue::Integer(5));
/// let v = eval_unary(UnaryOperator::Negate, five, Span::default()).unwrap();
///
/// assert_eq!(v.value, NumberValue::Integer(-5));
/// ```
pub fn eval_unary(op: UnaryOperator, value: Number, span: Span) -> EvalResult<Number> {
    let (line, col) = span.start();
    match op {
        UnaryOperator::Negate => value.negated(line, col),
        UnaryOperator::Identity => Ok(value),
    }
}
