use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{binary::eval_binary, unary::eval_unary},
        value::Number,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// [`RuntimeError`] describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression tree to a numeric value.
///
/// This is the entry point for evaluation. Dispatch is an exhaustive match
/// over the three node kinds; operands are evaluated left to right, depth
/// first, and the whole walk stops at the first error. Every result is
/// tagged with the span of the node that produced it (child spans are not
/// retained).
///
/// # Parameters
/// - `expr`: Root of the tree to evaluate.
///
/// # Returns
/// The computed [`Number`].
///
/// # Errors
/// - [`RuntimeError::DivisionByZero`] when a divisor evaluates to zero.
/// - [`RuntimeError::Overflow`] when integer arithmetic overflows.
/// - [`RuntimeError::LiteralTooLarge`] when an integer operand cannot be
///   promoted to a real exactly.
///
/// # Example
/// ```
/// use expreval::interpreter::{
///     evaluator::core::evaluate,
///     lexer::tokenize,
///     parser::core::parse,
///     value::NumberValue,
/// };
///
/// let tokens = tokenize("2 + 3 * 4").unwrap();
/// let ast = parse(&tokens).unwrap();
/// let result = evaluate(&ast).unwrap();
///
/// assert_eq!(result.value, NumberValue::Integer(14));
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<Number> {
    match expr {
        Expr::Literal { value, span } => Ok(Number::from(*value).with_span(*span)),

        Expr::UnaryOp { op, expr, span } => {
            let operand = evaluate(expr)?;
            Ok(eval_unary(*op, operand, *span)?.with_span(*span))
        },

        // `eval_binary` tags its result itself; the unary arm re-tags
        // because `Identity` passes the operand through with its own span.
        Expr::BinaryOp { left, op, right, span } => {
            let left = evaluate(left)?;
            let right = evaluate(right)?;
            eval_binary(*op, left, right, *span)
        },
    }
}
