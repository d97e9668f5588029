use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{Number, NumberValue},
    },
    span::Span,
};

/// Evaluates a binary arithmetic operation.
///
/// Promotion rules:
///
/// | operator | Integer ⊕ Integer | any operand Real |
/// |----------|-------------------|------------------|
/// | `+ - *`  | Integer           | Real             |
/// | `/`      | Real (always)     | Real             |
///
/// Division always promotes both operands and yields a real, even when
/// both operands are integers that divide evenly. Integer arithmetic is
/// checked; a divisor of zero is checked explicitly rather than left to
/// surface as a machine fault.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `span`: Span of the binary node, used for error reporting.
///
/// # Returns
/// An [`EvalResult`] containing the computed [`Number`].
///
/// # Errors
/// - [`RuntimeError::DivisionByZero`] if `op` is `Div` and `right` is zero.
/// - [`RuntimeError::Overflow`] if integer `+`, `-` or `*` overflows.
/// - [`RuntimeError::LiteralTooLarge`] if an integer operand cannot be
///   promoted to a real exactly.
///
/// # Example
/// ```
/// use expreval::{
///     ast::{BinaryOperator, LiteralValue},
///     interpreter::{evaluator::binary::eval_binary, value::{Number, NumberValue}},
///     span::Span,
/// };
///
/// let four = Number::from(LiteralValue::Integer(4));
/// let two = Number::from(LiteralValue::Integer(2));
///
/// let result = eval_binary(BinaryOperator::Div, four, two, Span::default()).unwrap();
/// assert_eq!(result.value, NumberValue::Real(2.0));
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: Number,
                   right: Number,
                   span: Span)
                   -> EvalResult<Number> {
    use BinaryOperator::{Add, Div, Mul, Sub};

    let (line, col) = span.start();

    // Division never stays integral; promote before the operand-kind
    // check so 4 / 2 yields 2.0.
    if let Some((a, b)) = left.both_integer(right)
       && !matches!(op, Div)
    {
        let value = match op {
            Add => a.checked_add(b),
            Sub => a.checked_sub(b),
            Mul => a.checked_mul(b),
            Div => unreachable!(),
        };
        let value = value.ok_or(RuntimeError::Overflow { line, col })?;
        return Ok(Number { value: NumberValue::Integer(value),
                           span:  Some(span), });
    }

    let a = left.as_real(line, col)?;
    let b = right.as_real(line, col)?;

    let value = match op {
        Add => a + b,
        Sub => a - b,
        Mul => a * b,
        Div => {
            if b == 0.0 {
                return Err(RuntimeError::DivisionByZero { line, col });
            }
            a / b
        },
    };

    Ok(Number { value: NumberValue::Real(value),
                span:  Some(span), })
}
