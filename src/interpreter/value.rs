use crate::{
    ast::LiteralValue,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    span::Span,
    util::num::i64_to_f64_checked,
};

/// The numeric payload of a [`Number`].
///
/// The integer/real distinction established by the tokenizer is preserved
/// through evaluation: `+`, `-` and `*` stay integral when both operands
/// are integral, while division and any real operand promote the result to
/// a real.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberValue {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A 64-bit floating-point number.
    Real(f64),
}

/// A runtime numeric value.
///
/// Carries an optional span inherited from the AST node that produced it.
/// The span is used only for diagnostics; it takes no part in further
/// computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Number {
    /// The numeric value.
    pub value: NumberValue,
    /// Source region of the node that produced this value.
    pub span:  Option<Span>,
}

impl From<LiteralValue> for Number {
    fn from(literal: LiteralValue) -> Self {
        let value = match literal {
            LiteralValue::Integer(n) => NumberValue::Integer(n),
            LiteralValue::Real(r) => NumberValue::Real(r),
        };
        Self { value, span: None }
    }
}

impl Number {
    /// Returns `self` tagged with the given span.
    ///
    /// Called by the evaluator so that every result carries the span of
    /// the node that produced it; any span inherited from a child node is
    /// replaced.
    #[must_use]
    pub const fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Flips the sign of the value, preserving its numeric kind.
    ///
    /// # Errors
    /// Returns [`RuntimeError::Overflow`] for `i64::MIN`, the one integer
    /// with no representable negation.
    ///
    /// # Parameters
    /// - `line`, `col`: Position used for error reporting.
    ///
    /// # Example
    /// ```
    /// use expreval::{
    ///     ast::LiteralValue,
    ///     interpreter::value::{Number, NumberValue},
    /// };
    ///
    /// let five = Number::from(LiteralValue::Integer(5));
    /// let negated = five.negated(0, 0).unwrap();
    ///
    /// assert_eq!(negated.value, NumberValue::Integer(-5));
    /// ```
    pub fn negated(self, line: usize, col: usize) -> EvalResult<Self> {
        let value = match self.value {
            NumberValue::Integer(n) => {
                NumberValue::Integer(n.checked_neg()
                                      .ok_or(RuntimeError::Overflow { line, col })?)
            },
            NumberValue::Real(r) => NumberValue::Real(-r),
        };
        Ok(Self { value, span: self.span })
    }

    /// Converts the value to an `f64`.
    ///
    /// For integers, conversion fails if the value cannot be represented
    /// as an `f64` exactly.
    ///
    /// # Errors
    /// Returns [`RuntimeError::LiteralTooLarge`] for integers beyond
    /// `2^53 - 1` in absolute value.
    ///
    /// # Parameters
    /// - `line`, `col`: Position used for error reporting.
    pub fn as_real(self, line: usize, col: usize) -> EvalResult<f64> {
        match self.value {
            NumberValue::Real(r) => Ok(r),
            NumberValue::Integer(n) => {
                i64_to_f64_checked(n, RuntimeError::LiteralTooLarge { line, col })
            },
        }
    }

    /// Whether both this value and `other` are integers.
    ///
    /// Decides whether `+`, `-` and `*` stay in integer arithmetic or
    /// promote to reals.
    #[must_use]
    pub const fn both_integer(self, other: Self) -> Option<(i64, i64)> {
        match (self.value, other.value) {
            (NumberValue::Integer(a), NumberValue::Integer(b)) => Some((a, b)),
            _ => None,
        }
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.value {
            NumberValue::Integer(n) => write!(f, "{n}"),
            NumberValue::Real(r) => {
                // `{}` on an f64 drops the trailing ".0"; a real always
                // prints with a decimal point.
                if r.is_finite() && r == r.trunc() {
                    write!(f, "{r:.1}")
                } else {
                    write!(f, "{r}")
                }
            },
        }
    }
}
