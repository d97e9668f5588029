use crate::span::Span;

/// Represents a literal value in an expression.
///
/// `LiteralValue` covers the raw constants that can appear directly in source
/// text. The tokenizer decides the kind: a literal with a decimal point is a
/// `Real`, one without is an `Integer`. The distinction is preserved through
/// evaluation, where it drives numeric promotion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Real(f64),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` is a closed set of three variants; the evaluator dispatches over
/// them with an exhaustive match, so an unhandled node kind is a compile
/// error rather than a runtime surprise.
///
/// Every variant carries the span it covers in the source text:
/// - a literal's span equals its token's span,
/// - a unary node spans from its operator token to its operand's end,
/// - a binary node spans from its left operand's start to its right
///   operand's end.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Source region of the literal token.
        span:  Span,
    },
    /// A unary operation (sign prefix).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Source region from the operator to the operand's end.
        span: Span,
    },
    /// A binary operation (addition, subtraction, multiplication, division).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Source region covering both operands.
        span:  Span,
    },
}

impl Expr {
    /// Gets the source span from `self`.
    ///
    /// # Example
    /// ```
    /// use expreval::{
    ///     ast::{Expr, LiteralValue},
    ///     span::Span,
    /// };
    ///
    /// let expr = Expr::Literal { value: LiteralValue::Integer(7),
    ///                            span:  Span::new((0, 0), (0, 1)), };
    ///
    /// assert_eq!(expr.span(), Span::new((0, 0), (0, 1)));
    /// ```
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Literal { span, .. }
            | Self::UnaryOp { span, .. }
            | Self::BinaryOp { span, .. } => *span,
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Sign-preserving prefix plus (e.g. `+x`); evaluates to its operand.
    Identity,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Negate => "-",
            Self::Identity => "+",
        };
        write!(f, "{operator}")
    }
}
