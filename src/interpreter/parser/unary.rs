use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operators `-` (negation) and `+` (identity). Unary
/// operators are right-associative, so `--5` parses as `-(-5)`, and they
/// bind tighter than any binary operator because this rule recurses into
/// itself before reaching the binary levels.
///
/// If no prefix operator is present, the function delegates to
/// [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := ("+" | "-") unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression.
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let prefix = match tokens.peek() {
        Some(token) if token.kind == TokenKind::Minus => Some((UnaryOperator::Negate, token.span)),
        Some(token) if token.kind == TokenKind::Plus => Some((UnaryOperator::Identity, token.span)),
        _ => None,
    };

    if let Some((op, op_span)) = prefix {
        tokens.next();
        let expr = parse_unary(tokens)?;
        let span = op_span.join(expr.span());
        Ok(Expr::UnaryOp { op,
                           expr: Box::new(expr),
                           span })
    } else {
        parse_primary(tokens)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the grammar:
/// - integer and real literals
/// - parenthesized expressions
///
/// Grammar:
/// ```text
///     primary := INT
///              | FLOAT
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
///
/// # Returns
/// The parsed primary [`Expr`].
///
/// # Errors
/// - [`ParseError::ExpectedClosingParen`] if a grouping is not closed,
///   positioned at whatever token was found instead.
/// - [`ParseError::UnexpectedToken`] if no production matches the current
///   token. This includes `Eof` (a truncated expression such as `1+`) and
///   the reserved `=` token.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    match tokens.peek() {
        Some(token) => match token.kind {
            TokenKind::Integer(value) => {
                let span = token.span;
                tokens.next();
                Ok(Expr::Literal { value: LiteralValue::Integer(value),
                                   span })
            },
            TokenKind::Real(value) => {
                let span = token.span;
                tokens.next();
                Ok(Expr::Literal { value: LiteralValue::Real(value),
                                   span })
            },
            TokenKind::LParen => {
                tokens.next();
                parse_grouping(tokens)
            },
            _ => {
                let (line, col) = token.span.start();
                Err(ParseError::UnexpectedToken { message: "Expected expression".to_string(),
                                                  line,
                                                  col })
            },
        },
        None => Err(ParseError::UnexpectedToken { message: "Expected expression".to_string(),
                                                  line:    0,
                                                  col:     0, }),
    }
}

/// Parses the remainder of a parenthesized grouping, after the `(` has
/// been consumed.
///
/// The grouping re-enters the full expression grammar and must be closed
/// by a `)`. The inner expression keeps its own span; the parentheses do
/// not widen it (they only direct parsing).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let expr = parse_expression(tokens)?;

    match tokens.peek() {
        Some(token) if token.kind == TokenKind::RParen => {
            tokens.next();
            Ok(expr)
        },
        Some(token) => {
            let (line, col) = token.span.start();
            Err(ParseError::ExpectedClosingParen { line, col })
        },
        None => Err(ParseError::ExpectedClosingParen { line: 0, col: 0 }),
    }
}
