use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_assoc(tokens,
                     &[BinaryOperator::Add, BinaryOperator::Sub],
                     parse_multiplicative)
}

/// Parses multiplication and division expressions.
///
/// Handles left-associative binary operators: `*` and `/`.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// A binary expression tree combining unary-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_left_assoc(tokens,
                     &[BinaryOperator::Mul, BinaryOperator::Div],
                     parse_unary)
}

/// Shared left-associative binary combinator.
///
/// Parses one operand via `sub_rule`, then folds further operands into a
/// left-leaning tree while the current token maps to an operator in `ops`:
/// `a - b - c` becomes `(a - b) - c`. A node's span runs from its left
/// operand's start to its right operand's end, computed at construction.
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `ops`: The operator set accepted at this precedence level.
/// - `sub_rule`: Parser for the next-higher precedence level.
///
/// # Returns
/// The folded expression tree.
fn parse_left_assoc<'a, I>(tokens: &mut Peekable<I>,
                           ops: &[BinaryOperator],
                           sub_rule: fn(&mut Peekable<I>) -> ParseResult<Expr>)
                           -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = sub_rule(tokens)?;
    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token.kind)
           && ops.contains(&op)
        {
            tokens.next();
            let right = sub_rule(tokens)?;
            let span = left.span().join(right.span());
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    span };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token kind to its binary operator, if it is one.
const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
