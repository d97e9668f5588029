use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::binary::parse_additive,
    },
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a token stream into a single expression AST.
///
/// This is the entry point for parsing. After the top-level expression is
/// consumed, the current token must be [`TokenKind::Eof`]; anything left
/// over is a syntax error positioned at the offending token. A trailing
/// `)` gets its own message because an unbalanced closing parenthesis is
/// the common cause.
///
/// The parser never backtracks: the grammar is fully determined by one
/// token of lookahead.
///
/// # Parameters
/// - `tokens`: The token vector produced by
///   [`tokenize`](crate::interpreter::lexer::tokenize).
///
/// # Returns
/// The root AST node.
///
/// # Errors
/// - [`ParseError::UnexpectedToken`] if tokens remain after a complete
///   expression.
/// - Propagates any error from the expression rules.
///
/// # Example
/// ```
/// use expreval::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let tokens = tokenize("2 + 3 * 4").unwrap();
/// let ast = parse(&tokens).unwrap();
///
/// assert_eq!(ast.span().start(), (0, 0));
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();

    let expr = parse_expression(&mut iter)?;

    match iter.peek() {
        None => Ok(expr),
        Some(token) => match token.kind {
            TokenKind::Eof => Ok(expr),
            TokenKind::RParen => {
                let (line, col) = token.span.start();
                Err(ParseError::UnexpectedToken { message: "Unexpected ')'".to_string(),
                                                  line,
                                                  col })
            },
            _ => {
                let (line, col) = token.span.start();
                Err(ParseError::UnexpectedToken { message: "Expected '+', '-', '*' or '/'".to_string(),
                                                  line,
                                                  col })
            },
        },
    }
}

/// Parses a full expression.
///
/// Begins at the lowest-precedence level, addition, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_additive(tokens)
}
