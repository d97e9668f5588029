use expreval::{
    ast::Expr,
    error::Error,
    interpreter::{
        lexer::{TokenKind, tokenize},
        parser::core::parse,
        value::{Number, NumberValue},
    },
    span::Span,
};
use pretty_assertions::assert_eq;

fn eval(src: &str) -> Result<Number, Error> {
    expreval::evaluate_source(src)
}

fn assert_integer(src: &str, expected: i64) {
    match eval(src) {
        Ok(number) => assert_eq!(number.value, NumberValue::Integer(expected), "in `{src}`"),
        Err(e) => panic!("`{src}` failed: {e}"),
    }
}

fn assert_real(src: &str, expected: f64) {
    match eval(src) {
        Ok(number) => assert_eq!(number.value, NumberValue::Real(expected), "in `{src}`"),
        Err(e) => panic!("`{src}` failed: {e}"),
    }
}

fn assert_error(src: &str, expected: &str) {
    match eval(src) {
        Ok(number) => panic!("`{src}` succeeded with {number} but was expected to fail"),
        Err(e) => assert_eq!(e.to_string(), expected, "in `{src}`"),
    }
}

#[test]
fn tokenizes_kinds_and_values() {
    let tokens = tokenize("1.17 + 9").unwrap();
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();

    assert_eq!(kinds,
               vec![TokenKind::Real(1.17),
                    TokenKind::Plus,
                    TokenKind::Integer(9),
                    TokenKind::Eof]);
}

#[test]
fn token_spans_track_columns() {
    let tokens = tokenize("1.17 + 9").unwrap();

    // Number tokens run from their first digit to one past their last
    // character; single-character tokens and EOF are zero-width.
    assert_eq!(tokens[0].span, Span::new((0, 0), (0, 4)));
    assert_eq!(tokens[1].span, Span::point(0, 5));
    assert_eq!(tokens[2].span, Span::new((0, 7), (0, 8)));
    assert_eq!(tokens[3].span, Span::point(0, 8));
}

#[test]
fn basic_arithmetic() {
    assert_integer("1+2", 3);
    assert_integer("7 * 9", 63);
    assert_integer("8 - 5", 3);
    assert_integer("0 * 0", 0);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_integer("2+3*4", 14);
    assert_integer("4*3+2", 14);
    assert_integer("10 - 2 * 3", 4);
}

#[test]
fn grouping_overrides_precedence() {
    assert_integer("(2+3)*4", 20);
    assert_integer("2*(3+4)", 14);
    assert_integer("((1+1))", 2);
}

#[test]
fn subtraction_is_left_associative() {
    assert_integer("8-3-2", 3);
    assert_real("8/2/2", 2.0);
}

#[test]
fn unary_binds_tighter_than_binary() {
    assert_integer("-5+2", -3);
    assert_integer("-5*2", -10);
    assert_integer("+7", 7);
}

#[test]
fn unary_is_right_associative_and_preserves_kind() {
    assert_integer("--5", 5);
    assert_integer("---5", -5);
    assert_real("-2.5", -2.5);
    assert_real("+-1.0", -1.0);
}

#[test]
fn mixed_operands_promote_to_real() {
    assert_real("1.5+2", 3.5);
    assert_real("2*1.5", 3.0);
    assert_real("3.0-1", 2.0);
}

#[test]
fn division_always_promotes() {
    assert_real("4/2", 2.0);
    assert_real("1/2", 0.5);
    assert_real("3.0/1.5", 2.0);
}

#[test]
fn division_by_zero_is_positioned_at_the_node() {
    assert_error("1/0", "Division by zero [0:0]");
    assert_error("1/0.0", "Division by zero [0:0]");
    // The node's span starts at its left operand's start.
    assert_error("2 * (3 / (1 - 1))", "Division by zero [0:5]");
}

#[test]
fn truncated_expression_errors_at_eof() {
    assert_error("1+", "Expected expression [0:2]");
    assert_error("", "Expected expression [0:0]");
    assert_error("2*", "Expected expression [0:2]");
}

#[test]
fn missing_closing_paren_errors_at_found_token() {
    assert_error("(1+2", "Expected ) [0:4]");
    assert_error("(1+2 3", "Expected ) [0:5]");
}

#[test]
fn trailing_tokens_are_rejected() {
    assert_error("1+2)", "Unexpected ')' [0:3]");
    assert_error("1 2", "Expected '+', '-', '*' or '/' [0:2]");
}

#[test]
fn illegal_characters_carry_their_position() {
    assert_error("1 + $", "Illegal character: $ [0:4]");
    assert_error("a", "Illegal character: a [0:0]");
}

#[test]
fn newline_is_not_skippable_whitespace() {
    // Only space and tab skip; a bare newline is an illegal character,
    // as in the reference grammar.
    assert_error("1 +\n2", "Illegal character: \n [0:3]");
    assert_integer("1 +\t2", 3);
}

#[test]
fn second_dot_terminates_a_number() {
    assert_error("1.2.3", "Illegal character: . [0:3]");
    assert_real("1.", 1.0);
    assert_error(".5", "Illegal character: . [0:0]");
}

#[test]
fn equals_is_lexed_but_reserved() {
    let tokens = tokenize("=").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Equals);

    assert_error("=", "Expected expression [0:0]");
    assert_error("1 = 2", "Expected '+', '-', '*' or '/' [0:2]");
}

#[test]
fn integer_overflow_is_reported() {
    assert_error("9223372036854775807 + 1",
                 "Integer overflow while trying to compute result [0:0]");
    assert_error("99999999999999999999", "Literal is too large [0:0]");
}

#[test]
fn unpromotable_integer_operand_is_reported() {
    // 2^53 + 1 fits an i64 but has no exact f64 representation, so any
    // operation that promotes it to a real fails at evaluation time.
    assert_error("9007199254740993 / 1", "Literal is too large [0:0]");
    assert_error("9007199254740993 * 1.0", "Literal is too large [0:0]");
    assert_integer("9007199254740992 + 1", 9007199254740993);
}

#[test]
fn node_spans_cover_their_children() {
    let tokens = tokenize("-5 + 2 * 3").unwrap();
    let ast = parse(&tokens).unwrap();

    // The whole expression spans from the unary minus to the last digit.
    assert_eq!(ast.span(), Span::new((0, 0), (0, 10)));

    let Expr::BinaryOp { left, right, .. } = &ast else {
        panic!("expected a binary node at the root");
    };

    // A binary node starts where its left child starts and ends where its
    // right child ends; a unary node starts at its operator token.
    assert_eq!(ast.span().start(), left.span().start());
    assert_eq!(left.span(), Span::new((0, 0), (0, 2)));
    assert_eq!(right.span(), Span::new((0, 5), (0, 10)));
}

#[test]
fn spans_stay_aligned_across_many_tokens() {
    let tokens = tokenize("1 + 22 + 333 + 4.5").unwrap();

    assert_eq!(tokens[2].span, Span::new((0, 4), (0, 6)));
    assert_eq!(tokens[4].span, Span::new((0, 9), (0, 12)));
    assert_eq!(tokens[6].span, Span::new((0, 15), (0, 18)));
    assert_eq!(tokens[7].span, Span::point(0, 18));
}

#[test]
fn results_carry_the_producing_node_span() {
    let result = eval("(2+3)*4").unwrap();

    // Parentheses direct parsing but do not widen the inner span.
    assert_eq!(result.span, Some(Span::new((0, 1), (0, 7))));

    // Unary results are re-tagged too, including the identity operator.
    assert_eq!(eval("--5").unwrap().span, Some(Span::new((0, 0), (0, 3))));
    assert_eq!(eval("+5").unwrap().span, Some(Span::new((0, 0), (0, 2))));
}

#[test]
fn numbers_display_like_their_kind() {
    assert_eq!(eval("2+3").unwrap().to_string(), "5");
    assert_eq!(eval("4/2").unwrap().to_string(), "2.0");
    assert_eq!(eval("-1.5 * 2").unwrap().to_string(), "-3.0");
    assert_eq!(eval("1/3").unwrap().to_string(), (1.0_f64 / 3.0).to_string());
}
