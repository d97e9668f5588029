/// Core parsing entry points.
///
/// Contains the `parse` entry point, the `parse_expression` rule, and the
/// shared `ParseResult` alias.
pub mod core;

/// Binary operator parsing.
///
/// Implements the two left-associative precedence levels (`+`/`-` and
/// `*`/`/`) on top of a shared combinator.
pub mod binary;

/// Unary and primary parsing.
///
/// Handles prefix sign operators, numeric literals, and parenthesized
/// grouping.
pub mod unary;
