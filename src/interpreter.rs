/// The lexer module tokenizes source text for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a vector of
/// positioned tokens: numeric literals, operators, and parentheses, each
/// carrying a 0-indexed line/column span. This is the first stage of the
/// pipeline.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind and span.
/// - Distinguishes integer from real literals.
/// - Reports illegal characters with their exact position.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs a single expression AST by recursive descent, encoding
/// operator precedence in its rule hierarchy.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Enforces precedence, associativity, and balanced parentheses.
/// - Reports syntax errors with the offending token's position.
pub mod parser;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST and produces a numeric value, applying the
/// promotion rules between integers and reals and checking arithmetic that
/// can fail.
///
/// # Responsibilities
/// - Evaluates the three AST node kinds with an exhaustive match.
/// - Promotes integers to reals where an operand or the operator demands it.
/// - Reports runtime errors such as division by zero.
pub mod evaluator;
/// The value module defines the runtime data type for evaluation.
///
/// Declares the `Number` type produced by the evaluator: a tagged integer
/// or real, carrying the span of the node that produced it for
/// diagnostics.
pub mod value;
