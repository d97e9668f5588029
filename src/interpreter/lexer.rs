use logos::Logos;

use crate::{error::ParseError, span::Span};

/// Lexer-internal error raised while matching a single token.
///
/// Converted into a positioned [`ParseError`] by [`tokenize`], which knows
/// the byte span of the failed match.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LexError {
    /// The input contained a character no token pattern matches.
    #[default]
    IllegalCharacter,
    /// An integer literal did not fit in an `i64`.
    LiteralTooLarge,
}

/// The token automaton. `TokenKind` is the public face; this enum exists
/// so the derived lexer never has to know about `Eof`, which is appended
/// by [`tokenize`] rather than matched in the input.
///
/// Skippable whitespace is exactly space and tab. A newline is not
/// skippable and lexes as an illegal character, matching the reference
/// grammar this interpreter implements.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(error = LexError)]
#[logos(skip r"[ \t]+")]
enum RawToken {
    /// Real literal tokens, such as `3.14` or `1.` (at most one dot; a
    /// second dot terminates the literal and is not consumed).
    #[regex(r"[0-9]+\.[0-9]*", parse_real)]
    Real(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// The kind of a lexical token, including its literal value where one
/// exists.
///
/// `Equals` is recognized but reserved: no grammar production consumes it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    /// A real (floating-point) literal.
    Real(f64),
    /// An integer literal.
    Integer(i64),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `=` (reserved, never parsed)
    Equals,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// End of input. Appended by [`tokenize`] as the final token of every
    /// stream, with a zero-width span at the position scanning stopped.
    Eof,
}

impl From<RawToken> for TokenKind {
    fn from(raw: RawToken) -> Self {
        match raw {
            RawToken::Real(r) => Self::Real(r),
            RawToken::Integer(n) => Self::Integer(n),
            RawToken::Plus => Self::Plus,
            RawToken::Minus => Self::Minus,
            RawToken::Star => Self::Star,
            RawToken::Slash => Self::Slash,
            RawToken::Equals => Self::Equals,
            RawToken::LParen => Self::LParen,
            RawToken::RParen => Self::RParen,
        }
    }
}

/// A lexical token: a kind (with embedded literal value) plus the source
/// region it covers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    /// What was matched, including the literal value for numbers.
    pub kind: TokenKind,
    /// Where it was matched. Zero-width for single-character tokens and
    /// `Eof`; first digit to one-past-last character for numbers.
    pub span: Span,
}

/// Tokenizes a source string into a vector of positioned tokens.
///
/// Scanning is a single left-to-right pass. The returned vector always ends
/// with exactly one [`TokenKind::Eof`] token and is owned outright by the
/// caller; no lexer state survives the call.
///
/// # Parameters
/// - `source`: A single expression as flat text.
///
/// # Returns
/// The token vector, or the first lexical error encountered.
///
/// # Errors
/// - [`ParseError::IllegalCharacter`] for any character that is not a
///   digit, not one of `+ - * / = ( )`, and not a space or tab. This
///   includes newlines.
/// - [`ParseError::LiteralTooLarge`] for integer literals beyond `i64`.
///
/// # Example
/// ```
/// use expreval::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("1.17 + 9").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            vec![TokenKind::Real(1.17),
///                 TokenKind::Plus,
///                 TokenKind::Integer(9),
///                 TokenKind::Eof]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer(source);
    let mut cursor = PositionCursor::default();

    while let Some(result) = lexer.next() {
        let range = lexer.span();
        match result {
            Ok(raw) => {
                let kind = TokenKind::from(raw);
                let span = match kind {
                    // Number tokens cover their full lexeme.
                    TokenKind::Integer(_) | TokenKind::Real(_) => {
                        let start = cursor.advance_to(source, range.start);
                        let end = cursor.advance_to(source, range.end);
                        Span::new(start, end)
                    },
                    // Single-character tokens are zero-width at their
                    // character's position.
                    _ => {
                        let (line, col) = cursor.advance_to(source, range.start);
                        Span::point(line, col)
                    },
                };
                tokens.push(Token { kind, span });
            },
            Err(LexError::IllegalCharacter) => {
                let (line, col) = cursor.advance_to(source, range.start);
                let character = source[range.start..range.end].chars().next().unwrap_or_default();
                return Err(ParseError::IllegalCharacter { character, line, col });
            },
            Err(LexError::LiteralTooLarge) => {
                let (line, col) = cursor.advance_to(source, range.start);
                return Err(ParseError::LiteralTooLarge { line, col });
            },
        }
    }

    let (line, col) = cursor.advance_to(source, source.len());
    tokens.push(Token { kind: TokenKind::Eof,
                        span: Span::point(line, col), });

    Ok(tokens)
}

/// A running byte-offset to `(line, col)` translation.
///
/// Scanning visits token spans in source order, so each call only walks
/// the text between the previous offset and the requested one rather than
/// the whole prefix.
#[derive(Debug, Default)]
struct PositionCursor {
    offset: usize,
    line:   usize,
    col:    usize,
}

impl PositionCursor {
    /// Advances the cursor to `offset` and returns the 0-indexed
    /// `(line, col)` pair there.
    ///
    /// Columns count characters since the most recent newline. Offsets
    /// must be visited in non-decreasing order and lie on character
    /// boundaries, which holds for every span logos produces.
    fn advance_to(&mut self, source: &str, offset: usize) -> (usize, usize) {
        for character in source[self.offset..offset].chars() {
            if character == '\n' {
                self.line += 1;
                self.col = 0;
            } else {
                self.col += 1;
            }
        }
        self.offset = offset;
        (self.line, self.col)
    }
}

/// Parses a real literal from the current token slice.
fn parse_real(lex: &logos::Lexer<RawToken>) -> Result<f64, LexError> {
    lex.slice().parse().map_err(|_| LexError::LiteralTooLarge)
}

/// Parses an integer literal from the current token slice.
fn parse_integer(lex: &logos::Lexer<RawToken>) -> Result<i64, LexError> {
    lex.slice().parse().map_err(|_| LexError::LiteralTooLarge)
}
