/// A region of source text, bounded by two `(line, col)` positions.
///
/// Lines and columns are 0-indexed. The end position points at the character
/// immediately after the last one covered by the span, so a zero-width span
/// has `start == end`. Spans are computed once when a token or AST node is
/// built and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Line of the first covered character.
    pub start_line: usize,
    /// Column of the first covered character.
    pub start_col:  usize,
    /// Line of the position just past the last covered character.
    pub end_line:   usize,
    /// Column of the position just past the last covered character.
    pub end_col:    usize,
}

impl Span {
    /// Builds a span from two `(line, col)` pairs.
    #[must_use]
    pub const fn new(start: (usize, usize), end: (usize, usize)) -> Self {
        Self { start_line: start.0,
               start_col:  start.1,
               end_line:   end.0,
               end_col:    end.1, }
    }

    /// Builds a zero-width span at a single position.
    ///
    /// Used for single-character tokens and the end-of-input marker.
    #[must_use]
    pub const fn point(line: usize, col: usize) -> Self {
        Self::new((line, col), (line, col))
    }

    /// Combines two spans into one covering both.
    ///
    /// The result starts where `self` starts and ends where `other` ends.
    /// This is how parent AST nodes derive their span from their children.
    ///
    /// # Example
    /// ```
    /// use expreval::span::Span;
    ///
    /// let left = Span::new((0, 0), (0, 1));
    /// let right = Span::new((0, 4), (0, 5));
    ///
    /// assert_eq!(left.join(right), Span::new((0, 0), (0, 5)));
    /// ```
    #[must_use]
    pub const fn join(self, other: Self) -> Self {
        Self::new((self.start_line, self.start_col), (other.end_line, other.end_col))
    }

    /// The `(line, col)` pair where the span starts.
    ///
    /// Errors attached to a node are positioned here.
    #[must_use]
    pub const fn start(self) -> (usize, usize) {
        (self.start_line, self.start_col)
    }
}
