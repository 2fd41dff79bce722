//! Token types produced by the lexer

use std::fmt;

/// Byte range of a token in the source expression.
///
/// Tokens synthesised by the lexer (the implicit `*`) carry an empty span
/// positioned where the operator was inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// The 0-based byte offset where the token starts
    pub start: usize,
    /// The 0-based byte offset one past the end of the token
    pub end: usize,
}

impl Span {
    /// Create a span covering `start..end`
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Zero-width span at `offset`
    pub fn empty(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    /// Smallest span covering both `self` and `other`
    pub fn to(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }

    /// Length of the span in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers no source text
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(range: std::ops::Range<usize>) -> Self {
        Span::new(range.start, range.end)
    }
}

/// One of the four binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl Operator {
    /// Map an operator character to its operator
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    /// The source character of this operator
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// `*` and `/` bind tighter than `+` and `-`
    pub fn is_multiplicative(self) -> bool {
        matches!(self, Operator::Mul | Operator::Div)
    }

    /// Apply the operator to two operands.
    ///
    /// No zero check is done here; the evaluator rejects a zero divisor
    /// before calling this.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Sub => lhs - rhs,
            Operator::Mul => lhs * rhs,
            Operator::Div => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The classified value of a token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    /// A numeric literal, sign included
    Number(f64),
    /// A binary operator
    Operator(Operator),
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(n) => write!(f, "{n}"),
            TokenKind::Operator(op) => write!(f, "{op}"),
            TokenKind::OpenParen => write!(f, "("),
            TokenKind::CloseParen => write!(f, ")"),
        }
    }
}

/// A token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    /// What the token is
    pub kind: TokenKind,
    /// Where it came from in the source
    pub span: Span,
}

impl Token {
    /// Create a new token
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Create a number token
    pub fn number(value: f64, span: Span) -> Self {
        Self::new(TokenKind::Number(value), span)
    }

    /// Create an operator token
    pub fn operator(op: Operator, span: Span) -> Self {
        Self::new(TokenKind::Operator(op), span)
    }

    /// The numeric value, if this is a number token
    pub fn as_number(&self) -> Option<f64> {
        match self.kind {
            TokenKind::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Whether this token is `(`
    pub fn is_open_paren(&self) -> bool {
        matches!(self.kind, TokenKind::OpenParen)
    }

    /// Whether this token is `)`
    pub fn is_close_paren(&self) -> bool {
        matches!(self.kind, TokenKind::CloseParen)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}
