use std::fmt;

use calc_lexer::LexError;
use thiserror::Error;

/// Result type for evaluation
pub type EvalResult<T = f64> = Result<T, EvalError>;

/// Errors that can occur while evaluating an expression.
///
/// Every error is terminal for the call that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The expression failed to tokenize
    #[error(transparent)]
    Lex(#[from] LexError),

    /// A `(` without a following `)`, or a `)` without a preceding `(`
    #[error("Mismatched parentheses")]
    MismatchedParentheses,

    /// `()` with nothing inside
    #[error("Empty parentheses: '()' must contain an expression")]
    EmptyParenGroup,

    /// The right operand of `/` was zero
    #[error("Division by zero")]
    DivisionByZero,

    /// Operators and operands do not alternate
    #[error("Invalid expression")]
    InvalidExpression,

    /// A literal or an intermediate result does not fit in an `f64`
    #[error("Result is not a finite number")]
    NonFiniteResult,

    /// The input exceeds the configured length
    #[error("Expression is too long: {len} characters exceeds the limit of {limit}")]
    TooLong { len: usize, limit: usize },

    /// Parentheses nest deeper than the configured depth
    #[error("Parentheses nested too deeply: depth {depth} exceeds the limit of {limit}")]
    TooDeep { depth: usize, limit: usize },
}

impl EvalError {
    /// The flat error kind, as reported to callers
    pub fn kind(&self) -> ErrorKind {
        match self {
            EvalError::Lex(err) => match err {
                LexError::EmptyExpression => ErrorKind::EmptyExpression,
                LexError::InvalidStart { .. } => ErrorKind::InvalidStart,
                LexError::InvalidEnd { .. } => ErrorKind::InvalidEnd,
                LexError::InvalidOperatorSequence { .. } => ErrorKind::InvalidOperatorSequence,
                LexError::InvalidNumber { .. } | LexError::InvalidCharacter { .. } => {
                    ErrorKind::InvalidExpression
                }
            },
            EvalError::MismatchedParentheses => ErrorKind::MismatchedParentheses,
            EvalError::EmptyParenGroup => ErrorKind::EmptyParenGroup,
            EvalError::DivisionByZero => ErrorKind::DivisionByZero,
            EvalError::InvalidExpression
            | EvalError::NonFiniteResult
            | EvalError::TooLong { .. }
            | EvalError::TooDeep { .. } => ErrorKind::InvalidExpression,
        }
    }
}

/// The error taxonomy without payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    EmptyExpression,
    InvalidStart,
    InvalidEnd,
    InvalidOperatorSequence,
    MismatchedParentheses,
    EmptyParenGroup,
    DivisionByZero,
    InvalidExpression,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
