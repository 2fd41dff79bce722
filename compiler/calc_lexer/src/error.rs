//! Lexer error taxonomy

use thiserror::Error;

/// Errors raised while tokenizing an expression.
///
/// Columns are 1-based and count characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// The input is empty or contains only blanks
    #[error("Expression cannot be empty")]
    EmptyExpression,

    /// The first character cannot begin an expression
    #[error("Invalid expression beginning: unexpected '{found}' at column {column}")]
    InvalidStart {
        /// The offending character
        found: char,
        /// Its column
        column: usize,
    },

    /// The last character cannot end an expression
    #[error("Invalid expression ending: unexpected '{found}' at column {column}")]
    InvalidEnd {
        /// The offending character
        found: char,
        /// Its column
        column: usize,
    },

    /// `*` or `/` directly after another operator
    #[error("Invalid expression: '{found}' cannot follow '{previous}' at column {column}")]
    InvalidOperatorSequence {
        /// The operator before the offending one
        previous: char,
        /// The offending operator
        found: char,
        /// Column of the offending operator
        column: usize,
    },

    /// A digit run that is not a number, or a sign with no number after it
    #[error("Invalid number '{literal}' at column {column}")]
    InvalidNumber {
        /// The rejected literal
        literal: String,
        /// Column where the literal starts
        column: usize,
    },

    /// A character outside the expression alphabet
    #[error("Unexpected character '{found}' at column {column}")]
    InvalidCharacter {
        /// The offending character
        found: char,
        /// Its column
        column: usize,
    },
}

impl LexError {
    /// Column the error points at, if it has one
    pub fn column(&self) -> Option<usize> {
        match self {
            LexError::EmptyExpression => None,
            LexError::InvalidStart { column, .. }
            | LexError::InvalidEnd { column, .. }
            | LexError::InvalidOperatorSequence { column, .. }
            | LexError::InvalidNumber { column, .. }
            | LexError::InvalidCharacter { column, .. } => Some(*column),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_display() {
        assert_eq!(
            LexError::EmptyExpression.to_string(),
            "Expression cannot be empty"
        );
        assert_eq!(
            LexError::InvalidOperatorSequence {
                previous: '*',
                found: '/',
                column: 3
            }
            .to_string(),
            "Invalid expression: '/' cannot follow '*' at column 3"
        );
        assert_eq!(
            LexError::InvalidStart {
                found: '*',
                column: 1
            }
            .column(),
            Some(1)
        );
    }
}
