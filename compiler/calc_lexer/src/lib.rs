//! Arithmetic expression lexer
//!
//! This crate turns a textual infix expression into a sequence of tokens for
//! the evaluator. Besides plain classification it folds leading signs into
//! numbers, inserts the implicit `*` around parentheses and rejects
//! structurally broken input before evaluation starts.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// Trace output that compiles away without the `logging` feature.
macro_rules! lex_trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "logging")]
        log::trace!(target: "calc_lexer", $($arg)*);
    };
}

pub mod error;
pub mod lexer;
pub mod raw_token;
pub mod token;

// Re-export the main types for convenience
pub use error::LexError;
pub use lexer::{tokenize, Lexer};
pub use raw_token::RawToken;
pub use token::{Operator, Span, Token, TokenKind};
