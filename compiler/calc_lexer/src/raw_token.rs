//! Raw lexemes recognised by the `logos` lexer, before any context rules

use logos::Logos;

use crate::token::Operator;

/// Raw token type used by the logos lexer.
///
/// A number run is any sequence of digits and `.`; it is validated when the
/// lexer parses it. Blanks are skipped here and never reach the lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum RawToken {
    /// Digits and decimal points, e.g. `12`, `3.5`, `.5`
    #[regex(r"[0-9.]+")]
    Number,

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

    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
}

impl RawToken {
    /// The binary operator this lexeme spells, if any
    pub fn operator(self) -> Option<Operator> {
        match self {
            RawToken::Plus => Some(Operator::Add),
            RawToken::Minus => Some(Operator::Sub),
            RawToken::Star => Some(Operator::Mul),
            RawToken::Slash => Some(Operator::Div),
            _ => None,
        }
    }

    /// Whether this lexeme is one of `+ - * /`
    pub fn is_operator(self) -> bool {
        self.operator().is_some()
    }

    /// Whether a `+`/`-` following this lexeme starts a signed number
    pub fn opens_operand(self) -> bool {
        self.is_operator() || self == RawToken::LeftParen
    }
}

/// Characters skipped between lexemes; must match the `skip` pattern above.
pub(crate) fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | '\x0c')
}
