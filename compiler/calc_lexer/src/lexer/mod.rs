//! Lexer implementation for arithmetic expressions
//! Applies the context rules (signed numbers, implicit multiplication,
//! operator adjacency) on top of the raw logos lexemes

use logos::Logos;

use crate::error::LexError;
use crate::raw_token::{is_blank, RawToken};
use crate::token::{Operator, Span, Token, TokenKind};

/// Tokenize `source` in one pass.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}

/// The main lexer struct that holds the state of the lexing process
pub struct Lexer<'a> {
    /// The expression being lexed
    source: &'a str,
    /// The inner Logos lexer
    inner: logos::Lexer<'a, RawToken>,
    /// Tokens emitted so far
    tokens: Vec<Token>,
    /// The previous significant lexeme; blanks never land here
    previous: Option<RawToken>,
    /// A `+`/`-` waiting to be folded into the number that follows it
    pending_sign: Option<Span>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given expression
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            inner: RawToken::lexer(source),
            tokens: Vec::new(),
            previous: None,
            pending_sign: None,
        }
    }

    /// Run the lexer to completion.
    ///
    /// The first error aborts tokenization; no partial sequence is returned.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        self.check_bounds()?;

        while let Some(lexeme) = self.inner.next() {
            let span = Span::from(self.inner.span());
            let raw = match lexeme {
                Ok(raw) => raw,
                Err(()) => {
                    return Err(LexError::InvalidCharacter {
                        found: self.char_at(span.start),
                        column: self.column(span.start),
                    })
                }
            };
            lex_trace!("lexeme {:?} {:?} at {:?}", raw, self.inner.slice(), span);
            self.lex(raw, span)?;
            self.previous = Some(raw);
        }

        self.reject_dangling_sign()?;

        lex_trace!("tokens {:?}", self.tokens);
        Ok(self.tokens)
    }

    /// Validate the first and last significant characters.
    fn check_bounds(&self) -> Result<(), LexError> {
        let head = self.source.trim_start_matches(is_blank);
        let Some(first) = head.chars().next() else {
            return Err(LexError::EmptyExpression);
        };
        if !(is_number_char(first) || matches!(first, '+' | '-' | '(')) {
            return Err(LexError::InvalidStart {
                found: first,
                column: self.column(self.source.len() - head.len()),
            });
        }

        let tail = self.source.trim_end_matches(is_blank);
        if let Some(last) = tail.chars().next_back() {
            if !(is_number_char(last) || last == ')') {
                return Err(LexError::InvalidEnd {
                    found: last,
                    column: self.column(tail.len() - last.len_utf8()),
                });
            }
        }

        Ok(())
    }

    fn lex(&mut self, raw: RawToken, span: Span) -> Result<(), LexError> {
        match raw {
            RawToken::Number => self.push_number(span),
            RawToken::Plus | RawToken::Minus => {
                self.reject_dangling_sign()?;
                if self.previous.map_or(true, RawToken::opens_operand) {
                    self.pending_sign = Some(span);
                } else {
                    self.push_operator(raw, span);
                }
                Ok(())
            }
            RawToken::Star | RawToken::Slash => {
                if let Some(previous) = self.previous.and_then(RawToken::operator) {
                    return Err(LexError::InvalidOperatorSequence {
                        previous: previous.symbol(),
                        found: self.char_at(span.start),
                        column: self.column(span.start),
                    });
                }
                self.push_operator(raw, span);
                Ok(())
            }
            RawToken::LeftParen => {
                self.reject_dangling_sign()?;
                if matches!(
                    self.previous,
                    Some(RawToken::Number) | Some(RawToken::RightParen)
                ) {
                    lex_trace!("implicit multiplication before '(' at {}", span.start);
                    self.tokens
                        .push(Token::operator(Operator::Mul, Span::empty(span.start)));
                }
                self.tokens.push(Token::new(TokenKind::OpenParen, span));
                Ok(())
            }
            RawToken::RightParen => {
                self.reject_dangling_sign()?;
                self.tokens.push(Token::new(TokenKind::CloseParen, span));
                Ok(())
            }
        }
    }

    /// Parse a number run, folding in a pending sign.
    fn push_number(&mut self, span: Span) -> Result<(), LexError> {
        let span = match self.pending_sign.take() {
            // The sign only binds to a number written right after it
            Some(sign) if sign.end == span.start => sign.to(span),
            Some(sign) => return Err(self.invalid_number(sign)),
            None => span,
        };

        let literal = &self.source[span.start..span.end];
        let value: f64 = literal.parse().map_err(|_| self.invalid_number(span))?;

        if self.previous == Some(RawToken::RightParen) {
            lex_trace!("implicit multiplication after ')' at {}", span.start);
            self.tokens
                .push(Token::operator(Operator::Mul, Span::empty(span.start)));
        }
        self.tokens.push(Token::number(value, span));
        Ok(())
    }

    fn push_operator(&mut self, raw: RawToken, span: Span) {
        if let Some(op) = raw.operator() {
            self.tokens.push(Token::operator(op, span));
        }
    }

    /// A sign that was not followed by a number is an invalid literal.
    fn reject_dangling_sign(&mut self) -> Result<(), LexError> {
        match self.pending_sign.take() {
            Some(sign) => Err(self.invalid_number(sign)),
            None => Ok(()),
        }
    }

    fn invalid_number(&self, span: Span) -> LexError {
        LexError::InvalidNumber {
            literal: self.source[span.start..span.end].to_string(),
            column: self.column(span.start),
        }
    }

    fn char_at(&self, offset: usize) -> char {
        self.source[offset..].chars().next().unwrap_or('\0')
    }

    /// 1-based character column of a byte offset
    fn column(&self, offset: usize) -> usize {
        self.source[..offset].chars().count() + 1
    }
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

// Include the test module
#[cfg(test)]
mod tests;
