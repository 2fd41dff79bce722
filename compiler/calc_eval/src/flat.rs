//! Precedence evaluation of a parenthesis-free token sequence.
//!
//! Two left-to-right passes: the first folds `*` and `/` in place, the
//! second folds `+` and `-` over what remains. Both tiers are
//! left-associative.

use calc_lexer::{Operator, Token, TokenKind};

use crate::error::{EvalError, EvalResult};
use crate::trace::{NoTrace, Trace};

/// An element of the sequence after the multiplicative pass
#[derive(Debug, Clone, Copy, PartialEq)]
enum Reduced {
    Number(f64),
    Operator(Operator),
}

/// Evaluate `tokens`, which must not contain parentheses.
pub fn evaluate_flat(tokens: &[Token]) -> EvalResult {
    evaluate_flat_traced(tokens, &mut NoTrace)
}

/// [`evaluate_flat`] reporting each applied operation to `trace`.
pub fn evaluate_flat_traced(tokens: &[Token], trace: &mut dyn Trace) -> EvalResult {
    let reduced = fold_multiplicative(tokens, trace)?;
    fold_additive(&reduced, trace)
}

fn fold_multiplicative(tokens: &[Token], trace: &mut dyn Trace) -> EvalResult<Vec<Reduced>> {
    let mut stack = Vec::with_capacity(tokens.len());
    let mut iter = tokens.iter();

    while let Some(token) = iter.next() {
        match token.kind {
            TokenKind::Number(n) => stack.push(Reduced::Number(finite(n)?)),
            TokenKind::Operator(op) if op.is_multiplicative() => {
                let lhs = match stack.pop() {
                    Some(Reduced::Number(n)) => n,
                    _ => return Err(EvalError::InvalidExpression),
                };
                let rhs = iter
                    .next()
                    .and_then(Token::as_number)
                    .ok_or(EvalError::InvalidExpression)
                    .and_then(finite)?;
                // Also catches -0.0
                if op == Operator::Div && rhs == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                let result = finite(op.apply(lhs, rhs))?;
                trace.folded(op, lhs, rhs, result);
                stack.push(Reduced::Number(result));
            }
            TokenKind::Operator(op) => stack.push(Reduced::Operator(op)),
            TokenKind::OpenParen | TokenKind::CloseParen => {
                return Err(EvalError::InvalidExpression)
            }
        }
    }

    Ok(stack)
}

fn fold_additive(reduced: &[Reduced], trace: &mut dyn Trace) -> EvalResult {
    let mut items = reduced.iter();
    let mut result = match items.next() {
        Some(Reduced::Number(n)) => *n,
        _ => return Err(EvalError::InvalidExpression),
    };

    while let Some(item) = items.next() {
        let (Reduced::Operator(op), Some(Reduced::Number(rhs))) = (item, items.next()) else {
            return Err(EvalError::InvalidExpression);
        };
        let next = finite(op.apply(result, *rhs))?;
        trace.folded(*op, result, *rhs, next);
        result = next;
    }

    Ok(result)
}

/// Literals too long for `f64` and overflowing folds stop here
fn finite(value: f64) -> EvalResult {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NonFiniteResult)
    }
}
