//! Parenthesis resolution.
//!
//! The rightmost `(` always opens an innermost group: any `(` inside it
//! would lie further right. Each pass evaluates that group with the flat
//! evaluator and splices its value back in place of the whole `(...)` span.

use calc_lexer::Token;

use crate::error::{EvalError, EvalResult};
use crate::flat::evaluate_flat_traced;
use crate::trace::{NoTrace, Trace};

/// Resolve every parenthesised group in `tokens`, then evaluate the rest.
pub fn resolve_parens(tokens: Vec<Token>) -> EvalResult {
    resolve_parens_traced(tokens, &mut NoTrace)
}

pub fn resolve_parens_traced(mut tokens: Vec<Token>, trace: &mut dyn Trace) -> EvalResult {
    while let Some(open) = tokens.iter().rposition(Token::is_open_paren) {
        let close = tokens[open + 1..]
            .iter()
            .position(Token::is_close_paren)
            .map(|offset| open + 1 + offset)
            .ok_or(EvalError::MismatchedParentheses)?;

        let group = &tokens[open + 1..close];
        if group.is_empty() {
            return Err(EvalError::EmptyParenGroup);
        }
        let value = evaluate_flat_traced(group, trace)?;
        trace.group_resolved(group, value);

        let span = tokens[open].span.to(tokens[close].span);
        tokens.splice(open..=close, std::iter::once(Token::number(value, span)));
    }

    // Every `(` is gone, so any `)` left over has no partner
    if tokens.iter().any(Token::is_close_paren) {
        return Err(EvalError::MismatchedParentheses);
    }

    evaluate_flat_traced(&tokens, trace)
}

/// Deepest parenthesis nesting in `tokens`.
///
/// Unbalanced closers are ignored here; the resolver reports them.
pub fn nesting_depth(tokens: &[Token]) -> usize {
    let mut depth = 0usize;
    let mut deepest = 0;
    for token in tokens {
        if token.is_open_paren() {
            depth += 1;
            deepest = deepest.max(depth);
        } else if token.is_close_paren() {
            depth = depth.saturating_sub(1);
        }
    }
    deepest
}
