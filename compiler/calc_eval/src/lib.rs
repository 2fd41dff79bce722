//! Arithmetic expression evaluator
//!
//! Evaluates infix expressions over `+ - * /`, parentheses, implicit
//! multiplication and signed numbers:
//!
//! ```
//! assert_eq!(calc_eval::evaluate("2(3+4)"), Ok(14.0));
//! assert_eq!(calc_eval::evaluate("-5+3"), Ok(-2.0));
//! assert!(calc_eval::evaluate("4/0").is_err());
//! ```
//!
//! Evaluation is a pure function of its input. Pass a [`Trace`] to
//! [`evaluate_traced`] to observe intermediate stages.

pub mod config;
pub mod error;
pub mod flat;
pub mod resolver;
pub mod trace;

pub use calc_lexer::{tokenize, LexError, Operator, Span, Token, TokenKind};
pub use config::EvaluatorConfig;
pub use error::{ErrorKind, EvalError, EvalResult};
pub use flat::evaluate_flat;
pub use resolver::resolve_parens;
pub use trace::{LogTrace, NoTrace, RecordingTrace, Trace, TraceEvent};

/// Evaluate `expression` with the default limits.
pub fn evaluate(expression: &str) -> EvalResult {
    Evaluator::default().evaluate(expression)
}

/// Evaluate `expression` with the default limits, reporting to `trace`.
pub fn evaluate_traced(expression: &str, trace: &mut dyn Trace) -> EvalResult {
    Evaluator::default().evaluate_traced(expression, trace)
}

/// An evaluator bound to a set of limits.
///
/// Holds no state between calls and can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    config: EvaluatorConfig,
}

impl Evaluator {
    pub fn new(config: EvaluatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    pub fn evaluate(&self, expression: &str) -> EvalResult {
        self.evaluate_traced(expression, &mut NoTrace)
    }

    /// Tokenize, resolve parentheses and fold what remains.
    pub fn evaluate_traced(&self, expression: &str, trace: &mut dyn Trace) -> EvalResult {
        let len = expression.chars().count();
        if len > self.config.max_expression_len {
            return Err(EvalError::TooLong {
                len,
                limit: self.config.max_expression_len,
            });
        }

        let tokens = tokenize(expression)?;
        trace.tokens(&tokens);

        let depth = resolver::nesting_depth(&tokens);
        if depth > self.config.max_depth {
            return Err(EvalError::TooDeep {
                depth,
                limit: self.config.max_depth,
            });
        }

        let value = resolver::resolve_parens_traced(tokens, trace)?;
        trace.finished(value);
        log::debug!("evaluated {expression:?} = {value}");
        Ok(value)
    }
}
