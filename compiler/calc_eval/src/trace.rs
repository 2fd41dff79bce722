//! Optional observation of intermediate evaluation stages.
//!
//! Evaluation is silent unless a [`Trace`] is passed in. [`LogTrace`]
//! forwards every stage to the `log` facade, [`RecordingTrace`] keeps them
//! in memory.

use std::fmt;

use calc_lexer::{Operator, Token};

/// Hook notified as an evaluation progresses.
///
/// All methods default to doing nothing.
pub trait Trace {
    /// The lexer produced `tokens`
    fn tokens(&mut self, _tokens: &[Token]) {}

    /// The parenthesised `group` reduced to `value`
    fn group_resolved(&mut self, _group: &[Token], _value: f64) {}

    /// One binary operation was applied
    fn folded(&mut self, _op: Operator, _lhs: f64, _rhs: f64, _result: f64) {}

    /// Evaluation produced its final value
    fn finished(&mut self, _value: f64) {}
}

/// Ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTrace;

impl Trace for NoTrace {}

/// Writes every event to the `calc_eval` log target.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTrace;

impl Trace for LogTrace {
    fn tokens(&mut self, tokens: &[Token]) {
        log::debug!(target: "calc_eval", "tokens: {}", render(tokens));
    }

    fn group_resolved(&mut self, group: &[Token], value: f64) {
        log::debug!(target: "calc_eval", "resolved ({}) = {value}", render(group));
    }

    fn folded(&mut self, op: Operator, lhs: f64, rhs: f64, result: f64) {
        log::trace!(target: "calc_eval", "{lhs} {op} {rhs} = {result}");
    }

    fn finished(&mut self, value: f64) {
        log::debug!(target: "calc_eval", "result: {value}");
    }
}

/// A recorded evaluation stage.
#[derive(Debug, Clone, PartialEq)]
pub enum TraceEvent {
    Tokens(Vec<Token>),
    GroupResolved {
        group: Vec<Token>,
        value: f64,
    },
    Folded {
        op: Operator,
        lhs: f64,
        rhs: f64,
        result: f64,
    },
    Finished(f64),
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::Tokens(tokens) => write!(f, "tokens: {}", render(tokens)),
            TraceEvent::GroupResolved { group, value } => {
                write!(f, "group: ({}) = {value}", render(group))
            }
            TraceEvent::Folded {
                op,
                lhs,
                rhs,
                result,
            } => write!(f, "fold: {lhs} {op} {rhs} = {result}"),
            TraceEvent::Finished(value) => write!(f, "result: {value}"),
        }
    }
}

/// Collects events in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingTrace {
    events: Vec<TraceEvent>,
}

impl RecordingTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<TraceEvent> {
        self.events
    }
}

impl Trace for RecordingTrace {
    fn tokens(&mut self, tokens: &[Token]) {
        self.events.push(TraceEvent::Tokens(tokens.to_vec()));
    }

    fn group_resolved(&mut self, group: &[Token], value: f64) {
        self.events.push(TraceEvent::GroupResolved {
            group: group.to_vec(),
            value,
        });
    }

    fn folded(&mut self, op: Operator, lhs: f64, rhs: f64, result: f64) {
        self.events.push(TraceEvent::Folded {
            op,
            lhs,
            rhs,
            result,
        });
    }

    fn finished(&mut self, value: f64) {
        self.events.push(TraceEvent::Finished(value));
    }
}

fn render(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
