//! Request handling for the calculate endpoint.
//!
//! Maps a JSON request body `{"expression": "..."}` to a status code and a
//! JSON response body. Transport is left to the caller; nothing here does
//! I/O.

use std::panic::{self, AssertUnwindSafe};

use calc_eval::{ErrorKind, EvalResult, Evaluator};
use serde::Serialize;
use serde_json::Value as JsonValue;

/// Message for bodies without a string `expression` field.
pub const INVALID_REQUEST_MESSAGE: &str = "Invalid or missing expression";

/// Message for failures that are not the client's fault.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_INTERNAL_ERROR: u16 = 500;

/// JSON body of a response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Success {
        result: f64,
    },
    Failure {
        error: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        kind: Option<ErrorKind>,
    },
}

/// A status code with its body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub status: u16,
    pub body: ResponseBody,
}

impl Response {
    pub fn ok(result: f64) -> Self {
        Self {
            status: STATUS_OK,
            body: ResponseBody::Success { result },
        }
    }

    pub fn bad_request<S: Into<String>>(error: S, kind: Option<ErrorKind>) -> Self {
        Self {
            status: STATUS_BAD_REQUEST,
            body: ResponseBody::Failure {
                error: error.into(),
                kind,
            },
        }
    }

    pub fn internal_error() -> Self {
        Self {
            status: STATUS_INTERNAL_ERROR,
            body: ResponseBody::Failure {
                error: INTERNAL_ERROR_MESSAGE.to_string(),
                kind: None,
            },
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The body as a JSON string
    pub fn body_json(&self) -> String {
        // Serializing these plain structs cannot fail
        serde_json::to_string(&self.body).unwrap_or_else(|_| {
            format!(r#"{{"error":"{INTERNAL_ERROR_MESSAGE}"}}"#)
        })
    }
}

/// Handle a raw request body with the default evaluator.
pub fn handle_request(body: &str) -> Response {
    handle_request_with(&Evaluator::default(), body)
}

/// Handle a raw request body.
pub fn handle_request_with(evaluator: &Evaluator, body: &str) -> Response {
    match extract_expression(body) {
        Some(expression) => respond(evaluator, &expression),
        None => {
            log::warn!("rejected request body: {INVALID_REQUEST_MESSAGE}");
            Response::bad_request(INVALID_REQUEST_MESSAGE, None)
        }
    }
}

/// Evaluate an already extracted expression.
///
/// Evaluation errors become 400 responses. A panic becomes a 500 so it can
/// never be mistaken for an input error.
pub fn respond(evaluator: &Evaluator, expression: &str) -> Response {
    respond_with(expression, || evaluator.evaluate(expression))
}

fn respond_with<F>(expression: &str, evaluate: F) -> Response
where
    F: FnOnce() -> EvalResult,
{
    match panic::catch_unwind(AssertUnwindSafe(evaluate)) {
        Ok(Ok(result)) => Response::ok(result),
        Ok(Err(err)) => {
            log::info!("Calculation error: {err}");
            Response::bad_request(err.to_string(), Some(err.kind()))
        }
        Err(_) => {
            log::error!("evaluation of {expression:?} panicked");
            Response::internal_error()
        }
    }
}

/// The `expression` field, if the body is a JSON object holding a string there.
fn extract_expression(body: &str) -> Option<String> {
    let value: JsonValue = serde_json::from_str(body).ok()?;
    value.get("expression")?.as_str().map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn success_body_shape() {
        assert_eq!(Response::ok(14.0).body_json(), r#"{"result":14.0}"#);
    }

    #[test]
    fn failure_body_shape() {
        let response = Response::bad_request("Division by zero", Some(ErrorKind::DivisionByZero));
        assert_eq!(
            response.body_json(),
            r#"{"error":"Division by zero","kind":"DivisionByZero"}"#
        );
        assert_eq!(
            Response::bad_request(INVALID_REQUEST_MESSAGE, None).body_json(),
            r#"{"error":"Invalid or missing expression"}"#
        );
    }

    #[test]
    fn internal_error_body_shape() {
        let response = Response::internal_error();
        assert_eq!(response.status, STATUS_INTERNAL_ERROR);
        assert!(!response.is_success());
        assert_eq!(response.body_json(), r#"{"error":"Internal server error"}"#);
    }

    #[test]
    fn panicking_evaluation_is_an_internal_error() {
        let response = respond_with("1+1", || panic!("evaluator bug"));
        assert_eq!(response, Response::internal_error());
    }

    #[test]
    fn evaluation_outcomes_map_to_status() {
        assert_eq!(respond_with("2", || Ok(2.0)), Response::ok(2.0));
        let response = respond_with("4/0", || Err(calc_eval::EvalError::DivisionByZero));
        assert_eq!(response.status, STATUS_BAD_REQUEST);
        assert_eq!(
            response.body_json(),
            r#"{"error":"Division by zero","kind":"DivisionByZero"}"#
        );
    }

    #[test]
    fn expression_must_be_a_string() {
        assert_eq!(extract_expression(r#"{"expression":"1+1"}"#), Some("1+1".into()));
        assert_eq!(extract_expression(r#"{"expression":12}"#), None);
        assert_eq!(extract_expression(r#"{"expression":null}"#), None);
        assert_eq!(extract_expression(r#"{"expr":"1"}"#), None);
        assert_eq!(extract_expression(r#"["1+1"]"#), None);
        assert_eq!(extract_expression("not json"), None);
    }
}
