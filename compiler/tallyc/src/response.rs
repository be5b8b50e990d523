//! HTTP response contract.
//!
//! The transport layer is not part of this workspace, but its contract is:
//! given the `expression` query parameter, it answers with one of these
//! status/body pairs. Keeping the mapping here lets the CLI and any future
//! server share it.

use serde::Serialize;
use serde_json::Value;
use tally_eval::{CalcError, Evaluator};

/// Message for a request without the `expression` parameter.
pub const MISSING_PARAMETER_MESSAGE: &str =
    "GET parameter 'expression' is mandatory but wasn't provided.";

/// Response status.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    Ok,
    BadRequest,
    UnprocessableEntity,
    InternalServerError,
}

impl Status {
    pub const fn code(self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::BadRequest => 400,
            Status::UnprocessableEntity => 422,
            Status::InternalServerError => 500,
        }
    }

    pub const fn is_success(self) -> bool {
        matches!(self, Status::Ok)
    }
}

/// JSON body. Absent fields are omitted.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_start_pos: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_end_pos: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_op_start_pos: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_op_end_pos: Option<u32>,
}

/// A status plus an optional body (500 responses have none).
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: Status,
    pub body: Option<ResponseBody>,
}

impl ApiResponse {
    /// Answer a request whose `expression` parameter is `expression`.
    ///
    /// A panic inside the evaluator is reported as a 500, the way the
    /// transport treats any failure that is not an evaluation error.
    pub fn from_query(expression: Option<&str>, evaluator: &Evaluator) -> Self {
        let Some(expression) = expression else {
            return Self::missing_parameter();
        };
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            evaluator.evaluate(expression)
        }));
        match outcome {
            Ok(Ok(value)) => Self::success(value),
            Ok(Err(err)) => Self::from_error(&err),
            Err(_) => {
                tracing::error!(expression, "unexpected failure while evaluating");
                Self::internal()
            }
        }
    }

    pub fn success(value: f64) -> Self {
        ApiResponse {
            status: Status::Ok,
            body: Some(ResponseBody {
                result: Some(number(value)),
                ..ResponseBody::default()
            }),
        }
    }

    pub fn missing_parameter() -> Self {
        ApiResponse {
            status: Status::BadRequest,
            body: Some(ResponseBody {
                error_message: Some(MISSING_PARAMETER_MESSAGE.to_string()),
                ..ResponseBody::default()
            }),
        }
    }

    pub fn from_error(error: &CalcError) -> Self {
        ApiResponse {
            status: Status::UnprocessableEntity,
            body: Some(ResponseBody {
                error_message: Some(error.message()),
                error_start_pos: error.span.map(|s| s.start),
                error_end_pos: error.span.map(|s| s.end),
                error_op_start_pos: error.operator_span.map(|s| s.start),
                error_op_end_pos: error.operator_span.map(|s| s.end),
                ..ResponseBody::default()
            }),
        }
    }

    pub fn internal() -> Self {
        ApiResponse {
            status: Status::InternalServerError,
            body: None,
        }
    }

    /// The serialized body, empty when there is none.
    pub fn body_json(&self) -> String {
        match &self.body {
            None => String::new(),
            Some(body) => serde_json::to_string(body).unwrap_or_else(|e| {
                tracing::error!(error = %e, "response serialization failed");
                String::new()
            }),
        }
    }
}

/// JSON number for a result: integral values as integers, non-finite
/// values as `null`.
fn number(value: f64) -> Value {
    /// Largest magnitude below which every integer is exactly representable.
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

    if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_EXACT {
        #[allow(clippy::cast_possible_truncation, reason = "integral and within i64 range")]
        let integral = value as i64;
        Value::from(integral)
    } else {
        // `Value::from` maps NaN and infinities to `null`.
        Value::from(value)
    }
}
