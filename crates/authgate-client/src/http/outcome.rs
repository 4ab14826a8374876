/*
[INPUT]:  HTTP status codes and parsed response bodies
[OUTPUT]: Normalized success/failure outcome values
[POS]:    HTTP layer - response and error-shape normalization
[UPDATE]: When the server introduces new error payload shapes
*/

use std::collections::BTreeMap;

use reqwest::StatusCode;
use serde_json::{Map, Value};

/// Validation errors keyed by form field name, each an ordered list of
/// human-readable messages.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Parsed response payload: JSON when the content-type says so, raw text
/// otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseData {
    Json(Value),
    Text(String),
}

/// Result of one API call.
///
/// Every request-layer call returns this value instead of an error; transport
/// failures are folded into the `Failure` variant. `field_errors` is set only
/// when the server returned per-field validation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success {
        data: ResponseData,
    },
    Failure {
        message: String,
        field_errors: Option<FieldErrors>,
    },
}

impl Outcome {
    pub(crate) fn failure(message: impl Into<String>) -> Self {
        Outcome::Failure {
            message: message.into(),
            field_errors: None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// Success payload, if the call succeeded.
    pub fn data(&self) -> Option<&ResponseData> {
        match self {
            Outcome::Success { data } => Some(data),
            Outcome::Failure { .. } => None,
        }
    }

    /// Success JSON payload, if the call succeeded with a JSON body.
    pub fn json(&self) -> Option<&Value> {
        match self.data() {
            Some(ResponseData::Json(value)) => Some(value),
            _ => None,
        }
    }

    /// Failure message, if the call failed.
    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::Failure { message, .. } => Some(message),
            Outcome::Success { .. } => None,
        }
    }

    /// Per-field validation errors, if the failure carried them.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Outcome::Failure { field_errors, .. } => field_errors.as_ref(),
            Outcome::Success { .. } => None,
        }
    }
}

/// Derive a failure outcome from a non-2xx response body.
///
/// Message precedence, first match wins: `error` / `detail` / `message`
/// string fields, then an array of strings joined with `", "`, then a
/// field-errors object (every value an array of strings), then the first
/// key of any other object, then a plain string body, then a generic
/// status message.
pub(crate) fn failure_from_error_body(status: StatusCode, data: &ResponseData) -> Outcome {
    let generic = format!("HTTP error! status: {}", status.as_u16());

    let value = match data {
        ResponseData::Json(value) => value,
        // A text body is the message verbatim, even when empty.
        ResponseData::Text(text) => return Outcome::failure(text.clone()),
    };

    match value {
        Value::Object(map) => {
            for key in ["error", "detail", "message"] {
                if let Some(Value::String(message)) = map.get(key) {
                    return Outcome::failure(message.clone());
                }
            }

            if let Some(field_errors) = as_field_errors(map) {
                let message = field_errors
                    .values()
                    .next()
                    .and_then(|messages| messages.first())
                    .cloned()
                    .unwrap_or(generic);
                return Outcome::Failure {
                    message,
                    field_errors: Some(field_errors),
                };
            }

            match map.values().next().and_then(scalar_message) {
                Some(message) => Outcome::failure(message),
                None => Outcome::failure(generic),
            }
        }
        Value::Array(items) => {
            let strings: Option<Vec<&str>> = items.iter().map(Value::as_str).collect();
            match strings {
                Some(parts) => Outcome::failure(parts.join(", ")),
                None => Outcome::failure(generic),
            }
        }
        Value::String(message) => Outcome::failure(message.clone()),
        _ => Outcome::failure(generic),
    }
}

/// Interpret an object as field errors iff every value is an array of
/// strings. Key order follows the JSON map's iteration order.
fn as_field_errors(map: &Map<String, Value>) -> Option<FieldErrors> {
    if map.is_empty() {
        return None;
    }

    let mut field_errors = FieldErrors::new();
    for (field, value) in map {
        let items = value.as_array()?;
        let messages: Option<Vec<String>> = items
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect();
        field_errors.insert(field.clone(), messages?);
    }
    Some(field_errors)
}

/// Best-effort message from a single value: a string as-is, an array's first
/// element, other scalars rendered as JSON. Nested objects and nulls carry
/// no usable message.
fn scalar_message(value: &Value) -> Option<String> {
    match value {
        Value::String(message) => Some(message.clone()),
        Value::Array(items) => items.first().map(element_message),
        Value::Number(_) | Value::Bool(_) => Some(value.to_string()),
        Value::Null | Value::Object(_) => None,
    }
}

fn element_message(value: &Value) -> String {
    match value {
        Value::String(message) => message.clone(),
        other => other.to_string(),
    }
}
