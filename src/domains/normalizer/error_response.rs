//! Error-path normalization.
//!
//! Two extractors live here and are intentionally not merged: the generic
//! one checks several flat and nested message fields, the customer one only
//! accepts the fixed `error.message` shape. When neither finds a usable
//! message the raw body is logged under a fresh [`TraceId`] and the caller
//! only sees a generic message carrying that id.

use serde_json::{Map, Value};
use tracing::error;

use super::{ERROR_KEY, NormalizedResult, TraceId, parse_object, single_entry};

/// Message fields checked in priority order. `responseMessage` must stay
/// first: some upstreams send it alongside a less specific `message`.
const MESSAGE_FIELDS: [&str; 6] = [
    "responseMessage",
    "message",
    "errorMessage",
    "error_message",
    "msg",
    "description",
];

/// Generic message returned in place of an unrecognized error body.
pub const UNEXPECTED_ERROR_MESSAGE: &str =
    "Unexpected error occurred. Contact support with trace ID: ";

/// Normalize an error response body into `{"error": <message>}`.
///
/// `_default_message` is accepted so both error normalizers share a
/// signature; it is not used in the output.
pub fn parse_error_response(raw: &str, _default_message: &str) -> NormalizedResult {
    let object = match parse_object(raw) {
        Ok(object) => object,
        Err(e) => {
            let trace_id = TraceId::generate();
            error!(
                trace_id = %trace_id,
                cause = %e,
                response = raw,
                "Failed to parse error response"
            );
            return unexpected_error(&trace_id);
        }
    };

    match extract_error_message(&object).filter(is_meaningful) {
        Some(message) => single_entry(ERROR_KEY, message),
        None => {
            let trace_id = TraceId::generate();
            error!(trace_id = %trace_id, response = raw, "Unexpected error response format");
            unexpected_error(&trace_id)
        }
    }
}

/// Normalize a customer error body, which carries its message in
/// `error.message` and nowhere else.
pub fn parse_customer_error_response(raw: &str, _default_message: &str) -> NormalizedResult {
    let object = match parse_object(raw) {
        Ok(object) => object,
        Err(e) => {
            let trace_id = TraceId::generate();
            error!(
                trace_id = %trace_id,
                cause = %e,
                response = raw,
                "Failed to parse customer error response"
            );
            return unexpected_error(&trace_id);
        }
    };

    match extract_customer_error_message(&object).filter(is_meaningful) {
        Some(message) => single_entry(ERROR_KEY, message),
        None => {
            let trace_id = TraceId::generate();
            error!(
                trace_id = %trace_id,
                response = raw,
                "Customer error response format not recognized"
            );
            unexpected_error(&trace_id)
        }
    }
}

/// First string-valued field of [`MESSAGE_FIELDS`] present in `object`.
fn first_message_field(object: &Map<String, Value>) -> Option<&str> {
    MESSAGE_FIELDS
        .iter()
        .find_map(|field| object.get(*field).and_then(Value::as_str))
}

fn extract_error_message(object: &Map<String, Value>) -> Option<&str> {
    first_message_field(object).or_else(|| match object.get(ERROR_KEY)? {
        Value::Object(nested) => first_message_field(nested),
        Value::String(message) => Some(message.as_str()),
        _ => None,
    })
}

fn extract_customer_error_message(object: &Map<String, Value>) -> Option<&str> {
    object
        .get(ERROR_KEY)?
        .as_object()?
        .get("message")?
        .as_str()
}

fn is_meaningful(message: &&str) -> bool {
    !message.trim().is_empty()
}

fn unexpected_error(trace_id: &TraceId) -> NormalizedResult {
    single_entry(ERROR_KEY, format!("{}{}", UNEXPECTED_ERROR_MESSAGE, trace_id))
}
