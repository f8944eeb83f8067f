//! Response normalizer.
//!
//! Upstream APIs answer with a zoo of JSON shapes: payloads wrapped in a
//! `data` envelope, bare objects, flat or nested error messages under half a
//! dozen different field names. The functions in this module fold all of
//! them into one canonical map so tools can hand a predictable result back
//! to the MCP client.
//!
//! Every entry point is total: malformed or unrecognized input never
//! surfaces as an `Err` or a panic, it degrades to an `{"error": ...}` map.
//!
//! - [`parse_and_return_clean_json`] - success bodies, raw text kept on failure
//! - [`parse_error_response`] - generic error bodies (flat or nested fields)
//! - [`parse_customer_error_response`] - customer bodies (`error.message` only)

mod clean;
mod error_response;
mod trace;

pub use clean::parse_and_return_clean_json;
pub use error_response::{
    UNEXPECTED_ERROR_MESSAGE, parse_customer_error_response, parse_error_response,
};
pub use trace::TraceId;

use serde::de;
use serde_json::{Map, Value};

/// Canonical normalizer output.
///
/// Holds exactly one of `{"error": <string>}`, `{"result": <value>}`, or the
/// pass-through fields of the upstream object.
pub type NormalizedResult = Map<String, Value>;

/// Key carrying a human-readable error message.
pub const ERROR_KEY: &str = "error";

/// Key wrapping a non-object `data` payload.
pub const RESULT_KEY: &str = "result";

/// Parse the leading JSON object of `raw`.
///
/// Valid JSON whose top level is not an object (array, scalar, `null`) is
/// rejected the same way as malformed text. Anything after the first
/// complete object is ignored; an empty body is an error.
fn parse_object(raw: &str) -> Result<Map<String, Value>, serde_json::Error> {
    serde_json::Deserializer::from_str(raw)
        .into_iter::<Map<String, Value>>()
        .next()
        .unwrap_or_else(|| Err(de::Error::custom("empty response body")))
}

/// Build a single-entry result.
fn single_entry(key: &str, value: impl Into<Value>) -> NormalizedResult {
    let mut map = Map::with_capacity(1);
    map.insert(key.to_string(), value.into());
    map
}
