//! Response validation and metadata annotation.
//!
//! # Design
//! A response goes through two steps, always in this order and always driven
//! by the caller: [`check_response`] turns a status of 400 or above into an
//! [`ApiError`], then [`add_jikan_metadata`] records the resolved URL and the
//! response headers on the body. Neither step calls the other. A body that
//! could not be parsed is represented by an empty map, see [`parse_body`].

use serde_json::{Map, Value};

use crate::error::{ApiError, ErrorContext};
use crate::http::{normalize_headers, HttpResponse};

/// Body key holding the URL the response was fetched from.
pub const JIKAN_URL_KEY: &str = "jikan_url";
/// Body key holding the normalized response headers.
pub const HEADERS_KEY: &str = "headers";

/// First status code treated as a failure.
const ERROR_STATUS: u16 = 400;

/// Parse a response body into a JSON object.
///
/// Anything that is not a JSON object yields an empty map.
pub fn parse_body(body: &str) -> Map<String, Value> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => map,
        Ok(other) => {
            log::warn!("response body is not a JSON object: {other}");
            Map::new()
        }
        Err(e) => {
            log::warn!("response body is not valid JSON: {e}");
            Map::new()
        }
    }
}

/// Fail with an [`ApiError`] when `status` is 400 or above.
///
/// The error text comes from the body's `error` field. Missing fields (which
/// includes the empty map of an unparseable body) give an empty text; `null`
/// and booleans read `None`, `True` and `False`, other values compact JSON.
pub fn check_response(
    body: &Map<String, Value>,
    status: u16,
    context: &ErrorContext,
) -> Result<(), ApiError> {
    if status < ERROR_STATUS {
        return Ok(());
    }
    let error = match body.get("error") {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Null) => "None".to_string(),
        Some(Value::Bool(true)) => "True".to_string(),
        Some(Value::Bool(false)) => "False".to_string(),
        Some(other) => other.to_string(),
        None => String::new(),
    };
    let err = ApiError::new(status, error, context.clone());
    log::warn!("jikan request failed: {err}");
    Err(err)
}

/// Record `url` and the response headers on `body` and return it.
pub fn add_jikan_metadata(
    response: &HttpResponse,
    mut body: Map<String, Value>,
    url: &str,
) -> Map<String, Value> {
    let headers = normalize_headers(
        response
            .headers
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str())),
    );
    body.insert(JIKAN_URL_KEY.to_string(), Value::String(url.to_string()));
    body.insert(HEADERS_KEY.to_string(), Value::Object(headers));
    body
}
