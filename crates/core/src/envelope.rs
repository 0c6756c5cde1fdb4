//! Response envelope decoding.
//!
//! Every reply from the chat backend has the shape
//! `{"success": bool, "message": string, "data": any, "meta": object}`.
//! This module turns that untyped JSON into [`ApiResponse<T>`], optionally
//! decoding `data` with a caller-supplied mapper. Decoding is structural only:
//! missing optional fields get defaults and no business rule is checked.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::pagination::Pagination;

/// Errors raised while decoding a success body.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Invalid JSON body: {0}")]
    InvalidJson(String),

    #[error("Response body is not a JSON object")]
    NotAnObject,

    #[error("Expected a list payload, found {0}")]
    ExpectedList(&'static str),

    #[error("Malformed payload: {0}")]
    Payload(String),
}

impl From<serde_json::Error> for DecodeError {
    fn from(error: serde_json::Error) -> Self {
        DecodeError::Payload(error.to_string())
    }
}

/// Decoded server reply.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Map<String, Value>>,
}

impl<T> ApiResponse<T> {
    /// Decode an envelope, running `mapper` over a non-null `data` field.
    ///
    /// `success` defaults to `false` and `message` to `""` when absent or of
    /// the wrong type. `meta` is kept only when it is a JSON object. A mapper
    /// error fails the whole decode.
    ///
    /// # Examples
    ///
    /// ```
    /// use chatline_core::envelope::{ApiResponse, DecodeError};
    /// use serde_json::json;
    ///
    /// let raw = json!({"success": true, "data": {"id": "42"}});
    /// let response = ApiResponse::decode(raw.as_object().unwrap(), |data| {
    ///     data["id"]
    ///         .as_str()
    ///         .map(str::to_string)
    ///         .ok_or_else(|| DecodeError::Payload("missing id".to_string()))
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(response.data.as_deref(), Some("42"));
    /// ```
    pub fn decode<F, E>(raw: &Map<String, Value>, mapper: F) -> Result<Self, E>
    where
        F: FnOnce(Value) -> Result<T, E>,
    {
        let data = match raw.get("data") {
            None | Some(Value::Null) => None,
            Some(value) => Some(mapper(value.clone())?),
        };
        Ok(Self::with_data(raw, data))
    }

    /// Parse a response body and decode it as an envelope.
    ///
    /// An empty body decodes as an empty object.
    pub fn from_body<F>(body: &str, mapper: F) -> Result<Self, DecodeError>
    where
        F: FnOnce(Value) -> Result<T, DecodeError>,
    {
        let raw = parse_object(body)?;
        Self::decode(&raw, mapper)
    }

    /// Typed view over pagination keys in `meta`, if any.
    pub fn pagination(&self) -> Option<Pagination> {
        self.meta.as_ref().map(Pagination::from_meta)
    }

    /// Consume the envelope and return its payload.
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Transform the payload, keeping the rest of the envelope.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            success: self.success,
            message: self.message,
            data: self.data.map(f),
            meta: self.meta,
        }
    }

    fn with_data(raw: &Map<String, Value>, data: Option<T>) -> Self {
        Self {
            success: raw.get("success").and_then(Value::as_bool).unwrap_or(false),
            message: raw
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            data,
            meta: raw.get("meta").and_then(Value::as_object).cloned(),
        }
    }
}

impl ApiResponse<Value> {
    /// Decode without a mapper: a non-null `data` is stored unchanged.
    pub fn decode_raw(raw: &Map<String, Value>) -> Self {
        let data = raw.get("data").filter(|value| !value.is_null()).cloned();
        Self::with_data(raw, data)
    }
}

/// Parse a body string into the raw envelope object.
pub fn parse_object(body: &str) -> Result<Map<String, Value>, DecodeError> {
    if body.trim().is_empty() {
        return Ok(Map::new());
    }
    match serde_json::from_str(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(DecodeError::NotAnObject),
        Err(e) => Err(DecodeError::InvalidJson(e.to_string())),
    }
}

/// Map a list payload element by element, preserving server order.
///
/// The first element that fails to decode fails the whole list.
pub fn decode_list<T, E, F>(value: Value, item: F) -> Result<Vec<T>, E>
where
    F: FnMut(Value) -> Result<T, E>,
    E: From<DecodeError>,
{
    match value {
        Value::Array(items) => items.into_iter().map(item).collect(),
        other => Err(DecodeError::ExpectedList(json_kind(&other)).into()),
    }
}

/// Mapper for any `Deserialize` payload.
pub fn json_item<T: DeserializeOwned>(value: Value) -> Result<T, DecodeError> {
    serde_json::from_value(value).map_err(DecodeError::from)
}

/// Mapper for a list of `Deserialize` payloads.
pub fn json_list<T: DeserializeOwned>(value: Value) -> Result<Vec<T>, DecodeError> {
    decode_list(value, json_item)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
