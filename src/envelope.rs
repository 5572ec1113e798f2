//! Uniform result envelope for every API call.
//!
//! [`ApiResult::from_response`] is the single place where a raw HTTP
//! response turns into typed data. Success bodies carry their payload under a
//! top-level `data` key; error bodies are an [`ErrorInfo`] object.

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use serde_with::{serde_as, skip_serializing_none, DefaultOnNull};

use crate::error::{PmError, Result};

/// Error details returned by the server for a failed call.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorInfo {
    /// Human-readable summary.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub message: String,

    /// Server-side diagnostic, when the server chose to expose one.
    pub technical_error: Option<String>,

    /// Further messages, in server order.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub additional_errors: Vec<String>,

    /// Field name to message, untyped.
    pub validation_errors: Option<Map<String, Value>>,
}

impl ErrorInfo {
    /// Create an error with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    /// Build error details from a non-2xx response body.
    ///
    /// Bodies that are not an error object (HTML from a proxy, plain text,
    /// nothing at all) still yield an `ErrorInfo`.
    pub fn from_body(status: u16, body: &[u8]) -> Self {
        if let Ok(Value::Object(mut map)) = serde_json::from_slice::<Value>(body) {
            if !map.contains_key("message") {
                if let Some(Value::Object(nested)) = map.remove("error") {
                    map = nested;
                }
            }
            match serde_json::from_value::<ErrorInfo>(Value::Object(map)) {
                Ok(mut info) => {
                    if info.message.is_empty() {
                        info.message = status_text(status);
                    }
                    return info;
                }
                Err(e) => tracing::warn!(status, error = %e, "error body is not an error object"),
            }
        } else {
            tracing::warn!(status, "error body is not JSON");
        }

        let text = String::from_utf8_lossy(body);
        let text = text.trim();
        if text.is_empty() {
            Self::new(status_text(status))
        } else {
            Self::new(text)
        }
    }

    /// Validation message for a single field, if it is a string.
    pub fn validation_error(&self, field: &str) -> Option<&str> {
        self.validation_errors
            .as_ref()
            .and_then(|m| m.get(field))
            .and_then(Value::as_str)
    }
}

fn status_text(status: u16) -> String {
    let reason = reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason());
    match reason {
        Some(reason) => format!("HTTP {status} {reason}"),
        None => format!("HTTP {status}"),
    }
}

/// Whether a status code counts as success.
pub fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// The outcome of one API call.
///
/// Exactly one of [`data`](Self::data) and [`error`](Self::error) is set,
/// decided by [`success`](Self::success). Values are immutable; build them
/// with [`ApiResult::from_response`] or by deserializing an envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", bound(serialize = "T: Serialize"))]
pub struct ApiResult<T> {
    success: bool,
    has_error: bool,
    status_code: u16,
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorInfo>,
}

impl<T> ApiResult<T> {
    pub(crate) fn ok(status_code: u16, data: T) -> Self {
        Self {
            success: true,
            has_error: false,
            status_code,
            data: Some(data),
            error: None,
        }
    }

    pub(crate) fn failed(status_code: u16, error: ErrorInfo) -> Self {
        Self {
            success: false,
            has_error: true,
            status_code,
            data: None,
            error: Some(error),
        }
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn has_error(&self) -> bool {
        self.has_error
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&ErrorInfo> {
        self.error.as_ref()
    }

    /// Take the payload, discarding the rest of the envelope.
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Convert into a standard `Result`, turning a failed envelope into
    /// [`PmError::Api`].
    ///
    /// # Errors
    ///
    /// Returns [`PmError::Api`] when the call did not succeed.
    pub fn into_result(self) -> Result<T> {
        match (self.data, self.error) {
            (Some(data), None) => Ok(data),
            (_, error) => Err(PmError::Api {
                status_code: self.status_code,
                info: error.unwrap_or_else(|| ErrorInfo::new(status_text(self.status_code))),
            }),
        }
    }

    /// Transform the payload, keeping status and error untouched.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ApiResult<U> {
        ApiResult {
            success: self.success,
            has_error: self.has_error,
            status_code: self.status_code,
            data: self.data.map(f),
            error: self.error,
        }
    }
}

impl<T: DeserializeOwned> ApiResult<T> {
    /// Turn a raw HTTP status and body into an envelope.
    ///
    /// A 2xx body is read as `{"data": <payload>}`; a missing `data` key or an
    /// empty body reads as `null`, which suits `()` and `Option` payloads.
    /// Any other status becomes a failed envelope carrying [`ErrorInfo`].
    ///
    /// # Errors
    ///
    /// Returns [`PmError::Decode`] when a 2xx body does not match `T`.
    pub fn from_response(status: u16, body: &[u8]) -> Result<Self> {
        if !is_success_status(status) {
            return Ok(Self::failed(status, ErrorInfo::from_body(status, body)));
        }

        let decode = |source: serde_json::Error| PmError::Decode { status, source };

        let payload = if body.iter().all(u8::is_ascii_whitespace) {
            Value::Null
        } else {
            match serde_json::from_slice::<Value>(body).map_err(decode)? {
                Value::Object(mut map) => map.remove("data").unwrap_or(Value::Null),
                _ => {
                    return Err(decode(<serde_json::Error as de::Error>::custom(
                        "expected a JSON object with a `data` key",
                    )))
                }
            }
        };

        let data = serde_json::from_value(payload).map_err(decode)?;
        Ok(Self::ok(status, data))
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEnvelope<T> {
    success: bool,
    has_error: Option<bool>,
    status_code: u16,
    data: Option<T>,
    error: Option<ErrorInfo>,
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ApiResult<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = RawEnvelope::<T>::deserialize(deserializer)?;

        if raw.has_error.is_some_and(|h| h == raw.success) {
            return Err(de::Error::custom("hasError must be the inverse of success"));
        }

        if is_success_status(raw.status_code) != raw.success {
            return Err(de::Error::custom(format_args!(
                "statusCode {} contradicts success={}",
                raw.status_code, raw.success
            )));
        }

        if raw.success {
            if raw.error.is_some() {
                return Err(de::Error::custom("successful envelope carries an error"));
            }
            let data = match raw.data {
                Some(data) => data,
                // `null` payloads are legitimate for unit results.
                None => T::deserialize(Value::Null).map_err(|_| {
                    de::Error::custom("successful envelope is missing data")
                })?,
            };
            Ok(Self::ok(raw.status_code, data))
        } else {
            if raw.data.is_some() {
                return Err(de::Error::custom("failed envelope carries data"));
            }
            let error = raw
                .error
                .ok_or_else(|| de::Error::custom("failed envelope is missing error"))?;
            Ok(Self::failed(raw.status_code, error))
        }
    }
}
