//! Wire types shared by every API group: the response envelope, the
//! discriminated call outcome, and the platform error body.

use std::collections::HashMap;
use std::fmt;

use bon::Builder;
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_repr::{Deserialize_repr, Serialize_repr};
use strum_macros::Display;

/// The outer JSON object every successful response arrives in:
/// `{ "code": 200, "status": "OK", "data": { ... } }`. Only `data` is
/// surfaced to callers.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub code: u16,
    #[serde(default)]
    pub status: Option<String>,
    pub data: T,
}

/// The discriminated result of one dispatched operation: either the inner
/// `data` payload or the service's error body, never both. The caller's
/// correlation value rides along unchanged in either variant.
///
/// Precondition faults (missing credential, missing title id) and malformed
/// success payloads never appear here; they surface as
/// [`Err`](crate::error::Error) before or instead of an outcome.
#[derive(Debug)]
pub enum ApiOutcome<T> {
    Success {
        data: T,
        custom_data: Option<Value>,
    },
    Failure {
        error: ServiceError,
        custom_data: Option<Value>,
    },
}

impl<T> ApiOutcome<T> {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, ApiOutcome::Success { .. })
    }

    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, ApiOutcome::Failure { .. })
    }

    /// The success payload, if any.
    #[must_use]
    pub fn data(&self) -> Option<&T> {
        match self {
            ApiOutcome::Success { data, .. } => Some(data),
            ApiOutcome::Failure { .. } => None,
        }
    }

    /// The service error, if any.
    #[must_use]
    pub fn error(&self) -> Option<&ServiceError> {
        match self {
            ApiOutcome::Success { .. } => None,
            ApiOutcome::Failure { error, .. } => Some(error),
        }
    }

    /// The correlation value supplied at the call site, regardless of variant.
    #[must_use]
    pub fn custom_data(&self) -> Option<&Value> {
        match self {
            ApiOutcome::Success { custom_data, .. } | ApiOutcome::Failure { custom_data, .. } => {
                custom_data.as_ref()
            }
        }
    }

    /// Collapses the outcome into a plain `Result`, dropping the correlation
    /// value.
    pub fn into_result(self) -> Result<T, ServiceError> {
        match self {
            ApiOutcome::Success { data, .. } => Ok(data),
            ApiOutcome::Failure { error, .. } => Err(error),
        }
    }

    /// Splits the outcome into its result and the correlation value.
    pub fn into_parts(self) -> (Result<T, ServiceError>, Option<Value>) {
        match self {
            ApiOutcome::Success { data, custom_data } => (Ok(data), custom_data),
            ApiOutcome::Failure { error, custom_data } => (Err(error), custom_data),
        }
    }
}

/// Machine-readable category on a [`ServiceError`]. The platform defines
/// many more; unrecognized values map to [`ServiceErrorCode::Unrecognized`]
/// rather than failing deserialization.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr, Display,
)]
#[repr(i32)]
pub enum ServiceErrorCode {
    /// Synthesized locally when the transport could not complete the call.
    ConnectionError = -1,
    Unknown = 0,
    InvalidParams = 1000,
    AccountNotFound = 1001,
    InvalidTitleId = 1002,
    InvalidUsernameOrPassword = 1003,
    AccountBanned = 1004,
    SessionTicketExpired = 1100,
    EntityTokenInvalid = 1101,
    OverLimit = 1200,
    ServiceUnavailable = 1201,
    #[serde(other)]
    Unrecognized = -2,
}

/// The error body the service returns on a failed call, e.g.
/// `{ "code": 400, "status": "BadRequest", "error": "InvalidParams",
/// "errorCode": 1000, "errorMessage": "...", "errorDetails": { ... } }`.
///
/// Transport-level failures and unparseable error bodies are normalized into
/// this same shape so callers branch on one type.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceError {
    /// HTTP status code, or `0` when the call never reached the service.
    pub code: u16,
    #[serde(default)]
    pub status: Option<String>,
    /// Short error name, e.g. `"InvalidParams"`.
    #[serde(default)]
    pub error: Option<String>,
    pub error_code: ServiceErrorCode,
    #[serde(default)]
    pub error_message: String,
    /// Per-field validation messages, keyed by field name.
    #[serde(default)]
    pub error_details: Option<HashMap<String, Vec<String>>>,
    #[serde(default)]
    pub retry_after_seconds: Option<u64>,
}

impl ServiceError {
    /// Normalizes a transport-level failure (DNS, connect, TLS, body read)
    /// into the uniform error shape.
    #[must_use]
    pub(crate) fn from_transport(error: &reqwest::Error) -> Self {
        Self {
            code: error.status().map_or(0, |status| status.as_u16()),
            status: None,
            error: Some("ConnectionError".to_owned()),
            error_code: ServiceErrorCode::ConnectionError,
            error_message: error.to_string(),
            error_details: None,
            retry_after_seconds: None,
        }
    }

    /// Parses a non-2xx response body, synthesizing an error from the status
    /// line when the body is not the documented error shape.
    #[must_use]
    pub(crate) fn from_error_body(status: StatusCode, body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_else(|_| Self {
            code: status.as_u16(),
            status: status.canonical_reason().map(str::to_owned),
            error: None,
            error_code: ServiceErrorCode::Unknown,
            error_message: body.to_owned(),
            error_details: None,
            retry_after_seconds: None,
        })
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {}",
            self.error.as_deref().unwrap_or("ServiceError"),
            self.error_code,
            self.error_message
        )
    }
}

impl std::error::Error for ServiceError {}

/// Identity of a non-player or generalized entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "PascalCase")]
#[builder(on(String, into))]
pub struct EntityKey {
    pub id: String,
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
}

/// An entity token grant, embedded in login responses and returned by
/// `GetEntityToken`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EntityTokenResult {
    pub entity_token: String,
    #[serde(default)]
    pub token_expiration: Option<DateTime<Utc>>,
    #[serde(default)]
    pub entity: Option<EntityKey>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn envelope_surfaces_inner_data() -> anyhow::Result<()> {
        let envelope: Envelope<HashMap<String, String>> = serde_json::from_value(json!({
            "code": 200,
            "status": "OK",
            "data": { "MOTD": "hello" }
        }))?;

        assert_eq!(envelope.code, 200);
        assert_eq!(envelope.data.get("MOTD").map(String::as_str), Some("hello"));
        Ok(())
    }

    #[test]
    fn service_error_deserializes_documented_shape() -> anyhow::Result<()> {
        let error: ServiceError = serde_json::from_value(json!({
            "code": 400,
            "status": "BadRequest",
            "error": "InvalidParams",
            "errorCode": 1000,
            "errorMessage": "CustomId is required",
            "errorDetails": { "CustomId": ["must not be empty"] }
        }))?;

        assert_eq!(error.code, 400);
        assert_eq!(error.error_code, ServiceErrorCode::InvalidParams);
        assert_eq!(error.error_message, "CustomId is required");
        assert_eq!(
            error
                .error_details
                .as_ref()
                .and_then(|details| details.get("CustomId"))
                .map(Vec::len),
            Some(1)
        );
        Ok(())
    }

    #[test]
    fn unrecognized_error_code_does_not_fail() -> anyhow::Result<()> {
        let error: ServiceError = serde_json::from_value(json!({
            "code": 409,
            "errorCode": 987_654,
            "errorMessage": "something new"
        }))?;

        assert_eq!(error.error_code, ServiceErrorCode::Unrecognized);
        Ok(())
    }

    #[test]
    fn error_body_fallback_synthesizes_from_status() {
        let error = ServiceError::from_error_body(StatusCode::BAD_GATEWAY, "<html>oops</html>");
        assert_eq!(error.code, 502);
        assert_eq!(error.error_code, ServiceErrorCode::Unknown);
        assert_eq!(error.error_message, "<html>oops</html>");
    }

    #[test]
    fn outcome_accessors_match_variant() {
        let success: ApiOutcome<u32> = ApiOutcome::Success {
            data: 7,
            custom_data: Some(json!("tag")),
        };
        assert!(success.is_success());
        assert_eq!(success.data(), Some(&7));
        assert!(success.error().is_none());
        assert_eq!(success.custom_data(), Some(&json!("tag")));

        let failure: ApiOutcome<u32> = ApiOutcome::Failure {
            error: ServiceError::from_error_body(StatusCode::BAD_REQUEST, "nope"),
            custom_data: Some(json!("tag")),
        };
        assert!(failure.is_failure());
        assert!(failure.data().is_none());
        assert_eq!(failure.custom_data(), Some(&json!("tag")));

        let (result, custom_data) = failure.into_parts();
        assert!(result.is_err(), "failure must collapse to Err");
        assert_eq!(custom_data, Some(json!("tag")));
    }

    #[test]
    fn entity_key_uses_wire_casing() -> anyhow::Result<()> {
        let key = EntityKey::builder()
            .id("E-42")
            .entity_type("title_player_account")
            .build();

        let value = serde_json::to_value(&key)?;
        assert_eq!(
            value,
            json!({ "Id": "E-42", "Type": "title_player_account" })
        );

        let back: EntityKey = serde_json::from_value(value)?;
        assert_eq!(back, key);
        Ok(())
    }
}
